#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub const ME: &str = "you@example.com";
pub const SOMEONE_ELSE: &str = "other@example.com";

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

pub fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", ME]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Commit a change authored by `email` at unix time `secs` (UTC).
pub fn commit_at(dir: &Path, email: &str, secs: i64) {
    commit_at_tz(dir, email, secs, "+0000");
}

/// Like `commit_at`, recording the author's offset as `tz` (e.g. `-0500`).
pub fn commit_at_tz(dir: &Path, email: &str, secs: i64, tz: &str) {
    let name = format!("file-{secs}-{}.txt", fs::read_dir(dir).unwrap().count());
    let mut f = File::create(dir.join(&name)).unwrap();
    f.write_all(name.as_bytes()).unwrap();
    f.sync_all().unwrap();

    git(dir, &["add", "."]);

    let date = format!("@{secs} {tz}");
    assert!(Command::new("git")
        .args(["commit", "-q", "-m", &format!("add {name}")])
        .env("GIT_AUTHOR_NAME", "Author")
        .env("GIT_AUTHOR_EMAIL", email)
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn git_output(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git").args(args).current_dir(dir).output().unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap().trim().to_string()
}

/// Write a commit object on top of HEAD by hand, so the author line can carry
/// an offset `git commit` would refuse (e.g. `+9900`), then move HEAD to it.
pub fn commit_raw(dir: &Path, email: &str, secs: i64, tz: &str) {
    let tree = git_output(dir, &["rev-parse", "HEAD^{tree}"]);
    let parent = git_output(dir, &["rev-parse", "HEAD"]);
    let body = format!(
        "tree {tree}\nparent {parent}\nauthor Author <{email}> {secs} {tz}\ncommitter Author <{email}> {secs} +0000\n\nraw commit\n"
    );

    let mut child = Command::new("git")
        .args(["hash-object", "-t", "commit", "-w", "--stdin"])
        .current_dir(dir)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(body.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    let id = String::from_utf8(out.stdout).unwrap().trim().to_string();

    git(dir, &["update-ref", "HEAD", &id]);
}
