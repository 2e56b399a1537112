use super::{build_window, Aggregate};
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{AuthoredCommit, DayKey, WINDOW_DAYS};
use chrono::{DateTime, Duration, FixedOffset};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Count `commit` if it was authored by `email` no more than `WINDOW_DAYS` before `now`.
pub fn count_commit(
    commit: &AuthoredCommit,
    email: &str,
    now: &DateTime<FixedOffset>,
    aggregate: &mut Aggregate,
) -> bool {
    if commit.author_email != email {
        return false;
    }

    let elapsed = now.signed_duration_since(commit.authored_at);
    if elapsed > Duration::days(WINDOW_DAYS as i64) {
        return false;
    }

    aggregate.increment(DayKey::of(&commit.authored_at));
    true
}

/// Walk the history reachable from HEAD of the repository at `path`.
/// Returns the number of commits counted.
pub fn scan_repository(
    path: &Path,
    email: &str,
    now: &DateTime<FixedOffset>,
    aggregate: &mut Aggregate,
) -> Result<usize> {
    let repo = GitRepo::open(path)?;

    let mut matched = 0usize;
    let mut counted = 0usize;
    repo.for_each_commit_by(email, |commit| {
        matched += 1;
        if count_commit(&commit, email, now, aggregate) {
            counted += 1;
        }
    })?;

    debug!(repo = %repo.path().display(), matched, counted, "scanned repository");
    Ok(counted)
}

/// Build the window and scan each repository in order. The first failure
/// aborts the run and no aggregate is returned.
pub fn process_repositories(
    repos: &[PathBuf],
    email: &str,
    now: &DateTime<FixedOffset>,
    show_progress: bool,
) -> Result<Aggregate> {
    let mut aggregate = build_window(now);

    let pb = if show_progress {
        let pb = ProgressBar::new(repos.len() as u64);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    for path in repos {
        pb.set_message(path.display().to_string());
        if let Err(e) = scan_repository(path, email, now, &mut aggregate) {
            pb.finish_and_clear();
            return Err(e);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        repositories = repos.len(),
        commits = aggregate.total(),
        "scan complete"
    );
    Ok(aggregate)
}
