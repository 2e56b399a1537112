use super::{output_json, output_ndjson, process_repositories, render, AnsiFormatter, CellFormatter, PlainFormatter};
use crate::cli::{CommonArgs, StatsArgs};
use crate::config::RepoList;
use anyhow::Context;
use chrono::{Local, Utc};
use console::Term;
use std::io::Write;

pub fn exec(common: CommonArgs, args: StatsArgs) -> anyhow::Result<()> {
    let list = RepoList::locate(common.repos_file.as_deref())?;
    let repos = list.load().context("Failed to load repository list")?;

    let now = Local::now().fixed_offset();
    let show_progress = !args.no_progress && Term::stderr().is_term();

    // Everything is scanned before anything is printed.
    let aggregate = process_repositories(&repos, &args.email, &now, show_progress)
        .context("Failed to collect commit statistics")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        output_json(&aggregate, &args.email, &repos, now.with_timezone(&Utc), &mut out)?;
    } else if args.ndjson {
        output_ndjson(&aggregate, &mut out)?;
    } else {
        let formatter: &dyn CellFormatter = if args.plain { &PlainFormatter } else { &AnsiFormatter };
        render(&aggregate, formatter, &mut out)?;
    }
    out.flush()?;

    Ok(())
}
