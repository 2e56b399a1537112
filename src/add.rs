use crate::cli::CommonArgs;
use crate::config::RepoList;
use crate::discover::find_repositories;
use anyhow::Context;
use console::style;
use std::path::PathBuf;
use tracing::info;

pub fn exec(common: CommonArgs, folder: PathBuf) -> anyhow::Result<()> {
    let list = RepoList::locate(common.repos_file.as_deref())?;

    let found = find_repositories(&folder)
        .with_context(|| format!("Failed to scan {}", folder.display()))?;
    info!(folder = %folder.display(), found = found.len(), "discovery finished");

    let added = list
        .append(&found)
        .with_context(|| format!("Failed to update {}", list.path().display()))?;

    for path in &added {
        println!("{} {}", style("+").green(), path.display());
    }
    println!(
        "{} {} new of {} found, list at {}",
        style("Added").bold(),
        added.len(),
        found.len(),
        list.path().display()
    );

    Ok(())
}
