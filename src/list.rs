use crate::cli::CommonArgs;
use crate::config::RepoList;
use anyhow::Context;

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let list = RepoList::locate(common.repos_file.as_deref())?;
    let repos = list.load().context("Failed to load repository list")?;

    for repo in repos {
        println!("{}", repo.display());
    }
    Ok(())
}
