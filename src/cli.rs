use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gcal")]
#[command(about = "Daily commit heatmap for one author across local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to the repository list (default: ~/.gcalrepos)")]
    pub repos_file: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}

#[derive(Args, Clone)]
pub struct StatsArgs {
    #[arg(long, help = "Author email to count commits for")]
    pub email: String,

    #[arg(long, help = "Output as JSON", conflicts_with_all = ["ndjson", "plain"])]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON", conflicts_with = "plain")]
    pub ndjson: bool,

    #[arg(long, help = "Print cells without color escapes")]
    pub plain: bool,

    #[arg(long, help = "Hide the progress spinner")]
    pub no_progress: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print commits per day for the last 180 days
    Stats(StatsArgs),
    /// Find repositories under a folder and add them to the list
    Add {
        #[arg(help = "Folder to search recursively")]
        folder: PathBuf,
    },
    /// Show the repositories in the list
    List,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Stats(args) => crate::stats::exec(self.common, args),
            Commands::Add { folder } => crate::add::exec(self.common, folder),
            Commands::List => crate::list::exec(self.common),
        }
    }
}
