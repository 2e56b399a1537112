pub mod add;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod git;
pub mod list;
pub mod logging;
pub mod model;
pub mod stats;
