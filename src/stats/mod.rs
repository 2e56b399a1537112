pub mod aggregate;
pub mod exec;
pub mod output;
pub mod scan;
pub mod window;

pub use aggregate::Aggregate;
pub use exec::exec;
pub use output::{output_json, output_ndjson, render, AnsiFormatter, CellFormatter, PlainFormatter};
pub use scan::{count_commit, process_repositories, scan_repository};
pub use window::build_window;
