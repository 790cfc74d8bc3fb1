//! CLI command handlers, one per file.

mod extract;
mod ingest;
mod next_index;

pub use extract::run_extract;
pub use ingest::run_ingest;
pub use next_index::run_next_index;
