pub mod config;
pub mod logging;

pub mod asset_index;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod issue_body;
pub mod media_type;
pub mod storage;

pub use error::IngestError;
pub use fetch::{CurlFetcher, FetchError, FetchOptions, FetchedImage, ImageFetcher};
pub use ingest::{ingest, IssueContext};
