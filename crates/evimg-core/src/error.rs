//! Error types for the ingest pipeline.

use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::FetchError;

/// Every failure is fatal to the run; the binary turns it into one stderr line.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Required input (the issue body) is empty or absent.
    #[error("issue body is empty")]
    Configuration,

    /// No `### Event ID` section followed by a value.
    #[error("could not find '### Event ID' section in issue body")]
    MissingSection,

    /// Event ID contains characters outside `[A-Za-z0-9_-]`.
    #[error(
        "event ID '{0}' contains invalid characters; only alphanumeric characters, hyphens, and underscores are allowed"
    )]
    InvalidIdentifier(String),

    /// No allow-listed image links in the body.
    #[error("no image URLs found in issue body; attach images using drag-and-drop or paste")]
    NoImagesFound,

    /// Asset directory could not be created or listed.
    #[error("asset directory {}", path.display())]
    AssetDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The next index for this event does not fit in a `u64`.
    #[error("no free asset index left for event '{event_id}'")]
    IndexExhausted { event_id: String },

    /// Download or write of one image failed.
    #[error("failed to download image {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
}
