//! The ingest run: parse the issue body, allocate indices, fetch and save each image.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::asset_index;
use crate::error::IngestError;
use crate::fetch::{FetchError, ImageFetcher};
use crate::issue_body::parse_submission;
use crate::media_type::resolve_extension;
use crate::storage;

/// Issue fields supplied by the invoking workflow. All default to empty; only
/// `body` is required.
#[derive(Clone, Default)]
pub struct IssueContext {
    /// `owner/name` of the repository the issue belongs to.
    pub repository: String,
    pub issue_number: String,
    pub body: String,
    pub author: String,
    /// Access token. Not sent with downloads.
    pub token: String,
}

impl fmt::Debug for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueContext")
            .field("repository", &self.repository)
            .field("issue_number", &self.issue_number)
            .field("body_len", &self.body.len())
            .field("author", &self.author)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// Runs the whole pipeline and returns the written paths in URL order.
///
/// Stops at the first error. Files saved before a failing download stay on disk.
pub fn ingest(
    ctx: &IssueContext,
    asset_dir: &Path,
    fetcher: &dyn ImageFetcher,
) -> Result<Vec<PathBuf>, IngestError> {
    tracing::info!(
        repository = %ctx.repository,
        issue = %ctx.issue_number,
        author = %ctx.author,
        "processing event image submission"
    );

    let submission = parse_submission(&ctx.body)?;
    tracing::info!(
        event_id = %submission.event_id,
        images = submission.image_urls.len(),
        "parsed issue body"
    );

    std::fs::create_dir_all(asset_dir).map_err(|source| IngestError::AssetDir {
        path: asset_dir.to_path_buf(),
        source,
    })?;
    let first_index = asset_index::next_index(asset_dir, &submission.event_id)?;
    tracing::debug!(first_index, "allocated starting index");

    let mut created = Vec::with_capacity(submission.image_urls.len());
    let mut next = Some(first_index);
    for url in &submission.image_urls {
        let index = next.ok_or_else(|| IngestError::IndexExhausted {
            event_id: submission.event_id.clone(),
        })?;
        next = index.checked_add(1);
        let stem = storage::asset_stem(asset_dir, &submission.event_id, index);
        let path = download_to(fetcher, url, &stem).map_err(|source| {
            tracing::warn!(url = %url, error = %source, "image download failed");
            IngestError::Fetch {
                url: url.clone(),
                source,
            }
        })?;
        created.push(path);
    }

    Ok(created)
}

/// Fetches one image and saves it as `<stem>.<ext>`.
fn download_to(fetcher: &dyn ImageFetcher, url: &str, stem: &Path) -> Result<PathBuf, FetchError> {
    let image = fetcher.fetch(url)?;
    let ext = resolve_extension(image.content_type.as_deref(), url);
    let path = storage::with_appended_extension(stem, &ext);
    storage::write_asset(&path, &image.body)?;
    tracing::info!(
        path = %path.display(),
        bytes = image.body.len(),
        content_type = image.content_type.as_deref().unwrap_or(""),
        "saved image"
    );
    Ok(path)
}
