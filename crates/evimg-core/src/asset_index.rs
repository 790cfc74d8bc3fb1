//! Sequence index allocation for `<event_id>.<index>.<ext>` asset files.
//!
//! The scan and the later write are not atomic: two concurrent runs for the
//! same event can pick the same index.

use std::io;
use std::num::IntErrorKind;
use std::path::Path;

use crate::error::IngestError;

/// Index segment of an asset filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexSegment {
    Index(u64),
    /// All digits, but past `u64::MAX`.
    TooLarge,
}

/// Index encoded in an asset filename for `event_id`, if any.
///
/// The final extension is dropped, the rest is split on `.` and the last
/// segment parsed. `evt.3.png` gives 3; `evt.png` and `evt.cover.png` give `None`.
pub(crate) fn index_from_file_name(event_id: &str, file_name: &str) -> Option<IndexSegment> {
    let rest = file_name.strip_prefix(event_id)?.strip_prefix('.')?;
    let stem = match rest.rfind('.') {
        Some(dot) => &rest[..dot],
        None => return None,
    };
    match stem.rsplit('.').next()?.parse::<u64>() {
        Ok(index) => Some(IndexSegment::Index(index)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(IndexSegment::TooLarge),
        Err(_) => None,
    }
}

/// Returns one past the highest index among existing files for `event_id`,
/// or 1 when there are none (including when `asset_dir` does not exist).
///
/// Fails with [`IngestError::IndexExhausted`] when an existing index leaves no
/// successor that fits in a `u64`.
pub fn next_index(asset_dir: &Path, event_id: &str) -> Result<u64, IngestError> {
    let scan_error = |source: io::Error| IngestError::AssetDir {
        path: asset_dir.to_path_buf(),
        source,
    };
    let exhausted = || IngestError::IndexExhausted {
        event_id: event_id.to_string(),
    };

    let entries = match std::fs::read_dir(asset_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(1),
        Err(e) => return Err(scan_error(e)),
    };

    let mut highest: Option<u64> = None;
    for entry in entries {
        let entry = entry.map_err(scan_error)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        match index_from_file_name(event_id, name) {
            Some(IndexSegment::Index(index)) => {
                tracing::trace!(file = name, index, "existing asset");
                highest = Some(highest.map_or(index, |h| h.max(index)));
            }
            Some(IndexSegment::TooLarge) => {
                tracing::warn!(file = name, "asset index out of range");
                return Err(exhausted());
            }
            None => {}
        }
    }

    match highest {
        None => Ok(1),
        Some(h) => h.checked_add(1).ok_or_else(exhausted),
    }
}
