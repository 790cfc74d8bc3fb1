//! `evimg next-index <event_id>` – show the next free index for an event.

use anyhow::Result;
use evimg_core::asset_index;
use evimg_core::issue_body::is_valid_event_id;
use evimg_core::IngestError;
use std::io::Write;
use std::path::Path;

pub fn run_next_index(asset_dir: &Path, event_id: &str, out: &mut impl Write) -> Result<()> {
    if !is_valid_event_id(event_id) {
        return Err(IngestError::InvalidIdentifier(event_id.to_string()).into());
    }
    let index = asset_index::next_index(asset_dir, event_id)?;
    writeln!(out, "{index}")?;
    Ok(())
}
