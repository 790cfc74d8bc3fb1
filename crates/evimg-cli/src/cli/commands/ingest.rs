//! `evimg ingest` – download attached images and print the saved paths.

use anyhow::Result;
use evimg_core::{ingest, ImageFetcher, IssueContext};
use std::io::Write;
use std::path::Path;

/// Paths are written to `out` only after every image is saved, one per line in URL order.
pub fn run_ingest(
    asset_dir: &Path,
    ctx: &IssueContext,
    fetcher: &dyn ImageFetcher,
    out: &mut impl Write,
) -> Result<()> {
    let created = ingest(ctx, asset_dir, fetcher)?;
    tracing::info!("saved {} image(s) to {}", created.len(), asset_dir.display());
    for path in created {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()?;
    Ok(())
}
