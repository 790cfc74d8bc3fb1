//! `evimg extract` – print the event ID, then one image URL per line.

use anyhow::Result;
use evimg_core::issue_body::parse_submission;
use std::io::Write;

pub fn run_extract(body: &str, out: &mut impl Write) -> Result<()> {
    let submission = parse_submission(body)?;
    writeln!(out, "{}", submission.event_id)?;
    for url in &submission.image_urls {
        writeln!(out, "{url}")?;
    }
    Ok(())
}
