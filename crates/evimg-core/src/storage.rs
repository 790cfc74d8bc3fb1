//! Asset file naming and writes.
//!
//! The body is written to a `.part` sibling, synced, then renamed onto the
//! final name so readers never see a half-written image.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// `<asset_dir>/<event_id>.<index>`, the path before an extension is chosen.
pub fn asset_stem(asset_dir: &Path, event_id: &str, index: u64) -> PathBuf {
    asset_dir.join(format!("{}.{}", event_id, index))
}

/// Appends `.<ext>` to `stem`.
///
/// `Path::with_extension` would replace the index segment, so the extension is pushed instead.
pub fn with_appended_extension(stem: &Path, ext: &str) -> PathBuf {
    let mut s: OsString = stem.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Temp path for a given final path (appends `.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut s: OsString = final_path.as_os_str().to_owned();
    s.push(TEMP_SUFFIX);
    PathBuf::from(s)
}

/// Writes `data` to `final_path`, creating parent directories.
///
/// An existing file at `final_path` is replaced.
pub fn write_asset(final_path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = final_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp = temp_path(final_path);
    let result = (|| -> io::Result<()> {
        let mut file = File::create(&temp)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&temp, final_path)
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&temp);
    }
    result
}
