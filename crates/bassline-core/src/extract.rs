//! Unpack a downloaded zip body into a scratch directory.
//!
//! The whole archive is written out as published; the provisioner then picks
//! the one file it wants from the extracted tree. Entry paths are sanitized
//! through `enclosed_name` so a hostile archive cannot escape the scratch
//! directory.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::Path;
use thiserror::Error;

/// Error from unpacking one archive body.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("bad archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Extracts every entry of the zip `body` under `scratch_dir`.
///
/// Returns the number of files written. `scratch_dir` must already exist.
pub fn extract_archive(body: &[u8], scratch_dir: &Path) -> Result<usize, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(body))?;
    let mut files = 0usize;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let rel = match entry.enclosed_name() {
            Some(p) => p.to_owned(),
            None => continue, // entry path escapes the scratch dir
        };
        let out_path = scratch_dir.join(&rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
        files += 1;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&out_path, fs::Permissions::from_mode(mode));
        }
    }

    tracing::debug!(dir = %scratch_dir.display(), files, "archive extracted");
    Ok(files)
}
