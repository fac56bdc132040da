//! Copy one extracted library into the destination tree.

use crate::manifest::ArchiveSpec;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error from placing one library file.
#[derive(Debug, Error)]
pub enum PlaceError {
    /// The archive extracted fine but the wanted file was not in it.
    #[error("missing file inside archive: {}", path.display())]
    MissingInnerFile { path: PathBuf },
    /// The copy itself failed (permissions, missing destination subdirectory, ...).
    #[error("copy {} -> {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Copies `scratch_dir/inner_path` to `dest_root/destination`, overwriting
/// any existing file. Destination subdirectories must already exist; this
/// never creates directory structure in the game checkout.
pub fn place_file(
    scratch_dir: &Path,
    spec: &ArchiveSpec,
    dest_root: &Path,
) -> Result<PathBuf, PlaceError> {
    let from = scratch_dir.join(&spec.inner_path);
    if !from.is_file() {
        return Err(PlaceError::MissingInnerFile { path: from });
    }

    let to = dest_root.join(&spec.destination);
    fs::copy(&from, &to).map_err(|source| PlaceError::Copy {
        from,
        to: to.clone(),
        source,
    })?;
    Ok(to)
}
