//! Destination library tree: where libraries land and the precondition on it.
//!
//! The tree belongs to the game checkout and is never created here; a missing
//! root means the tool was not invoked from the expected checkout.

use std::path::{Path, PathBuf};

/// Library root relative to the invoking checkout.
pub const DEFAULT_DEST: &str = "Assets/Plugins/BassNative";

/// Platform subdirectories expected under the destination root.
pub const PLATFORM_DIRS: [&str; 4] = ["Windows/x86", "Windows/x86_64", "Linux/x86_64", "Mac"];

/// Default destination root, resolved against the current directory.
pub fn default_dest_root() -> PathBuf {
    PathBuf::from(DEFAULT_DEST)
}

/// Precondition for a run: the destination root must already be a directory.
pub fn dest_root_exists(root: &Path) -> bool {
    root.is_dir()
}

/// Message shown when the destination root is missing.
pub fn guidance(root: &Path) -> String {
    format!(
        "Library directory {} not found.\n\
         Run this tool from the root of the game checkout (or pass --dest); \
         nothing was downloaded or written.",
        root.display()
    )
}
