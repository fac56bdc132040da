//! The fixed table of BASS archives and where their libraries go.
//!
//! Four library families (bass, bassopus, bassmix, bass_fx), each published
//! as separate Windows, Linux, and macOS archives. The table is an explicit
//! immutable value handed to the provisioner, so tests can point it at a
//! local server instead of the vendor site.

use serde::{Deserialize, Serialize};

/// Vendor directory for the core BASS, BASSOPUS and BASSMIX archives.
pub const UN4SEEN_FILES: &str = "https://www.un4seen.com/files/";

/// Vendor directory for the BASS_FX archives (published under a subpath).
pub const UN4SEEN_FX_FILES: &str = "https://www.un4seen.com/files/z/0/";

/// One archive to download and the single file to take out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSpec {
    /// Archive file name, e.g. `bass24-linux.zip`.
    pub name: String,
    /// URL directory the archive is fetched from; the full URL is `url_prefix + name`.
    pub url_prefix: String,
    /// Path of the wanted library inside the extracted archive.
    pub inner_path: String,
    /// Path of the library relative to the destination root.
    pub destination: String,
}

impl ArchiveSpec {
    /// Full download URL for this archive.
    pub fn url(&self) -> String {
        format!("{}{}", self.url_prefix, self.name)
    }

    /// Archive name without the `.zip` suffix; used as the scratch directory name.
    pub fn stem(&self) -> &str {
        self.name.strip_suffix(".zip").unwrap_or(&self.name)
    }
}

/// Ordered set of archives a run provisions, processed strictly in sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    specs: Vec<ArchiveSpec>,
}

fn spec(url_prefix: &str, name: &str, inner_path: &str, destination: &str) -> ArchiveSpec {
    ArchiveSpec {
        name: name.to_string(),
        url_prefix: url_prefix.to_string(),
        inner_path: inner_path.to_string(),
        destination: destination.to_string(),
    }
}

impl Manifest {
    /// The built-in table: 4 families x 3 platform archives, 12 files total.
    pub fn builtin() -> Self {
        let specs = vec![
            spec(UN4SEEN_FILES, "bass24.zip", "x64/bass.dll", "Windows/x86_64/bass.dll"),
            spec(UN4SEEN_FILES, "bass24-linux.zip", "libs/x86_64/libbass.so", "Linux/x86_64/libbass.so"),
            spec(UN4SEEN_FILES, "bass24-osx.zip", "libbass.dylib", "Mac/libbass.dylib"),
            spec(UN4SEEN_FILES, "bassopus24.zip", "x64/bassopus.dll", "Windows/x86_64/bassopus.dll"),
            spec(UN4SEEN_FILES, "bassopus24-linux.zip", "libs/x86_64/libbassopus.so", "Linux/x86_64/libbassopus.so"),
            spec(UN4SEEN_FILES, "bassopus24-osx.zip", "libbassopus.dylib", "Mac/libbassopus.dylib"),
            spec(UN4SEEN_FILES, "bassmix24.zip", "x64/bassmix.dll", "Windows/x86_64/bassmix.dll"),
            spec(UN4SEEN_FILES, "bassmix24-linux.zip", "libs/x86_64/libbassmix.so", "Linux/x86_64/libbassmix.so"),
            spec(UN4SEEN_FILES, "bassmix24-osx.zip", "libbassmix.dylib", "Mac/libbassmix.dylib"),
            spec(UN4SEEN_FX_FILES, "bass_fx24.zip", "x64/bass_fx.dll", "Windows/x86_64/bass_fx.dll"),
            spec(UN4SEEN_FX_FILES, "bass_fx24-linux.zip", "libs/x86_64/libbass_fx.so", "Linux/x86_64/libbass_fx.so"),
            spec(UN4SEEN_FX_FILES, "bass_fx24-osx.zip", "libbass_fx.dylib", "Mac/libbass_fx.dylib"),
        ];
        Self { specs }
    }

    /// Rewrite every entry to fetch from `prefix` instead of the vendor site.
    /// Used by tests to substitute a local archive server.
    pub fn with_url_prefix(mut self, prefix: &str) -> Self {
        for s in &mut self.specs {
            s.url_prefix = prefix.to_string();
        }
        self
    }

    /// The archive entries in run order.
    pub fn specs(&self) -> &[ArchiveSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
