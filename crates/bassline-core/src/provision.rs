//! The sequential run loop: fetch, extract, place, then clean up scratch.

use crate::extract::{self, ExtractError};
use crate::fetch::{self, FetchError};
use crate::layout;
use crate::manifest::{ArchiveSpec, Manifest};
use crate::place::{self, PlaceError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error from a provisioning run, naming the archive that failed.
/// The first failure aborts the run; there is no retry or continue-on-error.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("fetch {archive}: {source}")]
    Fetch { archive: String, source: FetchError },
    #[error("extract {archive}: {source}")]
    Extract { archive: String, source: ExtractError },
    #[error("place {archive}: {source}")]
    Place { archive: String, source: PlaceError },
    #[error("scratch dir {}: {source}", path.display())]
    Scratch { path: PathBuf, source: std::io::Error },
}

/// How a run ended when it did not error.
#[derive(Debug)]
pub enum RunOutcome {
    /// Every archive was fetched and every library placed.
    Completed(RunReport),
    /// The destination root was absent; nothing was downloaded or written.
    DestinationMissing,
}

/// Counts from a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub files_placed: usize,
    pub scratch_removed: usize,
}

/// Extraction directories created during a run. Removal happens once, after
/// the loop, whether the loop succeeded or not; a failed removal is logged
/// and never masks the run's own result.
struct ScratchSet {
    created: Vec<PathBuf>,
}

impl ScratchSet {
    fn new() -> Self {
        Self { created: Vec::new() }
    }

    fn track(&mut self, dir: PathBuf) {
        self.created.push(dir);
    }

    fn remove_all(&mut self) -> usize {
        let mut removed = 0;
        for dir in self.created.drain(..) {
            match fs::remove_dir_all(&dir) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!(dir = %dir.display(), "could not remove scratch dir: {}", e),
            }
        }
        removed
    }
}

/// Drives one provisioning run over an immutable manifest.
pub struct Provisioner {
    manifest: Manifest,
    dest_root: PathBuf,
    scratch_root: PathBuf,
}

impl Provisioner {
    pub fn new(
        manifest: Manifest,
        dest_root: impl Into<PathBuf>,
        scratch_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            manifest,
            dest_root: dest_root.into(),
            scratch_root: scratch_root.into(),
        }
    }

    /// Runs the full sequence. See [`Provisioner::run_with_progress`].
    pub fn run(&self) -> Result<RunOutcome, ProvisionError> {
        self.run_with_progress(|_, _| {})
    }

    /// Runs the full sequence, invoking `on_placed` after each library lands.
    ///
    /// Checks the destination-root precondition first: if the root is not a
    /// directory the run is a no-op (no network, no writes) and returns
    /// [`RunOutcome::DestinationMissing`]. Otherwise archives are processed
    /// strictly in manifest order and the first failure aborts the run.
    /// Scratch directories created up to that point are removed either way.
    pub fn run_with_progress<F>(&self, mut on_placed: F) -> Result<RunOutcome, ProvisionError>
    where
        F: FnMut(&ArchiveSpec, &Path),
    {
        if !layout::dest_root_exists(&self.dest_root) {
            tracing::warn!(root = %self.dest_root.display(), "destination root missing; skipping run");
            return Ok(RunOutcome::DestinationMissing);
        }

        let mut scratch = ScratchSet::new();
        let result = self.provision_all(&mut scratch, &mut on_placed);
        let scratch_removed = scratch.remove_all();

        let files_placed = result?;
        tracing::info!(files_placed, scratch_removed, "run complete");
        Ok(RunOutcome::Completed(RunReport {
            files_placed,
            scratch_removed,
        }))
    }

    fn provision_all<F>(&self, scratch: &mut ScratchSet, on_placed: &mut F) -> Result<usize, ProvisionError>
    where
        F: FnMut(&ArchiveSpec, &Path),
    {
        let mut placed = 0;
        for spec in self.manifest.specs() {
            let url = spec.url();
            tracing::info!(archive = %spec.name, %url, "fetching");
            let body = fetch::fetch_archive(&url).map_err(|source| ProvisionError::Fetch {
                archive: spec.name.clone(),
                source,
            })?;

            let dir = self.scratch_root.join(spec.stem());
            fs::create_dir_all(&dir).map_err(|source| ProvisionError::Scratch {
                path: dir.clone(),
                source,
            })?;
            scratch.track(dir.clone());
            extract::extract_archive(&body, &dir).map_err(|source| ProvisionError::Extract {
                archive: spec.name.clone(),
                source,
            })?;

            let dest = place::place_file(&dir, spec, &self.dest_root).map_err(|source| {
                ProvisionError::Place {
                    archive: spec.name.clone(),
                    source,
                }
            })?;
            tracing::info!(archive = %spec.name, dest = %dest.display(), "placed");
            on_placed(spec, &dest);
            placed += 1;
        }
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_destination_root_short_circuits() {
        let dir = tempdir().unwrap();
        // Vendor URLs in the manifest, but no request is ever made: the
        // precondition check runs before any fetch.
        let provisioner = Provisioner::new(
            Manifest::builtin(),
            dir.path().join("not-there"),
            dir.path().to_path_buf(),
        );
        let outcome = provisioner.run().unwrap();
        assert!(matches!(outcome, RunOutcome::DestinationMissing));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0, "no scratch dirs");
    }

    #[test]
    fn scratch_set_removes_tracked_dirs() {
        let root = tempdir().unwrap();
        let a = root.path().join("bass24");
        let b = root.path().join("bass24-linux");
        fs::create_dir_all(a.join("x64")).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join("x64/bass.dll"), b"x").unwrap();

        let mut scratch = ScratchSet::new();
        scratch.track(a.clone());
        scratch.track(b.clone());
        assert_eq!(scratch.remove_all(), 2);
        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn scratch_set_reports_only_successful_removals() {
        let root = tempdir().unwrap();
        let real = root.path().join("bassmix24");
        fs::create_dir_all(&real).unwrap();

        let mut scratch = ScratchSet::new();
        scratch.track(real);
        scratch.track(root.path().join("never-created"));
        assert_eq!(scratch.remove_all(), 1);
    }
}
