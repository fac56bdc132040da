//! `bassline install` – fetch every archive and place its library.

use anyhow::Result;
use bassline_core::layout;
use bassline_core::manifest::Manifest;
use bassline_core::provision::{Provisioner, RunOutcome};
use std::path::PathBuf;

pub fn run_install(dest: Option<PathBuf>, scratch: Option<PathBuf>) -> Result<()> {
    let dest_root = dest.unwrap_or_else(layout::default_dest_root);
    let scratch_root = scratch.unwrap_or_else(|| PathBuf::from("."));
    tracing::debug!(dest = %dest_root.display(), scratch = %scratch_root.display(), "install");

    let provisioner = Provisioner::new(Manifest::builtin(), &dest_root, scratch_root);
    let outcome = provisioner.run_with_progress(|spec, placed| {
        println!("  {:<22} -> {}", spec.name, placed.display());
    })?;

    match outcome {
        RunOutcome::DestinationMissing => {
            println!("{}", layout::guidance(&dest_root));
        }
        RunOutcome::Completed(report) => {
            println!(
                "Installed {} libraries into {} ({} scratch directories removed).",
                report.files_placed,
                dest_root.display(),
                report.scratch_removed
            );
        }
    }
    Ok(())
}
