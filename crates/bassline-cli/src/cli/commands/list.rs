//! `bassline list` – show the built-in archive manifest.

use anyhow::Result;
use bassline_core::manifest::Manifest;

pub fn run_list(json: bool) -> Result<()> {
    let manifest = Manifest::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(manifest.specs())?);
        return Ok(());
    }

    println!("{:<22} {:<26} {}", "ARCHIVE", "LIBRARY", "DESTINATION");
    for spec in manifest.specs() {
        println!("{:<22} {:<26} {}", spec.name, spec.inner_path, spec.destination);
    }
    Ok(())
}
