//! Core engine for the bassline provisioner.
//!
//! Fetches prebuilt BASS native libraries (the core engine plus the Opus,
//! mixer, and effects plugins) from the vendor site as zip archives, unpacks
//! each into a scratch directory, and copies the one per-platform binary the
//! game needs into its library tree.

pub mod extract;
pub mod fetch;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod place;
pub mod provision;
