//! Shared fixtures: in-memory zip construction and per-archive payloads.

pub mod archive_server;

use bassline_core::manifest::Manifest;
use std::collections::HashMap;
use std::io::{Cursor, Write};

/// Build an in-memory zip with the given (path, bytes) entries.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (path, data) in entries {
        writer.start_file(*path, options).expect("start_file");
        writer.write_all(data).expect("write entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Distinct payload per archive so byte-identity asserts are meaningful.
pub fn payload_for(name: &str) -> Vec<u8> {
    name.bytes().cycle().take(4096).collect()
}

/// One well-formed zip per manifest entry, keyed by archive name. Each zip
/// carries the wanted library plus a sibling file the provisioner must leave
/// behind in scratch.
pub fn bodies_for(manifest: &Manifest) -> HashMap<String, Vec<u8>> {
    manifest
        .specs()
        .iter()
        .map(|spec| {
            let payload = payload_for(&spec.name);
            let body = zip_bytes(&[
                (spec.inner_path.as_str(), payload.as_slice()),
                ("readme.txt", b"see the vendor docs".as_slice()),
            ]);
            (spec.name.clone(), body)
        })
        .collect()
}
