use super::*;
use tempfile::TempDir;

use crate::test_utils::write_jar;
use crate::types::errors::ScanError;

fn open_jar(entries: &[(&str, &[u8])]) -> (TempDir, ModArchive) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mod.jar");
    write_jar(&path, entries);
    let archive = ModArchive::open(&path).unwrap();
    (dir, archive)
}

#[test]
fn lists_and_reads_entries() {
    let (_dir, mut archive) = open_jar(&[
        ("fabric.mod.json", b"{}".as_slice()),
        ("assets/icon.png", b"png".as_slice()),
    ]);

    assert!(archive.has_entry("fabric.mod.json"));
    assert!(!archive.has_entry("quilt.mod.json"));

    // Listing is restartable.
    assert_eq!(archive.entry_names().count(), 2);
    assert_eq!(archive.entry_names().count(), 2);

    let bytes = archive.read_entry("fabric.mod.json", 1024).unwrap();
    assert_eq!(bytes, b"{}");
    // Re-reading the same entry works on the same handle.
    let again = archive.read_entry("fabric.mod.json", 1024).unwrap();
    assert_eq!(again, b"{}");
}

#[test]
fn entry_reads_are_capped_at_limit() {
    let payload = vec![0xAB; 4096];
    let (_dir, mut archive) = open_jar(&[("data.bin", payload.as_slice())]);

    let bytes = archive.read_entry("data.bin", 16).unwrap();
    assert_eq!(bytes.len(), 16);
}

#[test]
fn zero_byte_entries_read_as_empty() {
    let (_dir, mut archive) = open_jar(&[("empty.txt", b"".as_slice())]);
    assert_eq!(archive.read_entry("empty.txt", 1024).unwrap(), b"");
}

#[test]
fn traversal_entry_names_are_tolerated() {
    let (_dir, mut archive) = open_jar(&[("../escape.txt", b"nope".as_slice())]);
    assert!(archive.has_entry("../escape.txt"));
    assert_eq!(archive.read_entry("../escape.txt", 64).unwrap(), b"nope");
}

#[test]
fn missing_entry_is_an_entry_read_error() {
    let (_dir, mut archive) = open_jar(&[("a.txt", b"a".as_slice())]);
    let error = archive.read_entry("missing.txt", 64).unwrap_err();
    assert!(matches!(error, ScanError::EntryRead { .. }));
}

#[test]
fn garbage_file_is_a_corrupt_archive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jar");
    std::fs::write(&path, b"this is not a zip file").unwrap();

    let error = ModArchive::open(&path).unwrap_err();
    assert!(matches!(error, ScanError::CorruptArchive(_)));
}

#[test]
fn truncated_container_is_a_corrupt_archive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mod.jar");
    write_jar(&path, &[("fabric.mod.json", b"{}".as_slice())]);

    // Chop the central directory off the end.
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let error = ModArchive::open(&path).unwrap_err();
    assert!(matches!(error, ScanError::CorruptArchive(_)));
}
