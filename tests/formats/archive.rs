//! Archive tests: sidecar lookup through real files plus in-memory parsing.

use std::io::Cursor;
use std::path::PathBuf;

use ftech_rs::{PackFile, PackFormat};

/// Builds a minimal BIN index for `(name, offset, length)` triples.
fn bin_index(entries: &[(&[u8], u32, u32)]) -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(&(entries.len() as u32).to_le_bytes());
	for (name, offset, length) in entries {
		data.extend_from_slice(&(name.len() as u32).to_le_bytes());
		data.extend_from_slice(name);
		data.extend_from_slice(&offset.to_le_bytes());
		data.extend_from_slice(&length.to_le_bytes());
	}
	data
}

/// Creates a scratch directory unique to this test.
fn scratch_dir(test: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("ftech-rs-{}-{}", test, std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	dir
}

#[test]
fn test_bin_archive_round_trip() {
	// The concrete end-to-end scenario: one entry named TEST.TXT covering
	// "hello" at offset zero
	let index = bin_index(&[(b"TEST.TXT", 0, 5)]);
	let lump = b"hello".to_vec();

	let mut pack =
		PackFile::from_readers(Cursor::new(lump), Cursor::new(index), PackFormat::Bin).unwrap();

	let entries = pack.entries().to_vec();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].name, "TEST.TXT");
	assert_eq!(entries[0].offset, 0);
	assert_eq!(entries[0].length, 5);
	assert_eq!(pack.read_entry(&entries[0]).unwrap(), b"hello");
}

#[test]
fn test_open_with_sidecar() {
	let dir = scratch_dir("sidecar");
	let lump_path = dir.join("sample.bin");

	std::fs::write(&lump_path, b"hello").unwrap();
	std::fs::write(dir.join("sample.idx"), bin_index(&[(b"TEST.TXT", 0, 5)])).unwrap();

	let mut pack = PackFile::open(&lump_path).unwrap();
	assert_eq!(pack.format(), PackFormat::Bin);

	let entry = pack.entries()[0].clone();
	assert_eq!(entry.name, "TEST.TXT");
	assert_eq!(pack.read_entry(&entry).unwrap(), b"hello");

	drop(pack);
	std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_open_uppercase_extension() {
	// Extension comparison is case-insensitive; the sidecar is lowercase .idx
	let dir = scratch_dir("upper");
	let lump_path = dir.join("SAMPLE.BIN");

	std::fs::write(&lump_path, b"x").unwrap();
	std::fs::write(dir.join("SAMPLE.idx"), bin_index(&[(b"A", 0, 1)])).unwrap();

	let pack = PackFile::open(&lump_path).unwrap();
	assert_eq!(pack.num_entries(), 1);

	drop(pack);
	std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_sidecar() {
	let dir = scratch_dir("noidx");
	let lump_path = dir.join("orphan.bin");
	std::fs::write(&lump_path, b"x").unwrap();

	let err = PackFile::open(&lump_path).unwrap_err();
	assert!(err.is_sidecar_missing());

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_open_rejects_foreign_extension() {
	let err = PackFile::open("archive.zip").unwrap_err();
	assert!(matches!(err, ftech_rs::FtFileError::InvalidFile { .. }));
}

#[test]
fn test_lb5_fixed_records() {
	let mut index = Vec::new();
	index.extend_from_slice(&1u32.to_le_bytes());
	index.extend_from_slice(&2u32.to_le_bytes());
	index.extend_from_slice(&4u32.to_le_bytes());
	index.push(0xEE); // padding byte, skipped
	index.extend_from_slice(b"ASUKA.BMP\0\0\0\0\0\0");

	let mut pack = PackFile::from_readers(
		Cursor::new(b"__data__".to_vec()),
		Cursor::new(index),
		PackFormat::Lb5,
	)
	.unwrap();

	let entry = pack.entries()[0].clone();
	assert_eq!(entry.name, "ASUKA.BMP");
	assert_eq!(pack.read_entry(&entry).unwrap(), b"data");
}
