//! Bitmap tests: the decoders exercised through the public API, checking
//! the artefact invariants the callers rely on.

use std::io::Cursor;

use ftech_rs::file::{bp2, bp3};
use ftech_rs::{Color, FileKind, PixelFormat, guess_file_type};

fn bp2_index8(width: u32, height: u32, palette: &[u8], slices: &[Vec<u8>]) -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(&999u32.to_le_bytes());
	data.extend_from_slice(&1u32.to_le_bytes());
	data.extend_from_slice(&(palette.len() as u32).to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(&(slices.len() as u32).to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(b"BM");
	data.extend_from_slice(&[0u8; 12]);
	data.extend_from_slice(&40u32.to_le_bytes());
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&height.to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&8u16.to_le_bytes());
	data.extend_from_slice(&[0u8; 24]);
	data.extend_from_slice(palette);
	for chunk in slices {
		data.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
		data.extend_from_slice(chunk);
	}
	data
}

fn bp3_single_tile(mode: u8, params: [u8; 3], payload: &[u8]) -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(&0x8888_8888u32.to_le_bytes());
	data.extend_from_slice(&8u32.to_le_bytes());
	data.extend_from_slice(&8u32.to_le_bytes());
	data.extend_from_slice(&192u32.to_le_bytes());
	data.extend_from_slice(b"BM");
	data.extend_from_slice(&[0u8; 12]);
	data.extend_from_slice(&40u32.to_le_bytes());
	data.extend_from_slice(&8u32.to_le_bytes());
	data.extend_from_slice(&8u32.to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&24u16.to_le_bytes());
	data.extend_from_slice(&[0u8; 24]);
	data.push(mode);
	data.extend_from_slice(&params);
	data.extend_from_slice(payload);
	data
}

#[test]
fn test_bp2_dimensions_match_header() {
	// 16x8 solid INDEX8 image: one repeat run, two palette colours
	let palette = [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00];
	let data = bp2_index8(16, 8, &palette, &[vec![0xFF, 0xFF, 0x00]]);

	let bitmap = bp2::load(Cursor::new(data)).unwrap();
	assert_eq!(bitmap.width(), 16);
	assert_eq!(bitmap.height(), 8);
	assert_eq!(bitmap.pixel_format(), PixelFormat::Index8);
	assert_eq!(
		bitmap.pixels().len(),
		(bitmap.width() * bitmap.height()) as usize * bitmap.bytes_per_pixel()
	);

	// Every pixel maps to palette entry 0, opaque black
	assert!(bitmap.pixels().iter().all(|&p| p == 0));
	assert_eq!(bitmap.palette().unwrap()[0], Color::new(0, 0, 0, 0xFF));
	assert!(bitmap.to_rgb8().iter().all(|&c| c == 0));
}

#[test]
fn test_bp3_dimensions_match_header() {
	let data = bp3_single_tile(0, [0xAA, 0xBB, 0xCC], &[]);

	let bitmap = bp3::load(Cursor::new(data)).unwrap();
	assert_eq!(bitmap.width(), 8);
	assert_eq!(bitmap.height(), 8);
	assert_eq!(bitmap.pixel_format(), PixelFormat::Bgr24);
	assert_eq!(
		bitmap.pixels().len(),
		(bitmap.width() * bitmap.height()) as usize * bitmap.bytes_per_pixel()
	);

	for px in bitmap.pixels().chunks_exact(3) {
		assert_eq!(px, [0xAA, 0xBB, 0xCC]);
	}

	// RGB expansion swizzles the channel order
	assert_eq!(&bitmap.to_rgb8()[..3], &[0xCC, 0xBB, 0xAA]);
}

#[test]
fn test_bp3_recognised_behind_bmp_extension() {
	let data = bp3_single_tile(0, [1, 2, 3], &[]);
	assert_eq!(guess_file_type("CG001.bmp", &data), FileKind::Bp3);

	let file = bp3::File::from_bytes(&data).unwrap();
	assert_eq!(file.header().width, 8);
	assert_eq!(file.header().decompressed_length, 192);
}

#[test]
fn test_bp2_file_reports_header() {
	let data = bp2_index8(16, 8, &[0u8; 8], &[vec![0xFF, 0xFF, 0x00]]);
	let file = bp2::File::from_bytes(&data).unwrap();

	assert_eq!(file.header().encoding, bp2::Encoding::Index8);
	assert_eq!(file.header().palette_len, 8);
	assert_eq!(file.header().slice_count, 1);
}
