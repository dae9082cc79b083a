//! Benchmark helper utilities for ftech-rs.
//!
//! This module generates synthetic BP2 assets so the decoder benchmarks run
//! without any game data checked into the repository. The generated files
//! are valid INDEX8 images whose slices mix repeat runs and literal runs in
//! roughly the proportions real backgrounds show.

/// Generates a synthetic INDEX8 BP2 file with the given dimensions.
///
/// `height` is rounded down to a multiple of 8 so every slice is full.
pub fn generate_test_bp2(width: u32, height: u32) -> Vec<u8> {
	let height = height & !7;
	let slice_count = height / 8;

	let mut data = Vec::new();

	// BP2 header
	data.extend_from_slice(&999u32.to_le_bytes());
	data.extend_from_slice(&1u32.to_le_bytes());
	data.extend_from_slice(&1024u32.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(&slice_count.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());

	// BMP file header
	data.extend_from_slice(b"BM");
	data.extend_from_slice(&[0u8; 12]);

	// BMP info header
	data.extend_from_slice(&40u32.to_le_bytes());
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&height.to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&8u16.to_le_bytes());
	data.extend_from_slice(&[0u8; 24]);

	// Palette: 256 BGR0 quads
	for i in 0..=255u8 {
		data.extend_from_slice(&[i, i.wrapping_mul(2), i.wrapping_mul(3), 0]);
	}

	for slice in 0..slice_count {
		data.extend_from_slice(&generate_slice_chunk(width, slice));
	}

	data
}

/// Generates one slice chunk: alternating repeat and literal runs covering
/// exactly `width * 8` pixels.
fn generate_slice_chunk(width: u32, slice: u32) -> Vec<u8> {
	let mut chunk = Vec::new();
	let mut remaining = width * 8;

	let mut toggle = slice % 2 == 0;
	while remaining > 0 {
		let run = remaining.min(48) as u16;
		if toggle {
			chunk.extend_from_slice(&(0x8000 | run).to_le_bytes());
			chunk.push((slice % 256) as u8);
		} else {
			chunk.extend_from_slice(&run.to_le_bytes());
			for i in 0..run {
				chunk.push((i % 256) as u8);
			}
		}
		remaining -= u32::from(run);
		toggle = !toggle;
	}

	let mut data = (chunk.len() as u32).to_le_bytes().to_vec();
	data.extend_from_slice(&chunk);
	data
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny image: 64x64
	pub const TINY: (u32, u32) = (64, 64);
	/// Small image: 256x256
	pub const SMALL: (u32, u32) = (256, 256);
	/// Full-screen game asset: 640x480
	pub const SCREEN: (u32, u32) = (640, 480);
	/// Large image: 1024x768
	pub const LARGE: (u32, u32) = (1024, 768);
}

#[cfg(test)]
mod tests {
	use super::*;
	use ftech_types::file::bp2;

	#[test]
	fn test_generated_bp2_decodes() {
		let data = generate_test_bp2(64, 64);
		let bitmap = bp2::load(std::io::Cursor::new(data)).unwrap();

		assert_eq!(bitmap.width(), 64);
		assert_eq!(bitmap.height(), 64);
		assert_eq!(bitmap.pixels().len(), 64 * 64);
	}

	#[test]
	fn test_height_rounded_to_slices() {
		let data = generate_test_bp2(16, 21);
		let bitmap = bp2::load(std::io::Cursor::new(data)).unwrap();
		assert_eq!(bitmap.height(), 16);
	}
}
