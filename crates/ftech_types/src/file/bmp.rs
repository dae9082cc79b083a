//! Embedded Windows bitmap headers.
//!
//! Both BP2 and BP3 files carry a standard BMP file header and info header
//! between their own header and the pixel payload. The decoders consume both
//! and trust only the info header's width and height (BP2) or nothing at all
//! (BP3, which declares its dimensions itself).

use std::io::{Read, Seek};

use super::error::FtFileError;
use super::stream::Stream;

/// BMP file header (14 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpFileHeader {
	/// Signature, `BM` in well-formed files
	pub kind: [u8; 2],
	/// Declared file size in bytes
	pub size: u32,
	/// Reserved
	pub reserved_1: u16,
	/// Reserved
	pub reserved_2: u16,
	/// Offset of the pixel data from the start of the file
	pub off_bits: u32,
}

impl BmpFileHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = 14;

	/// Reads the header from a stream
	pub fn from_stream<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Self, FtFileError> {
		let mut kind = [0u8; 2];
		stream.read_exact(&mut kind)?;

		Ok(Self {
			kind,
			size: stream.read_u32_le()?,
			reserved_1: stream.read_u16_le()?,
			reserved_2: stream.read_u16_le()?,
			off_bits: stream.read_u32_le()?,
		})
	}
}

/// BMP info header (40 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpInfoHeader {
	/// Size of this header, 40 in well-formed files
	pub size: u32,
	/// Image width in pixels
	pub width: u32,
	/// Image height in pixels
	pub height: u32,
	/// Number of colour planes
	pub planes: u16,
	/// Bits per pixel
	pub bit_count: u16,
	/// Compression method
	pub compression: u32,
	/// Image data size in bytes
	pub size_image: u32,
	/// Horizontal resolution, pixels per metre
	pub x_pels_per_meter: u32,
	/// Vertical resolution, pixels per metre
	pub y_pels_per_meter: u32,
	/// Number of palette colours used
	pub clr_used: u32,
	/// Number of important palette colours
	pub clr_important: u32,
}

impl BmpInfoHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = 40;

	/// Reads the header from a stream
	pub fn from_stream<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Self, FtFileError> {
		Ok(Self {
			size: stream.read_u32_le()?,
			width: stream.read_u32_le()?,
			height: stream.read_u32_le()?,
			planes: stream.read_u16_le()?,
			bit_count: stream.read_u16_le()?,
			compression: stream.read_u32_le()?,
			size_image: stream.read_u32_le()?,
			x_pels_per_meter: stream.read_u32_le()?,
			y_pels_per_meter: stream.read_u32_le()?,
			clr_used: stream.read_u32_le()?,
			clr_important: stream.read_u32_le()?,
		})
	}
}
