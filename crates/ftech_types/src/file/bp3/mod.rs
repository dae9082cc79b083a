//! BP3 (2006) bitmap format support.
//!
//! BP3 images are split into 8×8 tiles over dimensions padded up to
//! multiples of 8. Each tile carries a quantisation mode and a BGR base
//! colour; most modes store per-pixel offsets that are added to the base
//! component-wise, modulo 256. Tiles on the right and bottom edge store
//! only their visible pixels. The decoder produces a BGR24 raster cropped
//! to the declared dimensions, top-left origin.

mod decode;

#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::io::{Read, Seek};

use super::bitmap::Bitmap;
use super::error::{FileType, FtFileError};
use super::stream::Stream;

mod constants {
	/// Magic number for BP3 files
	pub const MAGIC: u32 = 0x8888_8888;

	/// Size of the BP3 header in bytes
	pub const HEADER_SIZE: usize = 16;
}

/// Per-tile quantisation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileMode {
	/// No payload; every pixel is the base colour
	Solid = 0,
	/// 8 bits per pixel: 3-3-2 offsets in blue, green, red order
	Bgr332 = 1,
	/// 8 bits per pixel: 2-3-3 offsets
	Bgr233 = 2,
	/// 8 bits per pixel: 3-2-3 offsets
	Bgr323 = 3,
	/// 4 bits per pixel: one grey nibble, low nibble first
	Gray4 = 4,
	/// 8 bits per pixel: grey value emitted verbatim
	Gray8 = 5,
	/// 16 bits per pixel: 5-5-5 offsets
	Bgr555 = 6,
	/// 24 bits per pixel: BGR bytes emitted verbatim
	Bgr888 = 7,
}

impl TileMode {
	fn from_u8(value: u8, tile: usize) -> Result<Self, FtFileError> {
		match value {
			0 => Ok(TileMode::Solid),
			1 => Ok(TileMode::Bgr332),
			2 => Ok(TileMode::Bgr233),
			3 => Ok(TileMode::Bgr323),
			4 => Ok(TileMode::Gray4),
			5 => Ok(TileMode::Gray8),
			6 => Ok(TileMode::Bgr555),
			7 => Ok(TileMode::Bgr888),
			_ => Err(FtFileError::UnknownTileMode {
				file_type: FileType::Bp3,
				mode: value,
				tile,
			}),
		}
	}

	/// Bits per stored pixel
	pub fn bits_per_pixel(self) -> usize {
		match self {
			TileMode::Solid => 0,
			TileMode::Bgr332 | TileMode::Bgr233 | TileMode::Bgr323 | TileMode::Gray8 => 8,
			TileMode::Gray4 => 4,
			TileMode::Bgr555 => 16,
			TileMode::Bgr888 => 24,
		}
	}
}

impl Display for TileMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TileMode::Solid => write!(f, "SOLID"),
			TileMode::Bgr332 => write!(f, "BGR332"),
			TileMode::Bgr233 => write!(f, "BGR233"),
			TileMode::Bgr323 => write!(f, "BGR323"),
			TileMode::Gray4 => write!(f, "GRAY4"),
			TileMode::Gray8 => write!(f, "GRAY8"),
			TileMode::Bgr555 => write!(f, "BGR555"),
			TileMode::Bgr888 => write!(f, "BGR888"),
		}
	}
}

/// BP3 file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	/// Magic number, 0x88888888 in valid files
	pub magic: u32,
	/// Image width in pixels
	pub width: u32,
	/// Image height in pixels
	pub height: u32,
	/// Declared decoded size; informational, not verified
	pub decompressed_length: u32,
}

impl Header {
	/// Size of the header in bytes
	pub const fn size() -> usize {
		constants::HEADER_SIZE
	}

	/// Reads and validates the header from a stream
	pub fn from_stream<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Self, FtFileError> {
		let magic = stream.read_u32_le()?;
		let width = stream.read_u32_le()?;
		let height = stream.read_u32_le()?;
		let decompressed_length = stream.read_u32_le()?;

		if magic != constants::MAGIC {
			return Err(FtFileError::bad_magic(FileType::Bp3, constants::MAGIC, magic));
		}

		Ok(Self {
			magic,
			width,
			height,
			decompressed_length,
		})
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "BP3 {{ {}x{}, decompressed_length: {} }}", self.width, self.height, self.decompressed_length)
	}
}

/// Representation of a decoded BP3 file
#[derive(Debug, Clone)]
pub struct File {
	header: Header,
	bitmap: Bitmap,
}

impl File {
	/// Returns a reference to the header
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns a reference to the decoded bitmap
	pub fn bitmap(&self) -> &Bitmap {
		&self.bitmap
	}

	/// Consumes the file, returning the decoded bitmap
	pub fn into_bitmap(self) -> Bitmap {
		self.bitmap
	}

	/// Opens and decodes a BP3 file from the given path
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, FtFileError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Decodes a BP3 file from a byte slice
	pub fn from_bytes(data: &[u8]) -> Result<Self, FtFileError> {
		Self::from_reader(std::io::Cursor::new(data))
	}

	/// Decodes a BP3 file from any reader
	pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, FtFileError> {
		decode::load(reader)
	}
}

/// Decodes a BP3 stream, returning only the bitmap artefact
pub fn load<R: Read + Seek>(reader: R) -> Result<Bitmap, FtFileError> {
	File::from_reader(reader).map(File::into_bitmap)
}
