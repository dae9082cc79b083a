//! BP2 (1997) bitmap format support.
//!
//! BP2 images are run-length encoded in vertical strips 8 rows tall
//! ("slices"). The file starts with a 24-byte BP2 header, carries an
//! embedded BMP file/info header pair (only width and height are used),
//! an optional BGR0 palette, then one length-prefixed chunk per slice and,
//! when the height is not a multiple of 8, a raw trailing partial slice.

mod decode;


use std::fmt::Display;
use std::io::{Read, Seek};

use super::bitmap::Bitmap;
use super::error::{FileType, FtFileError};
use super::stream::Stream;

mod constants {
	/// Magic number for BP2 files
	pub const MAGIC: u32 = 999;

	/// Size of the BP2 header in bytes
	pub const HEADER_SIZE: usize = 24;
}

/// Pixel encodings used in BP2 files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Encoding {
	/// One palette index per pixel
	Index8 = 1,
	/// Packed blue, green, red bytes per pixel
	Bgr888 = 2,
	/// One grey value per pixel, replicated to BGR on decode
	Gray8 = 3,
}

impl Encoding {
	fn from_u32(value: u32) -> Result<Self, FtFileError> {
		match value {
			1 => Ok(Encoding::Index8),
			2 => Ok(Encoding::Bgr888),
			3 => Ok(Encoding::Gray8),
			_ => Err(FtFileError::UnknownEncoding {
				file_type: FileType::Bp2,
				encoding: value,
			}),
		}
	}

	/// Bytes per pixel in the encoded stream
	pub fn src_bpp(self) -> usize {
		match self {
			Encoding::Index8 => 1,
			Encoding::Bgr888 => 3,
			Encoding::Gray8 => 1,
		}
	}

	/// Bytes per pixel in the decoded raster
	pub fn dst_bpp(self) -> usize {
		match self {
			Encoding::Index8 => 1,
			Encoding::Bgr888 => 3,
			Encoding::Gray8 => 3,
		}
	}
}

impl Display for Encoding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Encoding::Index8 => write!(f, "INDEX8"),
			Encoding::Bgr888 => write!(f, "BGR888"),
			Encoding::Gray8 => write!(f, "GRAY8"),
		}
	}
}

/// BP2 file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	/// Magic number, 999 in valid files
	pub magic: u32,
	/// Pixel encoding
	pub encoding: Encoding,
	/// Palette length in bytes, zero when no palette is present
	pub palette_len: u32,
	/// Reserved field, not validated
	pub reserved: u32,
	/// Number of full 8-row slices
	pub slice_count: u32,
	/// Byte count of the raw trailing partial slice, zero when height is a
	/// multiple of 8
	pub extra_slice_bytes: u32,
}

impl Header {
	/// Size of the header in bytes
	pub const fn size() -> usize {
		constants::HEADER_SIZE
	}

	/// Reads and validates the header from a stream
	pub fn from_stream<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Self, FtFileError> {
		let magic = stream.read_u32_le()?;
		let encoding = stream.read_u32_le()?;
		let palette_len = stream.read_u32_le()?;
		let reserved = stream.read_u32_le()?;
		let slice_count = stream.read_u32_le()?;
		let extra_slice_bytes = stream.read_u32_le()?;

		if magic != constants::MAGIC {
			return Err(FtFileError::bad_magic(FileType::Bp2, constants::MAGIC, magic));
		}

		Ok(Self {
			magic,
			encoding: Encoding::from_u32(encoding)?,
			palette_len,
			reserved,
			slice_count,
			extra_slice_bytes,
		})
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"BP2 {{ encoding: {}, palette_len: {}, slices: {} (+{} trailing bytes) }}",
			self.encoding, self.palette_len, self.slice_count, self.extra_slice_bytes
		)
	}
}

/// Representation of a decoded BP2 file
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

	/// Opens and decodes a BP2 file from the given path
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, FtFileError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Decodes a BP2 file from a byte slice
	pub fn from_bytes(data: &[u8]) -> Result<Self, FtFileError> {
		Self::from_reader(std::io::Cursor::new(data))
	}

	/// Decodes a BP2 file from any reader
	pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, FtFileError> {
		decode::load(reader)
	}
}

/// Decodes a BP2 stream, returning only the bitmap artefact
pub fn load<R: Read + Seek>(reader: R) -> Result<Bitmap, FtFileError> {
	File::from_reader(reader).map(File::into_bitmap)
}
