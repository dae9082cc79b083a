//! BIN/LB5 archive support.
//!
//! Archives come as a pair of files: the *lump* (the archive path itself, a
//! contiguous concatenation of entry payloads) and a sidecar index with the
//! same stem and a lowercase `.idx` extension that carries the directory.
//! The 1997 edition uses `.bin` lumps with variable-length entry names; the
//! 2006 edition uses `.lb5` lumps with fixed 24-byte index records.
//!
//! Entry names are CP932 on disk and are transcoded to UTF-8 while the
//! directory is parsed. Directory order is preserved, and duplicate names
//! are legal; they are yielded as separate entries.

use std::fmt::Formatter;
use std::io::{Read, Seek};
use std::path::Path;

use crate::text;

use super::error::{FileType, FtFileError};
use super::stream::Stream;

/// Archive flavour, determined by the lump's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackFormat {
	/// 1997 `.bin` archive
	Bin,
	/// 2006 `.lb5` archive
	Lb5,
}

impl PackFormat {
	/// Returns the corresponding error file type
	pub fn file_type(self) -> FileType {
		match self {
			PackFormat::Bin => FileType::Bin,
			PackFormat::Lb5 => FileType::Lb5,
		}
	}

	/// Determines the format from a path's extension, case-insensitively
	pub fn from_path(path: &str) -> Option<Self> {
		let ext = crate::path::extension(path)?;
		if ext.eq_ignore_ascii_case("bin") {
			Some(PackFormat::Bin)
		} else if ext.eq_ignore_ascii_case("lb5") {
			Some(PackFormat::Lb5)
		} else {
			None
		}
	}
}

impl std::fmt::Display for PackFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PackFormat::Bin => write!(f, "BIN"),
			PackFormat::Lb5 => write!(f, "LB5"),
		}
	}
}

/// A single archive directory entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
	/// Entry name, transcoded from CP932
	pub name: String,
	/// Absolute offset into the lump body
	pub offset: u32,
	/// Payload length in bytes
	pub length: u32,
}

impl std::fmt::Display for Entry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Entry {{ name: '{}', offset: {}, length: {} }}", self.name, self.offset, self.length)
	}
}

/// An opened archive: parsed directory plus the lump reader.
///
/// The handle owns its lump reader for its whole lifetime; entry payloads
/// are read on demand with [`File::read_entry`]. Everything is released on
/// drop.
#[derive(Debug)]
pub struct File<R> {
	format: PackFormat,
	entries: Vec<Entry>,
	lump: R,
}

impl File<std::fs::File> {
	/// Opens an archive from a filesystem path.
	///
	/// The lump comes from `path`; the directory from the sidecar index with
	/// the same stem and a lowercase `.idx` extension. Fails with
	/// `InvalidFile` when the extension is neither `.bin` nor `.lb5` and
	/// with `SidecarMissing` when the index cannot be opened.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, FtFileError> {
		let path = path.as_ref();

		let format = PackFormat::from_path(&path.to_string_lossy()).ok_or_else(|| {
			FtFileError::invalid_file(format!("not a pack archive: {}", path.display()))
		})?;

		let lump = std::fs::File::open(path)?;

		let idx_path = path.with_extension("idx");
		let index = std::fs::File::open(&idx_path).map_err(|_| FtFileError::SidecarMissing {
			file_type: format.file_type(),
			path: idx_path.clone(),
		})?;

		Self::from_readers(lump, index, format)
	}
}

impl<R: Read + Seek> File<R> {
	/// Builds an archive handle from separate lump and index readers.
	///
	/// The whole directory is parsed up front; a truncated index fails the
	/// open and no partial directory is surfaced.
	pub fn from_readers<I: Read + Seek>(
		lump: R,
		index: I,
		format: PackFormat,
	) -> Result<Self, FtFileError> {
		let mut stream = Stream::new(index, format.file_type());
		let entries = match format {
			PackFormat::Bin => parse_bin_index(&mut stream)?,
			PackFormat::Lb5 => parse_lb5_index(&mut stream)?,
		};

		Ok(Self {
			format,
			entries,
			lump,
		})
	}

	/// Returns the archive flavour
	pub fn format(&self) -> PackFormat {
		self.format
	}

	/// Returns the directory in index order
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Returns the number of entries
	pub fn num_entries(&self) -> usize {
		self.entries.len()
	}

	/// Finds the first entry with the given name, ignoring ASCII case
	pub fn find_entry(&self, name: &str) -> Option<&Entry> {
		self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
	}

	/// Reads one entry's payload from the lump.
	///
	/// Seeks to the entry's offset and returns exactly `entry.length` bytes,
	/// or fails with `Truncated`.
	pub fn read_entry(&mut self, entry: &Entry) -> Result<Vec<u8>, FtFileError> {
		let mut stream = Stream::new(&mut self.lump, self.format.file_type());
		stream.seek(u64::from(entry.offset))?;
		stream.read_vec(entry.length as usize)
	}

	/// Consumes the handle, returning the lump reader
	pub fn into_inner(self) -> R {
		self.lump
	}
}

/// BIN index: u32 count, then per record u32 name length, that many CP932
/// name bytes (no terminator), u32 offset, u32 length.
fn parse_bin_index<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Vec<Entry>, FtFileError> {
	let count = stream.read_u32_le()?;

	let mut entries = Vec::with_capacity(count as usize);
	for _ in 0..count {
		let name_len = stream.read_u32_le()?;
		let name_jis = stream.read_vec(name_len as usize)?;
		let offset = stream.read_u32_le()?;
		let length = stream.read_u32_le()?;

		entries.push(Entry {
			name: text::cp932_to_utf8(&name_jis),
			offset,
			length,
		});
	}

	Ok(entries)
}

/// LB5 index: u32 count, then fixed 24-byte records of u32 offset, u32
/// length, one padding byte, and 15 CP932 name bytes (NUL-padded).
fn parse_lb5_index<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Vec<Entry>, FtFileError> {
	let count = stream.read_u32_le()?;

	let mut entries = Vec::with_capacity(count as usize);
	for _ in 0..count {
		let offset = stream.read_u32_le()?;
		let length = stream.read_u32_le()?;
		stream.read_u8()?;

		let mut name_jis = [0u8; 15];
		stream.read_exact(&mut name_jis)?;

		entries.push(Entry {
			name: text::cp932_to_utf8(&name_jis),
			offset,
			length,
		});
	}

	Ok(entries)
}
