//! Bounds-checked little-endian reader used by all format parsers.
//!
//! Every on-disk structure in both game editions stores multi-byte integers
//! in little-endian order, and every parser needs the same failure contract:
//! a read that would cross end-of-stream reports [`FtFileError::Truncated`]
//! tagged with the format being parsed. [`Stream`] wraps any `Read + Seek`
//! source with exactly that contract plus `tell` for rewinding after
//! speculative inspection.

use std::io::{self, Read, Seek, SeekFrom};

use super::error::{FileType, FtFileError};

/// Little-endian cursor over a `Read + Seek` source
#[derive(Debug)]
pub struct Stream<R> {
	reader: R,
	file_type: FileType,
}

impl<'a> Stream<io::Cursor<&'a [u8]>> {
	/// Creates a stream over an in-memory byte slice
	pub fn from_bytes(data: &'a [u8], file_type: FileType) -> Self {
		Self::new(io::Cursor::new(data), file_type)
	}
}

impl<R: Read + Seek> Stream<R> {
	/// Creates a stream tagged with the file type being parsed
	pub fn new(reader: R, file_type: FileType) -> Self {
		Self {
			reader,
			file_type,
		}
	}

	/// Returns the file type this stream is tagged with
	pub fn file_type(&self) -> FileType {
		self.file_type
	}

	/// Reads a single byte
	pub fn read_u8(&mut self) -> Result<u8, FtFileError> {
		let mut buffer = [0u8; 1];
		self.read_exact(&mut buffer)?;
		Ok(buffer[0])
	}

	/// Reads a little-endian u16
	pub fn read_u16_le(&mut self) -> Result<u16, FtFileError> {
		let mut buffer = [0u8; 2];
		self.read_exact(&mut buffer)?;
		Ok(u16::from_le_bytes(buffer))
	}

	/// Reads a little-endian u32
	pub fn read_u32_le(&mut self) -> Result<u32, FtFileError> {
		let mut buffer = [0u8; 4];
		self.read_exact(&mut buffer)?;
		Ok(u32::from_le_bytes(buffer))
	}

	/// Fills `buffer` completely or fails with `Truncated`
	pub fn read_exact(&mut self, buffer: &mut [u8]) -> Result<(), FtFileError> {
		self.reader.read_exact(buffer).map_err(|err| self.read_error(buffer.len(), err))
	}

	/// Reads exactly `len` bytes into a new vector
	pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, FtFileError> {
		let mut buffer = vec![0u8; len];
		self.read_exact(&mut buffer)?;
		Ok(buffer)
	}

	/// Seeks to an absolute position from the start of the stream
	pub fn seek(&mut self, position: u64) -> Result<u64, FtFileError> {
		Ok(self.reader.seek(SeekFrom::Start(position))?)
	}

	/// Seeks relative to the current position
	pub fn seek_relative(&mut self, delta: i64) -> Result<u64, FtFileError> {
		Ok(self.reader.seek(SeekFrom::Current(delta))?)
	}

	/// Seeks to the end of the stream, returning its length
	pub fn seek_end(&mut self) -> Result<u64, FtFileError> {
		Ok(self.reader.seek(SeekFrom::End(0))?)
	}

	/// Returns the current position
	pub fn tell(&mut self) -> Result<u64, FtFileError> {
		Ok(self.reader.stream_position()?)
	}

	/// Consumes the stream, returning the underlying reader
	pub fn into_inner(self) -> R {
		self.reader
	}

	fn read_error(&self, expected: usize, err: io::Error) -> FtFileError {
		if err.kind() == io::ErrorKind::UnexpectedEof {
			FtFileError::truncated(self.file_type, expected)
		} else {
			FtFileError::Io(err)
		}
	}
}
