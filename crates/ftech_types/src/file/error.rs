//! Error types for file format parsing.
//!
//! This module provides a unified error handling system using [`FtFileError`]
//! for all file formats supported by ftech-rs.
//!
//! # Examples
//!
//! ```no_run
//! use ftech_types::file::{FtFileError, FileType, bp2};
//!
//! fn load_background(path: &str) -> Result<bp2::File, FtFileError> {
//! 	bp2::File::open(path)
//! }
//!
//! fn handle_error(err: FtFileError) {
//! 	match err.file_type() {
//! 		Some(FileType::Bp2) => println!("BP2 error: {}", err),
//! 		Some(FileType::Bin) => println!("BIN archive error: {}", err),
//! 		_ => println!("File error: {}", err),
//! 	}
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all file format operations
#[derive(Debug, Error)]
pub enum FtFileError {
	/// A read did not yield the requested bytes
	#[error("{file_type} error: Truncated read (wanted {expected} more bytes)")]
	Truncated {
		/// File type that encountered the error
		file_type: FileType,
		/// Number of bytes requested
		expected: usize,
	},

	/// Header magic mismatch
	#[error("{file_type} error: Bad magic (expected {expected:#010X}, got {actual:#010X})")]
	BadMagic {
		/// File type that encountered the error
		file_type: FileType,
		/// Expected magic value
		expected: u32,
		/// Actual magic value
		actual: u32,
	},

	/// BP2 encoding field not in {1, 2, 3}
	#[error("{file_type} error: Unknown encoding method {encoding}")]
	UnknownEncoding {
		/// File type that encountered the error
		file_type: FileType,
		/// Encoding value from the header
		encoding: u32,
	},

	/// BP3 tile mode not in 0..=7
	#[error("{file_type} error: Unknown tile mode {mode} (tile {tile})")]
	UnknownTileMode {
		/// File type that encountered the error
		file_type: FileType,
		/// Mode value from the tile mode table
		mode: u8,
		/// Index of the offending tile
		tile: usize,
	},

	/// BP2 palette length not divisible by 4
	#[error("{file_type} error: Malformed palette ({palette_len} bytes is not a multiple of 4)")]
	MalformedPalette {
		/// File type that encountered the error
		file_type: FileType,
		/// Palette length from the header
		palette_len: u32,
	},

	/// BP2 chunk ran out of bytes mid-run or mid-literal
	#[error("{file_type} error: Malformed slice {slice}")]
	MalformedSlice {
		/// File type that encountered the error
		file_type: FileType,
		/// Index of the offending slice
		slice: u32,
	},

	/// BP2 partial-slice byte count mismatch
	#[error("{file_type} error: Malformed trailing data (expected {expected} bytes, got {actual})")]
	MalformedTrailer {
		/// File type that encountered the error
		file_type: FileType,
		/// Byte count the image geometry requires
		expected: u32,
		/// Byte count found on disk
		actual: u32,
	},

	/// Archive opened but the sidecar `.idx` is absent
	#[error("{file_type} error: Sidecar index not found: {path}")]
	SidecarMissing {
		/// File type that encountered the error
		file_type: FileType,
		/// Path of the missing index file
		path: PathBuf,
	},

	/// File not recognised by the archive opener or the dispatcher
	#[error("Invalid file: {message}")]
	InvalidFile {
		/// Explanation of what was expected
		message: String,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl FtFileError {
	/// Returns the file type associated with this error
	pub fn file_type(&self) -> Option<FileType> {
		match self {
			Self::Truncated {
				file_type, ..
			}
			| Self::BadMagic {
				file_type, ..
			}
			| Self::UnknownEncoding {
				file_type, ..
			}
			| Self::UnknownTileMode {
				file_type, ..
			}
			| Self::MalformedPalette {
				file_type, ..
			}
			| Self::MalformedSlice {
				file_type, ..
			}
			| Self::MalformedTrailer {
				file_type, ..
			}
			| Self::SidecarMissing {
				file_type, ..
			} => Some(*file_type),
			_ => None,
		}
	}

	/// Returns true if this is an I/O error
	pub fn is_io_error(&self) -> bool {
		matches!(self, Self::Io(_))
	}

	/// Returns true if this is a truncated read
	pub fn is_truncated(&self) -> bool {
		matches!(self, Self::Truncated { .. })
	}

	/// Returns true if this is a magic mismatch
	pub fn is_bad_magic(&self) -> bool {
		matches!(self, Self::BadMagic { .. })
	}

	/// Returns true if this is a missing sidecar index
	pub fn is_sidecar_missing(&self) -> bool {
		matches!(self, Self::SidecarMissing { .. })
	}

	/// Create a truncated read error
	pub fn truncated(file_type: FileType, expected: usize) -> Self {
		Self::Truncated {
			file_type,
			expected,
		}
	}

	/// Create a bad magic error
	pub fn bad_magic(file_type: FileType, expected: u32, actual: u32) -> Self {
		Self::BadMagic {
			file_type,
			expected,
			actual,
		}
	}

	/// Create an invalid file error
	pub fn invalid_file(message: impl Into<String>) -> Self {
		Self::InvalidFile {
			message: message.into(),
		}
	}
}

/// File type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// BIN archive file (1997)
	Bin,
	/// LB5 archive file (2006)
	Lb5,
	/// BP2 bitmap file (1997)
	Bp2,
	/// BP3 bitmap file (2006)
	Bp3,
	/// Standard Windows bitmap
	Bmp,
	/// Script text file
	Txt,
}

impl FileType {
	/// Returns the typical file extension for this file type
	pub fn extension(&self) -> &'static str {
		match self {
			FileType::Bin => "bin",
			FileType::Lb5 => "lb5",
			FileType::Bp2 => "bp2",
			FileType::Bp3 => "bmp",
			FileType::Bmp => "bmp",
			FileType::Txt => "txt",
		}
	}

	/// Returns a human-readable description of this file type
	pub fn description(&self) -> &'static str {
		match self {
			FileType::Bin => "Archive file (1997)",
			FileType::Lb5 => "Archive file (2006)",
			FileType::Bp2 => "Run-length encoded bitmap (1997)",
			FileType::Bp3 => "Tiled bitmap (2006)",
			FileType::Bmp => "Windows bitmap",
			FileType::Txt => "Script text",
		}
	}
}

impl std::fmt::Display for FileType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FileType::Bin => write!(f, "BIN"),
			FileType::Lb5 => write!(f, "LB5"),
			FileType::Bp2 => write!(f, "BP2"),
			FileType::Bp3 => write!(f, "BP3"),
			FileType::Bmp => write!(f, "BMP"),
			FileType::Txt => write!(f, "TXT"),
		}
	}
}
