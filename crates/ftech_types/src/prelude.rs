//! Prelude module for `ftech_types`.
//!
//! This module provides a convenient way to import commonly used types,
//! traits, and functions.
//!
//! # Examples
//!
//! ```no_run
//! use ftech_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let pack = PackFile::open("face1024.lb5").unwrap();
//! let background = Bp2File::open("BG01.BP2").unwrap();
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Bitmap artefacts
	Bitmap,
	BitmapData,

	// Decoded file types
	Bp2File,
	Bp3File,
	Color,

	// Classification
	FileKind,
	FileType,
	FtFileError,

	// Archive types
	PackEntry,
	PackFile,
	PackFormat,
	PixelFormat,

	guess_file_type,
};

// Re-export the helper modules for advanced usage
#[doc(inline)]
pub use crate::file;

#[doc(inline)]
pub use crate::path;

#[doc(inline)]
pub use crate::text;
