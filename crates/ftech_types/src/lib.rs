//! This crate provides core data types and file format support for the `ftech-rs` project.
//!
//! # File Formats
//!
//! - **BIN / LB5**: archive lumps with a sidecar `.idx` directory (1997 / 2006 editions)
//! - **BP2**: run-length encoded bitmaps decoded in 8-row slices (1997)
//! - **BP3**: 8×8-tiled bitmaps with per-tile quantisation modes (2006)
//! - **TXT**: obfuscated CP932 scripts (both editions) decoded to UTF-8
//!
//! # Examples
//!
//! ```rust
//! use ftech_types::file::{FileKind, guess_file_type};
//!
//! // The 1997 scripts announce themselves with a one-byte magic
//! let kind = guess_file_type("exec/GAME01.TXT", &[0x01, 0x10, 0x00, 0x00]);
//! assert_eq!(kind, FileKind::Txt1997);
//! ```

pub mod file;
pub mod path;
pub mod prelude;
pub mod text;

// Re-export commonly used file types at crate root for convenience
pub use file::{
	Bitmap, BitmapData, Bp2File, Bp3File, Color, FileKind, FileType, FtFileError, PackEntry,
	PackFile, PackFormat, PixelFormat, guess_file_type,
};
