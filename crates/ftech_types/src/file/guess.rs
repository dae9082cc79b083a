//! Content classification.
//!
//! Given a path and the file's leading bytes, [`guess_file_type`] decides
//! which decoder applies. The extension picks the family; for `.bmp` and
//! `.txt` the content disambiguates, since the 2006 edition reuses both
//! extensions for its own formats.

use crate::path;
use crate::text;

/// Classified file kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
	/// Not recognised
	Unknown,
	/// BIN archive (1997)
	Bin,
	/// LB5 archive (2006)
	Lb5,
	/// BP2 bitmap (1997)
	Bp2,
	/// BP3 bitmap (2006)
	Bp3,
	/// Standard Windows bitmap
	Bmp,
	/// Obfuscated script (1997)
	Txt1997,
	/// Obfuscated script (2006)
	Txt2006,
	/// Plain UTF-8 script
	TxtUtf8,
}

impl FileKind {
	/// Returns true for the archive kinds
	pub fn is_archive(self) -> bool {
		matches!(self, FileKind::Bin | FileKind::Lb5)
	}
}

impl std::fmt::Display for FileKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FileKind::Unknown => write!(f, "unknown"),
			FileKind::Bin => write!(f, "BIN archive"),
			FileKind::Lb5 => write!(f, "LB5 archive"),
			FileKind::Bp2 => write!(f, "BP2 bitmap"),
			FileKind::Bp3 => write!(f, "BP3 bitmap"),
			FileKind::Bmp => write!(f, "BMP bitmap"),
			FileKind::Txt1997 => write!(f, "TXT script (1997)"),
			FileKind::Txt2006 => write!(f, "TXT script (2006)"),
			FileKind::TxtUtf8 => write!(f, "TXT script (UTF-8)"),
		}
	}
}

/// Classifies a file from its path and content.
///
/// `data` should be the whole file where available — the `.txt`
/// disambiguation validates the entire span — and must carry at least the
/// first four bytes for `.bmp` probing to work.
pub fn guess_file_type(file_path: &str, data: &[u8]) -> FileKind {
	let Some(ext) = path::extension(file_path) else {
		return FileKind::Unknown;
	};

	if ext.eq_ignore_ascii_case("bin") {
		return FileKind::Bin;
	}
	if ext.eq_ignore_ascii_case("lb5") {
		return FileKind::Lb5;
	}
	if ext.eq_ignore_ascii_case("bp2") {
		return FileKind::Bp2;
	}

	if ext.eq_ignore_ascii_case("bmp") {
		if data.len() >= 4 && data[..4] == [0x88, 0x88, 0x88, 0x88] {
			return FileKind::Bp3;
		}
		if data.len() >= 2 && data[..2] == *b"BM" {
			return FileKind::Bmp;
		}
		return FileKind::Unknown;
	}

	if ext.eq_ignore_ascii_case("txt") {
		// Three formats share this extension. The 1997 edition has a
		// one-byte magic; beyond that the whole file has to be scanned.
		if data.first() == Some(&0x01) {
			return FileKind::Txt1997;
		}
		return if text::is_valid_utf8(data) { FileKind::TxtUtf8 } else { FileKind::Txt2006 };
	}

	FileKind::Unknown
}
