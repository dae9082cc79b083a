//! TXT script decoders.
//!
//! Three script flavours share the `.txt` extension. The 1997 edition
//! prefixes a one-byte magic and a length, then XORs every payload byte
//! with 0xFF. The 2006 edition has no header and substitutes every byte
//! above 0x0F with `0x0E - b`. Both obfuscations cover CP932 text, which
//! is transcoded to UTF-8 after the byte transform. Plain UTF-8 files
//! pass through unchanged. [`super::guess_file_type`](super::guess::guess_file_type)
//! tells the three apart.

use std::io::{Read, Seek};

use crate::text;

use super::error::{FileType, FtFileError};
use super::stream::Stream;

/// Magic byte of 1997 scripts
const TXT_1997_MAGIC: u8 = 0x01;

/// Decodes a 1997 script: u8 magic, u32 payload length, XOR-0xFF payload.
pub fn decode_1997<R: Read + Seek>(reader: R) -> Result<String, FtFileError> {
	let mut stream = Stream::new(reader, FileType::Txt);

	let magic = stream.read_u8()?;
	if magic != TXT_1997_MAGIC {
		return Err(FtFileError::bad_magic(
			FileType::Txt,
			u32::from(TXT_1997_MAGIC),
			u32::from(magic),
		));
	}

	let length = stream.read_u32_le()?;
	let mut data = stream.read_vec(length as usize)?;
	for byte in &mut data {
		*byte ^= 0xFF;
	}

	Ok(text::cp932_to_utf8(&data))
}

/// Decodes a 2006 script.
///
/// When `length` is `None` the stream length is probed by seeking to the
/// end, and the payload is read from position zero. Bytes above 0x0F are
/// replaced with `0x0E - b` (wrapping); control bytes pass through.
pub fn decode_2006<R: Read + Seek>(reader: R, length: Option<usize>) -> Result<String, FtFileError> {
	let mut stream = Stream::new(reader, FileType::Txt);

	let length = match length {
		Some(length) => length,
		None => {
			let length = stream.seek_end()?;
			stream.seek(0)?;
			length as usize
		}
	};

	let mut data = stream.read_vec(length)?;
	for byte in &mut data {
		if *byte > 0x0F {
			*byte = 0x0Eu8.wrapping_sub(*byte);
		}
	}

	Ok(text::cp932_to_utf8(&data))
}

/// Passthrough for scripts already stored as UTF-8.
pub fn decode_utf8<R: Read + Seek>(mut reader: R) -> Result<String, FtFileError> {
	let mut data = Vec::new();
	reader.read_to_end(&mut data)?;

	String::from_utf8(data)
		.map_err(|_| FtFileError::invalid_file("script is not valid UTF-8"))
}
