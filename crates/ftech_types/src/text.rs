//! Text encoding helpers.
//!
//! Both game editions store Japanese text as CP932 (the Microsoft variant of
//! Shift-JIS): archive entry names and the payloads of the obfuscated TXT
//! scripts. Everything the library returns to callers is UTF-8.

use encoding_rs::SHIFT_JIS;

/// Transcodes a CP932 byte sequence to a UTF-8 string.
///
/// The input is treated as NUL-terminated: decoding stops at the first zero
/// byte (archive names are NUL-padded, and decoded scripts carry the
/// original's terminator). Unmappable sequences are replaced with U+FFFD, so
/// the function never fails.
pub fn cp932_to_utf8(bytes: &[u8]) -> String {
	let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
	let (decoded, _encoding, _had_errors) = SHIFT_JIS.decode(&bytes[..end]);
	decoded.into_owned()
}

/// Encodes a UTF-8 string as CP932 bytes (no terminator).
///
/// Characters outside CP932 take the encoder's numeric-reference fallback.
pub fn utf8_to_cp932(text: &str) -> Vec<u8> {
	let (encoded, _encoding, _had_errors) = SHIFT_JIS.encode(text);
	encoded.into_owned()
}

/// Returns true iff the whole span is valid UTF-8 per RFC 3629.
///
/// Rejects overlong encodings, surrogates, code points above U+10FFFF, and
/// truncated multi-byte tails. Used to disambiguate the three TXT variants.
pub fn is_valid_utf8(data: &[u8]) -> bool {
	std::str::from_utf8(data).is_ok()
}
