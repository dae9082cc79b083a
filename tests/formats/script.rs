//! Script tests: the three TXT variants and their classification.

use std::io::Cursor;

use ftech_rs::file::txt;
use ftech_rs::text;
use ftech_rs::{FileKind, guess_file_type};

/// Builds a 1997 script stream from plain text.
fn encode_txt_1997(body: &str) -> Vec<u8> {
	let jis = text::utf8_to_cp932(body);
	let mut data = vec![0x01];
	data.extend_from_slice(&(jis.len() as u32).to_le_bytes());
	data.extend(jis.iter().map(|b| b ^ 0xFF));
	data
}

#[test]
fn test_txt_1997_known_bytes() {
	let data = [0x01, 0x05, 0x00, 0x00, 0x00, 0x9E, 0x9D, 0x9C, 0x9B, 0x9A];
	assert_eq!(txt::decode_1997(Cursor::new(data)).unwrap(), "abcde");
}

#[test]
fn test_txt_1997_round_trip() {
	for body in ["abcde", "シンジとアスカ", "mixed 日本語 text\n"] {
		let encoded = encode_txt_1997(body);
		let decoded = txt::decode_1997(Cursor::new(encoded)).unwrap();
		assert_eq!(decoded, body);

		// The decoded text transcodes back to the original CP932 bytes
		assert_eq!(text::utf8_to_cp932(&decoded), text::utf8_to_cp932(body));
	}
}

#[test]
fn test_txt_2006_substitution() {
	// 0x0E - b for bytes above 0x0F, pass-through otherwise
	let data = [0xAD, 0xAC, 0xAB, 0x0A, 0xAD];
	assert_eq!(txt::decode_2006(Cursor::new(data), None).unwrap(), "abc\na");
}

#[test]
fn test_classification_drives_decoding() {
	let data_1997 = encode_txt_1997("テスト");
	assert_eq!(guess_file_type("GAME01.TXT", &data_1997), FileKind::Txt1997);

	let plain = "plain modern text".as_bytes();
	assert_eq!(guess_file_type("readme.txt", plain), FileKind::TxtUtf8);
	assert_eq!(txt::decode_utf8(Cursor::new(plain.to_vec())).unwrap(), "plain modern text");

	// CP932 text fed through the 2006 obfuscation is not valid UTF-8
	let obfuscated: Vec<u8> =
		text::utf8_to_cp932("日本語").iter().map(|&b| 0x0Eu8.wrapping_sub(b)).collect();
	assert_eq!(guess_file_type("SCRIPT.TXT", &obfuscated), FileKind::Txt2006);
	assert_eq!(txt::decode_2006(Cursor::new(obfuscated), None).unwrap(), "日本語");
}
