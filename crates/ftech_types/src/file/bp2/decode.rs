//! BP2 run-length decoder.

use std::io::{Read, Seek};

use crate::file::bitmap::{self, Bitmap, BitmapData, Color};
use crate::file::bmp::{BmpFileHeader, BmpInfoHeader};
use crate::file::error::{FileType, FtFileError};
use crate::file::stream::Stream;

use super::Header;

fn align4(value: usize) -> usize {
	(value + 3) & !3
}

/// Run state for one slice chunk.
///
/// A control word either starts a repeat run (bit 15 set: the next SRC_BPP
/// bytes repeat `ctrl & 0x7FFF` times) or a literal run (`ctrl` pixels read
/// straight from the chunk). Runs may span columns but never cross slices.
struct SliceRun<'a> {
	chunk: &'a [u8],
	pos: usize,
	remaining: u32,
	repeat: bool,
	value: [u8; 3],
	src_bpp: usize,
	slice: u32,
}

impl<'a> SliceRun<'a> {
	fn new(chunk: &'a [u8], src_bpp: usize, slice: u32) -> Self {
		Self {
			chunk,
			pos: 0,
			remaining: 0,
			repeat: false,
			value: [0; 3],
			src_bpp,
			slice,
		}
	}

	fn malformed(&self) -> FtFileError {
		FtFileError::MalformedSlice {
			file_type: FileType::Bp2,
			slice: self.slice,
		}
	}

	fn refill(&mut self) -> Result<(), FtFileError> {
		if self.chunk.len() - self.pos < 2 {
			return Err(self.malformed());
		}
		let ctrl = u16::from_le_bytes([self.chunk[self.pos], self.chunk[self.pos + 1]]);
		self.pos += 2;

		if ctrl & 0x8000 != 0 {
			if self.chunk.len() - self.pos < self.src_bpp {
				return Err(self.malformed());
			}
			for plane in 0..self.src_bpp {
				self.value[plane] = self.chunk[self.pos + plane];
			}
			self.pos += self.src_bpp;
			self.remaining = u32::from(ctrl & 0x7FFF);
			self.repeat = true;
		} else {
			self.remaining = u32::from(ctrl);
			self.repeat = false;
		}
		Ok(())
	}

	/// Emits the next pixel into `dst` (DST_BPP bytes), replicating source
	/// planes when the destination is wider than the source.
	fn next_pixel(&mut self, dst: &mut [u8]) -> Result<(), FtFileError> {
		while self.remaining == 0 {
			self.refill()?;
		}

		if self.repeat {
			for (plane, out) in dst.iter_mut().enumerate() {
				*out = self.value[plane % self.src_bpp];
			}
		} else {
			if self.chunk.len() - self.pos < self.src_bpp {
				return Err(self.malformed());
			}
			for (plane, out) in dst.iter_mut().enumerate() {
				*out = self.chunk[self.pos + plane % self.src_bpp];
			}
			self.pos += self.src_bpp;
		}

		self.remaining -= 1;
		Ok(())
	}
}

pub(super) fn load<R: Read + Seek>(reader: R) -> Result<super::File, FtFileError> {
	let mut stream = Stream::new(reader, FileType::Bp2);
	let header = Header::from_stream(&mut stream)?;

	let _file_header = BmpFileHeader::from_stream(&mut stream)?;
	let info = BmpInfoHeader::from_stream(&mut stream)?;

	let palette = if header.palette_len > 0 {
		if header.palette_len % 4 != 0 {
			return Err(FtFileError::MalformedPalette {
				file_type: FileType::Bp2,
				palette_len: header.palette_len,
			});
		}

		let raw = stream.read_vec(header.palette_len as usize)?;
		let colors = raw
			.chunks_exact(4)
			.map(|quad| Color::new(quad[2], quad[1], quad[0], 0xFF))
			.collect();
		Some(colors)
	} else {
		None
	};

	let width = info.width as usize;
	let height = info.height as usize;
	let src_bpp = header.encoding.src_bpp();
	let dst_bpp = header.encoding.dst_bpp();

	// Slice scratch rows are padded to a 4-byte pitch; the final raster is
	// tightly packed.
	let slice_pitch = align4(width * dst_bpp);
	let row_bytes = width * dst_bpp;

	let mut slice = vec![0u8; slice_pitch * 8];
	let mut pixels = vec![0u8; row_bytes * height];

	for i in 0..header.slice_count {
		let chunk_len = stream.read_u32_le()?;
		let chunk = stream.read_vec(chunk_len as usize)?;

		let mut run = SliceRun::new(&chunk, src_bpp, i);
		for x in 0..width {
			for y in 0..8 {
				let at = y * slice_pitch + x * dst_bpp;
				run.next_pixel(&mut slice[at..at + dst_bpp])?;
			}
		}

		for y in 0..8 {
			let row = i as usize * 8 + y;
			if row >= height {
				break;
			}
			let src = y * slice_pitch;
			pixels[row * row_bytes..(row + 1) * row_bytes]
				.copy_from_slice(&slice[src..src + row_bytes]);
		}
	}

	// Trailing rows are stored raw at the padded pitch, no RLE
	if height % 8 != 0 {
		let extra_rows = height % 8;
		let expected = (extra_rows * slice_pitch) as u32;
		if expected != header.extra_slice_bytes {
			return Err(FtFileError::MalformedTrailer {
				file_type: FileType::Bp2,
				expected,
				actual: header.extra_slice_bytes,
			});
		}

		let extra_bytes = stream.read_u32_le()?;
		if extra_bytes != header.extra_slice_bytes {
			return Err(FtFileError::MalformedTrailer {
				file_type: FileType::Bp2,
				expected: header.extra_slice_bytes,
				actual: extra_bytes,
			});
		}

		let raw = stream.read_vec(extra_bytes as usize)?;
		for y in 0..extra_rows {
			let row = height - extra_rows + y;
			let src = y * slice_pitch;
			pixels[row * row_bytes..(row + 1) * row_bytes]
				.copy_from_slice(&raw[src..src + row_bytes]);
		}
	}

	// On-disk order is bottom-up
	bitmap::flip_vertical(&mut pixels, row_bytes, height);

	let data = match header.encoding {
		super::Encoding::Index8 => BitmapData::Index8 {
			palette: palette.unwrap_or_default(),
			pixels,
		},
		super::Encoding::Bgr888 | super::Encoding::Gray8 => BitmapData::Bgr24 {
			pixels,
		},
	};

	Ok(super::File {
		header,
		bitmap: Bitmap::new(info.width, info.height, data),
	})
}
