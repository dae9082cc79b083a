//! BP3 tile decoder.

use std::io::{Read, Seek};

use crate::file::bitmap::{self, Bitmap, BitmapData};
use crate::file::bmp::{BmpFileHeader, BmpInfoHeader};
use crate::file::error::{FileType, FtFileError};
use crate::file::stream::Stream;

use super::{Header, TileMode};

/// Tile scratch: up to 24 bpp × 8 rows, one row per `bpp` bytes
const TILE_BUF_SIZE: usize = 192;

fn align8(value: usize) -> usize {
	(value + 7) & !7
}

pub(super) fn load<R: Read + Seek>(reader: R) -> Result<super::File, FtFileError> {
	let mut stream = Stream::new(reader, FileType::Bp3);
	let header = Header::from_stream(&mut stream)?;

	let _file_header = BmpFileHeader::from_stream(&mut stream)?;
	let _info_header = BmpInfoHeader::from_stream(&mut stream)?;

	let width = header.width as usize;
	let height = header.height as usize;
	let padded_w = align8(width);
	let padded_h = align8(height);
	let num_tiles = (padded_w * padded_h) / 64;
	let tiles_per_row = padded_w / 8;
	let grid_row_bytes = padded_w * 3;

	let mode_tab = stream.read_vec(num_tiles)?;
	let param_tab = stream.read_vec(num_tiles * 3)?;

	// Full padded grid, BGR24
	let mut grid = vec![0u8; grid_row_bytes * padded_h];
	let mut tile_buf = [0u8; TILE_BUF_SIZE];

	for i in 0..num_tiles {
		let mode = TileMode::from_u8(mode_tab[i], i)?;
		let bpp = mode.bits_per_pixel();

		// Visible extent of this tile (right/bottom edge tiles may be partial)
		let mut chunk_w = 8;
		if (i % tiles_per_row) * 8 + 8 >= width {
			chunk_w = width + 8 - padded_w;
		}
		let mut chunk_h = 8;
		if (i / tiles_per_row) * 8 + 8 >= height {
			chunk_h = height + 8 - padded_h;
		}

		tile_buf.fill(0);

		// Stage the stored rows at `bpp` bytes per row, then put the stream
		// exactly past the stored total, which has no per-row padding.
		if bpp > 0 {
			let start = stream.tell()?;
			let stored_row_bytes = (bpp * chunk_w) / 8;

			let mut dst = 0;
			for _ in 0..chunk_h {
				if stored_row_bytes > 0 {
					stream.read_exact(&mut tile_buf[dst..dst + stored_row_bytes])?;
				}
				dst += bpp;
			}

			let stored_total = (bpp * chunk_w * chunk_h) / 8;
			stream.seek(start + stored_total as u64)?;
		}

		let tile_row_base = grid_row_bytes * 8 * (i / tiles_per_row);
		let tile_col_base = 24 * (i % tiles_per_row);
		let src_step = bpp / 8;

		let base_b = param_tab[3 * i];
		let base_g = param_tab[3 * i + 1];
		let base_r = param_tab[3 * i + 2];

		let mut src_row = 0;
		for ty in 0..8 {
			let mut dst_off = tile_col_base + tile_row_base + ty * grid_row_bytes;
			let mut src_off = src_row;

			for tx in 0..8 {
				let out = &mut grid[dst_off..dst_off + 3];
				match mode {
					TileMode::Solid => {
						out[0] = base_b;
						out[1] = base_g;
						out[2] = base_r;
					}
					TileMode::Bgr332 => {
						let p = tile_buf[src_off];
						out[0] = (p & 7).wrapping_add(base_b);
						out[1] = ((p >> 3) & 7).wrapping_add(base_g);
						out[2] = ((p >> 6) & 3).wrapping_add(base_r);
					}
					TileMode::Bgr233 => {
						let p = tile_buf[src_off];
						out[0] = (p & 3).wrapping_add(base_b);
						out[1] = ((p >> 2) & 7).wrapping_add(base_g);
						out[2] = ((p >> 5) & 7).wrapping_add(base_r);
					}
					TileMode::Bgr323 => {
						let p = tile_buf[src_off];
						out[0] = (p & 7).wrapping_add(base_b);
						out[1] = ((p >> 3) & 3).wrapping_add(base_g);
						out[2] = ((p >> 5) & 7).wrapping_add(base_r);
					}
					TileMode::Gray4 => {
						let p = tile_buf[src_off];
						let nib = if tx & 1 == 1 { (p >> 4) & 0x0F } else { p & 0x0F };
						out[0] = nib.wrapping_add(base_b);
						out[1] = nib.wrapping_add(base_g);
						out[2] = nib.wrapping_add(base_r);
					}
					TileMode::Gray8 => {
						let p = tile_buf[src_off];
						out[0] = p;
						out[1] = p;
						out[2] = p;
					}
					TileMode::Bgr555 => {
						let p0 = tile_buf[src_off];
						let p1 = tile_buf[src_off + 1];
						out[0] = (p0 & 0x1F).wrapping_add(base_b);
						out[1] = ((p0 >> 5) + 8 * (p1 & 3)).wrapping_add(base_g);
						out[2] = ((p1 & 0x7C) >> 2).wrapping_add(base_r);
					}
					TileMode::Bgr888 => {
						out.copy_from_slice(&tile_buf[src_off..src_off + 3]);
					}
				}

				// GRAY4 packs two pixels per byte, low nibble first
				if mode == TileMode::Gray4 {
					if tx & 1 == 1 {
						src_off += 1;
					}
				} else {
					src_off += src_step;
				}

				dst_off += 3;
			}

			src_row += bpp;
		}
	}

	// Crop the padded grid to the declared dimensions; on-disk order is
	// bottom-up
	let row_bytes = width * 3;
	let mut pixels = vec![0u8; row_bytes * height];
	for y in 0..height {
		let src = y * grid_row_bytes;
		pixels[y * row_bytes..(y + 1) * row_bytes].copy_from_slice(&grid[src..src + row_bytes]);
	}
	bitmap::flip_vertical(&mut pixels, row_bytes, height);

	Ok(super::File {
		header,
		bitmap: Bitmap::new(
			header.width,
			header.height,
			BitmapData::Bgr24 {
				pixels,
			},
		),
	})
}
