//! Command-line converter for Girlfriend of Steel game files.
//!
//! # Supported conversions
//!
//! - `.bin` (1997): list, unpack
//! - `.lb5` (2006): list, unpack
//! - `.bp2` (1997): decode to a standard image
//! - `.bmp` (2006): decode BP3 to a standard image
//! - `.txt` (1997/2006): decode to UTF-8 text
//!
//! # Usage
//!
//! ```bash
//! # Unpack all files from event2048.lb5 to the current directory
//! ftconv event2048.lb5
//!
//! # Unpack samisi.wav from music.bin
//! ftconv "music.bin[samisi.wav]"
//!
//! # Unpack everything starting with ASUKA from face1024.lb5 to asuka_faces/
//! ftconv "face1024.lb5[ASUKA.*]" asuka_faces/
//!
//! # Decode a background image
//! ftconv grp/BG01.BP2 bg01.bmp
//! ```

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use ftech_rs::file::{FileKind, bp2, bp3, guess_file_type, txt};
use ftech_rs::{Bitmap, PackFile, PackFormat, path as ftpath};
use image::RgbImage;
use log::{info, warn};

#[derive(Parser)]
#[command(name = "ftconv")]
#[command(version)]
#[command(about = "Unpack and convert Girlfriend of Steel (1997/2006) game files")]
struct Cli {
	/// List archive contents without unpacking
	#[arg(long)]
	ls: bool,

	/// Don't convert inner formats when unpacking
	#[arg(long)]
	raw: bool,

	/// Overwrite existing files
	#[arg(short = 'y', long)]
	yes: bool,

	/// Input file; archives accept a wildcard subscript, e.g. `face1024.lb5[ASUKA.*]`
	input: String,

	/// Output file for conversions, output directory for unpacking (default `.`)
	output: Option<String>,
}

/// Splits a trailing `[pattern]` subscript off an input argument.
fn split_subscript(input: &str) -> (&str, Option<&str>) {
	if let (Some(open), Some(close)) = (input.rfind('['), input.rfind(']')) {
		if close > open {
			return (&input[..open], Some(&input[open + 1..close]));
		}
	}
	(input, None)
}

/// Checks the overwrite policy before writing `path`.
fn may_write(path: &Path, overwrite: bool) -> bool {
	if path.exists() && !overwrite {
		warn!("{} exists, skipping (use --yes to overwrite)", path.display());
		return false;
	}
	true
}

fn save_image(bitmap: &Bitmap, path: &Path) -> Result<()> {
	let image: RgbImage = RgbImage::from_raw(bitmap.width(), bitmap.height(), bitmap.to_rgb8())
		.context("decoded raster does not match its declared dimensions")?;
	image.save(path).with_context(|| format!("cannot write {}", path.display()))?;
	Ok(())
}

fn list_archive(path: &str, subscript: Option<&str>) -> Result<()> {
	let pack = PackFile::open(path).with_context(|| format!("cannot open {}", path))?;
	for entry in pack.entries() {
		if let Some(pattern) = subscript {
			if !ftpath::wildcard_match(pattern, &entry.name) {
				continue;
			}
		}
		println!("{}", entry.name);
	}
	Ok(())
}

/// Converts one unpacked entry when its format is recognised; otherwise the
/// raw payload is written unchanged.
fn write_entry(name: &str, data: &[u8], dst_dir: &Path, raw: bool, overwrite: bool) -> Result<()> {
	if let Some(parent) = dst_dir.join(name).parent() {
		fs::create_dir_all(parent)?;
	}

	let kind = if raw || data.len() < 4 { FileKind::Unknown } else { guess_file_type(name, data) };
	match kind {
		FileKind::Bp2 => {
			let dst = dst_dir.join(name).with_extension("bmp");
			if may_write(&dst, overwrite) {
				save_image(&bp2::load(Cursor::new(data))?, &dst)?;
			}
		}
		FileKind::Bp3 => {
			let dst = dst_dir.join(name).with_extension("bmp");
			if may_write(&dst, overwrite) {
				save_image(&bp3::load(Cursor::new(data))?, &dst)?;
			}
		}
		FileKind::Txt1997 => {
			let dst = dst_dir.join(name);
			if may_write(&dst, overwrite) {
				fs::write(&dst, txt::decode_1997(Cursor::new(data))?)?;
			}
		}
		FileKind::Txt2006 => {
			let dst = dst_dir.join(name);
			if may_write(&dst, overwrite) {
				fs::write(&dst, txt::decode_2006(Cursor::new(data), None)?)?;
			}
		}
		_ => {
			let dst = dst_dir.join(name);
			if may_write(&dst, overwrite) {
				fs::write(&dst, data)?;
			}
		}
	}
	Ok(())
}

fn unpack_archive(
	path: &str,
	subscript: Option<&str>,
	output: &str,
	raw: bool,
	overwrite: bool,
) -> Result<()> {
	let mut pack = PackFile::open(path).with_context(|| format!("cannot open {}", path))?;
	let dst_dir = PathBuf::from(output);

	for entry in pack.entries().to_vec() {
		if let Some(pattern) = subscript {
			if !ftpath::wildcard_match(pattern, &entry.name) {
				continue;
			}
		}

		info!("Unpacking {}", entry.name);
		let data = pack
			.read_entry(&entry)
			.with_context(|| format!("cannot read entry {}", entry.name))?;
		write_entry(&entry.name, &data, &dst_dir, raw, overwrite)
			.with_context(|| format!("cannot write entry {}", entry.name))?;
	}

	Ok(())
}

fn convert_file(input: &str, output: &str, overwrite: bool) -> Result<()> {
	let data = fs::read(input).with_context(|| format!("cannot read {}", input))?;
	if data.len() < 4 {
		bail!("{}: file too short to classify", input);
	}

	let dst = Path::new(output);
	if !may_write(dst, overwrite) {
		return Ok(());
	}

	let kind = guess_file_type(input, &data);
	info!("Converting {} ({})", input, kind);
	match kind {
		FileKind::Bp2 => save_image(&bp2::load(Cursor::new(&data))?, dst),
		FileKind::Bp3 => save_image(&bp3::load(Cursor::new(&data))?, dst),
		FileKind::Txt1997 => {
			fs::write(dst, txt::decode_1997(Cursor::new(&data))?)?;
			Ok(())
		}
		FileKind::Txt2006 => {
			fs::write(dst, txt::decode_2006(Cursor::new(&data), None)?)?;
			Ok(())
		}
		FileKind::TxtUtf8 => {
			fs::write(dst, &data)?;
			Ok(())
		}
		FileKind::Bmp => bail!("{}: already a standard bitmap", input),
		FileKind::Bin | FileKind::Lb5 => bail!("{}: archives are unpacked, not converted", input),
		FileKind::Unknown => bail!("{}: unknown source file type", input),
	}
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let (input, subscript) = split_subscript(&cli.input);
	let is_archive = PackFormat::from_path(input).is_some();

	if cli.ls {
		if !is_archive {
			bail!("{}: --ls needs a .bin or .lb5 archive", input);
		}
		return list_archive(input, subscript);
	}

	if is_archive {
		let output = cli.output.as_deref().unwrap_or(".");
		return unpack_archive(input, subscript, output, cli.raw, cli.yes);
	}

	let Some(output) = cli.output.as_deref() else {
		bail!("no output path supplied (see ftconv --help)");
	};
	convert_file(input, output, cli.yes)
}
