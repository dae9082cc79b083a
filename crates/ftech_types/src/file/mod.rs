//! File type support for the `ftech-rs` project.

mod error;

pub mod bitmap;
pub mod bmp;
pub mod bp2;
pub mod bp3;
pub mod guess;
pub mod pack;
pub mod stream;
pub mod txt;

// Re-export error types
pub use error::{FileType, FtFileError};

// Re-export main file types
pub use bitmap::{Bitmap, BitmapData, Color, PixelFormat};
pub use bp2::File as Bp2File;
pub use bp3::File as Bp3File;
pub use guess::{FileKind, guess_file_type};
pub use pack::{Entry as PackEntry, File as PackFile, PackFormat};
pub use stream::Stream;
