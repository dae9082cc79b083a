//! Integration tests for the asset decoding core, driven entirely through
//! the public API.

mod archive;
mod bitmap;
mod script;
