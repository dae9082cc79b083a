//! `ftech-rs` is a toolkit for the game assets of *Neon Genesis Evangelion:
//! Girlfriend of Steel* (1997, PC) and its Special Edition re-release
//! (2006, PC).
//!
//! The decoding core lives in [`ftech_types`]; this crate re-exports it and
//! ships the `ftconv` command-line converter.

pub use ftech_types;

pub use ftech_types::prelude;
pub use ftech_types::prelude::*;
