//! Low-level scanning primitives for the PHP external scanner.
//!
//! Two building blocks:
//!
//! - [`SourceBuffer`] — an owned, sentinel-terminated copy of the source
//!   bytes. The `0x00` sentinel lets the cursor detect end-of-input
//!   without bounds checks on every read.
//! - [`Cursor`] — a `Copy` byte cursor over that buffer with memchr-based
//!   fast paths for the scanner's skip loops.
//!
//! This crate is standalone: no dependencies beyond `memchr`, no token
//! types, no scanner state. The scanner proper lives in `php_scanner`.

mod cursor;
mod source_buffer;

pub use cursor::{is_whitespace, Cursor};
pub use source_buffer::SourceBuffer;
