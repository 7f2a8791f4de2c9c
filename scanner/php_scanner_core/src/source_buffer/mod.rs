//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the cursor to detect end-of-input without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary, which also provides safe zero padding for `peek()` near the
//! end of the buffer.
//!
//! Interior null bytes in the source are legal (the scanner classifies
//! raw bytes); the cursor distinguishes them from the sentinel by
//! comparing positions against [`SourceBuffer::len`].

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`, as is every byte
/// after it, so `peek()` reads past the end of the source are safe and
/// read as `0x00`.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source bytes.
    ///
    /// Copies the bytes into a zero-filled buffer rounded up to a 64-byte
    /// boundary; the sentinel at `buf[source_len]` and all padding are
    /// already `0x00`.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates at `u32::MAX`; the host parser is expected
    /// to reject oversized inputs upstream.
    pub fn new(source: &[u8]) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary. Reserve two bytes past the
        // content: the sentinel plus one guard byte, so `peek()` at the
        // sentinel and a single advance past it stay in bounds.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

/// Size assertion: `SourceBuffer` should stay pointer-sized-small.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32 on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
