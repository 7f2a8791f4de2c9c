//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End-of-input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached or exceeded the source length. No explicit bounds
//! checking is performed in the common case -- the sentinel guarantees
//! safe termination.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes, the cursor distinguishes
//! them from EOF by comparing `pos` against `source_len`. A null at
//! `pos < source_len` is an interior null; a null at `pos >= source_len`
//! is the sentinel (EOF).

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is a free backtracking point.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (alignment padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel), as must all bytes
    /// after it. This is guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at EOF (the sentinel byte). Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position: the sentinel and padding guarantee
    /// valid reads beyond the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Set the cursor position directly.
    ///
    /// Used to restore a snapshot taken before speculative scanning.
    /// The position must be within the source content or at the sentinel.
    pub fn set_pos(&mut self, pos: u32) {
        debug_assert!(
            pos <= self.source_len,
            "cursor position {pos} out of bounds (max {})",
            self.source_len
        );
        self.pos = pos;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// EOF is when the current byte is the sentinel (`0x00`) and the
    /// position is at or past the source length. This distinguishes
    /// EOF from interior null bytes.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    /// This holds for all standard byte classification predicates.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past whitespace, including newlines.
    ///
    /// The class is ASCII whitespace (space, tab, LF, CR, FF) plus
    /// vertical tab (`0x0B`). The sentinel byte is not whitespace, so the
    /// loop terminates naturally at EOF.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Advance to the next `\n` byte, interior null, or EOF.
    ///
    /// Used to skip `//` comment bodies. Stops *at* the newline (does not
    /// consume it). Interior nulls stop the skip so callers see them.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'\n', 0, remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary literal-text content to the next byte the
    /// text scanner cares about: `<` (possible script-open delimiter) or
    /// a null byte. Returns the byte found, or 0 for EOF.
    ///
    /// Uses memchr for SIMD-accelerated search of the two delimiters.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_text_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'<', 0, remaining) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0 // EOF sentinel
        }
    }
}

/// Whitespace class used by the scanner: ASCII whitespace plus vertical
/// tab (the ASCII subset of the C `iswspace` classification).
///
/// The sentinel byte (`0x00`) is not whitespace, so skip loops terminate
/// at EOF without bounds checks.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}
