//! Commit/rollback cursor for speculative token scanning.
//!
//! Sub-scanners look arbitrarily far ahead while probing for a
//! delimiter or heredoc word, but the *committed* token boundary only
//! moves when a scanner calls [`TokenCursor::mark_end`] at a point of
//! confirmed success. A failed probe therefore leaves the committed
//! position untouched and the dispatcher can retry the next alternative
//! from the same origin.

use php_scanner_core::Cursor;

/// Cursor over the remaining input with an explicit committed boundary.
///
/// Wraps the low-level byte [`Cursor`]; the lookahead position advances
/// freely, the committed `end` only via [`mark_end`](Self::mark_end).
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'a> {
    cur: Cursor<'a>,
    /// Last committed token boundary.
    end: u32,
}

impl<'a> TokenCursor<'a> {
    /// Wrap a byte cursor; the committed boundary starts at its position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        let end = cursor.pos();
        Self { cur: cursor, end }
    }

    /// Byte at the lookahead position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.cur.current()
    }

    /// Byte one past the lookahead position.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.cur.peek()
    }

    /// Advance the lookahead by one byte.
    ///
    /// A no-op at end of input, so scanners may advance unconditionally
    /// after examining a byte. Interior nulls are ordinary bytes and are
    /// advanced past.
    #[inline]
    pub fn advance(&mut self) {
        if !self.cur.is_eof() {
            self.cur.advance();
        }
    }

    /// Current lookahead position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cur.pos()
    }

    /// Returns `true` when the lookahead is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cur.is_eof()
    }

    /// Commit the token boundary at the current lookahead position.
    ///
    /// Only call at a point of confirmed success; everything between the
    /// committed boundary and the lookahead is speculative.
    #[inline]
    pub fn mark_end(&mut self) {
        self.end = self.cur.pos();
    }

    /// The last committed token boundary.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Restore the lookahead to an earlier position.
    ///
    /// Used by the dispatcher to retry the next alternative from the
    /// origin after a failed probe. Does not touch the committed boundary.
    pub(crate) fn rewind(&mut self, pos: u32) {
        self.cur.set_pos(pos);
    }

    /// Skip whitespace at the lookahead (never past the sentinel).
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.cur.eat_whitespace();
    }

    /// Skip to the next `\n`, interior null, or EOF (comment bodies).
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        self.cur.eat_until_newline_or_eof();
    }

    /// Skip literal-text content to the next `<` or null byte.
    pub(crate) fn skip_to_text_delim(&mut self) -> u8 {
        self.cur.skip_to_text_delim()
    }
}
