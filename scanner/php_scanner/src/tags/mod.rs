//! Script-open and script-close delimiter scanning.
//!
//! Three open forms, first match wins: `<?` (bare short tag), `<?=`
//! (short-echo tag), and `<?php` with each letter in either case (full
//! tag). Each form requires one whitespace character after it for
//! disambiguation, but that character is not part of the token: the
//! boundary commits immediately after the last delimiter byte. The
//! close form is exactly `?>`, both bytes included.
//!
//! Failed probes never commit, so the dispatcher can retry another
//! alternative from the same origin. The script-mode flag is flipped by
//! the dispatcher on success only, never here.

use php_scanner_core::is_whitespace;

use crate::cursor::TokenCursor;

/// Scan a script-open delimiter at the lookahead.
///
/// On success the boundary is committed after the delimiter (before the
/// required trailing whitespace). On failure nothing is committed.
pub(crate) fn scan_start_tag(cursor: &mut TokenCursor<'_>) -> bool {
    if cursor.current() != b'<' {
        return false;
    }
    cursor.advance();
    if cursor.current() != b'?' {
        return false;
    }
    cursor.advance();

    // Short-echo form `<?=`.
    if cursor.current() == b'=' {
        cursor.advance();
        if is_whitespace(cursor.current()) {
            cursor.mark_end();
            return true;
        }
        return false;
    }

    // Bare short form `<?`.
    if is_whitespace(cursor.current()) {
        cursor.mark_end();
        return true;
    }

    // Full form `<?php`, case-insensitive per letter.
    if !matches!(cursor.current(), b'p' | b'P') {
        return false;
    }
    cursor.advance();
    if !matches!(cursor.current(), b'h' | b'H') {
        return false;
    }
    cursor.advance();
    if !matches!(cursor.current(), b'p' | b'P') {
        return false;
    }
    cursor.advance();
    if !is_whitespace(cursor.current()) {
        return false;
    }
    cursor.mark_end();
    true
}

/// Scan the script-close delimiter `?>` at the lookahead.
///
/// Both bytes are included in the committed token.
pub(crate) fn scan_end_tag(cursor: &mut TokenCursor<'_>) -> bool {
    if cursor.current() != b'?' {
        return false;
    }
    cursor.advance();
    if cursor.current() != b'>' {
        return false;
    }
    cursor.advance();
    cursor.mark_end();
    true
}
