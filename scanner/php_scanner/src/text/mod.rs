//! Literal-text scanning outside script regions.
//!
//! A small lookahead automaton walks the byte stream searching for the
//! next script-open delimiter without consuming it into the text token.
//! Every `<` seen from `Start` provisionally commits the token boundary
//! just before it; if the bytes after the `<` confirm a delimiter
//! (`<?` + whitespace, `<?=` + whitespace, or `<?php` in any per-letter
//! case followed by whitespace) the scan stops with that boundary.
//! Any mismatch falls back to `Start` and the provisional boundary
//! floats forward to the next `<`. End of input ends the scan and
//! includes all remaining bytes — a partially matched delimiter prefix
//! becomes ordinary text content.

use php_scanner_core::is_whitespace;

use crate::cursor::TokenCursor;

/// Automaton states while looking for a script-open delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    AfterLt,
    AfterQuestion,
    AfterP,
    AfterPh,
    AfterPhp,
}

/// Scan literal text up to (not including) the next script-open
/// delimiter, or through end of input.
///
/// Returns `true` if at least one content byte precedes the committed
/// boundary — an empty text token is not a valid result, and the caller
/// then retries the delimiter scanner from the same origin.
///
/// A null byte ends the scan like end of input; the scanner classifies
/// raw bytes and the sentinel is indistinguishable from an interior null
/// at this level.
pub(crate) fn scan_text_content(cursor: &mut TokenCursor<'_>) -> bool {
    let start = cursor.pos();
    let mut has_content = false;
    let mut state = State::Start;

    loop {
        if cursor.current() == 0 {
            if cursor.pos() > start {
                has_content = true;
            }
            cursor.mark_end();
            return has_content;
        }

        match state {
            State::Start => {
                if cursor.current() == b'<' {
                    // Provisional boundary: this may be the delimiter.
                    if cursor.pos() > start {
                        has_content = true;
                    }
                    cursor.mark_end();
                    state = State::AfterLt;
                } else {
                    // Bulk-skip ordinary content to the next `<` or null.
                    cursor.skip_to_text_delim();
                    continue;
                }
            }
            State::AfterLt => {
                state = if cursor.current() == b'?' {
                    State::AfterQuestion
                } else {
                    State::Start
                };
            }
            State::AfterQuestion => {
                if is_whitespace(cursor.current()) {
                    // Bare short tag `<?` confirmed.
                    return has_content;
                } else if cursor.current() == b'=' {
                    cursor.advance();
                    if is_whitespace(cursor.current()) {
                        // Short-echo tag `<?=` confirmed.
                        return has_content;
                    }
                    state = State::Start;
                } else if matches!(cursor.current(), b'p' | b'P') {
                    state = State::AfterP;
                } else {
                    state = State::Start;
                }
            }
            State::AfterP => {
                state = if matches!(cursor.current(), b'h' | b'H') {
                    State::AfterPh
                } else {
                    State::Start
                };
            }
            State::AfterPh => {
                state = if matches!(cursor.current(), b'p' | b'P') {
                    State::AfterPhp
                } else {
                    State::Start
                };
            }
            State::AfterPhp => {
                if is_whitespace(cursor.current()) {
                    // Full tag `<?php` confirmed.
                    return has_content;
                }
                state = State::Start;
            }
        }

        cursor.advance();
    }
}
