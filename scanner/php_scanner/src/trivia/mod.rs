//! Inter-token whitespace and `//` comment skipping.
//!
//! Non-greedy around `/`: a lone slash is the start of a division
//! operator, not trivia, and must be left for the grammar. The skipper
//! reports that case as [`TriviaOutcome::AmbiguousSlash`] instead of
//! consuming it; the speculative advance past the `/` never commits.

use crate::cursor::TokenCursor;

/// How a trivia skip ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TriviaOutcome {
    /// All whitespace and comments before the next token were consumed.
    Clean,
    /// Stopped at a `/` not followed by a second `/` — possibly a
    /// division operator. The caller must report no-match and let the
    /// grammar retry from the committed origin.
    AmbiguousSlash,
}

/// Skip whitespace and `//` line comments at the lookahead.
pub(crate) fn skip_trivia(cursor: &mut TokenCursor<'_>) -> TriviaOutcome {
    loop {
        cursor.eat_whitespace();

        if cursor.current() == b'/' {
            cursor.advance();
            if cursor.current() == b'/' {
                cursor.advance();
                cursor.eat_until_newline_or_eof();
            } else {
                return TriviaOutcome::AmbiguousSlash;
            }
        } else {
            return TriviaOutcome::Clean;
        }
    }
}

#[cfg(test)]
mod tests;
