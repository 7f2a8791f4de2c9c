//! Heredoc scanning: `<<<WORD` (or `<<<'WORD'`) through the closing
//! terminator word.
//!
//! The whole heredoc is one token. Its end boundary commits directly
//! after the closing occurrence of the terminator word; the `;` or
//! newline that confirms the occurrence is left unconsumed for the
//! grammar. The terminator search is byte-exact and line-agnostic: any
//! occurrence of the word followed by `;` or `\n` closes the heredoc,
//! wherever it sits.

use tracing::trace;

use crate::cursor::TokenCursor;
use crate::state::{Heredoc, ScannerState};
use crate::token::{ScanOutcome, TokenKind};
use crate::trivia::{skip_trivia, TriviaOutcome};

/// How consuming heredoc body bytes ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeredocContent {
    /// The terminator word matched, with `;` or `\n` at the lookahead.
    End,
    /// Input ran out before the terminator.
    Unterminated,
}

/// Scan a complete heredoc at the lookahead.
///
/// The heredoc is pushed on the open queue as soon as its terminator
/// word is read and popped when the scan resolves, so the queue only
/// carries it across a host checkpoint taken mid-heredoc.
pub(crate) fn scan_heredoc(
    state: &mut ScannerState,
    cursor: &mut TokenCursor<'_>,
) -> ScanOutcome {
    for _ in 0..3 {
        if cursor.current() != b'<' {
            return ScanOutcome::NoMatch;
        }
        cursor.advance();
    }

    if skip_trivia(cursor) == TriviaOutcome::AmbiguousSlash {
        return ScanOutcome::NoMatch;
    }

    let word = scan_heredoc_word(cursor);
    if word.is_empty() {
        return ScanOutcome::NoMatch;
    }
    trace!(word = %String::from_utf8_lossy(&word), "heredoc opened");
    state.open_heredocs.push_back(Heredoc::new(word));

    match scan_heredoc_content(state, cursor) {
        HeredocContent::Unterminated => ScanOutcome::NoMatch,
        HeredocContent::End => {
            cursor.mark_end();
            ScanOutcome::Matched {
                kind: TokenKind::Heredoc,
                end: cursor.end(),
            }
        }
    }
}

/// Read the terminator word after `<<<`.
///
/// Quoted form: everything between `'` and `'`, verbatim. Bare form: a
/// run of ASCII alphanumerics and underscores. An empty result means no
/// word was present and the heredoc candidate fails.
fn scan_heredoc_word(cursor: &mut TokenCursor<'_>) -> Vec<u8> {
    let mut word = Vec::new();

    if cursor.current() == b'\'' {
        cursor.advance();
        while cursor.current() != b'\'' && cursor.current() != 0 {
            word.push(cursor.current());
            cursor.advance();
        }
        // Closing quote (or the stray null that stopped the run).
        cursor.advance();
    } else {
        while cursor.current().is_ascii_alphanumeric() || cursor.current() == b'_' {
            word.push(cursor.current());
            cursor.advance();
        }
    }

    word
}

/// Consume body bytes until the front heredoc's terminator resolves.
///
/// The front of the queue is the terminator being sought. On a full
/// word match not confirmed by `;` or `\n`, the match restarts at the
/// current byte. On a partial-match failure the mismatched byte is
/// consumed before restarting, so overlapping occurrences that share a
/// prefix with a failed candidate are not found; the host grammar never
/// produces terminator words where this matters.
fn scan_heredoc_content(
    state: &mut ScannerState,
    cursor: &mut TokenCursor<'_>,
) -> HeredocContent {
    let Some(front) = state.open_heredocs.front() else {
        return HeredocContent::Unterminated;
    };
    let word = front.terminator.clone();
    let mut position_in_word = 0;

    loop {
        if position_in_word == word.len() {
            if matches!(cursor.current(), b';' | b'\n') {
                state.open_heredocs.pop_front();
                trace!(word = %String::from_utf8_lossy(&word), "heredoc closed");
                return HeredocContent::End;
            }
            position_in_word = 0;
        }

        if cursor.current() == 0 {
            state.open_heredocs.pop_front();
            trace!(word = %String::from_utf8_lossy(&word), "heredoc unterminated");
            return HeredocContent::Unterminated;
        }

        if cursor.current() == word[position_in_word] {
            cursor.advance();
            position_in_word += 1;
        } else {
            position_in_word = 0;
            cursor.advance();
        }
    }
}
