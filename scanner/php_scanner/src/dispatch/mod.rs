//! Token dispatch: one entry point that tries sub-scanners in a fixed
//! priority order over the host's accepted set.
//!
//! Priority among simultaneously accepted kinds: start tag (when text
//! is also accepted), text, start tag alone, end tag, heredoc,
//! automatic semicolon. The origin is committed before any probe, so
//! `NoMatch` always leaves the committed boundary at the origin, and a
//! failed start-tag probe rewinds the lookahead so the text scanner
//! retries from the same origin.
//!
//! Script-mode transitions happen here and only on success: a matched
//! start tag enters script mode, a matched end tag leaves it. A failed
//! probe never changes mode.

use tracing::trace;

use crate::cursor::TokenCursor;
use crate::heredoc::scan_heredoc;
use crate::state::ScannerState;
use crate::tags::{scan_end_tag, scan_start_tag};
use crate::text::scan_text_content;
use crate::token::{Accepted, ScanOutcome, TokenKind};
use crate::trivia::{skip_trivia, TriviaOutcome};

/// Scan one token at the cursor, honoring the accepted set.
///
/// Returns the chosen kind and its committed end boundary, or
/// [`ScanOutcome::NoMatch`] with the boundary still at the origin.
pub fn scan(
    state: &mut ScannerState,
    cursor: &mut TokenCursor<'_>,
    accepted: Accepted,
) -> ScanOutcome {
    let origin = cursor.pos();
    cursor.mark_end();

    if accepted.contains(Accepted::TEXT) {
        if accepted.contains(Accepted::START_TAG) {
            if scan_start_tag(cursor) {
                state.in_script_section = true;
                trace!(end = cursor.end(), "start tag");
                return ScanOutcome::Matched {
                    kind: TokenKind::StartTag,
                    end: cursor.end(),
                };
            }
            cursor.rewind(origin);
        }

        // Text is only valid outside a script region; inside one, an
        // accepted-but-impossible text token is the grammar recovering
        // and must fail here.
        if state.in_script_section {
            return ScanOutcome::NoMatch;
        }

        if scan_text_content(cursor) {
            trace!(end = cursor.end(), "text");
            return ScanOutcome::Matched {
                kind: TokenKind::Text,
                end: cursor.end(),
            };
        }
        return ScanOutcome::NoMatch;
    }

    if accepted.contains(Accepted::START_TAG) {
        if scan_start_tag(cursor) {
            state.in_script_section = true;
            trace!(end = cursor.end(), "start tag");
            return ScanOutcome::Matched {
                kind: TokenKind::StartTag,
                end: cursor.end(),
            };
        }
        return ScanOutcome::NoMatch;
    }

    if skip_trivia(cursor) == TriviaOutcome::AmbiguousSlash {
        return ScanOutcome::NoMatch;
    }

    if accepted.contains(Accepted::END_TAG) {
        if scan_end_tag(cursor) {
            state.in_script_section = false;
            trace!(end = cursor.end(), "end tag");
            return ScanOutcome::Matched {
                kind: TokenKind::EndTag,
                end: cursor.end(),
            };
        }
        return ScanOutcome::NoMatch;
    }

    if accepted.contains(Accepted::HEREDOC) && cursor.current() == b'<' {
        // No fall-through: a `<` that is not a heredoc opener is not
        // an automatic-semicolon position either.
        return scan_heredoc(state, cursor);
    }

    if accepted.contains(Accepted::AUTOMATIC_SEMICOLON)
        && cursor.current() == b'?'
        && cursor.peek() == b'>'
    {
        // Zero-width token at the origin, just before the `?>`.
        trace!(end = origin, "automatic semicolon");
        return ScanOutcome::Matched {
            kind: TokenKind::AutomaticSemicolon,
            end: cursor.end(),
        };
    }

    ScanOutcome::NoMatch
}

#[cfg(test)]
mod tests;
