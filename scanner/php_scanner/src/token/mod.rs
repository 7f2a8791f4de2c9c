//! Token kinds, acceptance sets, and the dispatch result.
//!
//! `TokenKind` discriminants follow the host grammar's external-symbol
//! order; the checkpointing host engine numbers its symbols the same way,
//! so the order is part of the external contract and must not change.

use bitflags::bitflags;

/// The five token kinds this scanner can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Zero-width implicit statement terminator before a close delimiter.
    AutomaticSemicolon = 0,
    /// Heredoc body content, through the closing terminator word.
    Heredoc = 1,
    /// Literal non-script content outside a script region.
    Text = 2,
    /// The script-close delimiter `?>`.
    EndTag = 3,
    /// The script-open delimiter: `<? `, `<?= `, or `<?php ` (any case).
    /// The grammar does not distinguish which surface form matched.
    StartTag = 4,
}

bitflags! {
    /// Set of token kinds the host grammar currently accepts.
    ///
    /// Built by the host from its table-driven parser state and consulted
    /// as a membership test only; the dispatcher applies its own fixed
    /// priority order among simultaneously accepted kinds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Accepted: u8 {
        const AUTOMATIC_SEMICOLON = 1 << 0;
        const HEREDOC = 1 << 1;
        const TEXT = 1 << 2;
        const END_TAG = 1 << 3;
        const START_TAG = 1 << 4;
    }
}

impl Accepted {
    /// The acceptance flag corresponding to a single token kind.
    pub fn from_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::AutomaticSemicolon => Accepted::AUTOMATIC_SEMICOLON,
            TokenKind::Heredoc => Accepted::HEREDOC,
            TokenKind::Text => Accepted::TEXT,
            TokenKind::EndTag => Accepted::END_TAG,
            TokenKind::StartTag => Accepted::START_TAG,
        }
    }
}

/// Result of a dispatch: either no token, or a chosen kind with the
/// committed end boundary.
///
/// Sub-scanners only commit the cursor at points of confirmed success,
/// so a `NoMatch` guarantees the committed position is untouched and the
/// caller may retry an alternative from the same origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No acceptable token matched at this position.
    NoMatch,
    /// A token matched; `end` is the committed end boundary in bytes.
    Matched {
        /// Which token kind matched.
        kind: TokenKind,
        /// Byte offset of the token's end boundary.
        end: u32,
    },
}

impl ScanOutcome {
    /// Returns `true` for [`ScanOutcome::Matched`].
    pub fn is_match(self) -> bool {
        matches!(self, ScanOutcome::Matched { .. })
    }
}
