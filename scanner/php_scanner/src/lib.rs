//! Context-sensitive external scanner for PHP embedded-script parsing.
//!
//! A context-free grammar cannot express three things about a PHP-style
//! source file: the switch between literal-text and script tokenization
//! at `<?php` / `?>` delimiters, heredoc bodies terminated by a word
//! chosen at the opening `<<<`, and whether skipping whitespace at a `/`
//! would swallow the start of a division operator. This crate supplies
//! those decisions as a hand-written deterministic automaton the host
//! parser invokes once per requested token.
//!
//! # Usage
//!
//! The host owns one [`ScannerState`] per parse session and calls
//! [`scan`] with a [`TokenCursor`] over the remaining input and the set
//! of [`Accepted`] token kinds its grammar tables currently allow:
//!
//! ```
//! use php_scanner::{scan, Accepted, ScanOutcome, ScannerState, TokenCursor, TokenKind};
//! use php_scanner_core::SourceBuffer;
//!
//! let buf = SourceBuffer::new(b"<?php echo 1;");
//! let mut state = ScannerState::new();
//! let mut cursor = TokenCursor::new(buf.cursor());
//!
//! let outcome = scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG);
//! assert_eq!(
//!     outcome,
//!     ScanOutcome::Matched { kind: TokenKind::StartTag, end: 5 }
//! );
//! assert!(state.in_script_section());
//! ```
//!
//! # Incremental re-parsing
//!
//! [`ScannerState::serialize`] snapshots the script-mode flag and the
//! open-heredoc queue into a bounded checkpoint buffer;
//! [`ScannerState::deserialize`] reconstructs them when the host resumes
//! a parse from an earlier point of an edited source. States are values:
//! checkpoints are copied, never shared, so independent parse sessions
//! cannot observe each other.

mod checkpoint;
mod cursor;
mod dispatch;
mod heredoc;
mod state;
mod tags;
mod text;
mod token;
mod trivia;

pub use checkpoint::{CheckpointError, CHECKPOINT_CAPACITY};
pub use cursor::TokenCursor;
pub use dispatch::scan;
pub use state::{Heredoc, ScannerState};
pub use token::{Accepted, ScanOutcome, TokenKind};

pub use php_scanner_core::{Cursor, SourceBuffer};
