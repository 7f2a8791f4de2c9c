//! Bounded checkpoint encoding of [`ScannerState`].
//!
//! The host engine snapshots scanner state at parse checkpoints so an
//! incremental re-parse can resume mid-file. The buffer is bounded by
//! [`CHECKPOINT_CAPACITY`]; a state that does not fit is a
//! distinguishable [`CheckpointError`] rather than a silently empty
//! buffer, so the host can choose to fail the checkpoint loudly instead
//! of silently resetting state on resume.
//!
//! # Layout
//!
//! ```text
//! byte 0        script-mode flag (0/1)
//! byte 1        open heredoc count n (0-255)
//! n records of  { 1 byte indentation-allowed flag,
//!                 1 byte terminator length L (0-255),
//!                 L raw terminator bytes }
//! ```

use std::collections::VecDeque;

use crate::state::{Heredoc, ScannerState};

/// Fixed capacity of the host engine's checkpoint buffer, in bytes.
pub const CHECKPOINT_CAPACITY: usize = 1024;

/// Why a checkpoint could not be encoded or decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckpointError {
    /// The encoded state would exceed [`CHECKPOINT_CAPACITY`].
    #[error("checkpoint needs {required} bytes but capacity is {capacity}")]
    Overflow {
        /// Bytes the encoding would need.
        required: usize,
        /// The fixed buffer capacity.
        capacity: usize,
    },
    /// More open heredocs than the one-byte count field can represent.
    #[error("{count} open heredocs exceed the checkpoint limit of 255")]
    TooManyHeredocs {
        /// Open heredocs in the state.
        count: usize,
    },
    /// A terminator word longer than the one-byte length field allows.
    #[error("heredoc terminator of {len} bytes exceeds the checkpoint limit of 255")]
    TerminatorTooLong {
        /// Length of the offending terminator.
        len: usize,
    },
    /// The buffer ended mid-record during decoding.
    #[error("checkpoint buffer truncated at byte {at}")]
    Truncated {
        /// Offset at which the decoder ran out of bytes.
        at: usize,
    },
}

impl ScannerState {
    /// Encode this state into a checkpoint buffer.
    ///
    /// # Errors
    ///
    /// [`CheckpointError::TooManyHeredocs`], `TerminatorTooLong`, or
    /// `Overflow` when the state is not representable within the bounded
    /// layout; the host must then treat this parse point as
    /// non-resumable (or surface the failure).
    pub fn serialize(&self) -> Result<Vec<u8>, CheckpointError> {
        let count = self.open_heredocs.len();
        if count > usize::from(u8::MAX) {
            return Err(CheckpointError::TooManyHeredocs { count });
        }

        let mut required = 2;
        for heredoc in &self.open_heredocs {
            let len = heredoc.terminator.len();
            if len > usize::from(u8::MAX) {
                return Err(CheckpointError::TerminatorTooLong { len });
            }
            required += 2 + len;
        }
        if required > CHECKPOINT_CAPACITY {
            return Err(CheckpointError::Overflow {
                required,
                capacity: CHECKPOINT_CAPACITY,
            });
        }

        let mut buf = Vec::with_capacity(required);
        buf.push(u8::from(self.in_script_section));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "count checked against u8::MAX above"
        )]
        buf.push(count as u8);
        for heredoc in &self.open_heredocs {
            buf.push(u8::from(heredoc.indentation_allowed));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "terminator length checked against u8::MAX above"
            )]
            buf.push(heredoc.terminator.len() as u8);
            buf.extend_from_slice(&heredoc.terminator);
        }

        debug_assert_eq!(buf.len(), required);
        Ok(buf)
    }

    /// Reconstruct state from a checkpoint buffer.
    ///
    /// An empty buffer is the host's "no checkpoint available" signal and
    /// resets to the default state. On error the state is left unchanged.
    ///
    /// # Errors
    ///
    /// [`CheckpointError::Truncated`] when the buffer ends mid-record.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), CheckpointError> {
        if bytes.is_empty() {
            self.in_script_section = false;
            self.open_heredocs.clear();
            return Ok(());
        }
        if bytes.len() < 2 {
            return Err(CheckpointError::Truncated { at: bytes.len() });
        }

        let in_script_section = bytes[0] != 0;
        let count = usize::from(bytes[1]);

        let mut open_heredocs = VecDeque::with_capacity(count);
        let mut i = 2;
        for _ in 0..count {
            if i + 2 > bytes.len() {
                return Err(CheckpointError::Truncated { at: i });
            }
            let indentation_allowed = bytes[i] != 0;
            let len = usize::from(bytes[i + 1]);
            i += 2;
            if i + len > bytes.len() {
                return Err(CheckpointError::Truncated { at: i });
            }
            open_heredocs.push_back(Heredoc {
                terminator: bytes[i..i + len].to_vec(),
                indentation_allowed,
            });
            i += len;
        }

        self.in_script_section = in_script_section;
        self.open_heredocs = open_heredocs;
        Ok(())
    }
}
