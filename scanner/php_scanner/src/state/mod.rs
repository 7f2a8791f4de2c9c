//! Persistent scanner state: script-mode flag and open-heredoc queue.
//!
//! One [`ScannerState`] exists per parse session (per parse-tree
//! revision, for incremental hosts). It is a plain value: cloning it is
//! how checkpoints are copied, and independent sessions never share an
//! instance.

use std::collections::VecDeque;

/// An open heredoc awaiting its closing terminator word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heredoc {
    /// The terminator word chosen at the opening `<<<`.
    pub(crate) terminator: Vec<u8>,
    /// Whether the closing word may be indented.
    ///
    /// Recorded and serialized but never consulted by content scanning;
    /// preserved as carried state pending a product decision on the
    /// nowdoc/heredoc indentation distinction.
    pub(crate) indentation_allowed: bool,
}

impl Heredoc {
    /// A heredoc with the given terminator word, indentation disallowed.
    pub fn new(terminator: Vec<u8>) -> Self {
        Self {
            terminator,
            indentation_allowed: false,
        }
    }

    /// The terminator word bytes.
    pub fn terminator(&self) -> &[u8] {
        &self.terminator
    }

    /// Whether the closing word may be indented (carried, not consulted).
    pub fn indentation_allowed(&self) -> bool {
        self.indentation_allowed
    }
}

/// The scanner's persistent automaton state.
///
/// # Invariants
///
/// - `open_heredocs` is FIFO: sub-scanners push at the back when a
///   heredoc opens and pop at the front when one closes or is abandoned;
///   it is never reordered.
/// - Heredocs are only opened while `in_script_section` is true; the
///   converse is enforced by the acceptance flags the host passes in,
///   not by this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScannerState {
    /// True while the cursor is lexically inside a script region.
    pub(crate) in_script_section: bool,
    /// Open heredocs, front first to close.
    pub(crate) open_heredocs: VecDeque<Heredoc>,
}

impl ScannerState {
    /// Fresh state: script-mode false, no open heredocs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the heredoc queue.
    ///
    /// Called when the host invalidates cached incremental state. Does
    /// not touch `in_script_section`.
    pub fn reset(&mut self) {
        self.open_heredocs.clear();
    }

    /// True while lexically inside a script region.
    pub fn in_script_section(&self) -> bool {
        self.in_script_section
    }

    /// Number of heredocs currently open.
    pub fn open_heredoc_count(&self) -> usize {
        self.open_heredocs.len()
    }

    /// The open heredocs, front first to close.
    pub fn open_heredocs(&self) -> impl Iterator<Item = &Heredoc> {
        self.open_heredocs.iter()
    }
}

#[cfg(test)]
mod tests;
