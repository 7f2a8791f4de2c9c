use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn new_state_is_default() {
    let state = ScannerState::new();
    assert!(!state.in_script_section());
    assert_eq!(state.open_heredoc_count(), 0);
    assert_eq!(state, ScannerState::default());
}

#[test]
fn heredoc_new_disallows_indentation() {
    let h = Heredoc::new(b"EOT".to_vec());
    assert_eq!(h.terminator(), b"EOT");
    assert!(!h.indentation_allowed());
}

// === Queue discipline ===

#[test]
fn queue_is_fifo() {
    let mut state = ScannerState::new();
    state.open_heredocs.push_back(Heredoc::new(b"A".to_vec()));
    state.open_heredocs.push_back(Heredoc::new(b"B".to_vec()));

    let words: Vec<&[u8]> = state.open_heredocs().map(Heredoc::terminator).collect();
    assert_eq!(words, vec![b"A".as_slice(), b"B".as_slice()]);

    let front = state.open_heredocs.pop_front().unwrap();
    assert_eq!(front.terminator(), b"A");
    assert_eq!(state.open_heredoc_count(), 1);
}

// === Reset ===

#[test]
fn reset_clears_queue_only() {
    let mut state = ScannerState::new();
    state.in_script_section = true;
    state.open_heredocs.push_back(Heredoc::new(b"EOT".to_vec()));

    state.reset();

    assert_eq!(state.open_heredoc_count(), 0);
    assert!(state.in_script_section(), "reset must not touch script mode");
}

// === Isolation ===

#[test]
fn cloned_state_is_independent() {
    let mut a = ScannerState::new();
    a.open_heredocs.push_back(Heredoc::new(b"EOT".to_vec()));

    let mut b = a.clone();
    b.open_heredocs.pop_front();
    b.in_script_section = true;

    assert_eq!(a.open_heredoc_count(), 1);
    assert!(!a.in_script_section());
}
