use pretty_assertions::assert_eq;

use super::scan;
use crate::cursor::TokenCursor;
use crate::state::ScannerState;
use crate::token::{Accepted, ScanOutcome, TokenKind};
use php_scanner_core::SourceBuffer;

fn cursor_at(buf: &SourceBuffer, pos: u32) -> TokenCursor<'_> {
    let mut cursor = TokenCursor::new(buf.cursor());
    cursor.rewind(pos);
    cursor.mark_end();
    cursor
}

fn matched(kind: TokenKind, end: u32) -> ScanOutcome {
    ScanOutcome::Matched { kind, end }
}

// === Embedded document walkthrough ===

#[test]
fn alternating_markup_and_script_regions() {
    let buf = SourceBuffer::new(b"<?php echo 1; ?>html<?= 2 ?>");
    let mut state = ScannerState::new();

    // Document start: markup position, open delimiter wins over text.
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG),
        matched(TokenKind::StartTag, 5)
    );
    assert!(state.in_script_section());

    // `echo 1;` belongs to the grammar proper. Before the close
    // delimiter the grammar offers the implicit statement terminator.
    let mut cursor = cursor_at(&buf, 13);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::AUTOMATIC_SEMICOLON),
        matched(TokenKind::AutomaticSemicolon, 13)
    );

    let mut cursor = cursor_at(&buf, 13);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::END_TAG),
        matched(TokenKind::EndTag, 16)
    );
    assert!(!state.in_script_section());

    // Back in markup: `html` up to the next open delimiter.
    let mut cursor = cursor_at(&buf, 16);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG),
        matched(TokenKind::Text, 20)
    );

    let mut cursor = cursor_at(&buf, 20);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG),
        matched(TokenKind::StartTag, 23)
    );
    assert!(state.in_script_section());

    let mut cursor = cursor_at(&buf, 25);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::END_TAG),
        matched(TokenKind::EndTag, 28)
    );
    assert!(!state.in_script_section());
}

// === Start-tag / text interplay ===

#[test]
fn failed_start_tag_retries_text_from_origin() {
    // `<?phpx` is not a delimiter; the whole line is one text token
    // including the bytes the failed probe looked at.
    let buf = SourceBuffer::new(b"<?phpx y");
    let mut state = ScannerState::new();
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG),
        matched(TokenKind::Text, 8)
    );
    assert!(!state.in_script_section(), "failed probe must not enter script mode");
}

#[test]
fn text_inside_script_region_is_rejected() {
    let buf = SourceBuffer::new(b"echo");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG),
        ScanOutcome::NoMatch
    );
    assert_eq!(cursor.end(), 0);
}

#[test]
fn start_tag_alone_succeeds_and_fails_cleanly() {
    let buf = SourceBuffer::new(b"<?php x");
    let mut state = ScannerState::new();
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::START_TAG),
        matched(TokenKind::StartTag, 5)
    );
    assert!(state.in_script_section());

    let buf = SourceBuffer::new(b"html");
    let mut state = ScannerState::new();
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::START_TAG),
        ScanOutcome::NoMatch
    );
    assert!(!state.in_script_section());
}

#[test]
fn empty_remainder_matches_nothing() {
    let buf = SourceBuffer::new(b"");
    let mut state = ScannerState::new();
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::TEXT | Accepted::START_TAG),
        ScanOutcome::NoMatch
    );
}

// === In-script kinds ===

#[test]
fn heredoc_token_via_dispatch() {
    let buf = SourceBuffer::new(b"<<<EOT\nfoo\nEOT;");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(
            &mut state,
            &mut cursor,
            Accepted::HEREDOC | Accepted::AUTOMATIC_SEMICOLON
        ),
        matched(TokenKind::Heredoc, 14)
    );
    assert_eq!(state.open_heredoc_count(), 0);
}

#[test]
fn angle_that_is_not_a_heredoc_does_not_fall_through() {
    // `<` arms the heredoc scanner; its failure is final even though
    // the automatic semicolon is also accepted.
    let buf = SourceBuffer::new(b"<x ?>");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(
            &mut state,
            &mut cursor,
            Accepted::HEREDOC | Accepted::AUTOMATIC_SEMICOLON
        ),
        ScanOutcome::NoMatch
    );
}

#[test]
fn automatic_semicolon_is_zero_width_before_close_tag() {
    let buf = SourceBuffer::new(b"1 ?>");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 1);
    assert_eq!(
        scan(
            &mut state,
            &mut cursor,
            Accepted::HEREDOC | Accepted::AUTOMATIC_SEMICOLON
        ),
        matched(TokenKind::AutomaticSemicolon, 1)
    );
}

#[test]
fn automatic_semicolon_needs_a_close_tag() {
    let buf = SourceBuffer::new(b"1 + 2");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 1);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::AUTOMATIC_SEMICOLON),
        ScanOutcome::NoMatch
    );
}

// === Trivia in front of in-script kinds ===

#[test]
fn comments_are_skipped_before_end_tag() {
    let buf = SourceBuffer::new(b"// done\n?>rest");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::END_TAG),
        matched(TokenKind::EndTag, 10)
    );
    assert!(!state.in_script_section());
}

#[test]
fn lone_slash_blocks_in_script_scanning() {
    // Possible division operator: hand back to the grammar untouched.
    let buf = SourceBuffer::new(b"/ 2 ?>");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(
            &mut state,
            &mut cursor,
            Accepted::END_TAG | Accepted::AUTOMATIC_SEMICOLON
        ),
        ScanOutcome::NoMatch
    );
    assert_eq!(cursor.end(), 0);
}

#[test]
fn failed_end_tag_keeps_script_mode() {
    let buf = SourceBuffer::new(b"echo");
    let mut state = ScannerState::new();
    state.in_script_section = true;
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::END_TAG),
        ScanOutcome::NoMatch
    );
    assert!(state.in_script_section(), "failed probe must not leave script mode");
}

#[test]
fn nothing_accepted_matches_nothing() {
    let buf = SourceBuffer::new(b"<?php x");
    let mut state = ScannerState::new();
    let mut cursor = cursor_at(&buf, 0);
    assert_eq!(
        scan(&mut state, &mut cursor, Accepted::empty()),
        ScanOutcome::NoMatch
    );
}
