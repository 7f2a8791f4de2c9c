use super::{skip_trivia, TriviaOutcome};
use crate::cursor::TokenCursor;
use php_scanner_core::SourceBuffer;

// === Whitespace ===

#[test]
fn skips_plain_whitespace() {
    let buf = SourceBuffer::new(b"  \t\n  x");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::Clean);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn clean_at_eof() {
    let buf = SourceBuffer::new(b"   ");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::Clean);
    assert!(cursor.is_eof());
}

#[test]
fn no_trivia_is_clean_without_moving() {
    let buf = SourceBuffer::new(b"echo");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::Clean);
    assert_eq!(cursor.pos(), 0);
}

// === Comments ===

#[test]
fn skips_line_comment_to_newline() {
    let buf = SourceBuffer::new(b"// hi\nx");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::Clean);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn skips_comment_at_eof() {
    let buf = SourceBuffer::new(b"// trailing");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::Clean);
    assert!(cursor.is_eof());
}

#[test]
fn alternates_whitespace_and_comments() {
    let buf = SourceBuffer::new(b"  // one\n\t// two\n  x");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::Clean);
    assert_eq!(cursor.current(), b'x');
}

// === Ambiguous slash ===

#[test]
fn lone_slash_is_ambiguous() {
    let buf = SourceBuffer::new(b"/ 2");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::AmbiguousSlash);
    // Speculative advance past the slash, but nothing committed.
    assert_eq!(cursor.end(), 0);
}

#[test]
fn slash_after_whitespace_is_ambiguous() {
    let buf = SourceBuffer::new(b"  / 2");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::AmbiguousSlash);
    assert_eq!(cursor.end(), 0);
}

#[test]
fn slash_at_eof_is_ambiguous() {
    let buf = SourceBuffer::new(b"/");
    let mut cursor = TokenCursor::new(buf.cursor());
    assert_eq!(skip_trivia(&mut cursor), TriviaOutcome::AmbiguousSlash);
}
