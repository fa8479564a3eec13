//! Unit tests for line tokenization.

use rstest::{fixture, rstest};

use crate::{CodeBlock, Highlighter, Span, TokenKind};

#[fixture]
fn highlighter() -> Highlighter {
    Highlighter::new().expect("built-in patterns compile")
}

fn keyword(text: &str) -> Span<'_> {
    Span::tagged(text, TokenKind::Keyword)
}

// =============================================================================
// Precedence
// =============================================================================

#[rstest]
fn comment_swallows_rest_of_line(highlighter: Highlighter) {
    let spans = highlighter.tokenize("// const x = 1");
    assert_eq!(spans, [Span::tagged("// const x = 1", TokenKind::Comment)]);
}

#[rstest]
fn trailing_comment_follows_code(highlighter: Highlighter) {
    let spans = highlighter.tokenize("x++; // bump");
    assert_eq!(
        spans,
        [
            Span::plain("x++; "),
            Span::tagged("// bump", TokenKind::Comment),
        ]
    );
}

#[rstest]
fn string_hides_keyword_inside_quotes(highlighter: Highlighter) {
    let spans = highlighter.tokenize(r#"const s = "return";"#);
    assert_eq!(
        spans,
        [
            keyword("const"),
            Span::plain(" s = "),
            Span::tagged(r#""return""#, TokenKind::DoubleQuotedString),
            Span::plain(";"),
        ]
    );
}

#[rstest]
fn string_hides_digits_inside_quotes(highlighter: Highlighter) {
    let spans = highlighter.tokenize(r#"let x = "abc123";"#);
    assert_eq!(
        spans,
        [
            keyword("let"),
            Span::plain(" x = "),
            Span::tagged(r#""abc123""#, TokenKind::DoubleQuotedString),
            Span::plain(";"),
        ]
    );
}

#[rstest]
fn earlier_string_suppresses_comment_marker(highlighter: Highlighter) {
    // The comment pattern first matches at the `//` inside the URL, so once
    // the string wins there is no separate candidate for the real comment.
    let spans = highlighter.tokenize(r#"url = "http://x" // ok"#);
    assert_eq!(
        spans,
        [
            Span::plain("url = "),
            Span::tagged(r#""http://x""#, TokenKind::DoubleQuotedString),
            Span::plain(" // ok"),
        ]
    );
}

#[rstest]
fn keyword_beats_type_name_and_call_at_same_offset(highlighter: Highlighter) {
    let spans = highlighter.tokenize("void(0)");
    assert_eq!(
        spans,
        [
            keyword("void"),
            Span::plain("("),
            Span::tagged("0", TokenKind::Number),
            Span::plain(")"),
        ]
    );
}

#[rstest]
fn template_literal_ignores_interpolation(highlighter: Highlighter) {
    let spans = highlighter.tokenize("log(`n=${count(1)}`)");
    assert_eq!(
        spans,
        [
            Span::tagged("log", TokenKind::CallName),
            Span::plain("("),
            Span::tagged("`n=${count(1)}`", TokenKind::TemplateString),
            Span::plain(")"),
        ]
    );
}

// =============================================================================
// Word boundaries and call names
// =============================================================================

#[rstest]
fn keywords_match_whole_words_only(highlighter: Highlighter) {
    let spans = highlighter.tokenize("returnValue = 5;");
    assert_eq!(
        spans,
        [
            Span::plain("returnValue = "),
            Span::tagged("5", TokenKind::Number),
            Span::plain(";"),
        ]
    );
}

#[rstest]
fn call_name_excludes_arguments_without_parens(highlighter: Highlighter) {
    let spans = highlighter.tokenize("foo(bar);");
    assert_eq!(
        spans,
        [
            Span::tagged("foo", TokenKind::CallName),
            Span::plain("(bar);"),
        ]
    );
}

#[rstest]
fn call_name_keeps_whitespace_before_parenthesis(highlighter: Highlighter) {
    let spans = highlighter.tokenize("run ();");
    assert_eq!(
        spans,
        [
            Span::tagged("run ", TokenKind::CallName),
            Span::plain("();"),
        ]
    );
}

#[rstest]
fn type_annotations_are_tagged(highlighter: Highlighter) {
    let spans = highlighter.tokenize("let ids: Array<number> = [];");
    let tagged: Vec<_> = spans
        .iter()
        .filter_map(|span| span.kind().map(|kind| (kind, span.text())))
        .collect();
    assert_eq!(
        tagged,
        [
            (TokenKind::Keyword, "let"),
            (TokenKind::TypeName, "Array"),
            (TokenKind::TypeName, "number"),
        ]
    );
}

#[rstest]
#[case("3.14", "3.14")]
#[case("42;", "42")]
#[case("x = 7.", "7")]
fn numbers_cover_integers_and_decimals(
    highlighter: Highlighter,
    #[case] line: &str,
    #[case] expected: &str,
) {
    let numbers: Vec<_> = highlighter
        .tokenize(line)
        .into_iter()
        .filter(|span| span.kind() == Some(TokenKind::Number))
        .map(|span| span.text())
        .collect();
    assert_eq!(numbers, [expected]);
}

// =============================================================================
// Degenerate input
// =============================================================================

#[rstest]
fn empty_line_yields_no_spans(highlighter: Highlighter) {
    assert!(highlighter.tokenize("").is_empty());
}

#[rstest]
#[case("   ")]
#[case("}")]
#[case("    x.y = z;")]
fn unmatched_line_is_one_plain_span(highlighter: Highlighter, #[case] line: &str) {
    assert_eq!(highlighter.tokenize(line), [Span::plain(line)]);
}

#[rstest]
fn multibyte_text_is_preserved(highlighter: Highlighter) {
    let line = "const café = \"naïve\"; // ✓";
    let text: String = highlighter.tokenize(line).iter().map(Span::text).collect();
    assert_eq!(text, line);
}

#[rstest]
fn block_lines_reassemble_source(highlighter: Highlighter) {
    let source = "function add(a: number, b: number): number {\n  return a + b;\n}\n";
    let block = CodeBlock::new(source);
    let rebuilt: Vec<_> = highlighter
        .highlight_block(&block)
        .iter()
        .map(crate::HighlightedLine::text)
        .collect();
    assert_eq!(rebuilt.join("\n"), source);
}

#[test]
fn highlighter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Highlighter>();
}
