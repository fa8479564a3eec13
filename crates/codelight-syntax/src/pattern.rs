//! The ordered pattern table that drives tokenization.
//!
//! Every pattern recognises one lexical category in isolation, ignoring the
//! surrounding context. The token text is always capture group 1; anything
//! matched outside that group (the `(` after a call name) is consumed by the
//! scan but does not belong to the token.
//!
//! Character classes follow ECMAScript rules: word boundaries, digits and
//! identifier characters are ASCII-only, and "any character" excludes the
//! ECMAScript line terminators.

use regex::Regex;

use crate::error::HighlightError;
use crate::token::TokenKind;
use crate::tokenizer::Candidate;

/// Reserved words highlighted as [`TokenKind::Keyword`].
///
/// Alternation order matters: `instanceof` must be tried before `in`.
pub const KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "class",
    "interface",
    "type",
    "extends",
    "implements",
    "import",
    "export",
    "from",
    "async",
    "await",
    "new",
    "this",
    "typeof",
    "instanceof",
    "in",
    "of",
    "try",
    "catch",
    "throw",
    "finally",
    "switch",
    "case",
    "break",
    "default",
    "continue",
    "do",
    "void",
    "null",
    "undefined",
    "true",
    "false",
];

/// Built-in type names highlighted as [`TokenKind::TypeName`].
pub const TYPE_NAMES: &[&str] = &[
    "string", "number", "boolean", "object", "any", "unknown", "never", "void", "Promise", "Array",
    "Map", "Set", "Record", "Partial", "Required", "Pick", "Omit", "Readonly", "Error", "Date",
];

/// ASCII word boundary, as `\b` behaves in ECMAScript.
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Any character except an ECMAScript line terminator.
const NOT_LINE_TERMINATOR: &str = r"[^\n\r\x{2028}\x{2029}]";

/// ECMAScript `\s`.
const JS_WHITESPACE: &str = concat!(
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
);

/// A compiled matcher paired with the classification it produces.
#[derive(Debug, Clone)]
pub struct Pattern {
    kind: TokenKind,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern from a regular expression source.
    ///
    /// The source must wrap the token text in capture group 1.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::PatternCompile`] if the expression is invalid.
    pub fn compile(kind: TokenKind, source: &str) -> Result<Self, HighlightError> {
        let regex = Regex::new(source)
            .map_err(|err| HighlightError::pattern_compile(kind, err.to_string()))?;
        Ok(Self { kind, regex })
    }

    /// Compiles the built-in pattern for a classification.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::PatternCompile`] if the expression is invalid.
    pub fn builtin(kind: TokenKind) -> Result<Self, HighlightError> {
        Self::compile(kind, &builtin_source(kind))
    }

    /// Returns the classification assigned to matches of this pattern.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Finds every non-overlapping occurrence in `line`, left to right.
    ///
    /// Scanning resumes at the end of each full match.
    pub(crate) fn find_all<'a>(&self, line: &'a str) -> impl Iterator<Item = Candidate<'a>> {
        let kind = self.kind;
        self.regex.captures_iter(line).filter_map(move |captures| {
            captures
                .get(1)
                .map(|token| Candidate::new(token.start(), token.as_str(), kind))
        })
    }
}

/// Compiles the full built-in table in scan priority order.
pub(crate) fn builtin_patterns() -> Result<Vec<Pattern>, HighlightError> {
    TokenKind::ALL.into_iter().map(Pattern::builtin).collect()
}

fn builtin_source(kind: TokenKind) -> String {
    match kind {
        TokenKind::Comment => format!("(//{NOT_LINE_TERMINATOR}*$)"),
        TokenKind::DoubleQuotedString => format!(r#"("(?:[^"\\]|\\{NOT_LINE_TERMINATOR})*")"#),
        TokenKind::SingleQuotedString => format!(r"('(?:[^'\\]|\\{NOT_LINE_TERMINATOR})*')"),
        TokenKind::TemplateString => "(`[^`]*`)".to_owned(),
        TokenKind::Keyword => word_set(KEYWORDS),
        TokenKind::TypeName => word_set(TYPE_NAMES),
        TokenKind::Number => format!("{WORD_BOUNDARY}([0-9]+\\.?[0-9]*){WORD_BOUNDARY}"),
        TokenKind::CallName => {
            format!("{WORD_BOUNDARY}([A-Za-z_][A-Za-z0-9_]*{JS_WHITESPACE}*)\\(")
        }
    }
}

/// Builds a whole-word alternation, preserving the order of `words`.
fn word_set(words: &[&str]) -> String {
    format!("{WORD_BOUNDARY}({}){WORD_BOUNDARY}", words.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(kind: TokenKind, line: &str) -> Vec<String> {
        let pattern = Pattern::builtin(kind).expect("builtin pattern compiles");
        pattern
            .find_all(line)
            .map(|candidate| candidate.text().to_owned())
            .collect()
    }

    #[test]
    fn every_builtin_pattern_compiles() {
        let patterns = builtin_patterns().expect("table compiles");
        let kinds: Vec<_> = patterns.iter().map(Pattern::kind).collect();
        assert_eq!(kinds, TokenKind::ALL);
    }

    #[rstest]
    #[case(TokenKind::Comment, "x // note", &["// note"])]
    #[case(TokenKind::Comment, "x // note\r", &[])]
    #[case(TokenKind::DoubleQuotedString, r#"a("b\"c", "d")"#, &[r#""b\"c""#, r#""d""#])]
    #[case(TokenKind::SingleQuotedString, r"'it\'s' + 'x'", &[r"'it\'s'", "'x'"])]
    #[case(TokenKind::TemplateString, "`a ${`b`}`", &["`a ${`", "`}`"])]
    #[case(TokenKind::Keyword, "x instanceof Y in z", &["instanceof", "in"])]
    #[case(TokenKind::Keyword, "returnValue = done", &[])]
    #[case(TokenKind::TypeName, "Map<string, Date>", &["Map", "string", "Date"])]
    #[case(TokenKind::Number, "1 2.5 3. abc123", &["1", "2.5", "3"])]
    #[case(TokenKind::CallName, "foo(bar(1)); baz ()", &["foo", "bar", "baz "])]
    #[case(TokenKind::CallName, "élan(x)", &["lan"])]
    fn builtin_patterns_scan_globally(
        #[case] kind: TokenKind,
        #[case] line: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(texts(kind, line), expected);
    }

    #[test]
    fn call_name_excludes_parenthesis_from_offsets() {
        let pattern = Pattern::builtin(TokenKind::CallName).expect("pattern");
        let candidate = pattern.find_all("  log(1)").next().expect("one match");
        assert_eq!((candidate.start(), candidate.end()), (2, 5));
    }

    #[test]
    fn invalid_source_reports_kind() {
        let error = Pattern::compile(TokenKind::Number, "([0-9]")
            .expect_err("invalid regex");
        assert!(
            error
                .to_string()
                .starts_with("failed to compile number pattern")
        );
    }
}
