//! 構文エラーのパーサーテスト

use super::*;
use cminus::error::{Expected, ParserError};
use cminus::lexer::TokenKind;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_missing_identifier() {
    let err = assert_parse_error("int ;");
    assert_eq!(
        err,
        ParserError::UnexpectedToken {
            expected: Expected::Token(TokenKind::Id),
            found: TokenKind::Semicolon,
            text: ";".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_unterminated_if_reports_line() {
    let err = assert_parse_error("int main(void) {\n  if ( x\n}\n");
    assert_eq!(err.line(), 3);
    assert!(matches!(
        err,
        ParserError::UnexpectedToken {
            expected: Expected::Token(TokenKind::RightParen),
            found: TokenKind::RightBrace,
            ..
        }
    ));
}

#[test]
fn test_empty_program() {
    let err = assert_parse_error("\n\n");
    assert!(matches!(
        err,
        ParserError::UnexpectedToken {
            found: TokenKind::Eof,
            ..
        }
    ));
}

#[test_case("int f();" ; "empty parameter list")]
#[test_case("int x" ; "missing semicolon")]
#[test_case("int a[];" ; "array without size")]
#[test_case("int a[n];" ; "array with identifier size")]
#[test_case("int x = 1;" ; "initializer")]
#[test_case("x = 1;" ; "statement at top level")]
#[test_case("else" ; "stray else")]
#[test_case("int main(void) { int f(void) { } }" ; "nested function")]
#[test_case("int main(void) { x; }" ; "bare identifier")]
#[test_case("int main(void) { x = ; }" ; "missing expression")]
#[test_case("int main(void) { x = 1 + ; }" ; "dangling operator")]
#[test_case("int main(void) { x = a < b < c; }" ; "chained comparison")]
#[test_case("int main(void) { x = (a + b; }" ; "unclosed group")]
#[test_case("int main(void) { f(a + 1); }" ; "expression argument")]
#[test_case("int main(void) { f(g(x)); }" ; "call argument")]
#[test_case("int main(void) { read x; }" ; "read is not a statement")]
#[test_case("int main(void) { x = 1; }}" ; "extra closing brace")]
#[test_case("int main(void) { x = 1;" ; "unclosed body")]
fn test_rejected(source: &str) {
    assert_parse_error(source);
}

#[test]
fn test_chained_comparison_error() {
    let err = assert_parse_error("int main(void) {\n  x = a < b == c;\n}");
    assert_eq!(err, ParserError::ChainedComparison { line: 2 });
}

#[test]
fn test_statement_comparison_counts_toward_chain() {
    let err = assert_parse_error("int main(void) { x < a < b; }");
    assert_eq!(err, ParserError::ChainedComparison { line: 1 });
}

#[test]
fn test_lexical_error_token() {
    let err = assert_parse_error("int main(void) {\n  x = 12ab;\n}");
    assert_eq!(
        err,
        ParserError::LexicalError {
            found: TokenKind::LexError,
            text: "12ab".to_string(),
            line: 2,
        }
    );
}

#[test]
fn test_unterminated_comment() {
    let err = assert_parse_error("int x; /* never closed\nint y;");
    assert!(matches!(
        err,
        ParserError::LexicalError {
            found: TokenKind::CommentError,
            line: 1,
            ..
        }
    ));
}

#[test]
fn test_number_out_of_range() {
    let err = assert_parse_error("int a[99999999999];");
    assert_eq!(
        err,
        ParserError::InvalidNumber {
            text: "99999999999".to_string(),
            line: 1,
        }
    );
}
