//! Integration tests for the full pipeline.
//!
//! These go from source text through tokenization and parsing using only
//! the public API, including rendering of diagnostics.

use scriptparse::{
    ast::ast::Stmt, display_error, lexer::lexer::tokenize, parse_source, parser::parser::parse,
};

#[test]
fn test_parse_program() {
    let source = "\
set count to 0
set limit to 10 * 2 ^ 2
if count < limit {
    print(\"below\", limit - count);
    set count to count + 1
} else report(count)
";

    let block = parse_source(source).unwrap();

    assert_eq!(block.len(), 3);
    assert!(matches!(&block.body[0], Stmt::Assignment(stmt) if stmt.target == "count"));
    assert_eq!(block.body[1].to_string(), "(set limit (* 10 (^ 2 2)))");
    assert_eq!(
        block.body[2].to_string(),
        "(if (< count limit) { (call print \"below\" (- limit count)); (set count (+ count 1)) } { (call report count) })"
    );
}

#[test]
fn test_parse_braced_root() {
    let block = parse_source("\n  { set a to 1; }\n").unwrap();

    assert_eq!(block.to_string(), "{ (set a 1) }");
}

#[test]
fn test_tokens_round_trip_through_parse() {
    let source = "if a<=b { x } else { y(1, 2.5, \"s\") }\n";
    let tokens = tokenize(source);

    assert_eq!(tokens.reconstruct(), source);
    assert!(parse(tokens).is_ok());
}

#[test]
fn test_parse_fails_without_partial_result() {
    let result = parse_source("set a to 1\nset b 2\nset c to 3");

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedKeyword");
    assert_eq!(error.get_position().line_number, 2);
    assert_eq!(error.get_position().line_column, 7);
}

#[test]
fn test_display_error() {
    let source = "set a to 1\n    set b 2\n";
    let error = parse_source(source).unwrap_err();

    let rendered = display_error(&error, source, "main.script");

    assert_eq!(
        rendered,
        "Error: ExpectedKeyword (expected keyword `to`, received `2`)\n\
         -> main.script\n  \
         |\n\
         2 | set b 2\n  \
         | ------^"
    );
}

#[test]
fn test_display_error_at_end_of_input() {
    let source = "print(1";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_token(), "end of input");
    assert_eq!(error.get_position().line_column, 8);

    let rendered = display_error(&error, source, "main.script");
    assert!(rendered.ends_with("1 | print(1\n  | -------^"));
}
