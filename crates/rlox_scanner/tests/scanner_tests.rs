//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes whole Lox snippets and that
//! lexical errors are reported without aborting the scan.

use rlox_scanner::{scan, Literal, Token, TokenKind};

/// Helper: scan all tokens from source, excluding the trailing EOF.
fn scan_all(source: &str) -> Vec<Token> {
    let result = scan(source);
    let mut tokens = result.tokens;
    assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::Eof));
    tokens
}

/// Helper: scan all token kinds, excluding the trailing EOF.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_eof_is_always_last_and_unique() {
    for source in ["", "   ", "var x;", "\"unterminated", "@#$", "// only a comment"] {
        let result = scan(source);
        let eof_count = result
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Eof)
            .count();
        assert_eq!(eof_count, 1, "source: {:?}", source);
        let last = result.tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Eof, "source: {:?}", source);
        assert_eq!(last.lexeme, "");
        assert_eq!(last.literal, None);
    }
}

#[test]
fn test_whitespace_only() {
    assert!(scan_all(" \r\t  ").is_empty());
}

#[test]
fn test_all_keywords() {
    let source = "and class else false fun for if nil or print return super this true var while";
    assert_eq!(
        scan_kinds(source),
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::Fun,
            TokenKind::For,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = scan_all("orchid nilly classy");
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].lexeme, "orchid");
}

#[test]
fn test_statement_snippet() {
    let tokens = scan_all("var answer = 41.5 + half;");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[3].literal, Some(Literal::Number(41.5)));
    assert_eq!(tokens[1].lexeme, "answer");
}

#[test]
fn test_grouping_and_comparison() {
    assert_eq!(
        scan_kinds("(1 <= 2) != (3 > 4)"),
        vec![
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::LessEqual,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::BangEqual,
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Greater,
            TokenKind::Number,
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn test_slash_is_division_unless_doubled() {
    assert_eq!(
        scan_kinds("1 / 2"),
        vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number]
    );
    // Comment swallows the rest of the line but not the next one.
    assert_eq!(
        scan_kinds("1 // 2 / 3\n4"),
        vec![TokenKind::Number, TokenKind::Number]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert!(scan_all("// no newline after this comment").is_empty());
}

#[test]
fn test_string_with_embedded_newline() {
    let tokens = scan_all("\"two\nlines\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(
        tokens[0].literal,
        Some(Literal::String("two\nlines".to_string()))
    );
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_empty_string_literal() {
    let tokens = scan_all("\"\"");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::String(String::new())));
}

#[test]
fn test_unterminated_string_line_number() {
    let result = scan("var x;\n\"oops");
    assert!(result.diagnostics.has_errors());
    assert_eq!(result.diagnostics.diagnostics()[0].line, 2);
    // The tokens before the bad string are still produced.
    assert_eq!(result.tokens[0].kind, TokenKind::Var);
}

#[test]
fn test_number_literal_values() {
    let tokens = scan_all("0 007 12.25");
    assert_eq!(tokens[0].literal, Some(Literal::Number(0.0)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(7.0)));
    assert_eq!(tokens[1].lexeme, "007");
    assert_eq!(tokens[2].literal, Some(Literal::Number(12.25)));
}

#[test]
fn test_dot_chain_after_number() {
    // `1.5.floor` style access: the second dot is punctuation.
    assert_eq!(
        scan_kinds("1.5.floor"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier]
    );
}

#[test]
fn test_unexpected_characters_do_not_stop_the_scan() {
    let result = scan("@ var # x $");
    assert_eq!(result.diagnostics.error_count(), 3);
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Var, TokenKind::Identifier, TokenKind::Eof]
    );
    let messages: Vec<_> = result
        .diagnostics
        .diagnostics()
        .iter()
        .map(|d| d.message_text.clone())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Unexpected character '@'.",
            "Unexpected character '#'.",
            "Unexpected character '$'.",
        ]
    );
}

#[test]
fn test_line_numbers_on_tokens() {
    let tokens = scan_all("one\ntwo\n\nfour");
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn test_multi_line_program() {
    let source = "\
// fib
fun fib(n) {
  if (n <= 1) return n;
  return fib(n - 1) + fib(n - 2);
}
print fib(10);
";
    let result = scan(source);
    assert!(!result.diagnostics.has_errors());
    let tokens = result.tokens;
    assert_eq!(tokens[0].kind, TokenKind::Fun);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(tokens.last().unwrap().line, 7);
}

#[test]
fn test_token_display_format() {
    let tokens = scan_all("print \"hi\" 2");
    assert_eq!(tokens[0].to_string(), "PRINT print ");
    assert_eq!(tokens[1].to_string(), "STRING \"hi\" hi");
    assert_eq!(tokens[2].to_string(), "NUMBER 2 2");
}
