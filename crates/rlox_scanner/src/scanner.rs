//! The Lox scanner/lexer.
//!
//! Converts source text into a flat sequence of tokens in a single forward
//! pass with one character of lookahead (two for the decimal-point case).
//! Lexical errors never abort the scan; they are recorded as diagnostics and
//! scanning resumes at the next character.

use crate::token::{Literal, Token, TokenKind};
use rlox_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// Everything a scan produces: the ordered token sequence (always terminated
/// by exactly one `EOF` token) and the diagnostics reported along the way.
/// The caller is responsible for checking `diagnostics` before trusting the
/// tokens for further compilation.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: DiagnosticCollection,
}

/// The scanner converts Lox source text into tokens.
///
/// A scanner is single-use: [`Scanner::scan_tokens`] consumes it and returns
/// the full [`ScanResult`].
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Index of the first character of the lexeme currently being built.
    start: usize,
    /// Index of the next unconsumed character.
    current: usize,
    /// Current 1-based source line; incremented on each newline consumed.
    line: u32,
    /// Accumulated tokens.
    tokens: Vec<Token>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan the entire source and return the tokens plus any diagnostics.
    ///
    /// The returned sequence is never empty: at minimum it holds the `EOF`
    /// token, tagged with the final line number.
    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), None, self.line));
        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Scan exactly one token's worth of input.
    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            '/' => {
                if self.match_char('/') {
                    // Line comment: discard up to, but excluding, the newline.
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(),

            _ if ch.is_ascii_digit() => self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => {
                self.diagnostics.add(Diagnostic::at_line(
                    self.line,
                    &messages::UNEXPECTED_CHARACTER,
                    &[&ch.to_string()],
                ));
            }
        }
    }

    /// Scan a string literal; the opening quote is already consumed.
    ///
    /// On end of input before the closing quote, reports the error and emits
    /// no token. The scan is not aborted.
    fn scan_string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.diagnostics.add(Diagnostic::at_line(
                self.line,
                &messages::UNTERMINATED_STRING,
                &[],
            ));
            return;
        }

        self.advance(); // closing quote

        // Literal value is the text strictly between the quotes.
        let value: String = self.text[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(TokenKind::String, Some(Literal::String(value)));
    }

    /// Scan a number literal; the first digit is already consumed.
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // Consume a fractional part only when the dot is followed by a digit;
        // a trailing dot is left for the next token (`1.` is NUMBER then DOT).
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: f64 = self
            .lexeme()
            .parse()
            .expect("validated digit run parses as f64");
        self.add_literal_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    /// Scan an identifier or keyword; the first character is already consumed.
    ///
    /// Digits do not continue an identifier: `var1` lexes as `var` followed
    /// by the number `1`.
    fn scan_identifier(&mut self) {
        while is_alpha(self.peek()) {
            self.advance();
        }

        let kind = TokenKind::from_keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// Consume and return the next character.
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Consume the next character only if it matches `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.text[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Look at the next unconsumed character without advancing.
    fn peek(&self) -> char {
        self.text.get(self.current).copied().unwrap_or('\0')
    }

    /// Look one character past the next unconsumed character.
    fn peek_next(&self) -> char {
        self.text.get(self.current + 1).copied().unwrap_or('\0')
    }

    /// Whether the whole source has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.text.len()
    }

    /// The text of the lexeme currently being built.
    fn lexeme(&self) -> String {
        self.text[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }
}

/// Whether a character can start or continue an identifier. Digits are
/// excluded from the continuation set as well.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
