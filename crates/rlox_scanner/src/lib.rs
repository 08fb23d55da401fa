//! rlox_scanner: Lexer/tokenizer for Lox source code.
//!
//! Produces a flat token sequence from source text in one pass, reporting
//! lexical errors as diagnostics instead of failing. The last token is
//! always `EOF`.

mod scanner;
mod token;

pub use scanner::{ScanResult, Scanner};
pub use token::{Literal, Token, TokenKind};

/// Scan one compilation unit (a whole file or one interactive line).
pub fn scan(source: &str) -> ScanResult {
    Scanner::new(source).scan_tokens()
}
