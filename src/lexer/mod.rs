//! Lexical analysis module for the C-Minus language.
//!
//! This module is the token source of the parser: it turns C-Minus source text
//! into [`Token`]s carrying a kind, the matched text and the 1-based line the
//! token started on. Newlines are reported as soft `Newline` tokens and
//! lexical problems (malformed lexemes, unrecognized characters, unterminated
//! comments) as error-marker tokens; neither is dropped here.

mod lexer;
mod source;
mod token;

pub use lexer::{format_tokens, tokenize, Lexer};
pub use source::{TokenBuffer, TokenSource};
pub use token::{Token, TokenKind};
