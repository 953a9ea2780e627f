//! C-Minus Parser Front End Library
//!
//! This library provides the lexer, recursive-descent parser and syntax tree
//! for the C-Minus language, along with a small pipeline that turns a source
//! file into a tree or a set of diagnostics.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{ExprTree, Node, NodeKind, Program};
pub use error::{CminusError, CminusResult, ErrorCollector};
pub use lexer::{Lexer, Token, TokenKind, TokenSource};
pub use parser::{parse_source, ParseError, ParseResult, Parser};
