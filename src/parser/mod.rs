//! パーサーモジュール
//!
//! このモジュールはトークン列を抽象構文木（AST）に解析する責任を持ちます。
//! 先読み1トークンの再帰下降構文解析で、最初の構文エラーで解析を打ち切ります。
//!
//! ## 式の表現
//!
//! 式は二分木ではなく、被演算子と演算子が交互に並ぶ兄弟チェーンになります：
//!
//! ```text
//! x = 1 + 2 * 3;
//!
//! Assign(x)
//!   AddLead(1) -> Op(+) -> Const(2) -> Op(*, AddThenMul) -> Const(3)
//! ```
//!
//! 演算子のクラスが直前の演算子と変わった箇所に優先順位タグが付きます。
//! 評価順を木として得たい場合は [`crate::ast::ExprTree`] で再構成します。

mod decl_parser;
mod expr;
mod expr_parser;
mod parser_impl;
mod stmt_parser;

// 公開API
pub use parser_impl::{parse_source, Parser};

use crate::error::ParserError;
pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;
