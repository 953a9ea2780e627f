//! パーサーテストの共通モジュール
//!
//! パーサーテストで使用する共通のヘルパー関数と型を定義する。

use cminus::ast::*;
use cminus::lexer::Lexer;
use cminus::parser::{ParseError, Parser};

/// ソースコードを解析してASTを取得するヘルパー関数
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse()
}

/// 解析に成功することを確認するヘルパー関数
pub fn assert_parse_success(source: &str) -> Program {
    parse_source(source).expect("Parsing should succeed")
}

/// 解析に失敗することを確認し、エラーを返すヘルパー関数
pub fn assert_parse_error(source: &str) -> ParseError {
    parse_source(source).expect_err("Parsing should fail")
}

/// 最初の関数本体の文を順に返す
pub fn function_statements(program: &Program) -> Vec<&Node> {
    let NodeKind::Func { body, .. } = &program.declarations.kind else {
        panic!("first declaration should be a function");
    };
    let NodeKind::Compound { statements, .. } = &body.kind else {
        panic!("function body should be a compound statement");
    };
    statements
        .as_deref()
        .map(|head| head.siblings().collect())
        .unwrap_or_default()
}

/// チェーンのノード種別を順に集める
pub fn chain_kinds(head: &Node) -> Vec<NodeKind> {
    head.siblings().map(|n| n.kind.clone()).collect()
}

// サブモジュールの宣言
#[cfg(test)]
mod declaration_test;
#[cfg(test)]
mod error_test;
#[cfg(test)]
mod expression_test;
#[cfg(test)]
mod statement_test;
