//! メインパーサー構造とユーティリティ

use log::{debug, trace};

use crate::ast::*;
use crate::error::{Expected, ParserError};
use crate::lexer::{Lexer, Token, TokenKind, TokenSource};

use super::{ParseError, ParseResult};

/// C-Minusパーサー
///
/// 先読みは1トークン。現在のトークンだけを保持し、
/// 次のトークンはトークンソースから必要になった時点で取り出す。
pub struct Parser<S: TokenSource> {
    source: S,
    pub(super) current: Token,
}

impl<'a> Parser<Lexer<'a>> {
    /// ソースコードから直接パーサーを作成
    pub fn from_source(input: &'a str) -> Self {
        Self::new(Lexer::new(input))
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn new(mut source: S) -> Self {
        let current = Self::pull(&mut source);
        Self { source, current }
    }

    /// 完全なプログラムを解析
    ///
    /// 宣言が一つもない入力はエラーになる。
    pub fn parse(&mut self) -> ParseResult<Program> {
        let first = self.declaration()?;
        let mut rest = Vec::new();
        while !self.check(TokenKind::Eof) {
            rest.push(self.declaration()?);
        }

        debug!("parsed {} top-level declaration(s)", rest.len() + 1);
        Ok(Program::new(Node::chain_from(first, rest)))
    }

    // ==================== ユーティリティメソッド ====================

    /// 改行を読み飛ばして次のトークンを取り出す
    fn pull(source: &mut S) -> Token {
        loop {
            let token = source.next_token();
            if token.kind != TokenKind::Newline {
                return token;
            }
        }
    }

    /// 次のトークンに進み、消費したトークンを返す
    pub(super) fn advance(&mut self) -> Token {
        let next = Self::pull(&mut self.source);
        trace!(
            "consume {} '{}' at line {}",
            self.current.kind,
            self.current.text,
            self.current.line
        );
        std::mem::replace(&mut self.current, next)
    }

    /// 現在のトークンの行番号
    pub(super) fn line(&self) -> u32 {
        self.current.line
    }

    /// 特定のトークンをチェック（進まない）
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// 特定のトークンにマッチしたら進む
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// 識別子を期待
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        Ok(self.expect(TokenKind::Id)?.text)
    }

    /// 数値リテラルを期待
    pub(super) fn expect_number(&mut self) -> ParseResult<i32> {
        let token = self.expect(TokenKind::Num)?;
        token
            .text
            .parse::<i32>()
            .map_err(|_| ParserError::InvalidNumber {
                text: token.text.clone(),
                line: token.line,
            })
    }

    /// 現在のトークンに対する構文エラーを作成
    ///
    /// 字句エラーのマーカーに到達した場合はそれ自体を報告する。
    pub(super) fn unexpected(&self, expected: impl Into<Expected>) -> ParseError {
        let token = &self.current;
        if token.kind.is_error() {
            ParserError::LexicalError {
                found: token.kind,
                text: token.text.clone(),
                line: token.line,
            }
        } else {
            ParserError::UnexpectedToken {
                expected: expected.into(),
                found: token.kind,
                text: token.text.clone(),
                line: token.line,
            }
        }
    }
}

/// ソースコードを解析してプログラムを返す
pub fn parse_source(input: &str) -> ParseResult<Program> {
    Parser::from_source(input).parse()
}
