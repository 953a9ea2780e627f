//! 宣言（変数、配列、関数、引数）の解析

use log::debug;

use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{TokenKind, TokenSource};

use super::{ParseResult, Parser};

impl<S: TokenSource> Parser<S> {
    /// 型指定子を解析
    pub(super) fn type_specifier(&mut self) -> ParseResult<ExpType> {
        match self.current.kind.type_specifier() {
            Some(ty) => {
                self.advance();
                Ok(ty)
            }
            None => Err(self.unexpected(Expected::Construct("a type specifier"))),
        }
    }

    /// トップレベルの宣言を解析
    ///
    /// `型 名前` の後のトークンで変数・関数・配列を区別する。
    pub(super) fn declaration(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let ty = self.type_specifier()?;
        let name = self.expect_identifier()?;

        match self.current.kind {
            TokenKind::Semicolon => {
                self.advance();
                debug!("variable declaration: {} {}", ty, name);
                Ok(Node::new(NodeKind::Var { name, ty }, line))
            }
            TokenKind::LeftBracket => self.array_declaration(name, ty, line),
            TokenKind::LeftParen => self.function_declaration(name, ty, line),
            _ => Err(self.unexpected(Expected::Construct("';', '(' or '['"))),
        }
    }

    /// 複合文の先頭にあるローカル宣言を解析（関数は不可）
    pub(super) fn local_declaration(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let ty = self.type_specifier()?;
        let name = self.expect_identifier()?;

        match self.current.kind {
            TokenKind::Semicolon => {
                self.advance();
                Ok(Node::new(NodeKind::Var { name, ty }, line))
            }
            TokenKind::LeftBracket => self.array_declaration(name, ty, line),
            _ => Err(self.unexpected(Expected::Construct("';' or '['"))),
        }
    }

    /// 配列宣言 `[ NUM ] ;` を解析
    fn array_declaration(&mut self, name: String, ty: ExpType, line: u32) -> ParseResult<Node> {
        self.expect(TokenKind::LeftBracket)?;
        let size = self.expect_number()?.unsigned_abs();
        self.expect(TokenKind::RightBracket)?;
        self.expect(TokenKind::Semicolon)?;

        debug!("array declaration: {} {}[{}]", ty, name, size);
        Ok(Node::new(NodeKind::Arr { name, ty, size }, line))
    }

    /// 関数宣言 `( params ) { ... }` を解析
    fn function_declaration(&mut self, name: String, ty: ExpType, line: u32) -> ParseResult<Node> {
        self.expect(TokenKind::LeftParen)?;
        let params = self.parameters()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.compound()?;

        debug!(
            "function declaration: {} {} ({} parameter node(s))",
            ty,
            name,
            params.siblings().count()
        );
        Ok(Node::new(
            NodeKind::Func {
                name,
                ty,
                params,
                body: Box::new(body),
            },
            line,
        ))
    }

    /// 引数リストを解析
    ///
    /// `void` 単独なら `VoidParam` 一つ、それ以外はカンマ区切りの `Param`。
    /// 空の `()` はエラー。
    pub(super) fn parameters(&mut self) -> ParseResult<Box<Node>> {
        let line = self.line();
        let ty = self.type_specifier()?;
        if ty == ExpType::Void && self.check(TokenKind::RightParen) {
            return Ok(Box::new(Node::new(NodeKind::VoidParam, line)));
        }

        let first = self.parameter(ty, line)?;
        let mut rest = Vec::new();
        while self.match_token(TokenKind::Comma) {
            let line = self.line();
            let ty = self.type_specifier()?;
            rest.push(self.parameter(ty, line)?);
        }

        Ok(Node::chain_from(first, rest))
    }

    /// 引数一つ（`名前` または `名前 [ ]`）を解析
    fn parameter(&mut self, ty: ExpType, line: u32) -> ParseResult<Node> {
        let name = self.expect_identifier()?;
        let is_array = if self.match_token(TokenKind::LeftBracket) {
            self.expect(TokenKind::RightBracket)?;
            true
        } else {
            false
        };

        Ok(Node::new(NodeKind::Param { name, ty, is_array }, line))
    }
}
