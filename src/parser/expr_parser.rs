//! 識別子で始まる構文（代入・呼び出し・配列代入・式文）の解析

use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{TokenKind, TokenSource};

use super::expr::ChainState;
use super::{ParseResult, Parser};

impl<S: TokenSource> Parser<S> {
    /// 識別子の次のトークンで構文を決める
    pub(super) fn identifier_led(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let name = self.expect_identifier()?;

        match self.current.kind {
            TokenKind::Assign => {
                self.advance();
                let value = self.expression()?;
                Ok(Node::new(NodeKind::Assign { name, value }, line))
            }
            TokenKind::LeftParen => self.call(name, line),
            TokenKind::LeftBracket => {
                self.advance();
                let index = self.expression()?;
                self.expect(TokenKind::RightBracket)?;
                self.expect(TokenKind::Assign)?;
                let value = self.expression()?;
                Ok(Node::new(NodeKind::ArrayAssign { name, index, value }, line))
            }
            kind => {
                let Some(op) = kind.binary_op() else {
                    return Err(self.unexpected(Expected::Construct("'=', '(', '[' or an operator")));
                };
                self.advance();
                let rhs = self.expression_with(ChainState::after(op.class()))?;
                let kind = match op.class() {
                    OpClass::Relational => NodeKind::SimpleCompare { name, op, rhs },
                    OpClass::Additive => NodeKind::AddStart { name, op, rhs },
                    OpClass::Multiplicative => NodeKind::MulStart { name, op, rhs },
                };
                Ok(Node::new(kind, line))
            }
        }
    }

    /// 関数呼び出し `( 引数 )` を解析。識別子は読み終えている
    ///
    /// 引数は識別子か数値のみ。`f()` は引数なしの呼び出しになる。
    pub(super) fn call(&mut self, name: String, line: u32) -> ParseResult<Node> {
        self.expect(TokenKind::LeftParen)?;

        let args = if self.check(TokenKind::RightParen) {
            None
        } else {
            let first = self.argument()?;
            let mut rest = Vec::new();
            while self.match_token(TokenKind::Comma) {
                rest.push(self.argument()?);
            }
            Some(Node::chain_from(first, rest))
        };
        self.expect(TokenKind::RightParen)?;

        Ok(Node::new(NodeKind::Call { name, args }, line))
    }

    fn argument(&mut self) -> ParseResult<Node> {
        let line = self.line();
        match self.current.kind {
            TokenKind::Id => {
                let name = self.expect_identifier()?;
                Ok(Node::new(NodeKind::Id { name }, line))
            }
            TokenKind::Num => {
                let value = self.expect_number()?;
                Ok(Node::new(NodeKind::Const { value }, line))
            }
            _ => Err(self.unexpected(Expected::Construct("an identifier or number argument"))),
        }
    }
}
