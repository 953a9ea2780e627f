//! 文の解析

use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{TokenKind, TokenSource};

use super::{ParseResult, Parser};

impl<S: TokenSource> Parser<S> {
    /// 文を解析
    pub(super) fn statement(&mut self) -> ParseResult<Node> {
        match self.current.kind {
            TokenKind::While => self.while_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::Return => self.return_statement(),
            TokenKind::LeftBrace => self.compound(),
            TokenKind::Id => {
                let node = self.identifier_led()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(node)
            }
            _ => Err(self.unexpected(Expected::Construct("a statement"))),
        }
    }

    /// 複合文 `{ ローカル宣言 文の列 }` を解析
    pub(super) fn compound(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.expect(TokenKind::LeftBrace)?;

        let mut locals = Vec::new();
        while self.current.kind.type_specifier().is_some() {
            locals.push(self.local_declaration()?);
        }

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) {
            statements.push(self.statement()?);
        }
        self.expect(TokenKind::RightBrace)?;

        Ok(Node::new(
            NodeKind::Compound {
                locals: Node::chain(locals),
                statements: Node::chain(statements),
            },
            line,
        ))
    }

    /// while文を解析
    fn while_statement(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LeftParen)?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.statement()?;

        Ok(Node::new(
            NodeKind::While {
                condition,
                body: Box::new(body),
            },
            line,
        ))
    }

    /// if文を解析。elseは最も近いifに結び付く
    fn if_statement(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LeftParen)?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen)?;
        let then_branch = self.statement()?;

        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Node::new(
            NodeKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
            },
            line,
        ))
    }

    /// return文を解析
    fn return_statement(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.expect(TokenKind::Return)?;

        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        Ok(Node::new(NodeKind::Return { value }, line))
    }
}
