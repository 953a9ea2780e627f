//! 被演算子の解析
//!
//! 数値、識別子、配列参照、関数呼び出し、括弧式。

use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{TokenKind, TokenSource};
use crate::parser::{ParseResult, Parser};

use super::Primary;

impl<S: TokenSource> Parser<S> {
    /// 被演算子を一つ解析
    pub(in crate::parser) fn primary(&mut self) -> ParseResult<Primary> {
        let line = self.line();
        match self.current.kind {
            TokenKind::Num => Ok(Primary::Simple(Operand::Value(self.expect_number()?))),
            TokenKind::Id => {
                let name = self.expect_identifier()?;
                match self.current.kind {
                    TokenKind::LeftBracket => {
                        self.advance();
                        let index = self.expression()?;
                        self.expect(TokenKind::RightBracket)?;
                        Ok(Primary::Complex(Node::new(
                            NodeKind::Index { name, index },
                            line,
                        )))
                    }
                    TokenKind::LeftParen => Ok(Primary::Complex(self.call(name, line)?)),
                    _ => Ok(Primary::Simple(Operand::Name(name))),
                }
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(Primary::Complex(Node::new(NodeKind::Group { inner }, line)))
            }
            _ => Err(self.unexpected(Expected::Construct("an expression"))),
        }
    }

    /// チェーンの二つ目以降の被演算子を解析
    pub(in crate::parser) fn operand(&mut self) -> ParseResult<Node> {
        let line = self.line();
        Ok(self.primary()?.into_node(line))
    }
}
