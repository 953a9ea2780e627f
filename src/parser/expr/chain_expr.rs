//! 式チェーンの解析
//!
//! 先頭の被演算子は後続の演算子の種類で `AddLead` / `MulLead` / `Compare`
//! に畳み込む。それ以降は演算子ごとに `Op`、被演算子ごとに独立したノードを
//! 兄弟として並べる。

use log::trace;

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::TokenSource;
use crate::parser::{ParseResult, Parser};

use super::{ChainState, Primary, Role};

impl<S: TokenSource> Parser<S> {
    /// 式を解析してチェーンの先頭を返す
    pub(in crate::parser) fn expression(&mut self) -> ParseResult<Box<Node>> {
        self.expression_with(ChainState::new())
    }

    /// 与えられた状態から式チェーンを解析
    pub(in crate::parser) fn expression_with(
        &mut self,
        mut state: ChainState,
    ) -> ParseResult<Box<Node>> {
        let head = self.chain_head(&mut state)?;
        let mut rest = Vec::new();

        loop {
            match state.role {
                Role::Operator => match self.current.kind.binary_op() {
                    Some(op) => rest.push(self.chain_operator(op, &mut state)?),
                    None => break,
                },
                Role::Operand => {
                    rest.push(self.operand()?);
                    state.role = Role::Operator;
                }
            }
        }

        Ok(Node::chain_from(head, rest))
    }

    /// チェーン先頭の被演算子を解析
    fn chain_head(&mut self, state: &mut ChainState) -> ParseResult<Node> {
        let line = self.line();
        let operand = match self.primary()? {
            Primary::Simple(operand) => operand,
            Primary::Complex(node) => {
                state.role = Role::Operator;
                return Ok(node);
            }
        };
        state.role = Role::Operator;

        let Some(op) = self.current.kind.binary_op() else {
            return Ok(operand.into_node(line));
        };

        let kind = match op.class() {
            OpClass::Relational => {
                // 比較演算子は先頭ノードに取り込む
                self.relational(state)?;
                self.advance();
                state.role = Role::Operand;
                NodeKind::Compare { lhs: operand, op }
            }
            OpClass::Additive => NodeKind::AddLead { operand },
            OpClass::Multiplicative => NodeKind::MulLead { operand },
        };
        state.last = Some(op.class());

        trace!("chain head {} at line {}", kind.name(), line);
        Ok(Node::new(kind, line))
    }

    /// 二つ目以降の演算子を `Op` ノードにする
    fn chain_operator(&mut self, op: BinaryOp, state: &mut ChainState) -> ParseResult<Node> {
        let line = self.line();
        let class = op.class();
        if class == OpClass::Relational {
            self.relational(state)?;
        }

        let tag = PrecedenceTag::between(state.last, class);
        self.advance();
        state.last = Some(class);
        state.role = Role::Operand;

        Ok(Node::new(NodeKind::Op { op, tag }, line))
    }

    /// 比較演算子は一つのチェーンに一つまで
    fn relational(&self, state: &mut ChainState) -> ParseResult<()> {
        if state.seen_relational {
            return Err(ParserError::ChainedComparison { line: self.line() });
        }
        state.seen_relational = true;
        Ok(())
    }
}
