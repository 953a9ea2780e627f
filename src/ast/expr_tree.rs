//! 兄弟チェーンで表された式から二分木の式を再構成する
//!
//! パーサーは式を「被演算子・演算子」が交互に並ぶ兄弟チェーンとして出力する。
//! ここではそれを演算子の優先順位に従って畳み込み、評価順が木の形で
//! 読み取れる `ExprTree` を作る。

use serde::Serialize;
use std::iter::Peekable;
use std::vec::IntoIter;

use super::{BinaryOp, Node, NodeKind, Operand};
use crate::error::ChainError;

/// 優先順位を反映した式木
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExprTree {
    Const(i32),
    Id(String),
    Index {
        name: String,
        index: Box<ExprTree>,
    },
    Call {
        name: String,
        args: Vec<ExprTree>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<ExprTree>,
        rhs: Box<ExprTree>,
    },
}

enum Item {
    Operand(ExprTree),
    Operator(BinaryOp),
}

impl ExprTree {
    /// チェーンの先頭ノードから式木を組み立てる
    pub fn from_chain(head: &Node) -> Result<Self, ChainError> {
        let mut items = Vec::new();
        flatten_chain(head, &mut items)?;
        build(items)
    }

    /// 式を持つ文ノードから式木を組み立てる
    ///
    /// `SimpleCompare` / `AddStart` / `MulStart` は先頭の識別子と演算子を
    /// 右辺のチェーンの前に補って一つの式として扱う。
    pub fn from_statement(node: &Node) -> Result<Self, ChainError> {
        match &node.kind {
            NodeKind::SimpleCompare { name, op, rhs }
            | NodeKind::AddStart { name, op, rhs }
            | NodeKind::MulStart { name, op, rhs } => {
                let mut items = vec![
                    Item::Operand(ExprTree::Id(name.clone())),
                    Item::Operator(*op),
                ];
                flatten_chain(rhs, &mut items)?;
                build(items)
            }
            NodeKind::Assign { value, .. } | NodeKind::ArrayAssign { value, .. } => {
                Self::from_chain(value)
            }
            NodeKind::Return { value: Some(value) } => Self::from_chain(value),
            NodeKind::While { condition, .. } | NodeKind::If { condition, .. } => {
                Self::from_chain(condition)
            }
            _ => Err(ChainError::UnexpectedNode {
                kind: node.kind.name(),
                line: node.line,
            }),
        }
    }
}

fn operand_tree(operand: &Operand) -> ExprTree {
    match operand {
        Operand::Name(name) => ExprTree::Id(name.clone()),
        Operand::Value(value) => ExprTree::Const(*value),
    }
}

fn flatten_chain(head: &Node, items: &mut Vec<Item>) -> Result<(), ChainError> {
    for node in head.siblings() {
        match &node.kind {
            NodeKind::AddLead { operand } | NodeKind::MulLead { operand } => {
                items.push(Item::Operand(operand_tree(operand)));
            }
            NodeKind::Compare { lhs, op } => {
                items.push(Item::Operand(operand_tree(lhs)));
                items.push(Item::Operator(*op));
            }
            NodeKind::Op { op, .. } => items.push(Item::Operator(*op)),
            _ => items.push(Item::Operand(operand_node(node)?)),
        }
    }
    Ok(())
}

/// 単独の被演算子ノードを変換する（兄弟は見ない）
fn operand_node(node: &Node) -> Result<ExprTree, ChainError> {
    match &node.kind {
        NodeKind::Const { value } => Ok(ExprTree::Const(*value)),
        NodeKind::Id { name } => Ok(ExprTree::Id(name.clone())),
        NodeKind::Index { name, index } => Ok(ExprTree::Index {
            name: name.clone(),
            index: Box::new(ExprTree::from_chain(index)?),
        }),
        NodeKind::Call { name, args } => {
            let args = args
                .as_deref()
                .into_iter()
                .flat_map(Node::siblings)
                .map(operand_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ExprTree::Call {
                name: name.clone(),
                args,
            })
        }
        NodeKind::Group { inner } => ExprTree::from_chain(inner),
        _ => Err(ChainError::UnexpectedNode {
            kind: node.kind.name(),
            line: node.line,
        }),
    }
}

fn build(items: Vec<Item>) -> Result<ExprTree, ChainError> {
    let mut items = items.into_iter().peekable();
    let tree = climb(&mut items, 0)?;
    match items.next() {
        None => Ok(tree),
        Some(_) => Err(ChainError::MissingOperator),
    }
}

/// 優先順位上昇法。同じ強さの演算子は左結合
fn climb(items: &mut Peekable<IntoIter<Item>>, min_power: u8) -> Result<ExprTree, ChainError> {
    let mut lhs = match items.next() {
        Some(Item::Operand(tree)) => tree,
        Some(Item::Operator(op)) => return Err(ChainError::MissingOperand { op }),
        None => return Err(ChainError::Empty),
    };

    while let Some(Item::Operator(op)) = items.peek() {
        let op = *op;
        let power = op.class().binding_power();
        if power < min_power {
            break;
        }
        items.next();
        let rhs = climb(items, power + 1)?;
        lhs = ExprTree::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
    }

    Ok(lhs)
}

impl std::fmt::Display for ExprTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprTree::Const(value) => write!(f, "{}", value),
            ExprTree::Id(name) => write!(f, "{}", name),
            ExprTree::Index { name, index } => write!(f, "{}[{}]", name, index),
            ExprTree::Call { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            ExprTree::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
