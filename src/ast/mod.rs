//! Abstract Syntax Tree (AST) definitions for the C-Minus language.
//!
//! Every grammar construct is a [`Node`]. A node owns up to three ordered
//! children (stored in the fields of its [`NodeKind`] variant) and its next
//! sibling. Sibling chains are the only list representation in the tree:
//! declaration lists, statement sequences, parameter and argument lists, and
//! the operator/operand chains of expressions are all threaded through
//! `Node::sibling`.

mod expr_tree;
mod listing;
mod operators;
mod program;
mod types;

pub use expr_tree::ExprTree;
pub use listing::{render, render_chain};
pub use operators::{BinaryOp, OpClass, PrecedenceTag};
pub use program::Program;
pub use types::ExpType;

use serde::{Deserialize, Serialize};

/// Namespace a node kind is printed in. Does not affect structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeCategory {
    Statement,
    Expression,
}

/// Leading operand folded into a chain-start node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Name(String),
    Value(i32),
}

impl Operand {
    /// The stand-alone node this operand would be without a following operator
    pub fn into_node(self, line: u32) -> Node {
        match self {
            Operand::Name(name) => Node::new(NodeKind::Id { name }, line),
            Operand::Value(value) => Node::new(NodeKind::Const { value }, line),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Name(name) => write!(f, "{}", name),
            Operand::Value(value) => write!(f, "{}", value),
        }
    }
}

/// A syntax tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling: Option<Box<Node>>,
}

/// Node kinds. Each variant carries only the fields meaningful for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    // Declarations
    Var {
        name: String,
        ty: ExpType,
    },
    Arr {
        name: String,
        ty: ExpType,
        size: u32,
    },
    Func {
        name: String,
        ty: ExpType,
        params: Box<Node>,
        body: Box<Node>,
    },
    Param {
        name: String,
        ty: ExpType,
        is_array: bool,
    },
    /// `( void )` parameter list
    VoidParam,

    // Statements
    Compound {
        locals: Option<Box<Node>>,
        statements: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    Return {
        value: Option<Box<Node>>,
    },
    Assign {
        name: String,
        value: Box<Node>,
    },
    ArrayAssign {
        name: String,
        index: Box<Node>,
        value: Box<Node>,
    },
    Call {
        name: String,
        args: Option<Box<Node>>,
    },

    // Identifier-led statement expressions: `name op rhs`
    SimpleCompare {
        name: String,
        op: BinaryOp,
        rhs: Box<Node>,
    },
    AddStart {
        name: String,
        op: BinaryOp,
        rhs: Box<Node>,
    },
    MulStart {
        name: String,
        op: BinaryOp,
        rhs: Box<Node>,
    },

    // Expression chain elements
    Compare {
        lhs: Operand,
        op: BinaryOp,
    },
    AddLead {
        operand: Operand,
    },
    MulLead {
        operand: Operand,
    },
    Op {
        op: BinaryOp,
        tag: Option<PrecedenceTag>,
    },
    Index {
        name: String,
        index: Box<Node>,
    },
    Group {
        inner: Box<Node>,
    },
    Const {
        value: i32,
    },
    Id {
        name: String,
    },
}

impl NodeKind {
    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Compound { .. }
            | NodeKind::While { .. }
            | NodeKind::If { .. }
            | NodeKind::Return { .. }
            | NodeKind::Assign { .. }
            | NodeKind::ArrayAssign { .. }
            | NodeKind::Call { .. } => NodeCategory::Statement,
            _ => NodeCategory::Expression,
        }
    }

    /// Short kind name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Var { .. } => "Var",
            NodeKind::Arr { .. } => "Arr",
            NodeKind::Func { .. } => "Func",
            NodeKind::Param { .. } => "Param",
            NodeKind::VoidParam => "VoidParam",
            NodeKind::Compound { .. } => "Compound",
            NodeKind::While { .. } => "While",
            NodeKind::If { .. } => "If",
            NodeKind::Return { .. } => "Return",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::ArrayAssign { .. } => "ArrayAssign",
            NodeKind::Call { .. } => "Call",
            NodeKind::SimpleCompare { .. } => "SimpleCompare",
            NodeKind::AddStart { .. } => "AddStart",
            NodeKind::MulStart { .. } => "MulStart",
            NodeKind::Compare { .. } => "Compare",
            NodeKind::AddLead { .. } => "AddLead",
            NodeKind::MulLead { .. } => "MulLead",
            NodeKind::Op { .. } => "Op",
            NodeKind::Index { .. } => "Index",
            NodeKind::Group { .. } => "Group",
            NodeKind::Const { .. } => "Const",
            NodeKind::Id { .. } => "Id",
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind, line: u32) -> Self {
        Self {
            kind,
            line,
            sibling: None,
        }
    }

    /// Links `nodes` into a sibling chain in order and returns its head
    pub fn chain(nodes: Vec<Node>) -> Option<Box<Node>> {
        nodes.into_iter().rev().fold(None, |next, mut node| {
            node.sibling = next;
            Some(Box::new(node))
        })
    }

    /// Like [`Node::chain`] for a chain known to be non-empty
    pub fn chain_from(mut head: Node, rest: Vec<Node>) -> Box<Node> {
        head.sibling = Node::chain(rest);
        Box::new(head)
    }

    pub fn category(&self) -> NodeCategory {
        self.kind.category()
    }

    /// Iterates over this node and every node after it in its sibling chain
    pub fn siblings(&self) -> Siblings<'_> {
        Siblings { next: Some(self) }
    }

    /// The three ordered child slots
    pub fn children(&self) -> [Option<&Node>; 3] {
        match &self.kind {
            NodeKind::Func { params, body, .. } => [Some(params.as_ref()), Some(body.as_ref()), None],
            NodeKind::Compound { locals, statements } => {
                [locals.as_deref(), statements.as_deref(), None]
            }
            NodeKind::While { condition, body } => {
                [Some(condition.as_ref()), Some(body.as_ref()), None]
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => [
                Some(condition.as_ref()),
                Some(then_branch.as_ref()),
                else_branch.as_deref(),
            ],
            NodeKind::Return { value } => [value.as_deref(), None, None],
            NodeKind::Assign { value, .. } => [Some(value.as_ref()), None, None],
            NodeKind::ArrayAssign { value, index, .. } => {
                [Some(value.as_ref()), Some(index.as_ref()), None]
            }
            NodeKind::Call { args, .. } => [args.as_deref(), None, None],
            NodeKind::SimpleCompare { rhs, .. }
            | NodeKind::AddStart { rhs, .. }
            | NodeKind::MulStart { rhs, .. } => [Some(rhs.as_ref()), None, None],
            NodeKind::Index { index, .. } => [Some(index.as_ref()), None, None],
            NodeKind::Group { inner } => [Some(inner.as_ref()), None, None],
            _ => [None, None, None],
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Var { name, .. }
            | NodeKind::Arr { name, .. }
            | NodeKind::Func { name, .. }
            | NodeKind::Param { name, .. }
            | NodeKind::Assign { name, .. }
            | NodeKind::ArrayAssign { name, .. }
            | NodeKind::Call { name, .. }
            | NodeKind::SimpleCompare { name, .. }
            | NodeKind::AddStart { name, .. }
            | NodeKind::MulStart { name, .. }
            | NodeKind::Index { name, .. }
            | NodeKind::Id { name } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Iterator over a sibling chain
pub struct Siblings<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.sibling.as_deref();
        Some(node)
    }
}
