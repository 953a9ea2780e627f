//! 構文木のインデント付きリスト表示
//!
//! 兄弟は同じ深さに、子は一段深く（4スペース）並べる。

use super::{Node, NodeKind, Program};

const INDENT: usize = 4;

/// プログラム全体をリスト形式の文字列にする
pub fn render(program: &Program) -> String {
    let mut printer = Printer::default();
    printer.chain(&program.declarations, 0);
    printer.out
}

/// `node` から始まる兄弟チェーンをリスト形式の文字列にする
pub fn render_chain(node: &Node) -> String {
    let mut printer = Printer::default();
    printer.chain(node, 0);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn line(&mut self, depth: usize, text: &str) {
        self.out.push_str(&" ".repeat(depth * INDENT));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn chain(&mut self, head: &Node, depth: usize) {
        for node in head.siblings() {
            self.node(node, depth);
        }
    }

    fn node(&mut self, node: &Node, depth: usize) {
        self.line(depth, &label(&node.kind));

        // 宣言は型を一段深く表示する
        match &node.kind {
            NodeKind::Var { ty, .. }
            | NodeKind::Arr { ty, .. }
            | NodeKind::Func { ty, .. }
            | NodeKind::Param { ty, .. } => self.line(depth + 1, &format!("Type: {}", ty)),
            _ => {}
        }

        for child in node.children().into_iter().flatten() {
            self.chain(child, depth + 1);
        }
    }
}

fn label(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Var { name, .. } => format!("Variable Declaration: {}", name),
        NodeKind::Arr { name, size, .. } => format!("Variable Declaration: {}[{}]", name, size),
        NodeKind::Func { name, .. } => format!("Function Declaration: {}", name),
        NodeKind::Param { name, is_array, .. } => {
            if *is_array {
                format!("Parameter: {}[]", name)
            } else {
                format!("Parameter: {}", name)
            }
        }
        NodeKind::VoidParam => "Parameter: void".to_string(),
        NodeKind::Compound { .. } => "Compound Statement".to_string(),
        NodeKind::While { .. } => "While".to_string(),
        NodeKind::If { .. } => "If".to_string(),
        NodeKind::Return { .. } => "Return".to_string(),
        NodeKind::Assign { name, .. } => format!("Assign: {}", name),
        NodeKind::ArrayAssign { name, .. } => format!("Array Assign: {}", name),
        NodeKind::Call { name, .. } => format!("Call: {}", name),
        NodeKind::SimpleCompare { name, op, .. } => format!("Compare Statement: {} {}", name, op),
        NodeKind::AddStart { name, op, .. } => format!("Additive Statement: {} {}", name, op),
        NodeKind::MulStart { name, op, .. } => {
            format!("Multiplicative Statement: {} {}", name, op)
        }
        NodeKind::Compare { lhs, op } => format!("Compare: {} {}", lhs, op),
        NodeKind::AddLead { operand } => format!("Additive Expression: {}", operand),
        NodeKind::MulLead { operand } => format!("Multiplicative Expression: {}", operand),
        NodeKind::Op { op, tag: Some(tag) } => format!("Operator: {} ({:?})", op, tag),
        NodeKind::Op { op, tag: None } => format!("Operator: {}", op),
        NodeKind::Index { name, .. } => format!("Index: {}", name),
        NodeKind::Group { .. } => "Group".to_string(),
        NodeKind::Const { value } => format!("Constant: {}", value),
        NodeKind::Id { name } => format!("Variable: {}", name),
    }
}
