//! 式のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

/// `x = <expr>;` の右辺チェーンを取り出す
fn assigned_chain(expr: &str) -> Vec<NodeKind> {
    let ast = assert_parse_success(&format!("void main(void) {{ x = {}; }}", expr));
    let stmt = function_statements(&ast)[0];
    let [value, _, _] = stmt.children();
    chain_kinds(value.expect("assignment should have a value"))
}

/// `x = <expr>;` の右辺を式木に再構成する
fn reconstructed(expr: &str) -> String {
    let ast = assert_parse_success(&format!("void main(void) {{ x = {}; }}", expr));
    let stmt = function_statements(&ast)[0];
    ExprTree::from_statement(stmt)
        .expect("chain should reconstruct")
        .to_string()
}

fn op(op: BinaryOp, tag: Option<PrecedenceTag>) -> NodeKind {
    NodeKind::Op { op, tag }
}

#[test]
fn test_add_lead_chain() {
    assert_eq!(
        assigned_chain("1 + 2 * 3"),
        vec![
            NodeKind::AddLead {
                operand: Operand::Value(1)
            },
            op(BinaryOp::Add, None),
            NodeKind::Const { value: 2 },
            op(BinaryOp::Multiply, Some(PrecedenceTag::AddThenMul)),
            NodeKind::Const { value: 3 },
        ]
    );
}

#[test]
fn test_mul_lead_chain() {
    assert_eq!(
        assigned_chain("a / b - c"),
        vec![
            NodeKind::MulLead {
                operand: Operand::Name("a".to_string())
            },
            op(BinaryOp::Divide, None),
            NodeKind::Id {
                name: "b".to_string()
            },
            op(BinaryOp::Subtract, Some(PrecedenceTag::MulThenAdd)),
            NodeKind::Id {
                name: "c".to_string()
            },
        ]
    );
}

#[test]
fn test_same_class_operators_are_untagged() {
    let chain = assigned_chain("a + b - c + d");
    let tags: Vec<_> = chain
        .iter()
        .filter_map(|k| match k {
            NodeKind::Op { tag, .. } => Some(*tag),
            _ => None,
        })
        .collect();
    assert_eq!(tags, vec![None, None, None]);
}

#[test]
fn test_alternating_classes_are_tagged() {
    let chain = assigned_chain("a * b + c * d");
    let tags: Vec<_> = chain
        .iter()
        .filter_map(|k| match k {
            NodeKind::Op { tag, .. } => Some(*tag),
            _ => None,
        })
        .collect();
    assert_eq!(
        tags,
        vec![
            None,
            Some(PrecedenceTag::MulThenAdd),
            Some(PrecedenceTag::AddThenMul)
        ]
    );
}

#[test]
fn test_compare_chain() {
    assert_eq!(
        assigned_chain("a + 1 < b"),
        vec![
            NodeKind::AddLead {
                operand: Operand::Name("a".to_string())
            },
            op(BinaryOp::Add, None),
            NodeKind::Const { value: 1 },
            op(BinaryOp::Lt, None),
            NodeKind::Id {
                name: "b".to_string()
            },
        ]
    );
}

#[test]
fn test_operands() {
    let chain = assigned_chain("v[i] + f(a, 2) * (b - 1)");
    let names: Vec<_> = chain.iter().map(|k| k.name()).collect();
    assert_eq!(names, vec!["Index", "Op", "Call", "Op", "Group"]);
}

#[test]
fn test_single_operands() {
    assert_eq!(assigned_chain("42"), vec![NodeKind::Const { value: 42 }]);
    assert_eq!(
        assigned_chain("y"),
        vec![NodeKind::Id {
            name: "y".to_string()
        }]
    );
}

#[test_case("a + b * c", "(a + (b * c))" ; "mul beneath add")]
#[test_case("a * b + c", "((a * b) + c)" ; "mul beneath add on the left")]
#[test_case("a - b - c", "((a - b) - c)" ; "left associative")]
#[test_case("a < b + c * d", "(a < (b + (c * d)))" ; "comparison loosest")]
#[test_case("(a + b) * c", "((a + b) * c)" ; "group")]
#[test_case("v[i + 1] * 2", "(v[(i + 1)] * 2)" ; "index")]
#[test_case("f(a, 1) - 3", "(f(a, 1) - 3)" ; "call")]
fn test_reconstructed_precedence(expr: &str, expected: &str) {
    assert_eq!(reconstructed(expr), expected);
}
