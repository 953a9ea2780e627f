//! 文のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

fn wrap(body: &str) -> String {
    format!("void main(void) {{ {} }}", body)
}

#[test]
fn test_assignment() {
    let ast = assert_parse_success(&wrap("x = 5;"));
    let stmts = function_statements(&ast);

    assert_eq!(stmts.len(), 1);
    let NodeKind::Assign { name, value } = &stmts[0].kind else {
        panic!("expected Assign, got {:?}", stmts[0].kind);
    };
    assert_eq!(name, "x");
    assert_eq!(chain_kinds(value), vec![NodeKind::Const { value: 5 }]);
}

#[test]
fn test_array_assignment() {
    let ast = assert_parse_success(&wrap("a[i + 1] = b;"));
    let stmt = function_statements(&ast)[0];

    assert_eq!(stmt.name(), Some("a"));
    let [value, index, _] = stmt.children();
    assert_eq!(
        value.map(chain_kinds),
        Some(vec![NodeKind::Id {
            name: "b".to_string()
        }])
    );
    assert_eq!(index.map(|i| i.siblings().count()), Some(3));
}

#[test]
fn test_call_statement() {
    let ast = assert_parse_success(&wrap("f(1, x, 2);"));
    let stmt = function_statements(&ast)[0];

    assert_eq!(stmt.category(), NodeCategory::Statement);
    let [args, _, _] = stmt.children();
    assert_eq!(
        args.map(chain_kinds),
        Some(vec![
            NodeKind::Const { value: 1 },
            NodeKind::Id {
                name: "x".to_string()
            },
            NodeKind::Const { value: 2 },
        ])
    );
}

#[test]
fn test_expression_statements() {
    let ast = assert_parse_success(&wrap("x + 1; y * 2; z == 0;"));
    let kinds: Vec<_> = function_statements(&ast)
        .into_iter()
        .map(|s| s.kind.name())
        .collect();
    assert_eq!(kinds, vec!["AddStart", "MulStart", "SimpleCompare"]);
}

#[test]
fn test_while_statement() {
    let ast = assert_parse_success(&wrap("while (i < 10) i = i + 1;"));
    let stmt = function_statements(&ast)[0];

    let [condition, body, _] = stmt.children();
    assert!(matches!(
        condition.map(|c| &c.kind),
        Some(NodeKind::Compare { op: BinaryOp::Lt, .. })
    ));
    assert!(matches!(
        body.map(|b| &b.kind),
        Some(NodeKind::Assign { .. })
    ));
}

#[test]
fn test_if_else_statement() {
    let ast = assert_parse_success(&wrap("if (x) { y = 1; } else y = 2;"));
    let stmt = function_statements(&ast)[0];

    let [condition, then_branch, else_branch] = stmt.children();
    assert_eq!(condition.and_then(Node::name), Some("x"));
    assert!(matches!(
        then_branch.map(|b| &b.kind),
        Some(NodeKind::Compound { .. })
    ));
    assert!(matches!(
        else_branch.map(|b| &b.kind),
        Some(NodeKind::Assign { .. })
    ));
}

#[test]
fn test_if_without_else() {
    let ast = assert_parse_success(&wrap("if (x) y = 1;"));
    let [_, _, else_branch] = function_statements(&ast)[0].children();
    assert!(else_branch.is_none());
}

#[test]
fn test_return_statements() {
    let ast = assert_parse_success(&wrap("return; return x * 2;"));
    let stmts = function_statements(&ast);

    assert_eq!(stmts[0].kind, NodeKind::Return { value: None });
    let [value, _, _] = stmts[1].children();
    assert_eq!(value.map(|v| v.siblings().count()), Some(3));
}

#[test]
fn test_nested_compound() {
    let ast = assert_parse_success(&wrap("{ int t; t = 1; { } }"));
    let stmt = function_statements(&ast)[0];

    let [locals, statements, _] = stmt.children();
    assert!(locals.is_some());
    let inner: Vec<_> = statements.into_iter().flat_map(Node::siblings).collect();
    assert_eq!(inner.len(), 2);
    assert_eq!(
        inner[1].kind,
        NodeKind::Compound {
            locals: None,
            statements: None
        }
    );
}

#[test]
fn test_statement_lines() {
    let ast = assert_parse_success("void main(void) {\n  x = 1;\n\n  y = 2;\n}");
    let lines: Vec<_> = function_statements(&ast).iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![2, 4]);
}
