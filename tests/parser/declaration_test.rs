//! 宣言のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("int x;", ExpType::Integer ; "int variable")]
#[test_case("void x;", ExpType::Void ; "void variable")]
fn test_variable_declaration(source: &str, ty: ExpType) {
    let ast = assert_parse_success(source);
    let decl = &ast.declarations;

    assert_eq!(
        decl.kind,
        NodeKind::Var {
            name: "x".to_string(),
            ty
        }
    );
    assert_eq!(decl.children(), [None, None, None]);
    assert!(decl.sibling.is_none());
}

#[test]
fn test_array_declaration() {
    let ast = assert_parse_success("int table[10];");
    assert_eq!(
        ast.declarations.kind,
        NodeKind::Arr {
            name: "table".to_string(),
            ty: ExpType::Integer,
            size: 10
        }
    );
}

#[test]
fn test_function_with_void_parameters() {
    let ast = assert_parse_success("void main(void) { }");
    let [params, body, _] = ast.declarations.children();

    let params = params.expect("function should have a parameter chain");
    assert_eq!(params.kind, NodeKind::VoidParam);
    assert_eq!(params.siblings().count(), 1);
    assert!(matches!(
        body.map(|b| &b.kind),
        Some(NodeKind::Compound { .. })
    ));
}

#[test_case("int f(int a) { }", 1 ; "one parameter")]
#[test_case("int f(int a, int b[]) { }", 2 ; "array parameter")]
#[test_case("int f(int a, int b, int c, int d) { }", 4 ; "four parameters")]
fn test_parameter_count(source: &str, count: usize) {
    let ast = assert_parse_success(source);
    let [params, _, _] = ast.declarations.children();
    let params = params.expect("function should have a parameter chain");

    assert_eq!(params.siblings().count(), count);
    assert!(params
        .siblings()
        .all(|p| matches!(p.kind, NodeKind::Param { .. })));
}

#[test]
fn test_array_parameter_flag() {
    let ast = assert_parse_success("int sum(int v[], int n) { return n; }");
    let [params, _, _] = ast.declarations.children();

    let flags: Vec<bool> = params
        .into_iter()
        .flat_map(Node::siblings)
        .map(|p| matches!(p.kind, NodeKind::Param { is_array: true, .. }))
        .collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn test_declarations_form_sibling_chain() {
    let ast = assert_parse_success(
        r#"
int count;
int buffer[4];
void reset(void) { count = 0; }
int main(void) { reset(); return count; }
"#,
    );

    let names: Vec<_> = ast.declarations().filter_map(Node::name).collect();
    assert_eq!(names, vec!["count", "buffer", "reset", "main"]);

    let lines: Vec<_> = ast.declarations().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 5]);
}

#[test]
fn test_local_declarations() {
    let ast = assert_parse_success("int main(void) { int i; int a[3]; i = 0; }");
    let [_, body, _] = ast.declarations.children();
    let [locals, statements, _] = body.expect("body").children();

    let locals: Vec<_> = locals.into_iter().flat_map(Node::siblings).collect();
    assert_eq!(locals.len(), 2);
    assert!(matches!(locals[0].kind, NodeKind::Var { .. }));
    assert!(matches!(locals[1].kind, NodeKind::Arr { size: 3, .. }));
    assert_eq!(statements.map(|s| s.siblings().count()), Some(1));
}

#[test]
fn test_declarations_around_comments() {
    let ast = assert_parse_success("int x; /* é */ int y;\n/* 複数\n行 */\nvoid z;");
    let lines: Vec<_> = ast
        .declarations()
        .map(|d| (d.name().map(str::to_string), d.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            (Some("x".to_string()), 1),
            (Some("y".to_string()), 1),
            (Some("z".to_string()), 4),
        ]
    );
}
