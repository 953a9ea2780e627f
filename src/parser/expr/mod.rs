//! 式チェーンの解析モジュール
//!
//! 式は「被演算子・演算子」が交互に並ぶ兄弟チェーンとして解析する。
//! チェーンごとに `ChainState` を一つ持ち、次に期待する要素の役割と
//! 直前の演算子クラスを記録する。演算子ノードの優先順位タグは
//! この直前のクラスから決まる。

mod chain_expr;
mod operand_expr;

use crate::ast::{Node, OpClass, Operand};

/// 次に期待するチェーン要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::parser) enum Role {
    Operand,
    Operator,
}

/// 一つの式チェーンの解析状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::parser) struct ChainState {
    pub role: Role,
    /// 直前に現れた演算子のクラス
    pub last: Option<OpClass>,
    pub seen_relational: bool,
}

impl ChainState {
    pub fn new() -> Self {
        Self {
            role: Role::Operand,
            last: None,
            seen_relational: false,
        }
    }

    /// 演算子を読み終えた直後から始まるチェーン（`x + ...` の右辺など）
    pub fn after(class: OpClass) -> Self {
        Self {
            role: Role::Operand,
            last: Some(class),
            seen_relational: class == OpClass::Relational,
        }
    }
}

/// 被演算子の解析結果
///
/// 単純な識別子・数値は後続の演算子次第で先頭ノードに畳み込まれるので、
/// ノードにする前の形で返す。
pub(in crate::parser) enum Primary {
    Simple(Operand),
    Complex(Node),
}

impl Primary {
    pub fn into_node(self, line: u32) -> Node {
        match self {
            Primary::Simple(operand) => operand.into_node(line),
            Primary::Complex(node) => node,
        }
    }
}
