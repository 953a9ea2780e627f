//! 演算子と優先順位タグの定義

use serde::{Deserialize, Serialize};

/// 二項演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

/// 演算子の種類（優先順位のクラス）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpClass {
    Relational,
    Additive,
    Multiplicative,
}

impl BinaryOp {
    pub fn class(self) -> OpClass {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => OpClass::Additive,
            BinaryOp::Multiply | BinaryOp::Divide => OpClass::Multiplicative,
            BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::Le
            | BinaryOp::Ge
            | BinaryOp::Eq
            | BinaryOp::Ne => OpClass::Relational,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
        }
    }
}

impl OpClass {
    /// 結合の強さ。大きいほど先に評価される
    pub fn binding_power(self) -> u8 {
        match self {
            OpClass::Relational => 1,
            OpClass::Additive => 2,
            OpClass::Multiplicative => 3,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 演算子ノードに付く優先順位タグ
///
/// 直前の演算子とクラスが変わった算術演算子にだけ付く。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecedenceTag {
    /// 乗除算（または比較）の後に現れた加減算
    MulThenAdd,
    /// 加減算（または比較）の後に現れた乗除算
    AddThenMul,
}

impl PrecedenceTag {
    /// 直前の演算子クラスと今回のクラスからタグを決める
    pub fn between(previous: Option<OpClass>, current: OpClass) -> Option<Self> {
        match (previous, current) {
            (_, OpClass::Relational) | (None, _) => None,
            (Some(prev), cur) if prev == cur => None,
            (Some(_), OpClass::Additive) => Some(PrecedenceTag::MulThenAdd),
            (Some(_), OpClass::Multiplicative) => Some(PrecedenceTag::AddThenMul),
        }
    }
}
