//! 型の定義

use serde::{Deserialize, Serialize};

/// 宣言に付く意味的な型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpType {
    Integer,
    Void,
}

impl std::fmt::Display for ExpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpType::Integer => write!(f, "int"),
            ExpType::Void => write!(f, "void"),
        }
    }
}
