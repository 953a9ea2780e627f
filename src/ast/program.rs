//! プログラム構造

use serde::{Deserialize, Serialize};

use super::{Node, Siblings};

/// ASTのルート（トップレベル宣言の兄弟チェーンを所有する）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub declarations: Box<Node>,
}

impl Program {
    pub fn new(declarations: Box<Node>) -> Self {
        Self { declarations }
    }

    /// トップレベル宣言を順に返す
    pub fn declarations(&self) -> Siblings<'_> {
        self.declarations.siblings()
    }
}
