//! パーサーへのトークン供給

use super::token::Token;

/// トークンを要求に応じて一つずつ返す供給元
///
/// 入力が尽きた後は`Eof`トークンを返し続けること。
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// 事前に用意したトークン列からの供給元（テストや再解析用）
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: std::vec::IntoIter<Token>,
    last_line: u32,
}

impl TokenBuffer {
    /// 入力終端の行番号を指定して作成
    pub fn new(tokens: Vec<Token>, end_line: u32) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last_line: end_line,
        }
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        let last_line = tokens.last().map(|t| t.line).unwrap_or(1);
        Self {
            tokens: tokens.into_iter(),
            last_line,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        self.tokens
            .next()
            .unwrap_or_else(|| Token::eof(self.last_line))
    }
}
