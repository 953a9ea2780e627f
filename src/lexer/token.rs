//! トークン定義

use logos::{Filter, Logos};
use std::fmt;

use crate::ast::{BinaryOp, ExpType};

/// C-Minusのトークン種別
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\f]+")] // 空白文字をスキップ（改行以外）
pub enum TokenKind {
    // 予約語
    #[token("int")]
    Int,
    #[token("void")]
    Void,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("read")]
    Read,
    #[token("write")]
    Write,

    // 識別子と数値リテラル
    #[regex(r"[a-zA-Z]+")]
    Id,
    #[regex(r"[0-9]+")]
    Num,

    // 数字と英字が混ざった字句
    #[regex(r"[0-9]+[a-zA-Z][a-zA-Z0-9]*")]
    #[regex(r"[a-zA-Z]+[0-9][a-zA-Z0-9]*")]
    LexError,

    // 演算子
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // デリミタ
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // 特殊トークン
    #[token("\n")]
    Newline,

    // コメント。閉じられていないものは入力の終わりまで読み飛ばしてエラーにする
    #[token("/*", block_comment)]
    CommentError,

    // 認識できない文字
    Error,

    // 入力の終わり
    Eof,
}

/// ブロックコメントを読み飛ばす
fn block_comment(lex: &mut logos::Lexer<TokenKind>) -> Filter<()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Filter::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            Filter::Emit(())
        }
    }
}

impl TokenKind {
    /// 型指定子（`int` / `void`）かどうか
    pub fn type_specifier(self) -> Option<ExpType> {
        match self {
            TokenKind::Int => Some(ExpType::Integer),
            TokenKind::Void => Some(ExpType::Void),
            _ => None,
        }
    }

    /// 二項演算子に対応するトークンなら演算子を返す
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::Divide),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::Le),
            TokenKind::GtEq => Some(BinaryOp::Ge),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::Ne),
            _ => None,
        }
    }

    /// 字句エラーを表すトークンかどうか
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::LexError | TokenKind::Error | TokenKind::CommentError
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::Void => write!(f, "'void'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Read => write!(f, "'read'"),
            TokenKind::Write => write!(f, "'write'"),
            TokenKind::Id => write!(f, "identifier"),
            TokenKind::Num => write!(f, "number"),
            TokenKind::LexError => write!(f, "malformed lexeme"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::LtEq => write!(f, "'<='"),
            TokenKind::GtEq => write!(f, "'>='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::LeftBracket => write!(f, "'['"),
            TokenKind::RightBracket => write!(f, "']'"),
            TokenKind::LeftBrace => write!(f, "'{{'"),
            TokenKind::RightBrace => write!(f, "'}}'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::CommentError => write!(f, "unterminated comment"),
            TokenKind::Error => write!(f, "unrecognized token"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

/// 行番号付きトークン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// 入力終端トークン
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}
