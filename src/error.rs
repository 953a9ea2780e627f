//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、C-Minusフロントエンド全体で使用される統一的なエラー型と
//! エラー報告システムを提供します。

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{Files, SimpleFiles};
use std::fmt;
use thiserror::Error;

use crate::ast::BinaryOp;
use crate::lexer::{Token, TokenKind};

/// C-Minusフロントエンドの統一エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CminusError {
    /// レキサーエラー
    #[error("字句解析エラー: {0}")]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error("構文解析エラー: {0}")]
    Parser(#[from] ParserError),

    /// 式チェーンの再構成エラー
    #[error("式の再構成エラー: {0}")]
    Chain(#[from] ChainError),

    /// ファイルI/Oエラー
    #[error("ファイル操作エラー: {0}")]
    Io(String),
}

impl CminusError {
    /// エラーの発生行（分かる場合）
    pub fn line(&self) -> Option<u32> {
        match self {
            CminusError::Lexer(e) => Some(e.line()),
            CminusError::Parser(e) => Some(e.line()),
            CminusError::Chain(e) => e.line(),
            CminusError::Io(_) => None,
        }
    }
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("不正な字句: '{text}'")]
    MalformedLexeme { text: String, line: u32 },

    #[error("認識できない文字: '{text}'")]
    UnrecognizedCharacter { text: String, line: u32 },

    #[error("閉じられていないコメント")]
    UnterminatedComment { line: u32 },
}

impl LexerError {
    /// エラーマーカーのトークンならエラーに変換する
    pub fn from_token(token: &Token) -> Option<Self> {
        let text = token.text.clone();
        let line = token.line;
        match token.kind {
            TokenKind::LexError => Some(LexerError::MalformedLexeme { text, line }),
            TokenKind::Error => Some(LexerError::UnrecognizedCharacter { text, line }),
            TokenKind::CommentError => Some(LexerError::UnterminatedComment { line }),
            _ => None,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            LexerError::MalformedLexeme { line, .. }
            | LexerError::UnrecognizedCharacter { line, .. }
            | LexerError::UnterminatedComment { line } => *line,
        }
    }
}

/// パーサーが期待していたもの
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// 特定のトークン
    Token(TokenKind),
    /// 構文要素（「式」「文」など）
    Construct(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Construct(what) => write!(f, "{}", what),
        }
    }
}

impl From<TokenKind> for Expected {
    fn from(kind: TokenKind) -> Self {
        Expected::Token(kind)
    }
}

/// パーサーエラーの詳細
///
/// どのバリアントも問題のトークンの行番号を持つ。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("{line}行目: {expected}を期待しましたが、{found} '{text}' が見つかりました")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        text: String,
        line: u32,
    },

    #[error("{line}行目: 字句エラーのトークン '{text}' ({found})")]
    LexicalError {
        found: TokenKind,
        text: String,
        line: u32,
    },

    #[error("{line}行目: 整数リテラル '{text}' が範囲外です")]
    InvalidNumber { text: String, line: u32 },

    #[error("{line}行目: 比較演算子は一つの式に一つまでです")]
    ChainedComparison { line: u32 },
}

impl ParserError {
    pub fn line(&self) -> u32 {
        match self {
            ParserError::UnexpectedToken { line, .. }
            | ParserError::LexicalError { line, .. }
            | ParserError::InvalidNumber { line, .. }
            | ParserError::ChainedComparison { line } => *line,
        }
    }
}

/// 式チェーンから式木を組み立てる際のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("{line}行目: {kind}ノードは式の中に現れません")]
    UnexpectedNode { kind: &'static str, line: u32 },

    #[error("演算子 '{op}' の左辺がありません")]
    MissingOperand { op: BinaryOp },

    #[error("式が演算子で終わっています")]
    Empty,

    #[error("被演算子の間に演算子がありません")]
    MissingOperator,
}

impl ChainError {
    pub fn line(&self) -> Option<u32> {
        match self {
            ChainError::UnexpectedNode { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// エラー情報とソースファイルIDの組
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: CminusError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: CminusError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    ///
    /// 行番号が分かるエラーはその行全体にラベルを付ける。
    pub fn to_diagnostic(&self, files: &SimpleFiles<String, String>) -> Diagnostic<usize> {
        let label_message = match &self.error {
            CminusError::Lexer(_) => "ここで字句エラーが発生しました",
            CminusError::Parser(ParserError::LexicalError { .. }) => "不正な字句",
            CminusError::Parser(_) => "ここで構文エラーが発生しました",
            CminusError::Chain(_) => "この式",
            CminusError::Io(_) => "",
        };

        let labels = self
            .error
            .line()
            .and_then(|line| {
                files
                    .line_range(self.file_id, line.saturating_sub(1) as usize)
                    .ok()
            })
            .map(|range| vec![Label::primary(self.file_id, range).with_message(label_message)])
            .unwrap_or_default();

        Diagnostic::error()
            .with_message(self.error.to_string())
            .with_labels(labels)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: impl Into<CminusError>, file_id: usize) {
        self.errors.push(DiagnosticError::new(error.into(), file_id));
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    /// 最初のエラーを取得
    pub fn first_error(&self) -> Option<&DiagnosticError> {
        self.errors.first()
    }
}

/// Result型のエイリアス
pub type CminusResult<T> = Result<T, CminusError>;

impl From<std::io::Error> for CminusError {
    fn from(e: std::io::Error) -> Self {
        CminusError::Io(e.to_string())
    }
}
