//! レキサーのメイン実装

use logos::{Lexer as LogosLexer, Logos};

use super::source::TokenSource;
use super::token::{Token, TokenKind};

/// C-Minusのレキサー
///
/// 改行トークンもそのまま返す。読み飛ばしはパーサー側のカーソルが行う。
pub struct Lexer<'a> {
    inner: LogosLexer<'a, TokenKind>,
    line: u32,
    offset: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            line: 1,
            offset: 0,
            finished: false,
        }
    }

    /// バイト位置`offset`の行番号を求める（前回位置からの差分だけ数える）
    fn line_at(&mut self, offset: usize) -> u32 {
        let source = self.inner.source();
        let newlines = source[self.offset..offset]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.line += newlines as u32;
        self.offset = offset;
        self.line
    }

    /// すべてのトークンを収集（終端トークンは含まない）
    pub fn collect_tokens(self) -> Vec<Token> {
        self.collect()
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(result) => {
                let span = self.inner.span();
                let line = self.line_at(span.start);
                let kind = result.unwrap_or(TokenKind::Error);
                Token::new(kind, self.inner.slice(), line)
            }
            None => {
                let end = self.inner.source().len();
                Token::eof(self.line_at(end))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

/// ソースコードをトークン化
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect_tokens()
}

/// デバッグ用：トークンストリームを文字列として出力
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Newline)
        .map(|t| format!("{:4}: {:<20} {}", t.line, t.kind.to_string(), t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
