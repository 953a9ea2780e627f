//! フロントエンドのメイン処理モジュール
//!
//! このモジュールは、字句解析から構文解析・式の再構成までのパイプラインを管理し、
//! 発生したエラーを診断情報として蓄積する機能を提供します。

use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use log::debug;
use std::fs;
use std::path::Path;

use crate::ast::{ExprTree, Node, NodeKind, Program};
use crate::error::{CminusError, CminusResult, ErrorCollector, LexerError};
use crate::lexer::{Lexer, Token, TokenBuffer};
use crate::parser::Parser;

/// コンパイル状態を管理する構造体
pub struct CompilationState {
    pub source_file: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
}

impl CompilationState {
    /// 新しいコンパイル状態を作成
    pub fn new<P: AsRef<Path>>(source_file: P) -> CminusResult<Self> {
        let source_file_str = source_file.as_ref().display().to_string();
        let source = fs::read_to_string(source_file.as_ref())
            .map_err(|e| CminusError::Io(format!("Failed to read source file: {}", e)))?;

        Ok(Self::new_from_string(&source_file_str, source))
    }

    /// 文字列からコンパイル状態を作成（テスト用）
    pub fn new_from_string(filename: &str, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(filename.to_string(), source.clone());

        Self {
            source_file: filename.to_string(),
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
        }
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: impl Into<CminusError>) {
        self.error_collector.add_error(error, self.file_id);
    }

    /// 診断情報を標準エラーに報告
    pub fn report_diagnostics(&self) -> CminusResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let mut lock = writer.lock();
        self.emit_diagnostics(&mut lock)
    }

    /// 診断情報を任意の出力先に書き出す
    pub fn emit_diagnostics(&self, writer: &mut dyn WriteColor) -> CminusResult<()> {
        let config = codespan_reporting::term::Config::default();

        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic(&self.files);
            codespan_reporting::term::emit(writer, &config, &self.files, &diagnostic)
                .map_err(|e| CminusError::Io(format!("Failed to emit diagnostic: {}", e)))?;
        }

        Ok(())
    }

    /// エラーがあるかチェック
    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    /// エラー数を取得
    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }
}

/// フロントエンドのパイプライン
pub struct CompilationPipeline {
    state: CompilationState,
}

impl CompilationPipeline {
    /// 新しいパイプラインを作成
    pub fn new(state: CompilationState) -> Self {
        Self { state }
    }

    /// コンパイル状態への参照を取得
    pub fn state(&self) -> &CompilationState {
        &self.state
    }

    /// 字句解析を実行
    ///
    /// エラーマーカーのトークンはすべてエラーとして記録する。
    pub fn tokenize(&mut self) -> Vec<Token> {
        debug!("step: lexical analysis of {}", self.state.source_file);

        let tokens = Lexer::new(&self.state.source).collect_tokens();
        for token in &tokens {
            if let Some(error) = LexerError::from_token(token) {
                self.state.add_error(error);
            }
        }

        debug!("{} token(s)", tokens.len());
        tokens
    }

    /// 構文解析を実行
    pub fn parse(&mut self, tokens: Vec<Token>) -> Option<Program> {
        debug!("step: parsing");

        let end_line = self.state.source.matches('\n').count() as u32 + 1;
        let mut parser = Parser::new(TokenBuffer::new(tokens, end_line));
        match parser.parse() {
            Ok(program) => Some(program),
            Err(e) => {
                self.state.add_error(e);
                None
            }
        }
    }

    /// すべての式チェーンを式木に再構成できるか確認する
    pub fn check_expressions(&mut self, program: &Program) -> bool {
        debug!("step: expression reconstruction");

        let mut ok = true;
        for result in expression_trees(program) {
            if let Err(e) = result {
                self.state.add_error(e);
                ok = false;
            }
        }
        ok
    }

    /// エラーレポートを生成
    pub fn report_errors(&self) -> CminusResult<()> {
        self.state.report_diagnostics()?;

        if self.state.has_errors() {
            eprintln!(
                "\nerror: {} error(s) found in {}",
                self.state.error_count(),
                self.state.source_file
            );
        }

        Ok(())
    }

    /// パイプライン全体を実行
    ///
    /// 字句エラーがあれば構文解析は行わない。診断情報の報告は呼び出し側に任せる。
    pub fn run(&mut self) -> Option<Program> {
        let tokens = self.tokenize();
        if self.state.has_errors() {
            return None;
        }

        let program = self.parse(tokens)?;
        if !self.check_expressions(&program) {
            return None;
        }

        Some(program)
    }
}

/// プログラム中の式を持つ文をすべて式木に変換する（行番号付き）
pub fn expression_trees(program: &Program) -> Vec<CminusResult<(u32, ExprTree)>> {
    let mut out = Vec::new();
    for declaration in program.declarations() {
        collect_trees(declaration, &mut out);
    }
    out
}

fn collect_trees(node: &Node, out: &mut Vec<CminusResult<(u32, ExprTree)>>) {
    let has_expression = match &node.kind {
        NodeKind::Return { value } => value.is_some(),
        NodeKind::Assign { .. }
        | NodeKind::ArrayAssign { .. }
        | NodeKind::While { .. }
        | NodeKind::If { .. }
        | NodeKind::SimpleCompare { .. }
        | NodeKind::AddStart { .. }
        | NodeKind::MulStart { .. } => true,
        _ => false,
    };

    if has_expression {
        out.push(
            ExprTree::from_statement(node)
                .map(|tree| (node.line, tree))
                .map_err(CminusError::from),
        );
    }
    if let NodeKind::ArrayAssign { index, .. } = &node.kind {
        out.push(
            ExprTree::from_chain(index)
                .map(|tree| (node.line, tree))
                .map_err(CminusError::from),
        );
    }

    // 文の子だけを辿る。式チェーンの中は from_statement が処理済み
    match &node.kind {
        NodeKind::Func { body, .. } => collect_trees(body, out),
        NodeKind::Compound {
            statements: Some(statements),
            ..
        } => {
            for statement in statements.siblings() {
                collect_trees(statement, out);
            }
        }
        NodeKind::While { body, .. } => collect_trees(body, out),
        NodeKind::If {
            then_branch,
            else_branch,
            ..
        } => {
            collect_trees(then_branch, out);
            if let Some(else_branch) = else_branch {
                collect_trees(else_branch, out);
            }
        }
        _ => {}
    }
}
