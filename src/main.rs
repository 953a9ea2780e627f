use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};

use cminus::ast;
use cminus::compiler::{expression_trees, CompilationPipeline, CompilationState};
use cminus::lexer::{format_tokens, tokenize};

#[derive(Parser)]
#[command(name = "cminus")]
#[command(author, version, about = "Parser front end for the C-Minus language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmitType {
    /// Indented tree listing (default)
    #[value(name = "listing")]
    Listing,
    /// The syntax tree as JSON
    #[value(name = "json")]
    Json,
    /// One reconstructed expression tree per line
    #[value(name = "expressions")]
    Expressions,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a C-Minus source file and print its syntax tree
    Parse {
        /// The source file to parse
        input: PathBuf,

        /// What to print
        #[arg(long = "emit", value_enum, default_value = "listing")]
        emit: EmitType,

        /// Dump tokens to stdout before parsing
        #[arg(long)]
        dump_tokens: bool,
    },

    /// Check a C-Minus source file for errors without printing the tree
    Check {
        /// The source file to check
        input: PathBuf,
    },

    /// Print the token stream of a C-Minus source file
    Tokens {
        /// The source file to tokenize
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Parse {
            input,
            emit,
            dump_tokens,
        } => parse(input, emit, dump_tokens),
        Commands::Check { input } => check(input),
        Commands::Tokens { input } => tokens(input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Runs the front end and reports diagnostics, failing if there were any
fn run_pipeline(input: &Path) -> Result<ast::Program> {
    let state = CompilationState::new(input)
        .with_context(|| format!("Failed to load {:?}", input))?;
    let mut pipeline = CompilationPipeline::new(state);

    let program = pipeline.run();
    pipeline.report_errors()?;

    match program {
        Some(program) if !pipeline.state().has_errors() => Ok(program),
        _ => anyhow::bail!("Parsing failed"),
    }
}

fn parse(input: PathBuf, emit: EmitType, dump_tokens: bool) -> Result<()> {
    log::info!("Parsing {:?}", input);

    if dump_tokens {
        let source = std::fs::read_to_string(&input)
            .with_context(|| format!("Failed to read source file: {:?}", input))?;
        println!("{}", "=== Tokens ===".blue().bold());
        println!("{}", format_tokens(&tokenize(&source)));
        println!();
    }

    let program = run_pipeline(&input)?;

    match emit {
        EmitType::Listing => print!("{}", ast::render(&program)),
        EmitType::Json => println!("{}", serde_json::to_string_pretty(&program)?),
        EmitType::Expressions => {
            for result in expression_trees(&program) {
                let (line, tree) = result?;
                println!("{:4}: {}", line, tree);
            }
        }
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    log::info!("Checking {:?}", input);

    run_pipeline(&input)?;

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}

fn tokens(input: PathBuf) -> Result<()> {
    let source = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read source file: {:?}", input))?;

    println!("{}", format_tokens(&tokenize(&source)));
    Ok(())
}
