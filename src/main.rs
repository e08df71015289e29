//! astdoc: print the documentation of the first function in a clang JSON
//! AST dump.
//!
//! Produce a dump with `clang -Xclang -ast-dump=json -fparse-all-comments
//! -fsyntax-only header.h > header.json`, then:
//!
//! - **file mode**: `astdoc header.json`
//! - **stdin mode**: `clang ... | astdoc`

use anyhow::{Context, Result};
use astdoc::ast::{self, TranslationUnitDecl};
use astdoc::{render, Summary};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "astdoc",
    version,
    about = "Extract parameter documentation and size annotations from clang JSON AST dumps"
)]
struct Cli {
    /// AST dump to read. If omitted or "-", reads from stdin.
    file: Option<PathBuf>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;
    let input = read_input(cli.file.as_deref())?;

    let root = ast::parse(&input)
        .with_context(|| format!("failed to parse {}", source_name(&cli)))?;
    let unit = TranslationUnitDecl::new(&root)?;
    tracing::info!(functions = unit.functions().len(), "decoded translation unit");

    let summary = Summary::from_unit(&unit)?;
    print!("{}", renderer.render(&summary)?);
    Ok(())
}

/// Read the whole dump from a file, or from stdin when no path (or "-") is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn source_name(cli: &Cli) -> String {
    match cli.file.as_deref() {
        Some(p) if p != Path::new("-") => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Log to stderr so stdout carries only the rendered output.
fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
