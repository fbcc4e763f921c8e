mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use ibe_lexer::Lexer;
use ibe_syntax::error::Error;
use ibe_syntax::{Token, Violation};
use ibe_validator::{Options, Validator};

#[derive(Parser, Debug)]
#[command(name = "ibe", version, about = "Check IBE programs against the language grammar")]
struct Cli {
    /// Source file to check (a JSON token dump with --tokens)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Read FILE as a JSON array of tokens instead of source text
    #[arg(long)]
    tokens: bool,

    /// Reject anything after the closing `End` (also enabled by IBE_STRICT=1)
    #[arg(long)]
    strict: bool,

    /// Print the outcome as a JSON object on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Everything that can come out of checking one file.
enum Outcome {
    Accepted,
    LexError(Error),
    Rejected(Violation),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => false,
    }
}

fn render_error(kind: &str, source: Option<&str>, err: &Error) {
    eprintln!("{}: {}", kind.red().bold(), err.msg.red());
    let Some((line, col)) = err.span() else {
        return;
    };
    eprintln!("  --> line {}, column {}", line, col);
    if let Some(src_line) = source.and_then(|s| s.lines().nth(line - 1)) {
        let line_num_str = format!("{:3} | ", line);
        eprintln!("     |");
        eprintln!("{}{}", line_num_str.bright_black(), src_line);

        let mut marker = String::new();
        marker.push_str(&" ".repeat(line_num_str.len()));
        if col > 1 {
            marker.push_str(&" ".repeat(col - 1));
        }
        marker.push('^');
        eprintln!("{}{}", marker.red(), " error here".red());
        eprintln!("     |");
    }
}

fn load_tokens(path: &Path, text: &str) -> Result<Vec<Token>> {
    serde_json::from_str(text).with_context(|| format!("Invalid token file {}", path.display()))
}

fn check(cli: &Cli, tokens: &[Token]) -> Outcome {
    let options = Options::new().strict_end(cli.strict || env_flag("IBE_STRICT"));
    match Validator::new(tokens).with_options(options).run() {
        Ok(()) => Outcome::Accepted,
        Err(violation) => {
            tracing::debug!(file = %cli.file.display(), "validation failed");
            Outcome::Rejected(violation)
        }
    }
}

fn report_json(file: &Path, outcome: &Outcome) -> Result<()> {
    let file = file.display().to_string();
    let doc = match outcome {
        Outcome::Accepted => json!({ "file": file, "status": "accepted" }),
        Outcome::LexError(e) => json!({
            "file": file,
            "status": "lex-error",
            "message": e.msg,
            "line": e.line,
            "col": e.col,
        }),
        Outcome::Rejected(v) => json!({
            "file": file,
            "status": "rejected",
            "message": v.to_string(),
            "expected": v.expected.to_string(),
            "found": v.found,
        }),
    };
    println!("{}", serde_json::to_string(&doc)?);
    Ok(())
}

fn report_human(file: &Path, source: Option<&str>, outcome: &Outcome) {
    match outcome {
        Outcome::Accepted => println!("{}: {}", file.display(), "ok".green()),
        Outcome::LexError(e) => render_error("Lex error", source, e),
        Outcome::Rejected(v) => {
            render_error("Syntax error", source, &v.to_error());
            common::provide_error_suggestions(v);
        }
    }
}

/// Returns whether the file was accepted.
fn run(cli: &Cli) -> Result<bool> {
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let (outcome, source) = if cli.tokens {
        let tokens = load_tokens(&cli.file, &text)?;
        (check(cli, &tokens), None)
    } else {
        let mut lexer = Lexer::new(&text);
        match lexer.tokenize() {
            Ok(tokens) => (check(cli, &tokens), Some(text.as_str())),
            Err(e) => (Outcome::LexError(e), Some(text.as_str())),
        }
    };

    if cli.json {
        report_json(&cli.file, &outcome)?;
    } else {
        report_human(&cli.file, source, &outcome);
    }
    Ok(matches!(outcome, Outcome::Accepted))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{:#}", e).red());
            ExitCode::from(2)
        }
    }
}
