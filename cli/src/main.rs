mod formatter;
mod interactive;

use abacus::{Engine, Theme, ThemeSet};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "A keypad calculator with an explicit expression engine.")]
#[command(
    long_about = "Abacus evaluates arithmetic expressions through an explicit grammar with standard operator precedence.\nUse `eval` for one-shot computation or `repl` for an interactive keypad."
)]
#[command(version)]
struct Cli {
    /// Themes document (JSON); missing or malformed documents are silently
    /// ignored and the default styling stays in effect
    #[arg(long, global = true, value_name = "FILE")]
    themes: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    ///
    /// Accepts the keypad syntax: digits, + - * / ( ) . and N% groups.
    /// Prints "Error" and exits non-zero when the expression does not
    /// evaluate.
    Eval {
        /// Expression to evaluate, e.g. "2+3*4"
        expression: String,
    },
    /// Interactive keypad
    ///
    /// Digits and operators type directly; Enter evaluates, Backspace
    /// deletes, % converts the trailing number, c clears, Esc or q quits.
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let theme = load_theme(cli.themes.as_deref());

    match cli.command {
        Commands::Eval { expression } => eval_once(&expression, theme.as_ref()),
        Commands::Repl => interactive::run(theme).await,
    }
}

fn eval_once(expression: &str, theme: Option<&Theme>) -> Result<()> {
    match Engine::new().compute(expression) {
        Ok(value) => {
            println!(
                "{}",
                formatter::paint(&value.to_string(), theme, formatter::RESULT_COLOR)
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("abacus: {}", err);
            println!("{}", formatter::paint("Error", theme, formatter::ERROR_COLOR));
            std::process::exit(1);
        }
    }
}

/// The calculator works unstyled; any failure to read, parse, or select a
/// theme is swallowed here.
fn load_theme(path: Option<&Path>) -> Option<Theme> {
    let json = fs::read_to_string(path?).ok()?;
    ThemeSet::parse(&json).ok()?.select()
}
