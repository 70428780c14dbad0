use std::{
    env,
    fs,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use interpreter::{
    errors::errors::Error,
    repl::{self, ReplOptions, PROMPT},
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "interpreter")]
#[command(version = "0.1.0")]
#[command(about = "Tokenizer for a small C-like toy language", long_about = None)]
struct Cli {
    /// Tokenize this file instead of starting the interactive prompt
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Report illegal characters as errors
    #[arg(long)]
    strict: bool,

    /// Prompt shown before each line
    #[arg(long, default_value = PROMPT)]
    prompt: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.input.as_deref() {
        Some(path) => run_file(path),
        None => run_repl(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_file(path: &Path) -> Result<(), Error> {
    info!(path = %path.display(), "tokenizing file");

    let source = fs::read(path)?;
    repl::dump(&source, io::stdout().lock())
}

fn run_repl(cli: &Cli) -> Result<(), Error> {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"));

    println!("Hello {}! This is the simple interpretator of the language!", user);
    println!("Feel free to type in commands");

    let options = ReplOptions {
        prompt: cli.prompt.clone(),
        strict: cli.strict,
    };

    repl::start(io::stdin().lock(), io::stdout().lock(), &options)
}
