use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use lexer::{render_error, tokenize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Tokenize an l1 source file and list its tokens.
#[derive(Parser, Debug)]
#[command(name = "l1-lex", version)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Print only the number of tokens
    #[arg(long)]
    count: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "lexer=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", render_error(&err, &source, &file_name));
            return ExitCode::from(1);
        }
    };
    debug!("Tokenized {} in {:?}", file_name, start.elapsed());

    if cli.count {
        println!("{}", tokens.len());
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    ExitCode::SUCCESS
}
