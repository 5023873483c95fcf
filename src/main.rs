use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, str::FromStr, time::Instant};

use clap::Parser;
use lumen::{display_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Parse a source file and report the first syntax error, if any.
#[derive(clap::Parser)]
#[command(version)]
struct Cli {
    /// Source file to parse
    file: PathBuf,
    /// Print every token before parsing
    #[arg(long)]
    dump_tokens: bool,
}

fn main() -> ExitCode {
    initialize_logging();

    let cli = Cli::parse();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };
    debug!(source_len = source.len(), "read input file");

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };
    info!("Tokenized in {:?}", start.elapsed());

    if cli.dump_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    println!("Parsed {} statement(s)", program.len());

    ExitCode::SUCCESS
}

fn initialize_logging() {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();
    let filter = EnvFilter::from_str(&env_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .init();
}
