use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use scriptparse::{display_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let dump_tokens = args.iter().any(|arg| arg == "--tokens");
    let paths: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let [file_path] = paths.as_slice() else {
        eprintln!("usage: scriptparse [--tokens] <file>");
        return ExitCode::FAILURE;
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path.as_str());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source);
    tracing::info!("Tokenized in {:?}", start.elapsed());

    if dump_tokens {
        for token in tokens.iter() {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let parsed = parse(tokens);
    tracing::info!("Parsed in {:?}", parse_start.elapsed());

    match parsed {
        Ok(ast) => {
            println!("{}", ast);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", display_error(&error, &source, file_name));
            ExitCode::FAILURE
        }
    }
}
