use std::{fs, path::PathBuf};

use clap::Parser;
use fog::{fmt::render_bindings, run_source};

/// fog is a small, expression-oriented programming language with typed
/// bindings, lambdas, tuples, and first-class type values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file to interpret.
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.path.display());
        std::process::exit(1);
    });

    match run_source(&source) {
        Ok(interpreter) => print!("{}", render_bindings(&interpreter)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
