use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

use clap::Parser;
use rpncalc::{process_line, run};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates Reverse Polish Notation expressions, one per line, and
/// prints one result or `ERROR:` line for each.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression instead of reading a stream. May be repeated.
    #[arg(short, long = "expr", value_name = "EXPR", allow_hyphen_values = true)]
    exprs: Vec<String>,

    /// File to read expressions from. Reads standard input when omitted or
    /// `-`.
    input: Option<PathBuf>,
}

fn init_tracing() {
    // Only install a subscriber if RUST_LOG is set, so stdout stays clean.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                                 .with_writer(io::stderr)
                                 .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let result = if args.exprs.is_empty() {
        match args.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              path.display());
                    std::process::exit(1);
                });
                run(BufReader::new(file), io::stdout().lock()).map(|_| ())
            },
            _ => run(io::stdin().lock(), io::stdout().lock()).map(|_| ()),
        }
    } else {
        let mut out = io::stdout().lock();
        args.exprs
            .iter()
            .try_for_each(|expr| writeln!(out, "{}", process_line(expr)))
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
