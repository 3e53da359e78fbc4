use std::fs;
use std::io::{self, Read, Write};

use aapath::FindOptions;
use facet::Facet;
use facet_args as args;
use tracing_subscriber::EnvFilter;

/// Walk the route drawn in an ASCII art diagram
#[derive(Facet, Debug)]
struct Args {
    /// Input file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[facet(default, args::named, args::short = 'o')]
    output: Option<String>,

    /// Fail if the diagram has more than one end marker
    #[facet(args::named)]
    unique_end: bool,

    /// Fail on characters other than @ x - | + A-Z and space
    #[facet(args::named)]
    strict: bool,

    /// Give up after this many steps
    #[facet(default, args::named)]
    max_steps: Option<usize>,

    /// Log each validation step to stderr
    #[facet(args::named, args::short = 'v')]
    verbose: bool,
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let default_level = if args.verbose { "aapath=debug" } else { "aapath=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let input = match &args.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(1);
            });
            buf
        }
    };

    let mut options = FindOptions::new()
        .with_unique_end(args.unique_end)
        .with_strict_charset(args.strict);
    if let Some(max_steps) = args.max_steps {
        options = options.with_max_steps(max_steps);
    }

    let route = aapath::find_path_with_options(&input, &options).unwrap_or_else(|e| {
        eprintln!("Invalid diagram: {e}");
        std::process::exit(2);
    });
    let report = format!("{route}\n");

    match &args.output {
        Some(path) => {
            fs::write(path, &report).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => {
            io::stdout().write_all(report.as_bytes()).unwrap_or_else(|e| {
                eprintln!("Failed to write stdout: {}", e);
                std::process::exit(1);
            });
        }
    }
}
