//! Tailor CLI
//!
//! Corpus-trained whitespace formatter.

use tailorc::commands::{
    run_diff, run_features, run_format, DiffOptions, FeaturesOptions, FormatOptions,
};
use tailorc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let rest = &args[2..];
    let wants_help = rest.iter().any(|a| a == "--help" || a == "-h");

    let result = match args[1].as_str() {
        "format" => {
            if wants_help {
                print_format_help();
                return;
            }
            FormatOptions::parse(rest).and_then(|options| run_format(&options))
        }
        "diff" => {
            if wants_help {
                print_diff_help();
                return;
            }
            DiffOptions::parse(rest).and_then(|options| run_diff(&options))
        }
        "features" => {
            if wants_help {
                print_features_help();
                return;
            }
            FeaturesOptions::parse(rest).and_then(|options| run_features(&options))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("tailor {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        if matches!(e, CliError::Usage(_)) {
            eprintln!("Run 'tailor {} --help' for usage", args[1]);
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Tailor - corpus-trained whitespace formatter");
    println!();
    println!("Usage: tailor <command> [options]");
    println!();
    println!("Commands:");
    println!("  format <corpus-dir> <file>      Format a file in the style of a corpus");
    println!("  diff <a> <b>                    Whitespace divergence of two files");
    println!("  features <corpus-dir> <out.csv> Dump corpus feature vectors as CSV");
    println!("  help                            Show this help message");
    println!("  version                         Show version information");
    println!();
    println!("Logging:");
    println!("  Set TAILOR_LOG (or RUST_LOG), e.g. TAILOR_LOG=tailor_fmt=debug");
}

fn print_format_help() {
    println!("Format a file in the style of a corpus");
    println!();
    println!("Usage: tailor format <corpus-dir> <file> [options]");
    println!();
    println!("Options:");
    println!("  --ext=<ext>        Corpus file extension (default: java)");
    println!("  --tab-width=<n>    Tab stop for tab expansion (default: 4)");
    println!("  --vote=<k>         Majority vote among the k nearest exemplars");
    println!("  --no-parallel      Load and classify on one thread");
    println!("  --show-tokens      Print every classification decision to stderr");
    println!("  --show-files       Print the corpus files that were loaded to stderr");
    println!("  --compare          Report the diff score of the output against the input");
    println!("  -o <path>          Write the output to a file instead of stdout");
    println!();
    println!("Ignore files:");
    println!("  A .tailorignore file in the corpus root excludes paths from training.");
    println!("  Patterns support * (single directory) and ** (any directories).");
    println!("  Default ignores: hidden files (.*), target/");
}

fn print_diff_help() {
    println!("Whitespace divergence of two token-aligned files");
    println!();
    println!("Usage: tailor diff <a> <b> [--tab-width=<n>]");
    println!();
    println!("Prints a score in [0, 1]; 0 means identical whitespace.");
}

fn print_features_help() {
    println!("Dump corpus feature vectors as CSV");
    println!();
    println!("Usage: tailor features <corpus-dir> <out.csv> [options]");
    println!();
    println!("Options:");
    println!("  --ext=<ext>        Corpus file extension (default: java)");
    println!("  --tab-width=<n>    Tab stop for tab expansion (default: 4)");
    println!("  --no-parallel      Load on one thread");
}
