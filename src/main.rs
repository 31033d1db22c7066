//! CLI entry point for lsr

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lsr::{Collator, ListConfig, OutputFormat, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List directory contents the way ls does")]
#[command(version)]
struct Args {
    /// Paths to list
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Use the long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S')]
    sort_by_size: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,
}

fn main() {
    let args = Args::parse();

    // ls collates with the user's locale; apply it before any sorting.
    lsr::init_locale();

    let config = ListConfig {
        show_hidden: args.all,
        order: if args.sort_by_size {
            SortOrder::BySize
        } else {
            SortOrder::ByName
        },
        format: if args.long {
            OutputFormat::Long
        } else {
            OutputFormat::Short
        },
        recursive: args.recursive,
        roots: args.paths,
        collator: Collator::Locale,
        layout_width: lsr::detect_layout_width(),
    };

    match lsr::ls_string(&config) {
        Ok(output) => {
            if io::stdout().write_all(output.as_bytes()).is_err() {
                process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("lsr: {}", e);
            process::exit(e.exit_code());
        }
    }
}
