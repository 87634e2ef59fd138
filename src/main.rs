//! CLI entry point for dirscribe

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirscribe::{OutputConfig, RenderTarget, SortOrder, WalkerConfig, render_to_file, run_menu};

/// Exit status when the interactive menu answer is not 1, 2 or 3.
const EXIT_INVALID_CHOICE: i32 = 3;

#[derive(Parser, Debug)]
#[command(name = "dirscribe")]
#[command(about = "Write a directory's structure to a text file as a tree diagram")]
#[command(version)]
struct Args {
    /// Directory to render (prompts interactively when omitted)
    input_folder: Option<PathBuf>,

    /// Output file path [default: INPUT_FOLDER/structure.md]
    #[arg(short = 'o', long = "output-file", alias = "output_file", value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Keep the filesystem's listing order instead of sorting by name
    #[arg(long = "unsorted")]
    unsorted: bool,

    /// List symlinked directories without descending into them
    #[arg(long = "no-follow-symlinks")]
    no_follow_symlinks: bool,

    /// Append '/' to directory names
    #[arg(long = "mark-dirs")]
    mark_dirs: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let target = match args.input_folder {
        Some(ref folder) => match args.output_file {
            Some(ref output) => RenderTarget::new(folder, output),
            None => RenderTarget::for_folder(folder),
        },
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match run_menu(&mut stdin.lock(), &mut stdout) {
                Ok(Some(target)) => target,
                Ok(None) => {
                    println!("Invalid choice. Exiting.");
                    process::exit(EXIT_INVALID_CHOICE);
                }
                Err(e) => {
                    eprintln!("dirscribe: error reading input: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    tracing::debug!(?target, "resolved render target");

    let walker_config = WalkerConfig {
        sort: if args.unsorted {
            SortOrder::Filesystem
        } else {
            SortOrder::Name
        },
        follow_symlinks: !args.no_follow_symlinks,
    };
    let output_config = OutputConfig {
        mark_dirs: args.mark_dirs,
    };

    if let Err(e) = render_to_file(&target.root, &target.output, walker_config, output_config) {
        eprintln!("dirscribe: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirscribe={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
