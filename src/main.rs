//! CLI entry point for pkgtree

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use pkgtree::{
    DEFAULT_EXCLUDES, DEFAULT_PATTERN, Mode, Outcome, OutputConfig, WalkerConfig,
    print_package_structure,
};

#[derive(Parser, Debug)]
#[command(name = "pkgtree")]
#[command(about = "Print the package structure of a project")]
#[command(version)]
struct Args {
    /// Root directory of the project
    root: PathBuf,

    /// Output mode
    #[arg(value_enum, default_value_t = Mode::Indented)]
    mode: Mode,

    /// Filter files by wildcard pattern (e.g. '*.java')
    #[arg(long = "filter", default_value = DEFAULT_PATTERN)]
    filter: String,

    /// Also export the structure to this file
    #[arg(long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Folder or file names to exclude at every level (last --exclude wins)
    #[arg(
        long = "exclude",
        value_name = "NAME",
        num_args = 0..,
        default_values = DEFAULT_EXCLUDES,
        overrides_with = "exclude"
    )]
    exclude: Vec<String>,

    /// Increase log verbosity (-v info, -vv shows skipped folders, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Color stays on unless disabled by flag or NO_COLOR (https://no-color.org/).
fn should_use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none()
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let walker_config = WalkerConfig::new(&args.filter, args.exclude).unwrap_or_else(|e| {
        eprintln!("pkgtree: {}", e);
        process::exit(1);
    });

    let output_config = OutputConfig {
        mode: args.mode,
        use_color: should_use_color(args.no_color),
        output_file: args.output,
    };

    match print_package_structure(&args.root, &walker_config, &output_config) {
        Ok(Outcome::InvalidRoot) => {
            tracing::info!(root = %args.root.display(), "nothing to print");
        }
        Ok(Outcome::Rendered { exported }) => {
            if let Some(path) = exported {
                tracing::info!(path = %path.display(), "export written");
            }
        }
        Err(e) => {
            eprintln!("pkgtree: {}", e);
            process::exit(1);
        }
    }
}
