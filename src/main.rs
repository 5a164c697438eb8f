use clap::{Parser, Subcommand};
use gdir::commands::*;
use gdir::core::print_error;
use std::env;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Policies:
  add overwrites an existing key (with an 'Updated' notice); clear wipes
  bookmarks AND history; hist shows 5 entries before and after the cursor
  by default.

Exit codes:
  0  success
  1  recoverable user error (unknown key/index, history boundary, missing dir)
  2  command-line usage error
  3  internal error (state file could not be written)

Examples:
  gdir add proj ~/code/project
  cd \"$(gdir go proj)\"
  cd \"$(gdir back)\"
  eval \"$(gdir env)\"";

#[derive(Parser)]
#[command(name = "gdir")]
#[command(about = "Directory bookmarks with browser-style history for your shell")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookmarks sorted by key, with their selection positions
    List,
    /// Bookmark a directory under a short key (overwrites an existing key)
    Add {
        /// Bookmark key (must not be empty or numeric)
        key: String,
        /// Directory to bookmark (must exist)
        dir: PathBuf,
    },
    /// Remove a bookmark by key or listing position
    Rm {
        /// Bookmark key or 1-based position from 'gdir list'
        selector: String,
    },
    /// Remove all bookmarks and wipe the history
    Clear {
        /// Skip the interactive confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Print a bookmarked path and record it in history
    Go {
        /// Bookmark key or 1-based position from 'gdir list'
        selector: String,
    },
    /// Move backward in history and print the path landed on
    Back {
        /// Number of steps to move
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Move forward in history and print the path landed on
    Fwd {
        /// Number of steps to move
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Show the history window around the current position
    Hist {
        /// Entries to show before the cursor
        #[arg(long, default_value_t = 5)]
        before: usize,
        /// Entries to show after the cursor
        #[arg(long, default_value_t = 5)]
        after: usize,
    },
    /// Print eval-able PREV/NEXT exports for the adjacent history entries
    Env {
        /// Also export one GDIR_<KEY> variable per bookmark
        #[arg(long)]
        all: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::List => execute_list(),
        Commands::Add { key, dir } => execute_add(&key, &dir),
        Commands::Rm { selector } => execute_rm(&selector),
        Commands::Clear { yes } => execute_clear(yes),
        Commands::Go { selector } => execute_go(&selector),
        Commands::Back { n } => execute_back(n as usize),
        Commands::Fwd { n } => execute_fwd(n as usize),
        Commands::Hist { before, after } => execute_hist(before, after),
        Commands::Env { all } => execute_env(all),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
