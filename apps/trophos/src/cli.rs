//! # Trophos CLI Module
//!
//! Flag handling for the trophos binary. Every flag may appear at most
//! once; a malformed command line exits non-zero before any input is read.
//!
//! ## Flags
//!
//! - `-b, --basic` - build the initial web, report, and exit (no menu)
//! - `-d, --debug` - print a full web snapshot after every mutation
//! - `-q, --quiet` - suppress prompts (program output still prints)
//! - `--json` - render reports as JSON instead of text

use clap::Parser;
use std::io;

use crate::repl::{self, Modes};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Trophos - Food Web Analyzer
///
/// Builds a predator/prey food web from interactive input and reports
/// apex predators, producers, trophic heights, and vore types.
#[derive(Parser, Debug)]
#[command(name = "trophos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Read-only: skip the modification menu after the initial build
    #[arg(short, long)]
    pub basic: bool,

    /// Print a full web snapshot after every mutation
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress prompts (program output still prints)
    #[arg(short, long)]
    pub quiet: bool,

    /// Render reports as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Session modes carried by the flags.
    #[must_use]
    pub fn modes(&self) -> Modes {
        Modes {
            basic: self.basic,
            debug: self.debug,
            quiet: self.quiet,
            json: self.json,
        }
    }
}

// =============================================================================
// SESSION EXECUTION
// =============================================================================

/// Run the interactive session against stdin/stdout.
pub fn execute(cli: Cli) -> io::Result<()> {
    let modes = cli.modes();
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run_session(stdin.lock(), &mut stdout.lock(), modes)
}
