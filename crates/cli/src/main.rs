//! Command line radiopharmaceutical reference and decay calculator
//!
//! ```text
//! nukmed decay Tc-99m --activity 740 --hours 3 --target 185
//! nukmed catalog --catalog radiopharmaka.json --search psma --sort half-life
//! nukmed nuclides --catalog radiopharmaka.json
//! ```

// Split into subfiles for development
mod cli;
mod commands;
mod error;
mod render;

// external crates
use clap::Parser;
use log::debug;

// internal modules
use crate::cli::Cli;
use crate::error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli).and_then(|_| commands::run(&cli.command)) {
        report(&e);
        std::process::exit(1);
    }
}

/// Warnings are shown by default, `-v` adds info, debug, and trace
fn init_logging(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .modules([module_path!(), "nukmed_catalog", "nukmed_decay"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .show_module_names(cli.verbose > 1)
        .init()?;

    debug!("{cli:?}");
    Ok(())
}

/// Print an error and everything that caused it
fn report(error: &dyn std::error::Error) {
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
