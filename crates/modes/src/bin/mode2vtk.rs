//! Convert POD modes in `<MODE_DIR>/mode.bin` to VTK point clouds
//!
//! ```text
//! mode2vtk points.dat ./modes 10
//! ```
//!
//! Writes `./modes/VTK/mode_0.vtu` through `./modes/VTK/mode_9.vtu`.

// standard library
use std::path::PathBuf;
use std::process;

// podtools modules
use podtools_modes::{convert_modes, Result};

// external crates
use clap::Parser;
use log::error;

/// Convert POD modes to VTK point clouds
#[derive(Parser, Debug)]
#[command(name = "mode2vtk", version, about)]
struct Cli {
    /// Point coordinate file (.dat: index x y z, .xy: x y z)
    point_file: PathBuf,

    /// Directory containing mode.bin, output is written to <MODE_DIR>/VTK
    mode_dir: PathBuf,

    /// Number of modes in mode.bin
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    n_modes: u64,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialise logging: {e}");
    }

    if let Err(e) = run(&cli) {
        log_error_chain(&e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // too large to address either way, so let the reader reject it
    let n_modes = usize::try_from(cli.n_modes).unwrap_or(usize::MAX);
    let written = convert_modes(&cli.point_file, &cli.mode_dir, n_modes)?;
    log::debug!("Wrote {:?}", written);
    Ok(())
}

/// Errors always show, info by default, more with -v
fn init_logging(cli: &Cli) -> core::result::Result<(), log::SetLoggerError> {
    let verbosity = if cli.quiet {
        0
    } else {
        2 + cli.verbose as usize
    };

    stderrlog::new()
        .modules([module_path!(), "podtools_modes"])
        .verbosity(verbosity)
        .show_level(false)
        .init()
}

/// Log the error and every underlying cause
fn log_error_chain(e: &dyn std::error::Error) {
    error!("Error: {e}");
    let mut source = e.source();
    while let Some(cause) = source {
        error!("  caused by: {cause}");
        source = cause.source();
    }
}
