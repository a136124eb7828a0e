//! FILENAME: app/src/lib.rs
//! PURPOSE: Application crate wiring the CLI onto the screening engine.
//! CONTEXT: `main.rs` stays thin; everything testable lives here. The
//! session owns the loaded dataset and the derived view state, the cli
//! module parses flags and dispatches subcommands, and logging writes the
//! pipe-delimited diagnostic stream to stderr.

pub mod cli;
pub mod logging;
pub mod session;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use cli::{dispatch, Cli};
pub use session::{ScreenView, ScreenerSession};

// ============================================================================
// ENTRY POINT
// ============================================================================

use clap::Parser;

/// Parse arguments, initialize logging and run the selected subcommand.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    crate::log_debug!("SYS", "KabuScreen v{}", env!("CARGO_PKG_VERSION"));

    if let Err(message) = cli::dispatch(cli) {
        crate::log_error!("SYS", "{}", message);
        std::process::exit(1);
    }
    crate::log_debug!("SYS", "Done in {} ms", logging::elapsed_ms());
}
