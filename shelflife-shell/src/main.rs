//! ShelfLife Studio - Main entry point
//!
//! Parses command-line arguments and starts the application.
//!
//! # Usage
//!
//! ```bash
//! shelflife-studio --help             # Show help
//! shelflife-studio --dark-mode        # Start in dark mode
//! shelflife-studio --log-level debug  # Enable debug logging
//! ```

mod app;
mod cli;

pub use cli::Args;

use clap::Parser;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Configure logging based on CLI args
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::info!("Starting ShelfLife Studio");
    log::debug!("CLI args: {:?}", args);

    if args.dark_mode {
        log::info!("Dark mode enabled via CLI");
    }

    if let Some(ref url) = args.api_url {
        log::info!("Using backend at {}", url);
    }

    // Store args for app to access
    app::set_cli_args(args);

    // Start the application
    app::app_main();
}
