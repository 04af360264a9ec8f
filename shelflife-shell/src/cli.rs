//! Command-line interface for ShelfLife Studio
//!
//! Provides CLI argument parsing for configuring the application at startup.
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! shelflife-studio --help
//!
//! # Start with dark mode
//! shelflife-studio --dark-mode
//!
//! # Set log level
//! shelflife-studio --log-level debug
//!
//! # Point at a non-default backend
//! shelflife-studio --api-url http://10.0.0.5:8000
//! ```

use clap::Parser;

/// ShelfLife Studio - food shelf-life assistant
///
/// A GPU-accelerated desktop UI for shelf-life prediction, voice questions,
/// and storage chat, built with Rust and Makepad.
#[derive(Parser, Debug, Clone)]
#[command(name = "shelflife-studio")]
#[command(version)]
#[command(about = "Food shelf-life assistant desktop application", long_about = None)]
pub struct Args {
    /// Base URL of the ShelfLife backend
    ///
    /// Overrides the SHELFLIFE_API_URL environment variable.
    /// Default is http://localhost:8000.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    ///
    /// Overrides the SHELFLIFE_API_TIMEOUT_SECS environment variable.
    /// Default is 30 seconds.
    #[arg(long, value_name = "SECS")]
    pub api_timeout: Option<u64>,

    /// Start in dark mode
    ///
    /// When set, the application starts with dark mode enabled.
    /// This can also be toggled from within the application.
    #[arg(long)]
    pub dark_mode: bool,

    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Window width in pixels
    #[arg(long, default_value = "1400", value_name = "PIXELS")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "900", value_name = "PIXELS")]
    pub height: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            api_url: None,
            api_timeout: None,
            dark_mode: false,
            log_level: "info".to_string(),
            width: 1400,
            height: 900,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::default();
        assert!(args.api_url.is_none());
        assert!(args.api_timeout.is_none());
        assert!(!args.dark_mode);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.width, 1400);
        assert_eq!(args.height, 900);
    }

    #[test]
    fn test_log_filter() {
        let mut args = Args::default();

        args.log_level = "debug".to_string();
        assert_eq!(args.log_filter(), "debug");

        args.log_level = "WARNING".to_string();
        assert_eq!(args.log_filter(), "warn");

        args.log_level = "bogus".to_string();
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn test_parse_api_args() {
        let args = Args::parse_from([
            "shelflife-studio",
            "--api-url",
            "http://10.0.0.5:8000/",
            "--api-timeout",
            "5",
            "--dark-mode",
        ]);
        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:8000/"));
        assert_eq!(args.api_timeout, Some(5));
        assert!(args.dark_mode);
    }
}
