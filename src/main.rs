//! picscan CLI entry point
//!
//! This is the main executable for picscan. It handles command-line argument
//! parsing, error display, and command execution.
//!
//! The CLI exposes two subcommands, both of which walk a photo tree and
//! extract metadata through the external `exiftool` utility:
//! - `panoramas` - print files whose aspect ratio exceeds a threshold
//! - `histogram` - chart how often each focal length was used

use anyhow::Result;
use clap::Parser;
use picscan::cli;
use picscan::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
