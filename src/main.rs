//! Keyfob - release-signing configuration manager for Android app projects.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyfob::cli::output;
use keyfob::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEYFOB_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyfob=debug")
        } else {
            EnvFilter::new("keyfob=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.project) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            keyfob::error::Error::Manifest(keyfob::error::ManifestError::NotInitialized) => {
                Some("run: keyfob init")
            }
            keyfob::error::Error::Signing(keyfob::error::SigningError::Missing { .. }) => {
                Some("run: keyfob init")
            }
            keyfob::error::Error::Signing(keyfob::error::SigningError::MissingField { .. }) => {
                Some("edit android/key.properties")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
