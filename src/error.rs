//! Server error type.

use std::io;

/// Failures that can stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration could not be assembled from defaults, file, env and CLI.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}
