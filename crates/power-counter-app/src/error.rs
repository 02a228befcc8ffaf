//! Error types for the `power-counter` binary.
//!
//! [`AppError`] is the top-level error type that wraps all possible
//! failure modes during startup and the command loop.

/// Top-level error for the `power-counter` binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The persistence store could not be opened.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: power_counter_store::StoreError,
    },

    /// Reading commands from stdin failed.
    #[error("input error: {source}")]
    Input {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the failure.
        message: String,
    },
}
