//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use stockroom_config::ConfigError;
use stockroom_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the API at {url}")]
    #[diagnostic(
        code(stockroom::connection_failed),
        help(
            "Check that the inventory API is running and reachable.\n\
             Set the URL with --url, STOCKROOM_URL, or: stockroom config set url <URL>"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{status}")]
    #[diagnostic(
        code(stockroom::api_unavailable),
        help("The API at {url} did not answer with a success status.")
    )]
    ApiUnavailable { url: String, status: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(stockroom::timeout),
        help("Increase the timeout with --timeout or check the API's responsiveness.")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(stockroom::not_found),
        help("Run: stockroom {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{action}: the API answered HTTP {status}")]
    #[diagnostic(code(stockroom::rejected), help("{message}"))]
    Rejected {
        action: String,
        status: u16,
        message: String,
    },

    #[error("Unexpected response from the API")]
    #[diagnostic(code(stockroom::malformed_response), help("{message}"))]
    MalformedResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(stockroom::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(stockroom::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: stockroom config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(stockroom::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(stockroom::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Internal / IO ────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    #[diagnostic(code(stockroom::internal))]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::ApiUnavailable { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the failed action's notice ("Error creating product") to a
    /// rejection, so the user sees what was being attempted.
    pub fn during(self, action: &str) -> Self {
        match self {
            Self::Rejected {
                status, message, ..
            } => Self::Rejected {
                action: action.into(),
                status,
                message,
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout => CliError::Timeout,

            CoreError::NotFound { kind, identifier } => CliError::NotFound {
                resource_type: kind.noun().into(),
                identifier,
                list_command: format!("{} list", kind.collection()),
            },

            CoreError::MalformedResponse { message } => CliError::MalformedResponse { message },

            CoreError::Rejected { status, message } => CliError::Rejected {
                action: "Request failed".into(),
                status,
                message,
            },

            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            e @ CoreError::NoItems => CliError::Validation {
                field: "--item".into(),
                reason: e.to_string(),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}
