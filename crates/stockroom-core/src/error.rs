// ── Core error types ──
//
// User-facing errors from stockroom-core. Front-ends never match on HTTP
// status codes or JSON parse failures directly: the
// `From<stockroom_api::Error>` impl folds transport-layer errors into
// the taxonomy below.

use thiserror::Error;

use crate::model::EntityKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{kind} not found: {identifier}")]
    NotFound {
        kind: EntityKind,
        identifier: String,
    },

    #[error("Unexpected response from API: {message}")]
    MalformedResponse { message: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Request rejected by API (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Please add at least one item to the order")]
    NoItems,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Narrow a generic 404 into a `NotFound` for a specific entity.
    pub(crate) fn for_entity(self, kind: EntityKind, identifier: &str) -> Self {
        match self {
            Self::Rejected { status: 404, .. } => Self::NotFound {
                kind,
                identifier: identifier.to_owned(),
            },
            other => other,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<stockroom_api::Error> for CoreError {
    fn from(err: stockroom_api::Error) -> Self {
        match err {
            stockroom_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if let Some(status) = e.status() {
                    CoreError::Rejected {
                        status: status.as_u16(),
                        message: e.to_string(),
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            stockroom_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            stockroom_api::Error::UnsupportedBaseUrl(url) => CoreError::Config {
                message: format!("URL cannot be used as an API base: {url}"),
            },
            stockroom_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            stockroom_api::Error::Api { status, message } => {
                CoreError::Rejected { status, message }
            }
            stockroom_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_becomes_rejected() {
        let err: CoreError = stockroom_api::Error::Api {
            status: 422,
            message: "sku already exists".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Rejected { status: 422, .. }));
    }

    #[test]
    fn rejected_404_narrows_to_not_found() {
        let err = CoreError::Rejected {
            status: 404,
            message: "Not Found".into(),
        }
        .for_entity(EntityKind::Order, "o1");
        assert_eq!(err.to_string(), "Order not found: o1");
    }

    #[test]
    fn other_errors_are_not_narrowed() {
        let err = CoreError::Timeout.for_entity(EntityKind::Product, "p1");
        assert!(matches!(err, CoreError::Timeout));
    }

    #[test]
    fn no_items_message_matches_notice() {
        assert_eq!(
            CoreError::NoItems.to_string(),
            "Please add at least one item to the order"
        );
    }
}
