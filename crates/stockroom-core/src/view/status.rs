// ── API reachability ──

use serde::Serialize;

/// Result of the start-up connectivity check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ApiStatus {
    #[default]
    Checking,
    /// The status check got a 2xx.
    Connected,
    /// The API answered with a non-success status.
    Error,
    /// The request never reached the API.
    Unreachable,
}

impl ApiStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking API connection...",
            Self::Connected => "Connected to API",
            Self::Error => "API Error",
            Self::Unreachable => "Cannot connect to API",
        }
    }

    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_connected_counts_as_connected() {
        assert!(ApiStatus::Connected.is_connected());
        for status in [ApiStatus::Checking, ApiStatus::Error, ApiStatus::Unreachable] {
            assert!(!status.is_connected(), "{status:?}");
        }
    }
}
