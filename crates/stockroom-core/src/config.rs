// ── Runtime API configuration ──
//
// Describes *how* to reach the inventory API. Front-ends build an
// `ApiConfig` (from profiles, flags, env) and hand it in; core never
// reads config files.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for one inventory API endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL (e.g., `http://localhost:5000/api`).
    pub url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn transport(&self) -> stockroom_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => stockroom_api::TlsMode::System,
            TlsVerification::CustomCa(path) => stockroom_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => stockroom_api::TlsMode::DangerAcceptInvalid,
        };
        stockroom_api::TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
