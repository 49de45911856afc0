// Async HTTP client for the inventory REST API.
//
// Three resource collections (`products`, `suppliers`, `orders`), each with
// list/get/create/update/delete. Success is judged by status class alone;
// mutation response bodies are ignored.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{
    OrderBody, OrderResponse, ProductBody, ProductResponse, SupplierBody, SupplierResponse,
};

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the inventory API.
///
/// Cheap to clone: `reqwest::Client` is reference-counted internally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and strip any trailing slash from its path.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::UnsupportedBaseUrl(raw.to_owned()));
        }

        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        Ok(url)
    }

    /// The normalized base URL all resource paths hang off.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL, percent-escaping each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<B: Serialize + Sync>(&self, segments: &[&str], body: &B) -> Result<(), Error> {
        let url = self.url(segments);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_empty(resp).await
    }

    async fn put<B: Serialize + Sync>(&self, segments: &[&str], body: &B) -> Result<(), Error> {
        let url = self.url(segments);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::handle_empty(resp).await
    }

    async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.url(segments);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(err) => err.message.or(err.error),
            Err(_) if !raw.trim().is_empty() => Some(raw),
            Err(_) => None,
        };

        Error::Api {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| status.to_string()),
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Health ───────────────────────────────────────────────────────

    /// Issue `GET /products` and report only the status code.
    ///
    /// Used as a connectivity check: the body is never decoded.
    pub async fn status_check(&self) -> Result<reqwest::StatusCode, Error> {
        let url = self.url(&["products"]);
        debug!("GET {url} (status check)");

        let resp = self.http.get(url).send().await?;
        Ok(resp.status())
    }

    // ── Products ─────────────────────────────────────────────────────

    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, Error> {
        self.get(&["products"]).await
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductResponse, Error> {
        self.get(&["products", id]).await
    }

    pub async fn create_product(&self, body: &ProductBody) -> Result<(), Error> {
        self.post(&["products"], body).await
    }

    pub async fn update_product(&self, id: &str, body: &ProductBody) -> Result<(), Error> {
        self.put(&["products", id], body).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        self.delete(&["products", id]).await
    }

    // ── Suppliers ────────────────────────────────────────────────────

    pub async fn list_suppliers(&self) -> Result<Vec<SupplierResponse>, Error> {
        self.get(&["suppliers"]).await
    }

    pub async fn get_supplier(&self, id: &str) -> Result<SupplierResponse, Error> {
        self.get(&["suppliers", id]).await
    }

    pub async fn create_supplier(&self, body: &SupplierBody) -> Result<(), Error> {
        self.post(&["suppliers"], body).await
    }

    pub async fn update_supplier(&self, id: &str, body: &SupplierBody) -> Result<(), Error> {
        self.put(&["suppliers", id], body).await
    }

    pub async fn delete_supplier(&self, id: &str) -> Result<(), Error> {
        self.delete(&["suppliers", id]).await
    }

    // ── Orders ───────────────────────────────────────────────────────

    pub async fn list_orders(&self) -> Result<Vec<OrderResponse>, Error> {
        self.get(&["orders"]).await
    }

    pub async fn get_order(&self, id: &str) -> Result<OrderResponse, Error> {
        self.get(&["orders", id]).await
    }

    pub async fn create_order(&self, body: &OrderBody) -> Result<(), Error> {
        self.post(&["orders"], body).await
    }

    pub async fn update_order(&self, id: &str, body: &OrderBody) -> Result<(), Error> {
        self.put(&["orders", id], body).await
    }

    pub async fn delete_order(&self, id: &str) -> Result<(), Error> {
        self.delete(&["orders", id]).await
    }
}
