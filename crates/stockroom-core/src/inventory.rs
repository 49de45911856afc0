// ── Inventory facade ──
//
// Owns the API client and one `watch` channel per published view.
// Reads fetch straight from the API every time; mutations issue exactly
// one request and, on success, re-fetch the views that depend on the
// mutated entity kind. There is no cache and no command queue: each
// refresh publishes whatever its own request returned, so concurrent
// refreshes resolve last-response-wins.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error, warn};
use url::Url;

use stockroom_api::ApiClient;
use stockroom_api::types::{OrderBody, ProductBody, SupplierBody};

use crate::command::Command;
use crate::config::ApiConfig;
use crate::dialog::EditSession;
use crate::error::CoreError;
use crate::forms::{ProductForm, SupplierForm};
use crate::model::{EntityId, EntityKind, Order, Product, Supplier};
use crate::notice::Notice;
use crate::view::{
    ApiStatus, Dashboard, ListView, OrderDetails, OrderRow, ProductOption, ProductRow,
    SupplierOption, SupplierRow, ViewStream,
};

// ── MutationOutcome ──────────────────────────────────────────────

/// What a coordinated mutation did, with the notice to show.
#[derive(Debug)]
pub enum MutationOutcome {
    /// Request succeeded and dependent views were refreshed.
    Applied { notice: Notice },
    /// Request failed; no view was touched.
    Failed { notice: Notice, error: CoreError },
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

impl MutationOutcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Applied { notice } | Self::Failed { notice, .. } => Some(notice),
            Self::Declined => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

// ── Inventory ────────────────────────────────────────────────────

/// The main entry point for front-ends.
///
/// Cheaply cloneable via `Arc<InventoryInner>`; clones share the same
/// published views.
#[derive(Clone)]
pub struct Inventory {
    inner: Arc<InventoryInner>,
}

struct InventoryInner {
    api: ApiClient,
    products: watch::Sender<ListView<ProductRow>>,
    suppliers: watch::Sender<ListView<SupplierRow>>,
    orders: watch::Sender<ListView<OrderRow>>,
    dashboard: watch::Sender<Dashboard>,
    product_options: watch::Sender<Arc<Vec<ProductOption>>>,
    supplier_options: watch::Sender<Arc<Vec<SupplierOption>>>,
    api_status: watch::Sender<ApiStatus>,
}

impl Inventory {
    /// Build the HTTP client from `config`. Does not touch the network.
    pub fn new(config: &ApiConfig) -> Result<Self, CoreError> {
        let api = ApiClient::new(config.url.as_str(), &config.transport())?;
        Ok(Self::from_client(api))
    }

    /// Wrap an existing API client.
    pub fn from_client(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(InventoryInner {
                api,
                products: watch::Sender::new(ListView::Loading),
                suppliers: watch::Sender::new(ListView::Loading),
                orders: watch::Sender::new(ListView::Loading),
                dashboard: watch::Sender::new(Dashboard::default()),
                product_options: watch::Sender::new(Arc::new(Vec::new())),
                supplier_options: watch::Sender::new(Arc::new(Vec::new())),
                api_status: watch::Sender::new(ApiStatus::Checking),
            }),
        }
    }

    pub fn base_url(&self) -> &Url {
        self.inner.api.base_url()
    }

    // ── Fetches ──────────────────────────────────────────────────
    //
    // One GET each, no caching.

    pub async fn fetch_products(&self) -> Result<Vec<Product>, CoreError> {
        let raw = self.inner.api.list_products().await?;
        Ok(raw.into_iter().map(Product::from).collect())
    }

    pub async fn fetch_suppliers(&self) -> Result<Vec<Supplier>, CoreError> {
        let raw = self.inner.api.list_suppliers().await?;
        Ok(raw.into_iter().map(Supplier::from).collect())
    }

    pub async fn fetch_orders(&self) -> Result<Vec<Order>, CoreError> {
        let raw = self.inner.api.list_orders().await?;
        Ok(raw.into_iter().map(Order::from).collect())
    }

    pub async fn get_product(&self, id: &EntityId) -> Result<Product, CoreError> {
        self.inner
            .api
            .get_product(id.as_str())
            .await
            .map(Product::from)
            .map_err(|e| CoreError::from(e).for_entity(EntityKind::Product, id.as_str()))
    }

    pub async fn get_supplier(&self, id: &EntityId) -> Result<Supplier, CoreError> {
        self.inner
            .api
            .get_supplier(id.as_str())
            .await
            .map(Supplier::from)
            .map_err(|e| CoreError::from(e).for_entity(EntityKind::Supplier, id.as_str()))
    }

    pub async fn get_order(&self, id: &EntityId) -> Result<Order, CoreError> {
        self.inner
            .api
            .get_order(id.as_str())
            .await
            .map(Order::from)
            .map_err(|e| CoreError::from(e).for_entity(EntityKind::Order, id.as_str()))
    }

    // ── Subscriptions ────────────────────────────────────────────

    pub fn products(&self) -> ViewStream<ListView<ProductRow>> {
        ViewStream::new(self.inner.products.subscribe())
    }

    pub fn suppliers(&self) -> ViewStream<ListView<SupplierRow>> {
        ViewStream::new(self.inner.suppliers.subscribe())
    }

    pub fn orders(&self) -> ViewStream<ListView<OrderRow>> {
        ViewStream::new(self.inner.orders.subscribe())
    }

    pub fn dashboard(&self) -> ViewStream<Dashboard> {
        ViewStream::new(self.inner.dashboard.subscribe())
    }

    pub fn product_options(&self) -> ViewStream<Arc<Vec<ProductOption>>> {
        ViewStream::new(self.inner.product_options.subscribe())
    }

    pub fn supplier_options(&self) -> ViewStream<Arc<Vec<SupplierOption>>> {
        ViewStream::new(self.inner.supplier_options.subscribe())
    }

    pub fn api_status(&self) -> ViewStream<ApiStatus> {
        ViewStream::new(self.inner.api_status.subscribe())
    }

    // ── View synchronization ─────────────────────────────────────

    /// Initial load: status check, dashboard, every list, both dropdowns.
    pub async fn load_all(&self) {
        tokio::join!(
            self.check_status(),
            self.refresh_dashboard(),
            self.refresh_products(),
            self.refresh_suppliers(),
            self.refresh_orders(),
            self.refresh_product_options(),
            self.refresh_supplier_options(),
        );
    }

    /// Check `GET /products` and publish the resulting status.
    pub async fn check_status(&self) -> ApiStatus {
        let status = match self.inner.api.status_check().await {
            Ok(code) if code.is_success() => ApiStatus::Connected,
            Ok(code) => {
                warn!(status = code.as_u16(), "API answered with an error status");
                ApiStatus::Error
            }
            Err(e) => {
                error!(error = %e, "API connection error");
                ApiStatus::Unreachable
            }
        };
        self.inner.api_status.send_replace(status);
        status
    }

    /// Re-fetch and re-publish one kind's list view.
    pub async fn refresh(&self, kind: EntityKind) {
        match kind {
            EntityKind::Product => self.refresh_products().await,
            EntityKind::Supplier => self.refresh_suppliers().await,
            EntityKind::Order => self.refresh_orders().await,
        }
    }

    pub async fn refresh_products(&self) {
        debug!("refreshing products");
        let view = match self.fetch_products().await {
            Ok(products) => ListView::from_rows(
                EntityKind::Product,
                products.iter().map(ProductRow::from).collect(),
            ),
            Err(e) => {
                error!(error = %e, "Error loading products");
                ListView::failed(EntityKind::Product)
            }
        };
        self.inner.products.send_replace(view);
    }

    pub async fn refresh_suppliers(&self) {
        debug!("refreshing suppliers");
        let view = match self.fetch_suppliers().await {
            Ok(suppliers) => ListView::from_rows(
                EntityKind::Supplier,
                suppliers.iter().map(SupplierRow::from).collect(),
            ),
            Err(e) => {
                error!(error = %e, "Error loading suppliers");
                ListView::failed(EntityKind::Supplier)
            }
        };
        self.inner.suppliers.send_replace(view);
    }

    pub async fn refresh_orders(&self) {
        debug!("refreshing orders");
        let view = match self.fetch_orders().await {
            Ok(orders) => ListView::from_rows(
                EntityKind::Order,
                orders.iter().map(OrderRow::from).collect(),
            ),
            Err(e) => {
                error!(error = %e, "Error loading orders");
                ListView::failed(EntityKind::Order)
            }
        };
        self.inner.orders.send_replace(view);
    }

    /// Re-fetch all three collections and publish fresh totals.
    ///
    /// On any failure the previous dashboard stays published.
    pub async fn refresh_dashboard(&self) {
        debug!("refreshing dashboard");
        let fetched = tokio::try_join!(
            self.fetch_products(),
            self.fetch_suppliers(),
            self.fetch_orders()
        );
        match fetched {
            Ok((products, suppliers, orders)) => {
                let dashboard = Dashboard::build(&products, &suppliers, &orders, Utc::now());
                self.inner.dashboard.send_replace(dashboard);
            }
            Err(e) => error!(error = %e, "Error loading dashboard data"),
        }
    }

    /// Re-fetch products for the order-line selectors.
    ///
    /// On failure the previous options stay published.
    pub async fn refresh_product_options(&self) {
        debug!("refreshing product options");
        match self.fetch_products().await {
            Ok(products) => {
                let options = products.iter().map(ProductOption::from).collect();
                self.inner.product_options.send_replace(Arc::new(options));
            }
            Err(e) => error!(error = %e, "Error loading products for dropdown"),
        }
    }

    /// Re-fetch suppliers for the order supplier selector.
    pub async fn refresh_supplier_options(&self) {
        debug!("refreshing supplier options");
        match self.fetch_suppliers().await {
            Ok(suppliers) => {
                let options = suppliers.iter().map(SupplierOption::from).collect();
                self.inner.supplier_options.send_replace(Arc::new(options));
            }
            Err(e) => error!(error = %e, "Error loading suppliers for dropdown"),
        }
    }

    /// Refresh the dropdown sourced from `kind`, if any.
    async fn refresh_dropdown(&self, kind: EntityKind) {
        match kind {
            EntityKind::Product => self.refresh_product_options().await,
            EntityKind::Supplier => self.refresh_supplier_options().await,
            EntityKind::Order => {}
        }
    }

    // ── Dialogs ──────────────────────────────────────────────────

    /// Load an entity and open an edit session for it.
    pub async fn open_edit(
        &self,
        kind: EntityKind,
        id: &EntityId,
    ) -> Result<EditSession, CoreError> {
        Ok(match kind {
            EntityKind::Product => {
                let product = self.get_product(id).await?;
                EditSession::Product {
                    id: product.id.clone(),
                    form: ProductForm::from_product(&product),
                }
            }
            EntityKind::Supplier => {
                let supplier = self.get_supplier(id).await?;
                EditSession::Supplier {
                    id: supplier.id.clone(),
                    form: SupplierForm::from_supplier(&supplier),
                }
            }
            EntityKind::Order => EditSession::for_order(self.get_order(id).await?),
        })
    }

    /// Load one order for the read-only details view.
    pub async fn order_details(&self, id: &EntityId) -> Result<OrderDetails, CoreError> {
        let order = self.get_order(id).await?;
        Ok(OrderDetails::from(&order))
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Execute a command: exactly one request, then (on success only)
    /// refresh the kind's list, its dropdown, and the dashboard.
    pub async fn execute(&self, cmd: Command) -> Result<(), CoreError> {
        self.route_command(&cmd).await?;
        self.sync_after(cmd.kind()).await;
        Ok(())
    }

    /// Execute with notices. Deletes go through `confirm` first; a
    /// declined confirmation sends nothing.
    pub async fn apply<F>(&self, cmd: Command, confirm: F) -> MutationOutcome
    where
        F: FnOnce(&str) -> bool,
    {
        if let Some(prompt) = cmd.confirmation_prompt() {
            if !confirm(&prompt) {
                debug!(kind = %cmd.kind(), "mutation declined");
                return MutationOutcome::Declined;
            }
        }
        self.apply_confirmed(cmd).await
    }

    /// Execute with notices, for callers that already confirmed.
    pub async fn apply_confirmed(&self, cmd: Command) -> MutationOutcome {
        let success = cmd.success_notice();
        let failure = cmd.failure_notice();
        match self.execute(cmd).await {
            Ok(()) => MutationOutcome::Applied {
                notice: Notice::success(success),
            },
            Err(e) => {
                error!(error = %e, "{failure}");
                MutationOutcome::Failed {
                    notice: Notice::error(failure),
                    error: e,
                }
            }
        }
    }

    async fn sync_after(&self, kind: EntityKind) {
        tokio::join!(
            self.refresh(kind),
            self.refresh_dropdown(kind),
            self.refresh_dashboard()
        );
    }

    async fn route_command(&self, cmd: &Command) -> Result<(), CoreError> {
        let api = &self.inner.api;
        let result = match cmd {
            // ── Products ─────────────────────────────────────────
            Command::CreateProduct(req) => api.create_product(&ProductBody::from(req)).await,
            Command::UpdateProduct { id, request } => {
                api.update_product(id.as_str(), &ProductBody::from(request))
                    .await
            }
            Command::DeleteProduct { id } => api.delete_product(id.as_str()).await,

            // ── Suppliers ────────────────────────────────────────
            Command::CreateSupplier(req) => api.create_supplier(&SupplierBody::from(req)).await,
            Command::UpdateSupplier { id, request } => {
                api.update_supplier(id.as_str(), &SupplierBody::from(request))
                    .await
            }
            Command::DeleteSupplier { id } => api.delete_supplier(id.as_str()).await,

            // ── Orders ───────────────────────────────────────────
            Command::CreateOrder(req) => api.create_order(&OrderBody::from(req)).await,
            Command::UpdateOrder { id, request } => {
                api.update_order(id.as_str(), &OrderBody::from(request))
                    .await
            }
            Command::DeleteOrder { id } => api.delete_order(id.as_str()).await,
        };

        result.map_err(|e| {
            let err = CoreError::from(e);
            match cmd {
                Command::UpdateProduct { id, .. }
                | Command::DeleteProduct { id }
                | Command::UpdateSupplier { id, .. }
                | Command::DeleteSupplier { id }
                | Command::UpdateOrder { id, .. }
                | Command::DeleteOrder { id } => err.for_entity(cmd.kind(), id.as_str()),
                _ => err,
            }
        })
    }
}
