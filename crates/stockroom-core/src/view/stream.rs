// ── Reactive view streams ──
//
// Subscription handle for a single published view. Each view lives in
// its own `watch` channel inside `Inventory`.

use tokio::sync::watch;

/// A subscription to one view (a list, the dashboard, a dropdown, ...).
///
/// Provides both point-in-time snapshot access and change notification
/// via `changed()`.
pub struct ViewStream<T: Clone + Send + Sync + 'static> {
    current: T,
    receiver: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> ViewStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<T>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation time (or at the last `changed()`).
    pub fn current(&self) -> &T {
        &self.current
    }

    /// The latest published snapshot.
    pub fn latest(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Wait for the next publication, returning the new snapshot.
    /// Returns `None` once the publishing `Inventory` has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }
}
