use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::FetchHandle;
use crate::client::{RecipeClient, RecipeService};
use crate::models::Dessert;
use crate::state::Published;

/// State behind the dessert list screen.
pub struct DessertViewModel {
    service: Arc<dyn RecipeService>,
    desserts: Published<Vec<Dessert>>,
    has_fetched_data: AtomicBool,
}

impl DessertViewModel {
    pub fn new(service: Arc<dyn RecipeService>) -> Self {
        Self {
            service,
            desserts: Published::new(Vec::new()),
            has_fetched_data: AtomicBool::new(false),
        }
    }

    /// Published dessert list, empty until the first successful fetch.
    pub fn desserts(&self) -> &Published<Vec<Dessert>> {
        &self.desserts
    }

    /// Whether the screen has already triggered its initial fetch.
    pub fn has_fetched_data(&self) -> bool {
        self.has_fetched_data.load(Ordering::SeqCst)
    }

    pub fn set_has_fetched_data(&self, fetched: bool) {
        self.has_fetched_data.store(fetched, Ordering::SeqCst);
    }

    /// Fetch the dessert list in the background.
    ///
    /// On success the list is filtered and sorted (see [`prepare_desserts`])
    /// and published in one replacement. On failure the error is logged and
    /// the published list is left as it was.
    pub fn fetch_desserts(&self) -> FetchHandle {
        let service = Arc::clone(&self.service);
        let desserts = self.desserts.clone();

        FetchHandle::spawn(async move {
            match service.fetch_dessert_list().await {
                Ok(list) => {
                    let received = list.len();
                    let prepared = prepare_desserts(list);
                    tracing::info!(
                        "Publishing {} desserts ({} dropped)",
                        prepared.len(),
                        received - prepared.len()
                    );
                    desserts.replace(prepared);
                }
                Err(err) => {
                    tracing::error!(
                        "[{}] Failed to fetch dessert list: {}",
                        err.error_code(),
                        err
                    );
                }
            }
        })
    }

    /// Fetch only the first time a screen becomes visible.
    ///
    /// Returns `None` once a fetch has been triggered through this method or
    /// the flag was set by hand.
    pub fn fetch_if_needed(&self) -> Option<FetchHandle> {
        if self.has_fetched_data.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.fetch_desserts())
    }
}

impl Default for DessertViewModel {
    fn default() -> Self {
        Self::new(Arc::new(RecipeClient::new()))
    }
}

impl std::fmt::Debug for DessertViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DessertViewModel")
            .field("desserts", &self.desserts.with(Vec::len))
            .field("has_fetched_data", &self.has_fetched_data())
            .finish()
    }
}

/// Drop entries with an empty name or id, then sort by name.
///
/// The sort is stable and compares names byte-wise, so `"Zebra"` sorts
/// before `"apple"` and duplicates keep their upstream order.
pub fn prepare_desserts(mut desserts: Vec<Dessert>) -> Vec<Dessert> {
    desserts.retain(Dessert::is_listable);
    desserts.sort_by(|a, b| a.name.cmp(&b.name));
    desserts
}
