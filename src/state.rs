//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is validated once at startup and never mutated, so handlers share
//! it behind an `Arc` without locking.

use std::sync::Arc;

use atlas::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
