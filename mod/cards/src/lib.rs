//! SVG status cards.
//!
//! Turns device-state JSON from a caller-supplied API into embeddable
//! SVG documents: a device list card and a per-device AI usage summary
//! card, each themeable and cache-friendly.

mod api;
mod fetch;

use std::sync::Arc;

use axum::Router;
use fleetcard_core::Module;

pub use api::{AppState, CardService};
pub use fetch::FetchConfig;

pub struct CardsModule {
    service: Arc<CardService>,
}

impl CardsModule {
    pub fn new(service: CardService) -> Self {
        Self { service: Arc::new(service) }
    }
}

impl Module for CardsModule {
    fn name(&self) -> &str {
        "cards"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
