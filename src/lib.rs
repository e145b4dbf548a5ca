// Dayplan Library
// Client-side core of the personal planner: the item store, event
// projection, calendar controller and remote sync against the REST API.

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod http_config;
pub mod models;
pub mod projector;
pub mod store;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use api::{HttpPlannerApi, PlannerApi};
pub use calendar::CalendarController;
pub use config::ApiConfig;
pub use error::{AppError, AppResult};
pub use models::*;
pub use projector::EventProjector;
pub use store::ItemStore;
pub use sync::{StoreUpdate, SyncService};

use std::sync::Arc;

/// Application state shared across the application
#[derive(Clone)]
pub struct PlannerState {
    pub store: Arc<ItemStore>,
    pub sync: Arc<SyncService<HttpPlannerApi>>,
}

impl PlannerState {
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        let store = Arc::new(ItemStore::new());
        let api = HttpPlannerApi::new(config)?;
        let sync = Arc::new(SyncService::new(api, Arc::clone(&store)));
        Ok(Self { store, sync })
    }

    pub fn projector(&self) -> EventProjector {
        EventProjector::new(Arc::clone(&self.store))
    }
}
