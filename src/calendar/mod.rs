//! Calendar controller.
//!
//! Owns the currently visible event list, routes click selections through
//! the projector's reverse lookup, and filters events for a selected day.
//! The only state transition is stale → recomputed: any store update makes
//! the visible list stale and `refresh` rebuilds it from the sources.

use chrono::NaiveDate;

use crate::models::{Event, EventSource, Item};
use crate::projector::EventProjector;
use crate::sync::StoreUpdate;

pub struct CalendarController {
    projector: EventProjector,
    visible: Vec<Event>,
}

impl CalendarController {
    pub fn new(projector: EventProjector) -> Self {
        let mut controller = Self {
            projector,
            visible: Vec::new(),
        };
        controller.refresh();
        controller
    }

    /// Recompute the visible event list from the current sources.
    pub fn refresh(&mut self) {
        self.visible = self
            .projector
            .event_sources()
            .into_iter()
            .flat_map(|source| source.events)
            .collect();
        log::debug!("[Calendar] {} events visible", self.visible.len());
    }

    /// The confirmed broadcast drives the view, never a speculative local
    /// change: apply the update by recomputing from the store.
    pub fn apply_update(&mut self, _update: &StoreUpdate) {
        self.refresh();
    }

    pub fn visible_events(&self) -> &[Event] {
        &self.visible
    }

    /// Styled batches for the renderer.
    pub fn event_sources(&self) -> Vec<EventSource> {
        self.projector.event_sources()
    }

    /// Resolve a clicked event to its source item for the detail view.
    /// Unknown ids (demo events, raced deletes) are a silent no-op.
    pub fn on_select(&self, event_id: &str) -> Option<Item> {
        match self.projector.resolve(event_id) {
            Some(item) => Some(item),
            None => {
                log::debug!("[Calendar] selection {} has no backing item", event_id);
                None
            }
        }
    }

    /// Events whose interval touches the given day.
    pub fn selected_day_events(&self, day: NaiveDate) -> Vec<Event> {
        self.visible
            .iter()
            .filter(|event| event.occurs_on(day))
            .cloned()
            .collect()
    }
}
