// file: src/models/source.rs
use serde::{Deserialize, Serialize};

use super::Event;

/// A named, styled batch of events handed to the calendar renderer.
/// Sources are recomputed from the item store on every render pass,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSource {
    pub name: String,
    pub color: String,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
    pub events: Vec<Event>,
}

impl EventSource {
    pub fn new(name: &str, color: &str, events: Vec<Event>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            text_color: None,
            border_color: None,
            events,
        }
    }

    pub fn with_text_color(mut self, color: &str) -> Self {
        self.text_color = Some(color.to_string());
        self
    }

    pub fn with_border_color(mut self, color: &str) -> Self {
        self.border_color = Some(color.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
