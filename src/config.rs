//! API endpoint configuration.
//!
//! The planner server's base URL is always supplied from outside, either
//! directly or through the `DAYPLAN_API_URL` environment variable. Nothing
//! in the crate hardcodes a deployment host.

use url::Url;

use crate::error::{AppError, AppResult};

/// Environment variable holding the planner server's base URL,
/// e.g. `http://localhost:3000/api/`.
pub const API_URL_ENV: &str = "DAYPLAN_API_URL";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = validate_base_url(base_url)?;
        Ok(Self { base_url })
    }

    pub fn from_env() -> AppResult<Self> {
        let raw = std::env::var(API_URL_ENV).map_err(|_| {
            AppError::config(format!(
                "{} is not set; point it at the planner server base URL",
                API_URL_ENV
            ))
        })?;
        Self::new(&raw)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn todos_url(&self) -> Url {
        self.collection_url("todos")
    }

    pub fn todo_url(&self, id: &str) -> Url {
        self.entry_url("todos", id)
    }

    pub fn notes_url(&self) -> Url {
        self.collection_url("notes")
    }

    pub fn note_url(&self, id: &str) -> Url {
        self.entry_url("notes", id)
    }

    fn collection_url(&self, collection: &str) -> Url {
        let mut url = self.base_url.clone();
        // Validated at construction: http(s) URLs always have path segments.
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .pop_if_empty()
            .push(collection);
        url
    }

    fn entry_url(&self, collection: &str, id: &str) -> Url {
        let mut url = self.collection_url(collection);
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .push(id);
        url
    }
}

/// Validates a planner API base URL. Unlike public calendar feeds, the
/// planner server is often a local dev instance, so localhost is allowed.
fn validate_base_url(raw: &str) -> AppResult<Url> {
    if raw.trim().is_empty() {
        return Err(AppError::config(
            "API base URL cannot be empty. Provide e.g. http://localhost:3000/api/",
        ));
    }

    let parsed = Url::parse(raw)
        .map_err(|e| AppError::config(format!("Invalid API base URL '{}': {}", raw, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::config(format!(
            "API base URL must use http or https, got '{}://'",
            parsed.scheme()
        )));
    }

    if parsed.host_str().map_or(true, |h| h.is_empty()) {
        return Err(AppError::config(format!(
            "API base URL '{}' does not contain a valid host",
            raw
        )));
    }

    Ok(parsed)
}
