pub mod logging;

/// Titles arrive from free-form input fields; tidy them before they go
/// over the wire.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_string()
}
