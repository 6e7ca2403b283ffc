//! Search Logic
//!
//! Pure functions for validating full-text queries and shaping results for
//! the search overlay.

use crate::api::SearchResult;

/// Shortest query (in characters, after trimming) sent to the server
pub const MIN_QUERY_CHARS: usize = 2;

/// Characters of verse text shown per result
pub const PREVIEW_CHARS: usize = 100;

/// Trim a query and accept it only if it is long enough to send
///
/// # Examples
/// ```
/// use mushaftui::logic::search::validate_query;
///
/// assert_eq!(validate_query("  a "), None);
/// assert_eq!(validate_query(" الله "), Some("الله".to_string()));
/// ```
pub fn validate_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Preview of a result's text
///
/// Cut to the first 100 characters, with an ellipsis always appended (even
/// when nothing was cut).
///
/// # Examples
/// ```
/// use mushaftui::logic::search::preview_text;
///
/// assert_eq!(preview_text("short"), "short...");
/// assert_eq!(preview_text(&"x".repeat(150)).chars().count(), 103);
/// ```
pub fn preview_text(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

/// Label for the surah a result belongs to
pub fn surah_label(result: &SearchResult) -> String {
    match result.sura_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Surah {}", result.sura_no),
    }
}
