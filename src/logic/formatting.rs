//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use unicode_width::UnicodeWidthChar;

/// Format a playback position as `M:SS`
///
/// Minutes are not wrapped into hours, and fractional seconds are dropped.
///
/// # Examples
/// ```
/// use mushaftui::logic::formatting::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(7.9), "0:07");
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3725.0), "62:05");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Cut a string to at most `max_width` terminal columns, appending `…` if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Gutter label for a mushaf line: `sura:first` or `sura:first-last`
///
/// # Examples
/// ```
/// use mushaftui::logic::formatting::format_verse_range;
///
/// assert_eq!(format_verse_range(2, &[255]), "2:255");
/// assert_eq!(format_verse_range(2, &[5, 6, 7]), "2:5-7");
/// assert_eq!(format_verse_range(2, &[]), "2");
/// ```
pub fn format_verse_range(sura: u16, ayat: &[u16]) -> String {
    match (ayat.first(), ayat.last()) {
        (Some(first), Some(last)) if first != last => format!("{}:{}-{}", sura, first, last),
        (Some(first), _) => format!("{}:{}", sura, first),
        _ => sura.to_string(),
    }
}
