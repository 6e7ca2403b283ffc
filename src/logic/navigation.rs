//! Navigation selection logic
//!
//! Pure functions for moving list selections and the mushaf line cursor.

/// Advance a list selection, wrapping from the last row to the first
///
/// # Examples
/// ```
/// use mushaftui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move a list selection back, wrapping from the first row to the last
///
/// # Examples
/// ```
/// use mushaftui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Move the line cursor by `delta` rows without wrapping
///
/// The cursor stops at the first and last line of the page.
pub fn move_cursor(current: Option<usize>, delta: i32, line_count: usize) -> Option<usize> {
    if line_count == 0 {
        return None;
    }

    let start = match current {
        Some(i) => i as i64,
        // First press lands on the top (or bottom) line
        None => return Some(if delta >= 0 { 0 } else { line_count - 1 }),
    };

    Some((start + delta as i64).clamp(0, line_count as i64 - 1) as usize)
}

/// Move a list selection by a page of rows, clamped to the list
pub fn page_selection(current: Option<usize>, rows: i32, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let start = current.unwrap_or(0) as i64;
    Some((start + rows as i64).clamp(0, list_len as i64 - 1) as usize)
}
