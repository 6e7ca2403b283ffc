//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::model::types::DetailTab;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2000;

/// Longest page number accepted by the go-to-page prompt
const PROMPT_MAX_DIGITS: usize = 3;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// The other detail tab
///
/// # Examples
/// ```
/// use mushaftui::logic::ui::toggle_tab;
/// use mushaftui::model::types::DetailTab;
///
/// assert_eq!(toggle_tab(DetailTab::Tafseer), DetailTab::Translation);
/// assert_eq!(toggle_tab(DetailTab::Translation), DetailTab::Tafseer);
/// ```
pub fn toggle_tab(current: DetailTab) -> DetailTab {
    match current {
        DetailTab::Tafseer => DetailTab::Translation,
        DetailTab::Translation => DetailTab::Tafseer,
    }
}

/// Append a typed character to the go-to-page prompt
///
/// Only digits are accepted, up to three of them.
pub fn push_prompt_digit(buffer: &mut String, c: char) -> bool {
    if c.is_ascii_digit() && buffer.len() < PROMPT_MAX_DIGITS {
        buffer.push(c);
        true
    } else {
        false
    }
}

/// Page number typed into the prompt; empty or zero input means page 1
pub fn parse_prompt_page(buffer: &str) -> i64 {
    buffer.parse::<i64>().ok().filter(|n| *n > 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1999));
        assert!(should_dismiss_toast(2000));
    }

    #[test]
    fn test_prompt_accepts_digits_only() {
        let mut buf = String::new();
        assert!(push_prompt_digit(&mut buf, '4'));
        assert!(!push_prompt_digit(&mut buf, 'x'));
        assert!(push_prompt_digit(&mut buf, '0'));
        assert!(push_prompt_digit(&mut buf, '4'));
        assert!(!push_prompt_digit(&mut buf, '1'));
        assert_eq!(buf, "404");
    }

    #[test]
    fn test_parse_prompt_page() {
        assert_eq!(parse_prompt_page("12"), 12);
        assert_eq!(parse_prompt_page(""), 1);
        assert_eq!(parse_prompt_page("0"), 1);
        assert_eq!(parse_prompt_page("999"), 999);
    }
}
