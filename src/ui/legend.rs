use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, detail_open: bool, has_reciter: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Page turning runs right-to-left
    if vim_mode {
        hotkey_spans.extend(vec![
            key("h/l"),
            Span::raw(":Next/Prev Page  "),
            key("j/k"),
            Span::raw(":Line  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("←/→"),
            Span::raw(":Next/Prev Page  "),
            key("↑/↓"),
            Span::raw(":Line  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("g"),
        Span::raw(":Go to Page  "),
        key("Enter"),
        Span::raw(":Tafseer  "),
    ]);

    if detail_open {
        hotkey_spans.extend(vec![
            key("t"),
            Span::raw(":Switch Tab  "),
            key(if vim_mode { "^d/^u" } else { "J/K" }),
            Span::raw(":Scroll  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("s"),
        Span::raw(":Surahs  "),
        key("z"),
        Span::raw(":Juz  "),
        key("a"),
        Span::raw(":Hizb  "),
        key("/"),
        Span::raw(":Search  "),
        key("w"),
        Span::raw(":Narration  "),
        key("r"),
        Span::raw(":Reciter  "),
    ]);

    // Player keys - only once a reciter is chosen
    if has_reciter {
        hotkey_spans.extend(vec![
            key("Space"),
            Span::raw(":Play/Pause  "),
            key("p"),
            Span::raw(":Play Line  "),
            key("[/]"),
            Span::raw(":Prev/Next Ayah  "),
            key("0-9"),
            Span::raw(":Seek  "),
        ]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, detail_open: bool, has_reciter: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, detail_open, has_reciter));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, detail_open: bool, has_reciter: bool) {
    f.render_widget(build_legend_paragraph(vim_mode, detail_open, has_reciter), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    detail_open: bool,
    has_reciter: bool,
) -> u16 {
    // Count lines without the block; line_count() doesn't account for borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, detail_open, has_reciter));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_player_keys_need_reciter() {
        let without = spans_to_text(&build_hotkey_spans(false, false, false));
        assert!(
            !without.contains("Play/Pause"),
            "Player keys should be hidden before a reciter is chosen, got: {}",
            without
        );

        let with = spans_to_text(&build_hotkey_spans(false, false, true));
        assert!(
            with.contains("Play/Pause") && with.contains("Prev/Next Ayah"),
            "Player keys should be listed once a reciter is chosen, got: {}",
            with
        );
    }

    #[test]
    fn test_legend_vim_mode_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, true, false));
        assert!(text.contains("h/l"), "vim legend should show h/l, got: {}", text);
        assert!(text.contains("^d/^u"), "vim legend should show ^d/^u scroll, got: {}", text);
    }

    #[test]
    fn test_legend_tab_switch_only_with_detail_open() {
        let closed = spans_to_text(&build_hotkey_spans(false, false, false));
        let open = spans_to_text(&build_hotkey_spans(false, true, false));
        assert!(!closed.contains("Switch Tab"));
        assert!(open.contains("Switch Tab"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, false, true, true);
        let narrow = calculate_legend_height(40, false, true, true);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
