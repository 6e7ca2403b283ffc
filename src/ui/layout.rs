use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the mushaf pane: 15 lines plus borders
const PAGE_HEIGHT: u16 = 17;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top bar: surah, juz, hizb, page number
    pub header_area: Rect,
    /// The 15-line page
    pub page_area: Rect,
    /// Tafseer/translation panel (if open)
    pub detail_area: Option<Rect>,
    /// Player bar (if a reciter is chosen)
    pub player_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    detail_open: bool,
    player_visible: bool,
    legend_height: u16,
) -> LayoutInfo {
    let player_height = if player_visible { 4 } else { 0 };

    // header + content + player + legend + status
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(PAGE_HEIGHT.min(terminal_size.height / 2)),
            Constraint::Length(player_height),
            Constraint::Length(legend_height),
            Constraint::Length(1),
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];

    // The page keeps the wider share; the detail panel sits on its left
    // (reading order runs right-to-left)
    let (page_area, detail_area) = if detail_open {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(content_area);
        (chunks[1], Some(chunks[0]))
    } else {
        (content_area, None)
    };

    LayoutInfo {
        header_area: main_chunks[0],
        page_area,
        detail_area,
        player_area: player_visible.then_some(main_chunks[2]),
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_panels() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), false, false, 3);
        assert!(info.detail_area.is_none());
        assert!(info.player_area.is_none());
        assert_eq!(info.page_area.width, 120);
        assert_eq!(info.status_area.height, 1);
    }

    #[test]
    fn test_layout_with_detail_panel() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), true, true, 3);
        let detail = info.detail_area.unwrap();
        assert!(info.page_area.width > detail.width);
        assert!(detail.x < info.page_area.x, "detail panel sits left of the page");
        assert_eq!(info.player_area.unwrap().height, 4);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let r = centered_rect(Rect::new(0, 0, 20, 10), 50, 5);
        assert_eq!(r.width, 20);
        assert_eq!(r.y, 2);
    }
}
