//! Search Overlay UI
//!
//! Renders the search input box with the query and blinking cursor, and the
//! result list (or a hint/placeholder) below it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::ui::{SearchOverlay, SearchStatus};

use super::layout::centered_rect;

/// Placeholder text for non-result states
pub fn status_message(status: &SearchStatus) -> Option<&'static str> {
    match status {
        SearchStatus::Idle => Some("Type a word and press Enter"),
        SearchStatus::Hint => Some("Enter at least 2 characters"),
        SearchStatus::Loading => Some("Searching…"),
        SearchStatus::Failed => Some("Search failed"),
        SearchStatus::NoResults => Some("No results"),
        SearchStatus::Results(_) => None,
    }
}

/// Render the search overlay centered on screen
pub fn render_search(f: &mut Frame, area: Rect, search: &SearchOverlay) {
    let overlay = centered_rect(area, 90, area.height.saturating_sub(4).max(8));
    f.render_widget(Clear, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(overlay);

    let title = match &search.status {
        SearchStatus::Results(rows) => format!(" Search ({} results) - Esc to close ", rows.len()),
        _ => " Search - Esc to close ".to_string(),
    };

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input = Paragraph::new(Line::from(vec![
        Span::raw("Query: "),
        Span::raw(search.query.clone()),
        Span::styled("█", cursor_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, chunks[0]);

    let results_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if let Some(message) = status_message(&search.status) {
        let color = match search.status {
            SearchStatus::Failed => Color::Red,
            _ => Color::DarkGray,
        };
        let p = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(results_block);
        f.render_widget(p, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = search
        .rows()
        .iter()
        .map(|row| {
            ListItem::new(vec![
                Line::styled(
                    format!("{} - Ayah {}  (p. {})", row.label, row.aya, row.page),
                    Style::default().fg(Color::Green),
                ),
                Line::styled(row.preview.clone(), Style::default().fg(Color::White))
                    .alignment(Alignment::Right),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(results_block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(search.selected);
    f.render_stateful_widget(list, chunks[1], &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_and_no_results_messages_differ() {
        assert_eq!(
            status_message(&SearchStatus::Hint),
            Some("Enter at least 2 characters")
        );
        assert_eq!(status_message(&SearchStatus::NoResults), Some("No results"));
        assert_ne!(
            status_message(&SearchStatus::Failed),
            status_message(&SearchStatus::NoResults)
        );
        assert_eq!(status_message(&SearchStatus::Results(vec![])), None);
    }
}
