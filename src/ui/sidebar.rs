use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::ui::SidePanel;
use crate::model::ContentState;

/// Render the side panel list (indexes and pickers) over the right edge
pub fn render_side_panel(f: &mut Frame, area: Rect, panel: &SidePanel) {
    let width = (area.width / 3).clamp(30.min(area.width), 60.min(area.width));
    let panel_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: area.height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", panel.title))
        .title_bottom(" Enter: open · Esc: close ")
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, panel_area);

    let placeholder = match &panel.content {
        ContentState::Ready(_) => None,
        ContentState::Idle | ContentState::Loading => Some(("Loading…", Color::DarkGray)),
        ContentState::Failed => Some(("Error loading list", Color::Red)),
        ContentState::Empty => Some(("Nothing to show", Color::Gray)),
    };
    if let Some((text, color)) = placeholder {
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(block);
        f.render_widget(p, panel_area);
        return;
    }

    let items: Vec<ListItem> = panel
        .entries()
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{:>3} ", entry.number), Style::default().fg(Color::DarkGray)),
                Span::styled(entry.title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    entry
                        .trailing
                        .as_ref()
                        .map(|t| format!("  {}", t))
                        .unwrap_or_default(),
                    Style::default().fg(Color::Cyan),
                ),
            ])];
            if let Some(sub) = &entry.subtitle {
                lines.push(Line::styled(
                    format!("    {}", sub),
                    Style::default().fg(Color::Gray),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(panel.selected);
    f.render_stateful_widget(list, panel_area, &mut state);
}
