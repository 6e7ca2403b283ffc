use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::ReaderModel;

/// Render the page info bar at the top of the screen
pub fn render_header(f: &mut Frame, area: Rect, reader: &ReaderModel) {
    let header = &reader.header;

    let mut spans = vec![Span::styled(
        if header.title.is_empty() {
            format!("Page {}", reader.current_page)
        } else {
            header.title.clone()
        },
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(juz) = header.juz {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Juz", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}", juz)));
    }
    if let Some(hizb) = header.hizb {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Hizb", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}", hizb)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled("Page", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(format!(
        " {}/{}",
        reader.current_page, reader.total_pages
    )));

    if reader.lines.is_loading() {
        spans.push(Span::styled(" (loading…)", Style::default().fg(Color::DarkGray)));
    }

    let title = format!(" mushaftui · {} ", reader.riwayah_name());
    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
