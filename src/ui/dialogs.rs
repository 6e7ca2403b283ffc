use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;

/// Render the go-to-page prompt
pub fn render_page_prompt(f: &mut Frame, area: Rect, buffer: &str, total_pages: u16) {
    let prompt_area = centered_rect(area, 36, 5);

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let text = vec![
        Line::from(vec![
            Span::raw("Page: "),
            Span::raw(buffer.to_string()),
            Span::styled("█", cursor_style),
        ]),
        Line::styled(
            format!("1-{} · Enter to go, Esc to cancel", total_pages),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let prompt = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Go to Page")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
