use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::logic::formatting::format_time;
use crate::model::{AudioModel, PlayerState};

fn state_glyph(state: PlayerState) -> &'static str {
    match state {
        PlayerState::Playing => "⏸",
        _ => "▶",
    }
}

/// Render the player bar: reciter, surah/verse, progress gauge, times
pub fn render_player(f: &mut Frame, area: Rect, audio: &AudioModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Player (Space: play/pause · [ ]: verse · 0-9: seek) ")
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let reciter = audio
        .current_reciter
        .as_ref()
        .map(|r| match &r.moshaf_name {
            Some(moshaf) => format!("{} ({})", r.name_ar, moshaf),
            None => r.name_ar.clone(),
        })
        .unwrap_or_else(|| "No reciter".to_string());

    let info = Line::from(vec![
        Span::styled(
            format!("{} ", state_glyph(audio.state)),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(reciter),
        Span::raw(" | "),
        Span::styled("Surah", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", audio.current_sura)),
        Span::raw(" | "),
        Span::styled("Ayah", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", audio.current_ayah)),
        Span::styled(
            if audio.tracks_verses() { "" } else { "  (no timings)" },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(info), rows[0]);

    let label = format!(
        "{} / {}",
        format_time(audio.position_secs),
        audio
            .duration_secs
            .map(format_time)
            .unwrap_or_else(|| "--:--".to_string())
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio((audio.progress / 100.0).clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, rows[1]);
}
