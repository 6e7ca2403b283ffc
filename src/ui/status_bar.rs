use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::Stats;
use crate::model::{PlayerState, ReaderModel};

/// Status line text (extracted for testability)
pub fn status_text(reader: &ReaderModel, player_state: PlayerState) -> String {
    let mut parts = vec![format!("Narration: {}", reader.riwayah_name())];

    if let Some(cursor) = reader.cursor {
        parts.push(format!("Line {}", cursor + 1));
    }

    parts.push(match player_state {
        PlayerState::Idle => "Player: idle".to_string(),
        PlayerState::Loaded => "Player: ready".to_string(),
        PlayerState::Playing => "Player: playing".to_string(),
        PlayerState::Paused => "Player: paused".to_string(),
    });

    if let Some(stats) = &reader.stats {
        parts.push(stats_summary(stats));
    }

    parts.join(" │ ")
}

fn stats_summary(stats: &Stats) -> String {
    format!(
        "DB: {} narrations, {} ayat, {} reciters",
        stats.riwayat_count, stats.total_ayat, stats.reciters_count
    )
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, reader: &ReaderModel, player_state: PlayerState) {
    let line = Line::from(vec![Span::styled(
        status_text(reader, player_state),
        Style::default().fg(Color::DarkGray),
    )]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_stats() {
        let reader = ReaderModel::new("hafs".to_string(), 1);
        let text = status_text(&reader, PlayerState::Idle);
        assert!(text.contains("Narration: hafs"), "got: {}", text);
        assert!(!text.contains("DB:"));
    }

    #[test]
    fn test_status_with_stats_and_cursor() {
        let mut reader = ReaderModel::new("hafs".to_string(), 1);
        reader.cursor = Some(4);
        reader.stats = Some(Stats {
            riwayat_count: 2,
            total_ayat: 6236,
            reciters_count: 40,
            ..Default::default()
        });
        let text = status_text(&reader, PlayerState::Playing);
        assert!(text.contains("Line 5"), "got: {}", text);
        assert!(text.contains("6236 ayat"), "got: {}", text);
        assert!(text.contains("playing"), "got: {}", text);
    }
}
