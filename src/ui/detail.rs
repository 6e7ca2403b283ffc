use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::ui::DetailPanel;
use crate::model::{ContentState, DetailTab};

fn tab_spans(active: DetailTab) -> Line<'static> {
    let tab = |t: DetailTab| {
        let style = if t == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", t.title()), style)
    };
    Line::from(vec![tab(DetailTab::Tafseer), Span::raw("│"), tab(DetailTab::Translation)])
}

/// Body lines for the panel's current state
fn body_lines(panel: &DetailPanel) -> Vec<Line<'static>> {
    let hint = |text: &str, color: Color| vec![Line::styled(text.to_string(), Style::default().fg(color))];

    match &panel.content {
        ContentState::Idle => hint("Select a verse with Enter", Color::DarkGray),
        ContentState::Loading => hint("Loading…", Color::DarkGray),
        ContentState::Failed => hint("Error loading content", Color::Red),
        ContentState::Empty => match panel.tab {
            DetailTab::Tafseer => hint("No tafseer available for this verse", Color::Gray),
            DetailTab::Translation => hint("No translation available", Color::Gray),
        },
        ContentState::Ready(content) => {
            let mut lines = vec![
                Line::styled(
                    format!("Surah {} - Ayah {}", content.ayah.sura, content.ayah.aya),
                    Style::default().fg(Color::Yellow),
                ),
                Line::raw(""),
            ];
            lines.extend(content.text.lines().map(|l| Line::raw(l.to_string())));

            if let Some(footnotes) = &content.footnotes {
                lines.push(Line::raw(""));
                lines.push(Line::styled("Footnotes", Style::default().fg(Color::Yellow)));
                lines.extend(
                    footnotes
                        .lines()
                        .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::Gray))),
                );
            }
            if let Some(source) = &content.source {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("Source: {}", source),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines
        }
    }
}

/// Render the tafseer/translation panel
pub fn render_detail(f: &mut Frame, area: Rect, panel: &DetailPanel) {
    let mut lines = vec![tab_spans(panel.tab), Line::raw("")];
    lines.extend(body_lines(panel));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Verse (t: switch tab, J/K: scroll) ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((panel.scroll, 0));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DetailContent, SelectedAyah};
    use crate::model::UiModel;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_failed_and_empty_are_distinct() {
        let mut panel = UiModel::new(false, "en".to_string()).detail;
        panel.content = ContentState::Failed;
        let failed = text_of(&body_lines(&panel));

        panel.content = ContentState::Empty;
        let empty = text_of(&body_lines(&panel));

        assert_ne!(failed, empty);
        assert!(empty.contains("No tafseer"));
    }

    #[test]
    fn test_footnotes_only_when_present() {
        let mut panel = UiModel::new(false, "en".to_string()).detail;
        panel.tab = DetailTab::Translation;
        panel.content = ContentState::Ready(DetailContent {
            ayah: SelectedAyah { sura: 1, aya: 1 },
            tab: DetailTab::Translation,
            text: "In the name of God".to_string(),
            footnotes: None,
            source: None,
        });
        assert!(!text_of(&body_lines(&panel)).contains("Footnotes"));

        if let ContentState::Ready(c) = &mut panel.content {
            c.footnotes = Some("note".to_string());
        }
        assert!(text_of(&body_lines(&panel)).contains("Footnotes"));
    }
}
