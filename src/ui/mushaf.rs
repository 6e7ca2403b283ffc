//! Mushaf Page UI
//!
//! Renders the 15-line page grid. Each row is a verse-reference gutter plus
//! the line text, right-aligned; headings and basmala are centered.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::LineKind;
use crate::logic::formatting::{format_verse_range, truncate_to_width};
use crate::model::{ContentState, RenderedLine};

const GUTTER_WIDTH: u16 = 10;

fn line_style(line: &RenderedLine, is_cursor: bool) -> Style {
    let base = match line.line.kind {
        LineKind::Header => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineKind::Basmala => Style::default().fg(Color::Cyan),
        LineKind::Ayat => Style::default().fg(Color::White),
        LineKind::Empty => Style::default(),
    };

    let base = if line.playing {
        base.fg(Color::Black).bg(Color::Yellow)
    } else {
        base
    };

    if is_cursor {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn gutter_label(line: &RenderedLine) -> String {
    match (line.line.kind, line.sura) {
        (LineKind::Ayat, Some(sura)) => {
            format_verse_range(sura, line.aya_numbers.as_deref().unwrap_or(&[]))
        }
        _ => String::new(),
    }
}

/// Build the text column of the page (extracted for testability)
pub fn build_text_lines(lines: &[RenderedLine], cursor: Option<usize>, width: usize) -> Vec<Line<'static>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let alignment = match line.line.kind {
                LineKind::Header | LineKind::Basmala => Alignment::Center,
                _ => Alignment::Right,
            };
            let text = truncate_to_width(&line.line.text, width);
            Line::styled(text, line_style(line, cursor == Some(idx))).alignment(alignment)
        })
        .collect()
}

fn build_gutter_lines(lines: &[RenderedLine], cursor: Option<usize>) -> Vec<Line<'static>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let marker = if line.playing {
                "♪"
            } else if cursor == Some(idx) {
                "›"
            } else {
                " "
            };
            Line::styled(
                format!("{} {}", marker, gutter_label(line)),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect()
}

/// Render the mushaf page
pub fn render_page(
    f: &mut Frame,
    area: Rect,
    lines: &ContentState<Vec<RenderedLine>>,
    cursor: Option<usize>,
    page: u16,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Page {} ", page))
        .border_style(Style::default().fg(Color::Gray));

    let rows = match lines {
        ContentState::Ready(rows) => rows,
        ContentState::Loading | ContentState::Idle => {
            let p = Paragraph::new("Loading page…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(p, area);
            return;
        }
        ContentState::Failed | ContentState::Empty => {
            let p = Paragraph::new("Error loading page")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(block);
            f.render_widget(p, area);
            return;
        }
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(1)])
        .split(inner);

    // Keep the cursor row visible when the pane is shorter than the page
    let height = inner.height as usize;
    let offset = match cursor {
        Some(c) if height > 0 && c >= height => (c + 1 - height) as u16,
        _ => 0,
    };

    let gutter = Paragraph::new(build_gutter_lines(rows, cursor)).scroll((offset, 0));
    let text = Paragraph::new(build_text_lines(rows, cursor, chunks[1].width as usize))
        .scroll((offset, 0));

    f.render_widget(gutter, chunks[0]);
    f.render_widget(text, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PageLine;

    fn rendered(kind: LineKind, text: &str, sura: Option<u16>, ayat: Option<Vec<u16>>) -> RenderedLine {
        RenderedLine {
            line: PageLine {
                kind,
                text: text.to_string(),
                sura_no: sura,
                aya_numbers: ayat.clone(),
                ..Default::default()
            },
            sura,
            first_aya: ayat.as_ref().and_then(|a| a.first().copied()),
            aya_numbers: ayat,
            playing: false,
        }
    }

    #[test]
    fn test_headers_are_centered_ayat_right_aligned() {
        let rows = vec![
            rendered(LineKind::Header, "سورة البقرة", Some(2), None),
            rendered(LineKind::Ayat, "الم", Some(2), Some(vec![1])),
        ];
        let lines = build_text_lines(&rows, None, 40);
        assert_eq!(lines[0].alignment, Some(Alignment::Center));
        assert_eq!(lines[1].alignment, Some(Alignment::Right));
    }

    #[test]
    fn test_gutter_shows_verse_range_only_for_ayat() {
        let header = rendered(LineKind::Header, "x", Some(2), None);
        let ayat = rendered(LineKind::Ayat, "x", Some(2), Some(vec![5, 6]));
        assert_eq!(gutter_label(&header), "");
        assert_eq!(gutter_label(&ayat), "2:5-6");
    }

    #[test]
    fn test_playing_line_is_highlighted() {
        let mut line = rendered(LineKind::Ayat, "x", Some(1), Some(vec![1]));
        line.playing = true;
        assert_eq!(line_style(&line, false).bg, Some(Color::Yellow));
        assert!(line_style(&line, true).add_modifier.contains(Modifier::REVERSED));
    }
}
