//! Page Logic
//!
//! Pure functions for page arithmetic and for turning a page payload into
//! the fixed 15-slot mushaf grid.

use crate::api::{LineKind, PageLine};
use crate::model::types::{RenderedLine, SelectedAyah};

/// Printed lines on every mushaf page in this layout
pub const PAGE_LINES: usize = 15;

/// Pages in the fixed layout
pub const TOTAL_PAGES: u16 = 604;

/// Highest section (hizb) number
pub const MAX_HIZB: u8 = 60;

/// Clamp a requested page number into `[1, total_pages]`
///
/// # Examples
/// ```
/// use mushaftui::logic::page::clamp_page;
///
/// assert_eq!(clamp_page(0, 604), 1);
/// assert_eq!(clamp_page(-12, 604), 1);
/// assert_eq!(clamp_page(300, 604), 300);
/// assert_eq!(clamp_page(9999, 604), 604);
/// ```
pub fn clamp_page(requested: i64, total_pages: u16) -> u16 {
    requested.clamp(1, total_pages.max(1) as i64) as u16
}

/// Section (hizb) shown in the header for a page
///
/// `ceil(juz*2 - (page > 300 ? 0 : 1))`, capped at 60. This is an
/// approximation tied to the page layout, not a canonical hizb table.
///
/// # Examples
/// ```
/// use mushaftui::logic::page::hizb_for_page;
///
/// assert_eq!(hizb_for_page(1, 50), 1);
/// assert_eq!(hizb_for_page(1, 301), 2);
/// assert_eq!(hizb_for_page(30, 604), 60);
/// ```
pub fn hizb_for_page(juz: u8, page: u16) -> u8 {
    let offset = if page > 300 { 0.0 } else { 1.0 };
    let hizb = (juz as f64 * 2.0 - offset).ceil();
    (hizb.max(0.0) as u8).min(MAX_HIZB)
}

/// Pad a page's lines with empty placeholders up to the fixed line count
///
/// Pages that already carry 15 or more lines are returned unchanged.
pub fn pad_lines(lines: &[PageLine]) -> Vec<PageLine> {
    let mut padded = lines.to_vec();
    while padded.len() < PAGE_LINES {
        padded.push(PageLine::empty());
    }
    padded
}

/// Build the render slots for a page, attaching verse lookup keys
pub fn build_rendered_lines(lines: &[PageLine]) -> Vec<RenderedLine> {
    pad_lines(lines)
        .into_iter()
        .map(|line| {
            // Verse linkage only exists for lines that name a surah
            let (sura, aya_numbers) = match line.sura_no {
                Some(sura) => (Some(sura), line.aya_numbers.clone()),
                None => (None, None),
            };
            let first_aya = aya_numbers.as_ref().and_then(|n| n.first().copied());

            RenderedLine {
                line,
                sura,
                first_aya,
                aya_numbers,
                playing: false,
            }
        })
        .collect()
}

/// Whether a rendered line belongs to the verse currently being recited
pub fn line_is_playing(line: &RenderedLine, sura: u16, aya: u16) -> bool {
    if line.sura != Some(sura) {
        return false;
    }

    match &line.aya_numbers {
        Some(numbers) => numbers.contains(&aya),
        None => line.first_aya == Some(aya),
    }
}

/// Clear every "playing" mark, then mark the lines holding `sura:aya`
///
/// Returns the number of lines marked.
pub fn apply_highlight(lines: &mut [RenderedLine], sura: u16, aya: u16) -> usize {
    let mut marked = 0;
    for line in lines.iter_mut() {
        line.playing = line_is_playing(line, sura, aya);
        if line.playing {
            marked += 1;
        }
    }
    marked
}

/// Remove all "playing" marks
pub fn clear_highlight(lines: &mut [RenderedLine]) {
    for line in lines.iter_mut() {
        line.playing = false;
    }
}

/// Resolve the verse a line selection refers to
///
/// Headings, empty placeholders, lines without a surah and lines whose
/// verse list is missing do not qualify.
pub fn selection_for_line(line: &PageLine) -> Option<SelectedAyah> {
    let sura = line.sura_no?;
    if matches!(line.kind, LineKind::Header | LineKind::Empty) {
        return None;
    }
    let aya = line.first_aya()?;
    Some(SelectedAyah { sura, aya })
}

/// Header title for a page plus the surah it opens with (if any)
///
/// Uses the first non-empty line that names a surah; otherwise falls back
/// to the page number.
pub fn page_title(lines: &[PageLine], page: u16) -> (String, Option<u16>) {
    let first_sura_line = lines
        .iter()
        .find(|l| l.kind != LineKind::Empty && l.sura_name.as_deref().is_some_and(|n| !n.is_empty()));

    match first_sura_line {
        Some(line) => (
            format!("Surah {}", line.sura_name.as_deref().unwrap_or_default()),
            Some(line.sura_no.unwrap_or(1)),
        ),
        None => (format!("Page {}", page), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayat_line(sura: u16, ayat: &[u16]) -> PageLine {
        PageLine {
            kind: LineKind::Ayat,
            text: "text".to_string(),
            sura_no: Some(sura),
            sura_name: Some("Al-Baqarah".to_string()),
            aya_numbers: Some(ayat.to_vec()),
            ..Default::default()
        }
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(1, TOTAL_PAGES), 1);
        assert_eq!(clamp_page(604, TOTAL_PAGES), 604);
        assert_eq!(clamp_page(605, TOTAL_PAGES), 604);
        assert_eq!(clamp_page(0, TOTAL_PAGES), 1);
        assert_eq!(clamp_page(i64::MIN, TOTAL_PAGES), 1);
    }

    #[test]
    fn test_hizb_first_half() {
        assert_eq!(hizb_for_page(1, 50), 1);
        assert_eq!(hizb_for_page(10, 200), 19);
        assert_eq!(hizb_for_page(15, 300), 29);
    }

    #[test]
    fn test_hizb_second_half() {
        assert_eq!(hizb_for_page(1, 301), 2);
        assert_eq!(hizb_for_page(16, 301), 32);
    }

    #[test]
    fn test_hizb_never_exceeds_60() {
        for juz in 0..=40u8 {
            for page in [1u16, 300, 301, 604] {
                assert!(hizb_for_page(juz, page) <= MAX_HIZB, "juz {} page {}", juz, page);
            }
        }
    }

    #[test]
    fn test_pad_lines_always_fifteen() {
        for n in 0..=PAGE_LINES {
            let lines: Vec<PageLine> = (0..n).map(|_| ayat_line(2, &[1])).collect();
            assert_eq!(pad_lines(&lines).len(), PAGE_LINES, "input of {} lines", n);
        }
    }

    #[test]
    fn test_pad_lines_uses_empty_placeholders() {
        let padded = pad_lines(&[ayat_line(2, &[1])]);
        assert_eq!(padded[0].kind, LineKind::Ayat);
        assert!(padded[1..].iter().all(|l| l.kind == LineKind::Empty));
    }

    #[test]
    fn test_pad_lines_keeps_overflow() {
        let lines: Vec<PageLine> = (0..17).map(|_| ayat_line(2, &[1])).collect();
        assert_eq!(pad_lines(&lines).len(), 17);
    }

    #[test]
    fn test_rendered_line_without_sura_has_no_verse_keys() {
        let mut line = ayat_line(2, &[3]);
        line.sura_no = None;
        let rendered = build_rendered_lines(&[line]);
        assert_eq!(rendered[0].sura, None);
        assert_eq!(rendered[0].first_aya, None);
        assert_eq!(rendered[0].aya_numbers, None);
    }

    #[test]
    fn test_highlight_marks_every_line_of_a_spanning_verse() {
        let mut lines = build_rendered_lines(&[
            ayat_line(2, &[5, 6]),
            ayat_line(2, &[6]),
            ayat_line(2, &[6, 7]),
            ayat_line(2, &[7]),
        ]);

        assert_eq!(apply_highlight(&mut lines, 2, 6), 3);
        assert!(lines[0].playing && lines[1].playing && lines[2].playing);
        assert!(!lines[3].playing);

        // Re-highlight clears previous marks
        assert_eq!(apply_highlight(&mut lines, 2, 7), 2);
        assert!(!lines[0].playing);
        assert!(lines[3].playing);
    }

    #[test]
    fn test_highlight_requires_matching_sura() {
        let mut lines = build_rendered_lines(&[ayat_line(3, &[6])]);
        assert_eq!(apply_highlight(&mut lines, 2, 6), 0);
    }

    #[test]
    fn test_selection_rules() {
        assert_eq!(
            selection_for_line(&ayat_line(2, &[4, 5])),
            Some(SelectedAyah { sura: 2, aya: 4 })
        );

        let mut header = ayat_line(2, &[1]);
        header.kind = LineKind::Header;
        assert_eq!(selection_for_line(&header), None);

        assert_eq!(selection_for_line(&PageLine::empty()), None);

        let mut no_ayat = ayat_line(2, &[1]);
        no_ayat.aya_numbers = None;
        assert_eq!(selection_for_line(&no_ayat), None);
    }

    #[test]
    fn test_page_title() {
        let (title, sura) = page_title(&[PageLine::empty(), ayat_line(2, &[1])], 2);
        assert_eq!(title, "Surah Al-Baqarah");
        assert_eq!(sura, Some(2));

        let (title, sura) = page_title(&[], 7);
        assert_eq!(title, "Page 7");
        assert_eq!(sura, None);
    }
}
