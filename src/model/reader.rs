//! Reader Model
//!
//! This sub-model contains the mushaf itself: active narration, the page
//! being shown, its header, and the line cursor.

use crate::api::{Riwayah, Stats};
use crate::logic::page::TOTAL_PAGES;

use super::types::{ContentState, RenderedLine};

/// Header info shown above the page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageHeader {
    /// "Surah <name>" or "Page <n>"
    pub title: String,
    pub juz: Option<u8>,
    pub hizb: Option<u8>,
}

#[derive(Clone, Debug)]
pub struct ReaderModel {
    /// Active narration key (e.g. "hafs")
    pub riwayah: String,

    /// Narrations offered by the server
    pub riwayat: Vec<Riwayah>,

    /// Page currently shown, always within `1..=total_pages`
    pub current_page: u16,

    pub total_pages: u16,

    /// Rendered 15-line grid
    pub lines: ContentState<Vec<RenderedLine>>,

    pub header: PageHeader,

    /// Line under the keyboard cursor
    pub cursor: Option<usize>,

    /// Server statistics, fetched once at startup
    pub stats: Option<Stats>,
}

impl ReaderModel {
    pub fn new(riwayah: String, start_page: u16) -> Self {
        Self {
            riwayah,
            riwayat: Vec::new(),
            current_page: start_page.clamp(1, TOTAL_PAGES),
            total_pages: TOTAL_PAGES,
            lines: ContentState::Idle,
            header: PageHeader::default(),
            cursor: None,
            stats: None,
        }
    }

    /// Line under the cursor, if the page is loaded
    pub fn cursor_line(&self) -> Option<&RenderedLine> {
        let lines = self.lines.ready()?;
        self.cursor.and_then(|idx| lines.get(idx))
    }

    /// Display name of the active narration
    pub fn riwayah_name(&self) -> &str {
        self.riwayat
            .iter()
            .find(|r| r.key == self.riwayah)
            .map(|r| if r.name_en.is_empty() { r.name_ar.as_str() } else { r.name_en.as_str() })
            .unwrap_or(self.riwayah.as_str())
    }
}
