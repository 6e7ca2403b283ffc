//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use crate::api::PageLine;

/// Lifecycle of data fetched for one panel
///
/// `Failed` (the call returned nothing) and `Empty` (a valid response with
/// no items) are deliberately distinct.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentState<T> {
    Idle,
    Loading,
    Failed,
    Empty,
    Ready(T),
}

impl<T> ContentState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ContentState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            ContentState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A verse reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectedAyah {
    pub sura: u16,
    pub aya: u16,
}

/// Detail panel tab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Tafseer,
    Translation,
}

impl DetailTab {
    pub fn title(&self) -> &'static str {
        match self {
            DetailTab::Tafseer => "Tafseer",
            DetailTab::Translation => "Translation",
        }
    }
}

/// One slot of the 15-line mushaf grid
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedLine {
    /// The line record as received; selection reads it by value
    pub line: PageLine,
    pub sura: Option<u16>,
    pub first_aya: Option<u16>,
    pub aya_numbers: Option<Vec<u16>>,
    /// Holds the verse currently being recited
    pub playing: bool,
}

/// Exegesis or translation text for one verse
#[derive(Clone, Debug, PartialEq)]
pub struct DetailContent {
    pub ayah: SelectedAyah,
    pub tab: DetailTab,
    pub text: String,
    pub footnotes: Option<String>,
    pub source: Option<String>,
}

/// Which list the side panel is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Surahs,
    Juzs,
    Ahzab,
    Reciters,
    Riwayat,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Surahs => "Surah Index",
            PanelKind::Juzs => "Juz Index",
            PanelKind::Ahzab => "Hizb Index",
            PanelKind::Reciters => "Reciters",
            PanelKind::Riwayat => "Narrations",
        }
    }
}

/// Action bound to a list row when it is built
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryAction {
    /// Navigate to a page and close the panel
    GoToPage(u16),
    SelectReciter {
        reciter_id: u32,
        moshaf_id: Option<u32>,
    },
    SelectRiwayah(String),
}

/// One row of a side panel list
#[derive(Clone, Debug, PartialEq)]
pub struct ListEntry {
    pub number: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub trailing: Option<String>,
    pub action: Option<EntryAction>,
}

/// One row of the search overlay
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRow {
    pub label: String,
    pub aya: u16,
    pub preview: String,
    pub page: u16,
}
