//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, panels, overlays, and visual state.

use std::time::Instant;

use super::types::{
    ContentState, DetailContent, DetailTab, ListEntry, PanelKind, SearchRow, SelectedAyah,
};

/// Exegesis / translation panel
#[derive(Clone, Debug)]
pub struct DetailPanel {
    pub open: bool,
    pub tab: DetailTab,
    pub selected: Option<SelectedAyah>,
    pub content: ContentState<DetailContent>,
    pub scroll: u16,
}

/// List panel (indexes, reciter picker, narration picker)
#[derive(Clone, Debug)]
pub struct SidePanel {
    pub kind: PanelKind,
    pub title: String,
    pub content: ContentState<Vec<ListEntry>>,
    pub selected: Option<usize>,
}

impl SidePanel {
    pub fn loading(kind: PanelKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            content: ContentState::Loading,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        self.content.ready().map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.selected.and_then(|idx| self.entries().get(idx))
    }
}

/// What the search overlay is currently showing
#[derive(Clone, Debug, PartialEq)]
pub enum SearchStatus {
    Idle,
    /// Query too short; nothing was sent
    Hint,
    Loading,
    Failed,
    NoResults,
    Results(Vec<SearchRow>),
}

#[derive(Clone, Debug)]
pub struct SearchOverlay {
    pub open: bool,
    pub query: String,
    /// Query of the last search actually sent
    pub submitted: Option<String>,
    pub status: SearchStatus,
    pub selected: Option<usize>,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self {
            open: false,
            query: String::new(),
            submitted: None,
            status: SearchStatus::Idle,
            selected: None,
        }
    }

    pub fn rows(&self) -> &[SearchRow] {
        match &self.status {
            SearchStatus::Results(rows) => rows,
            _ => &[],
        }
    }

    /// The query has changed since the last search was sent
    pub fn query_is_dirty(&self) -> bool {
        self.submitted.as_deref() != Some(self.query.trim())
    }
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Language requested from `/translation`
    pub translation_lang: String,

    // ============================================
    // PANELS & OVERLAYS
    // ============================================
    pub detail: DetailPanel,

    pub side_panel: Option<SidePanel>,

    pub search: SearchOverlay,

    /// Go-to-page prompt buffer (Some while the prompt is open)
    pub page_prompt: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, translation_lang: String) -> Self {
        Self {
            vim_mode,
            translation_lang,
            detail: DetailPanel {
                open: false,
                tab: DetailTab::Tafseer,
                selected: None,
                content: ContentState::Idle,
                scroll: 0,
            },
            side_panel: None,
            search: SearchOverlay::new(),
            page_prompt: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Close the search overlay, side panel and detail panel
    pub fn close_all_panels(&mut self) {
        self.search.open = false;
        self.side_panel = None;
        self.detail.open = false;
        self.page_prompt = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
