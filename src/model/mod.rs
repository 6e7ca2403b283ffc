//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **ReaderModel**: Narration, current page, rendered lines, header
//! - **UiModel**: Detail panel, side panel, search overlay, toasts
//! - **AudioModel**: Reciters, player state, timing table
//! - **RequestTracker**: Latest request sequence per slot
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives behind channels owned by `App`
//! - Pure accessors: Helper methods are side-effect free

pub mod audio;
pub mod reader;
pub mod requests;
pub mod types;
pub mod ui;

pub use audio::{AudioModel, PlayerState};
pub use reader::ReaderModel;
pub use requests::{RequestSlot, RequestTracker};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// The mushaf page and narration
    pub reader: ReaderModel,

    /// Panels and overlays
    pub ui: UiModel,

    /// Verse-synchronised player
    pub audio: AudioModel,

    /// Request sequencing
    pub requests: RequestTracker,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(riwayah: String, start_page: u16, vim_mode: bool, translation_lang: String) -> Self {
        Self {
            reader: ReaderModel::new(riwayah, start_page),
            ui: UiModel::new(vim_mode, translation_lang),
            audio: AudioModel::new(),
            requests: RequestTracker::new(),
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Re-apply "playing" marks to the rendered page
    pub fn refresh_highlight(&mut self) {
        let (sura, aya, active) = (
            self.audio.current_sura,
            self.audio.current_ayah,
            self.audio.state != PlayerState::Idle,
        );
        if let Some(lines) = self.reader.lines.ready_mut() {
            if active {
                crate::logic::page::apply_highlight(lines, sura, aya);
            } else {
                crate::logic::page::clear_highlight(lines);
            }
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new("hafs".to_string(), 1, false, "en".to_string())
    }
}
