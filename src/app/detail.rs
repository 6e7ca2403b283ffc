//! Exegesis / translation panel

use crate::api::{Tafseer, Translation};
use crate::logic;
use crate::model::{ContentState, DetailContent, DetailTab, RequestSlot, SelectedAyah};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Select the verse on the cursor line and open the panel
    ///
    /// Lines that don't resolve to a verse (headings, placeholders) are
    /// ignored.
    pub fn select_cursor_line(&mut self) {
        let Some(line) = self.model.reader.cursor_line() else {
            return;
        };
        let Some(ayah) = logic::page::selection_for_line(&line.line) else {
            return;
        };
        self.select_ayah(ayah);
    }

    pub fn select_ayah(&mut self, ayah: SelectedAyah) {
        self.model.ui.detail.selected = Some(ayah);
        self.model.ui.detail.open = true;
        self.load_detail();
    }

    /// Switch tab; re-fetches only when a verse is selected
    pub fn toggle_detail_tab(&mut self) {
        self.model.ui.detail.tab = logic::ui::toggle_tab(self.model.ui.detail.tab);
        if self.model.ui.detail.selected.is_some() {
            self.load_detail();
        }
    }

    /// Fetch the active tab's content for the selected verse
    pub fn load_detail(&mut self) {
        let Some(SelectedAyah { sura, aya }) = self.model.ui.detail.selected else {
            return;
        };

        self.model.ui.detail.content = ContentState::Loading;
        self.model.ui.detail.scroll = 0;

        let seq = self.model.requests.issue(RequestSlot::Detail);
        let request = match self.model.ui.detail.tab {
            DetailTab::Tafseer => ApiRequest::GetTafseer { seq, sura, aya },
            DetailTab::Translation => ApiRequest::GetTranslation {
                seq,
                sura,
                aya,
                lang: self.model.ui.translation_lang.clone(),
            },
        };
        self.send_request(request);
    }

    pub fn apply_tafseer(&mut self, sura: u16, aya: u16, tafseer: Option<Tafseer>) {
        self.model.ui.detail.content = match tafseer {
            None => ContentState::Failed,
            Some(Tafseer {
                tafseer_text: Some(text),
                source,
            }) if !text.trim().is_empty() => ContentState::Ready(DetailContent {
                ayah: SelectedAyah { sura, aya },
                tab: DetailTab::Tafseer,
                text,
                footnotes: None,
                source,
            }),
            Some(_) => ContentState::Empty,
        };
    }

    pub fn apply_translation(&mut self, sura: u16, aya: u16, translation: Option<Translation>) {
        self.model.ui.detail.content = match translation {
            None => ContentState::Failed,
            Some(Translation {
                translation: Some(text),
                footnotes,
                source,
                ..
            }) if !text.trim().is_empty() => ContentState::Ready(DetailContent {
                ayah: SelectedAyah { sura, aya },
                tab: DetailTab::Translation,
                text,
                footnotes: footnotes.filter(|f| !f.trim().is_empty()),
                source,
            }),
            Some(_) => ContentState::Empty,
        };
    }

    pub fn scroll_detail(&mut self, delta: i32) {
        let scroll = self.model.ui.detail.scroll as i32 + delta;
        self.model.ui.detail.scroll = scroll.clamp(0, u16::MAX as i32) as u16;
    }

    pub fn close_detail(&mut self) {
        self.model.ui.detail.open = false;
        self.model.requests.cancel(RequestSlot::Detail);
    }
}
