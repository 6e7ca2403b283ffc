//! Side panel: surah/juz/hizb indexes plus the reciter and narration pickers

use crate::api::{Hizb, Juz, Surah};
use crate::logic;
use crate::model::ui::SidePanel;
use crate::model::{ContentState, EntryAction, ListEntry, PanelKind, RequestSlot};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Open the side panel on `kind`, fetching its rows if needed
    pub fn open_panel(&mut self, kind: PanelKind) {
        self.model.ui.side_panel = Some(SidePanel::loading(kind));
        let riwayah = self.model.reader.riwayah.clone();

        match kind {
            PanelKind::Surahs => {
                let seq = self.model.requests.issue(RequestSlot::Index);
                self.send_request(ApiRequest::GetSurahs { seq, riwayah });
            }
            PanelKind::Juzs => {
                let seq = self.model.requests.issue(RequestSlot::Index);
                self.send_request(ApiRequest::GetJuzs { seq, riwayah });
            }
            PanelKind::Ahzab => {
                let seq = self.model.requests.issue(RequestSlot::Index);
                self.send_request(ApiRequest::GetAhzab { seq, riwayah });
            }
            PanelKind::Reciters => {
                if !self.model.audio.reciters.is_empty() {
                    self.refresh_reciter_panel();
                } else if !self.model.requests.is_pending(RequestSlot::Reciters) {
                    self.load_reciters();
                }
                // Otherwise the list is still on its way; keep the loading placeholder
            }
            PanelKind::Riwayat => {
                if self.model.reader.riwayat.is_empty() {
                    if !self.model.requests.is_pending(RequestSlot::Riwayat) {
                        let seq = self.model.requests.issue(RequestSlot::Riwayat);
                        self.send_request(ApiRequest::GetRiwayat { seq });
                    }
                } else {
                    self.refresh_riwayah_panel();
                }
            }
        }
    }

    pub fn close_panel(&mut self) {
        if let Some(panel) = self.model.ui.side_panel.take() {
            if matches!(panel.kind, PanelKind::Surahs | PanelKind::Juzs | PanelKind::Ahzab) {
                self.model.requests.cancel(RequestSlot::Index);
            }
        }
    }

    /// Fill the open panel, if it is still showing `kind`
    pub(crate) fn fill_panel(&mut self, kind: PanelKind, entries: Option<Vec<ListEntry>>) {
        let Some(panel) = self.model.ui.side_panel.as_mut() else {
            return;
        };
        if panel.kind != kind {
            return;
        }

        panel.selected = entries.as_ref().and_then(|e| (!e.is_empty()).then_some(0));
        panel.content = match entries {
            None => ContentState::Failed,
            Some(e) if e.is_empty() => ContentState::Empty,
            Some(e) => ContentState::Ready(e),
        };
    }

    pub fn apply_surahs(&mut self, surahs: Option<Vec<Surah>>) {
        let entries = surahs.map(|s| logic::index::surah_entries(&s));
        self.fill_panel(PanelKind::Surahs, entries);
    }

    pub fn apply_juzs(&mut self, juzs: Option<Vec<Juz>>) {
        let entries = juzs.map(|j| logic::index::juz_entries(&j));
        self.fill_panel(PanelKind::Juzs, entries);
    }

    pub fn apply_ahzab(&mut self, ahzab: Option<Vec<Hizb>>) {
        let entries = ahzab.map(|h| logic::index::hizb_entries(&h));
        self.fill_panel(PanelKind::Ahzab, entries);
    }

    pub(crate) fn refresh_reciter_panel(&mut self) {
        let entries = logic::index::reciter_entries(
            &self.model.audio.reciters,
            self.model.audio.current_reciter.as_ref(),
        );
        self.fill_panel(PanelKind::Reciters, Some(entries));
    }

    pub(crate) fn refresh_riwayah_panel(&mut self) {
        let entries =
            logic::index::riwayah_entries(&self.model.reader.riwayat, &self.model.reader.riwayah);
        self.fill_panel(PanelKind::Riwayat, Some(entries));
    }

    /// Run the action bound to the selected row
    pub fn activate_selected_entry(&mut self) {
        let Some(action) = self
            .model
            .ui
            .side_panel
            .as_ref()
            .and_then(|p| p.selected_entry())
            .and_then(|e| e.action.clone())
        else {
            return;
        };
        self.run_entry_action(action);
    }

    pub fn run_entry_action(&mut self, action: EntryAction) {
        self.close_panel();
        match action {
            EntryAction::GoToPage(page) => self.go_to_page(page as i64),
            EntryAction::SelectReciter {
                reciter_id,
                moshaf_id,
            } => self.select_reciter(reciter_id, moshaf_id),
            EntryAction::SelectRiwayah(key) => self.set_riwayah(key),
        }
    }

    pub fn panel_next(&mut self) {
        if let Some(panel) = self.model.ui.side_panel.as_mut() {
            let len = panel.entries().len();
            panel.selected = logic::navigation::next_selection(panel.selected, len);
        }
    }

    pub fn panel_prev(&mut self) {
        if let Some(panel) = self.model.ui.side_panel.as_mut() {
            let len = panel.entries().len();
            panel.selected = logic::navigation::prev_selection(panel.selected, len);
        }
    }

    pub fn panel_page(&mut self, rows: i32) {
        if let Some(panel) = self.model.ui.side_panel.as_mut() {
            let len = panel.entries().len();
            panel.selected = logic::navigation::page_selection(panel.selected, rows, len);
        }
    }
}
