//! Page navigation
//!
//! Page requests are tagged with a sequence number; `apply_page` is only
//! reached for the newest one (see `handlers::api`).

use crate::api::PagePayload;
use crate::logic;
use crate::model::reader::PageHeader;
use crate::model::{ContentState, PlayerState, RequestSlot};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Show page `requested`, clamped into `1..=total_pages`
    pub fn go_to_page(&mut self, requested: i64) {
        let page = logic::page::clamp_page(requested, self.model.reader.total_pages);

        self.model.reader.current_page = page;
        self.model.reader.lines = ContentState::Loading;
        self.model.reader.cursor = None;

        let seq = self.model.requests.issue(RequestSlot::Page);
        crate::log_debug(&format!(
            "DEBUG [Navigation]: go_to_page requested={} page={} seq={}",
            requested, page, seq
        ));
        self.send_request(ApiRequest::GetPage {
            seq,
            page,
            riwayah: self.model.reader.riwayah.clone(),
        });
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.model.reader.current_page as i64 + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.model.reader.current_page as i64 - 1);
    }

    /// Install a fetched page (or its failure) as the current page
    pub fn apply_page(&mut self, page: u16, payload: Option<PagePayload>) {
        let Some(payload) = payload else {
            self.model.reader.lines = ContentState::Failed;
            self.model.reader.header = PageHeader {
                title: format!("Page {}", page),
                juz: None,
                hizb: None,
            };
            return;
        };

        let padded = logic::page::pad_lines(&payload.lines);
        let (title, sura) = logic::page::page_title(&payload.lines, page);

        self.model.reader.header = PageHeader {
            title,
            juz: payload.juz,
            hizb: payload.juz.map(|juz| logic::page::hizb_for_page(juz, page)),
        };
        self.model.reader.lines = ContentState::Ready(logic::page::build_rendered_lines(&padded));
        self.model.reader.cursor = Some(0);

        // Don't retarget a track that is already loaded
        if let Some(sura) = sura {
            if self.model.audio.state == PlayerState::Idle {
                self.model.audio.current_sura = sura;
            }
        }

        self.model.refresh_highlight();
    }

    /// Switch narration: reload the current page and the reciter list
    pub fn set_riwayah(&mut self, key: String) {
        if key == self.model.reader.riwayah {
            return;
        }
        crate::log_debug(&format!("DEBUG [Navigation]: riwayah {} -> {}", self.model.reader.riwayah, key));

        self.model.reader.riwayah = key;
        let name = self.model.reader.riwayah_name().to_string();
        self.model.show_toast(format!("Narration: {}", name));

        self.go_to_page(self.model.reader.current_page as i64);
        self.load_reciters();
    }

    /// Move the line cursor by `delta` rows
    pub fn move_line_cursor(&mut self, delta: i32) {
        let len = self.model.reader.lines.ready().map(|l| l.len()).unwrap_or(0);
        self.model.reader.cursor = logic::navigation::move_cursor(self.model.reader.cursor, delta, len);
    }
}
