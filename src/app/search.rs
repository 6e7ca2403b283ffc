//! Full-text search overlay

use crate::api::SearchResponse;
use crate::logic;
use crate::model::ui::SearchStatus;
use crate::model::{RequestSlot, SearchRow};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    pub fn open_search(&mut self) {
        self.model.ui.search.open = true;
    }

    pub fn close_search(&mut self) {
        self.model.ui.search.open = false;
        self.model.requests.cancel(RequestSlot::Search);
        if self.model.ui.search.status == SearchStatus::Loading {
            self.model.ui.search.status = SearchStatus::Idle;
        }
    }

    /// Send the typed query, or show the length hint without any request
    pub fn perform_search(&mut self) {
        let search = &mut self.model.ui.search;
        let Some(query) = logic::search::validate_query(&search.query) else {
            search.status = SearchStatus::Hint;
            search.selected = None;
            return;
        };

        search.status = SearchStatus::Loading;
        search.selected = None;
        search.submitted = Some(query.clone());

        let seq = self.model.requests.issue(RequestSlot::Search);
        crate::log_debug(&format!("DEBUG [Search]: query={:?} seq={}", query, seq));
        self.send_request(ApiRequest::Search {
            seq,
            query,
            riwayah: self.model.reader.riwayah.clone(),
        });
    }

    pub fn apply_search_results(&mut self, response: Option<SearchResponse>) {
        let search = &mut self.model.ui.search;
        search.status = match response {
            None => SearchStatus::Failed,
            Some(r) if r.count == 0 || r.results.is_empty() => SearchStatus::NoResults,
            Some(r) => SearchStatus::Results(
                r.results
                    .iter()
                    .map(|result| SearchRow {
                        label: logic::search::surah_label(result),
                        aya: result.aya_no,
                        preview: logic::search::preview_text(&result.text),
                        page: result.page,
                    })
                    .collect(),
            ),
        };
        search.selected = (!search.rows().is_empty()).then_some(0);
    }

    /// Jump to the selected result's page and close the overlay
    pub fn activate_search_result(&mut self) {
        let search = &self.model.ui.search;
        let Some(page) = search
            .selected
            .and_then(|idx| search.rows().get(idx))
            .map(|row| row.page)
        else {
            return;
        };
        self.close_search();
        self.go_to_page(page as i64);
    }

    pub fn search_next(&mut self) {
        let search = &mut self.model.ui.search;
        search.selected = logic::navigation::next_selection(search.selected, search.rows().len());
    }

    pub fn search_prev(&mut self) {
        let search = &mut self.model.ui.search;
        search.selected = logic::navigation::prev_selection(search.selected, search.rows().len());
    }
}
