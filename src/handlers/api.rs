//! API Response Handler
//!
//! Handles responses from the background API worker. Each response is first
//! checked against the request tracker; anything that is not the newest
//! request for its slot is dropped.

use crate::model::RequestSlot;
use crate::services::api::ApiResponse;
use crate::App;

fn slot_of(response: &ApiResponse) -> (RequestSlot, u64) {
    match response {
        ApiResponse::RiwayatResult { seq, .. } => (RequestSlot::Riwayat, *seq),
        ApiResponse::PageResult { seq, .. } => (RequestSlot::Page, *seq),
        ApiResponse::SurahsResult { seq, .. }
        | ApiResponse::JuzsResult { seq, .. }
        | ApiResponse::AhzabResult { seq, .. } => (RequestSlot::Index, *seq),
        ApiResponse::TafseerResult { seq, .. } | ApiResponse::TranslationResult { seq, .. } => {
            (RequestSlot::Detail, *seq)
        }
        ApiResponse::RecitersResult { seq, .. } => (RequestSlot::Reciters, *seq),
        ApiResponse::SearchResult { seq, .. } => (RequestSlot::Search, *seq),
        ApiResponse::StatsResult { seq, .. } => (RequestSlot::Stats, *seq),
        ApiResponse::TimingsResult { seq, .. } => (RequestSlot::Timings, *seq),
    }
}

/// Handle API response from background service
///
/// Response types:
/// - PageResult: Lines for the mushaf page
/// - SurahsResult / JuzsResult / AhzabResult: Index rows
/// - TafseerResult / TranslationResult: Detail panel text
/// - RecitersResult / TimingsResult: Player setup
/// - SearchResult: Search overlay rows
/// - RiwayatResult / StatsResult: Startup data
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    let (slot, seq) = slot_of(&response);
    if !app.model.requests.is_current(slot, seq) {
        crate::log_debug(&format!(
            "DEBUG [API Response]: dropping stale {:?} response seq={}",
            slot, seq
        ));
        return;
    }
    app.model.requests.complete(slot, seq);

    match response {
        ApiResponse::RiwayatResult { riwayat, .. } => match riwayat {
            Some(list) => {
                app.model.reader.riwayat = list;
                app.refresh_riwayah_panel();
            }
            None => {
                app.model.reader.riwayat.clear();
                app.fill_panel(crate::model::PanelKind::Riwayat, None);
            }
        },

        ApiResponse::PageResult { page, payload, .. } => {
            crate::log_debug(&format!(
                "DEBUG [API Response]: page {} ({})",
                page,
                payload
                    .as_ref()
                    .map(|p| format!("{} lines", p.lines.len()))
                    .unwrap_or_else(|| "failed".to_string())
            ));
            app.apply_page(page, payload);
        }

        ApiResponse::SurahsResult { surahs, .. } => app.apply_surahs(surahs),
        ApiResponse::JuzsResult { juzs, .. } => app.apply_juzs(juzs),
        ApiResponse::AhzabResult { ahzab, .. } => app.apply_ahzab(ahzab),

        ApiResponse::TafseerResult {
            sura, aya, tafseer, ..
        } => app.apply_tafseer(sura, aya, tafseer),

        ApiResponse::TranslationResult {
            sura,
            aya,
            translation,
            ..
        } => app.apply_translation(sura, aya, translation),

        ApiResponse::RecitersResult { reciters, .. } => app.apply_reciters(reciters),

        ApiResponse::SearchResult {
            query, response, ..
        } => {
            crate::log_debug(&format!(
                "DEBUG [API Response]: search {:?} -> {:?} results",
                query,
                response.as_ref().map(|r| r.count)
            ));
            app.apply_search_results(response);
        }

        ApiResponse::StatsResult { stats, .. } => {
            if let Some(stats) = &stats {
                crate::log_debug(&format!("DEBUG [API Response]: server stats {:?}", stats));
            }
            app.model.reader.stats = stats;
        }

        ApiResponse::TimingsResult {
            sura,
            after,
            timings,
            ..
        } => app.on_timings_loaded(sura, after, timings),
    }
}
