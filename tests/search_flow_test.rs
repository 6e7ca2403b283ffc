//! Search overlay flow
//!
//! Queries shorter than two characters must never reach the server; a
//! valid query produces a request whose results become rows, and picking a
//! row jumps to its page and closes the overlay.

use mushaftui::api::{SearchResponse, SearchResult};
use mushaftui::handlers::handle_api_response;
use mushaftui::model::ui::SearchStatus;
use mushaftui::model::Model;
use mushaftui::services::api::{ApiRequest, ApiResponse};
use mushaftui::services::player::MediaCommand;
use mushaftui::App;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn new_app() -> (App, UnboundedReceiver<ApiRequest>, UnboundedReceiver<MediaCommand>) {
    let (api_tx, api_rx) = mpsc::unbounded_channel();
    let (media_tx, media_rx) = mpsc::unbounded_channel();
    let model = Model::new("warsh".to_string(), 1, false, "en".to_string());
    (App::new(model, api_tx, media_tx), api_rx, media_rx)
}

fn result(sura_no: u16, aya_no: u16, page: u16, text: &str) -> SearchResult {
    SearchResult {
        sura_no,
        sura_name: Some("البقرة".to_string()),
        aya_no,
        text: text.to_string(),
        page,
    }
}

#[test]
fn test_short_query_sends_nothing_and_shows_hint() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_search();
    app.model.ui.search.query = "ا".to_string();
    app.perform_search();

    assert!(api_rx.try_recv().is_err(), "a one-character query must not be sent");
    assert_eq!(app.model.ui.search.status, SearchStatus::Hint);

    app.model.ui.search.query = "   ".to_string();
    app.perform_search();
    assert!(api_rx.try_recv().is_err(), "whitespace-only query must not be sent");
}

#[test]
fn test_results_fill_rows_and_activation_navigates() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_search();
    app.model.ui.search.query = "الرحمن".to_string();
    app.perform_search();

    let seq = match api_rx.try_recv() {
        Ok(ApiRequest::Search { seq, query, riwayah }) => {
            assert_eq!(query, "الرحمن");
            assert_eq!(riwayah, "warsh", "search runs against the active narration");
            seq
        }
        other => panic!("expected a search request, got {:?}", other),
    };
    assert_eq!(app.model.ui.search.status, SearchStatus::Loading);

    handle_api_response(
        &mut app,
        ApiResponse::SearchResult {
            seq,
            query: "الرحمن".to_string(),
            response: Some(SearchResponse {
                query: "الرحمن".to_string(),
                count: 2,
                results: vec![result(1, 3, 1, "الرحمن الرحيم"), result(55, 1, 531, "الرحمن")],
            }),
        },
    );

    let rows = app.model.ui.search.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].preview.ends_with("..."));
    assert_eq!(app.model.ui.search.selected, Some(0));

    app.search_next();
    app.activate_search_result();

    assert!(!app.model.ui.search.open, "activating a result closes the overlay");
    match api_rx.try_recv() {
        Ok(ApiRequest::GetPage { page, .. }) => assert_eq!(page, 531),
        other => panic!("expected a page request, got {:?}", other),
    }
}

#[test]
fn test_empty_and_failed_searches_are_distinct() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_search();
    app.model.ui.search.query = "zzzz".to_string();
    app.perform_search();
    let seq = api_rx.try_recv().map(|r| r.seq()).unwrap_or_default();

    handle_api_response(
        &mut app,
        ApiResponse::SearchResult {
            seq,
            query: "zzzz".to_string(),
            response: Some(SearchResponse {
                query: "zzzz".to_string(),
                count: 0,
                results: vec![],
            }),
        },
    );
    assert_eq!(app.model.ui.search.status, SearchStatus::NoResults);

    app.perform_search();
    let seq = api_rx.try_recv().map(|r| r.seq()).unwrap_or_default();
    handle_api_response(
        &mut app,
        ApiResponse::SearchResult {
            seq,
            query: "zzzz".to_string(),
            response: None,
        },
    );
    assert_eq!(app.model.ui.search.status, SearchStatus::Failed);
}

#[test]
fn test_closing_search_drops_late_results() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_search();
    app.model.ui.search.query = "نور".to_string();
    app.perform_search();
    let seq = api_rx.try_recv().map(|r| r.seq()).unwrap_or_default();

    app.close_search();
    handle_api_response(
        &mut app,
        ApiResponse::SearchResult {
            seq,
            query: "نور".to_string(),
            response: Some(SearchResponse {
                query: "نور".to_string(),
                count: 1,
                results: vec![result(24, 35, 354, "الله نور السماوات")],
            }),
        },
    );

    assert!(app.model.ui.search.rows().is_empty(), "cancelled search must not fill rows");
}
