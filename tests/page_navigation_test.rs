//! Page navigation through the App controllers
//!
//! Drives `App` with real channels and inspects the requests that reach the
//! API worker side, then feeds responses back through the response handler.
//!
//! Covers:
//! - go_to_page clamps out-of-range pages before any request is sent
//! - A slow response for an older page never overwrites the newer page
//! - Short pages are padded to the fixed 15-line grid

use mushaftui::api::{LineKind, PageLine, PagePayload};
use mushaftui::handlers::handle_api_response;
use mushaftui::model::{ContentState, Model};
use mushaftui::services::api::{ApiRequest, ApiResponse};
use mushaftui::services::player::MediaCommand;
use mushaftui::App;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn new_app() -> (App, UnboundedReceiver<ApiRequest>, UnboundedReceiver<MediaCommand>) {
    let (api_tx, api_rx) = mpsc::unbounded_channel();
    let (media_tx, media_rx) = mpsc::unbounded_channel();
    let model = Model::new("hafs".to_string(), 1, false, "en".to_string());
    (App::new(model, api_tx, media_tx), api_rx, media_rx)
}

fn drain(rx: &mut UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
    let mut out = Vec::new();
    while let Ok(request) = rx.try_recv() {
        out.push(request);
    }
    out
}

fn last_page_request(rx: &mut UnboundedReceiver<ApiRequest>) -> (u64, u16) {
    drain(rx)
        .into_iter()
        .filter_map(|r| match r {
            ApiRequest::GetPage { seq, page, .. } => Some((seq, page)),
            _ => None,
        })
        .last()
        .expect("a page request should have been sent")
}

fn ayat_line(sura: u16, name: &str, ayat: &[u16]) -> PageLine {
    PageLine {
        kind: LineKind::Ayat,
        text: "بِسْمِ".to_string(),
        line_number: None,
        sura_no: Some(sura),
        sura_name: Some(name.to_string()),
        aya_numbers: Some(ayat.to_vec()),
    }
}

fn payload(page: u16, lines: Vec<PageLine>) -> PagePayload {
    PagePayload {
        page: Some(page),
        riwayah: Some("hafs".to_string()),
        lines,
        suras: vec![],
        juz: Some(1),
    }
}

#[test]
fn test_go_to_page_clamps_high_and_low() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.go_to_page(700);
    assert_eq!(last_page_request(&mut api_rx).1, 604, "700 should clamp to the last page");
    assert_eq!(app.model.reader.current_page, 604);

    app.go_to_page(0);
    assert_eq!(last_page_request(&mut api_rx).1, 1, "0 should clamp to the first page");

    app.go_to_page(-5);
    assert_eq!(last_page_request(&mut api_rx).1, 1);
}

#[test]
fn test_next_page_at_end_stays_on_last_page() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.go_to_page(604);
    drain(&mut api_rx);
    app.next_page();
    assert_eq!(last_page_request(&mut api_rx).1, 604);

    app.go_to_page(1);
    drain(&mut api_rx);
    app.prev_page();
    assert_eq!(last_page_request(&mut api_rx).1, 1);
}

#[test]
fn test_stale_page_response_is_not_applied() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.go_to_page(10);
    let (old_seq, _) = last_page_request(&mut api_rx);
    app.go_to_page(20);
    let (new_seq, _) = last_page_request(&mut api_rx);
    assert!(new_seq > old_seq);

    // Page 20 arrives first
    handle_api_response(
        &mut app,
        ApiResponse::PageResult {
            seq: new_seq,
            page: 20,
            payload: Some(payload(20, vec![ayat_line(2, "Al-Baqarah", &[126])])),
        },
    );
    assert_eq!(app.model.reader.header.title, "Surah Al-Baqarah");

    // The slow response for page 10 must be dropped
    handle_api_response(
        &mut app,
        ApiResponse::PageResult {
            seq: old_seq,
            page: 10,
            payload: Some(payload(10, vec![ayat_line(2, "Stale", &[62])])),
        },
    );
    assert_eq!(app.model.reader.current_page, 20);
    assert_eq!(
        app.model.reader.header.title, "Surah Al-Baqarah",
        "older page response must not overwrite the current page"
    );
}

#[test]
fn test_page_is_padded_to_fifteen_lines() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.go_to_page(1);
    let (seq, _) = last_page_request(&mut api_rx);

    let lines = vec![
        ayat_line(1, "Al-Fatihah", &[1]),
        ayat_line(1, "Al-Fatihah", &[2, 3]),
        ayat_line(1, "Al-Fatihah", &[4]),
    ];
    handle_api_response(
        &mut app,
        ApiResponse::PageResult {
            seq,
            page: 1,
            payload: Some(payload(1, lines)),
        },
    );

    let rendered = app.model.reader.lines.ready().expect("page should be ready");
    assert_eq!(rendered.len(), 15);
    assert!(rendered[3..].iter().all(|l| l.line.kind == LineKind::Empty));
    assert_eq!(app.model.reader.cursor, Some(0));
    assert_eq!(app.model.reader.header.hizb, Some(1));
}

#[test]
fn test_failed_page_shows_error_state() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.go_to_page(5);
    let (seq, _) = last_page_request(&mut api_rx);
    handle_api_response(
        &mut app,
        ApiResponse::PageResult {
            seq,
            page: 5,
            payload: None,
        },
    );

    assert_eq!(app.model.reader.lines, ContentState::Failed);
    assert_eq!(app.model.reader.header.title, "Page 5");
}

#[test]
fn test_selecting_cursor_line_requests_tafseer() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.go_to_page(2);
    let (seq, _) = last_page_request(&mut api_rx);
    handle_api_response(
        &mut app,
        ApiResponse::PageResult {
            seq,
            page: 2,
            payload: Some(payload(2, vec![ayat_line(2, "Al-Baqarah", &[1, 2]), ayat_line(2, "Al-Baqarah", &[3])])),
        },
    );

    app.move_line_cursor(1);
    app.select_cursor_line();

    assert!(app.model.ui.detail.open);
    let requests = drain(&mut api_rx);
    assert!(
        requests
            .iter()
            .any(|r| matches!(r, ApiRequest::GetTafseer { sura: 2, aya: 3, .. })),
        "selecting line 2 should fetch tafseer for 2:3, got {:?}",
        requests
    );
}

#[test]
fn test_start_requests_startup_data() {
    let (mut app, mut api_rx, _media_rx) = new_app();
    app.start();

    let requests = drain(&mut api_rx);
    assert!(requests.iter().any(|r| matches!(r, ApiRequest::GetStats { .. })));
    assert!(requests.iter().any(|r| matches!(r, ApiRequest::GetRiwayat { .. })));
    assert!(requests.iter().any(|r| matches!(r, ApiRequest::GetPage { page: 1, .. })));
    assert!(requests.iter().any(|r| matches!(r, ApiRequest::GetReciters { .. })));
}
