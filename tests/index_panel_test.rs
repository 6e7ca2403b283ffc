//! Side panel indexes and pickers
//!
//! Rows carry their action from the moment they are built; activating a
//! row runs it and closes the panel. A response for an index the user has
//! already closed (or replaced) is ignored.

use mushaftui::api::{Riwayah, Surah};
use mushaftui::handlers::{handle_api_response, handle_key};
use mushaftui::model::{ContentState, EntryAction, Model, PanelKind};
use mushaftui::services::api::{ApiRequest, ApiResponse};
use mushaftui::services::player::MediaCommand;
use mushaftui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn new_app() -> (App, UnboundedReceiver<ApiRequest>, UnboundedReceiver<MediaCommand>) {
    let (api_tx, api_rx) = mpsc::unbounded_channel();
    let (media_tx, media_rx) = mpsc::unbounded_channel();
    let model = Model::new("hafs".to_string(), 1, false, "en".to_string());
    (App::new(model, api_tx, media_tx), api_rx, media_rx)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn surah(number: u16, name_ar: &str, start_page: Option<u16>) -> Surah {
    Surah {
        number,
        name_ar: name_ar.to_string(),
        name_en: None,
        ayat_count: Some(7),
        start_page,
    }
}

fn surahs_seq(rx: &mut UnboundedReceiver<ApiRequest>) -> u64 {
    match rx.try_recv() {
        Ok(ApiRequest::GetSurahs { seq, riwayah }) => {
            assert_eq!(riwayah, "hafs");
            seq
        }
        other => panic!("expected a surah index request, got {:?}", other),
    }
}

#[test]
fn test_surah_row_navigates_and_closes_panel() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    handle_key(&mut app, key(KeyCode::Char('s')));
    let seq = surahs_seq(&mut api_rx);
    assert!(app
        .model
        .ui
        .side_panel
        .as_ref()
        .is_some_and(|p| p.content.is_loading()));

    handle_api_response(
        &mut app,
        ApiResponse::SurahsResult {
            seq,
            surahs: Some(vec![
                surah(1, "الفاتحة", Some(1)),
                surah(2, "البقرة", Some(2)),
                surah(3, "آل عمران", Some(50)),
            ]),
        },
    );

    let panel = app.model.ui.side_panel.as_ref().expect("panel open");
    assert_eq!(panel.entries().len(), 3);
    assert_eq!(panel.entries()[2].action, Some(EntryAction::GoToPage(50)));

    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Enter));

    assert!(app.model.ui.side_panel.is_none(), "activation closes the panel");
    match api_rx.try_recv() {
        Ok(ApiRequest::GetPage { page, .. }) => assert_eq!(page, 50),
        other => panic!("expected navigation to page 50, got {:?}", other),
    }
}

#[test]
fn test_row_without_start_page_does_nothing() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_panel(PanelKind::Surahs);
    let seq = surahs_seq(&mut api_rx);
    handle_api_response(
        &mut app,
        ApiResponse::SurahsResult {
            seq,
            surahs: Some(vec![surah(9, "التوبة", None)]),
        },
    );

    app.activate_selected_entry();

    assert!(app.model.ui.side_panel.is_some(), "a row with no action leaves the panel open");
    assert!(api_rx.try_recv().is_err());
}

#[test]
fn test_index_response_after_close_is_ignored() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_panel(PanelKind::Surahs);
    let seq = surahs_seq(&mut api_rx);
    app.close_panel();

    handle_api_response(
        &mut app,
        ApiResponse::SurahsResult {
            seq,
            surahs: Some(vec![surah(1, "الفاتحة", Some(1))]),
        },
    );
    assert!(app.model.ui.side_panel.is_none());
}

#[test]
fn test_failed_and_empty_index_are_distinct() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_panel(PanelKind::Surahs);
    let seq = surahs_seq(&mut api_rx);
    handle_api_response(&mut app, ApiResponse::SurahsResult { seq, surahs: None });
    assert_eq!(
        app.model.ui.side_panel.as_ref().map(|p| p.content.clone()),
        Some(ContentState::Failed)
    );

    app.open_panel(PanelKind::Surahs);
    let seq = surahs_seq(&mut api_rx);
    handle_api_response(&mut app, ApiResponse::SurahsResult { seq, surahs: Some(vec![]) });
    assert_eq!(
        app.model.ui.side_panel.as_ref().map(|p| p.content.clone()),
        Some(ContentState::Empty)
    );
}

#[test]
fn test_switching_narration_reloads_page_and_reciters() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.model.reader.riwayat = vec![
        Riwayah {
            key: "hafs".to_string(),
            name_ar: "حفص".to_string(),
            name_en: "Hafs".to_string(),
            total_pages: Some(604),
        },
        Riwayah {
            key: "warsh".to_string(),
            name_ar: "ورش".to_string(),
            name_en: "Warsh".to_string(),
            total_pages: Some(604),
        },
    ];

    app.open_panel(PanelKind::Riwayat);
    assert!(api_rx.try_recv().is_err(), "known narrations are not refetched");
    app.panel_next();
    app.activate_selected_entry();

    assert_eq!(app.model.reader.riwayah, "warsh");
    let mut saw_page = false;
    let mut saw_reciters = false;
    while let Ok(request) = api_rx.try_recv() {
        match request {
            ApiRequest::GetPage { riwayah, .. } => saw_page = riwayah == "warsh",
            ApiRequest::GetReciters { riwayah, .. } => saw_reciters = riwayah == "warsh",
            _ => {}
        }
    }
    assert!(saw_page && saw_reciters);
}

#[test]
fn test_escape_closes_panel_before_anything_else() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_panel(PanelKind::Juzs);
    let _ = api_rx.try_recv();
    handle_key(&mut app, key(KeyCode::Esc));

    assert!(app.model.ui.side_panel.is_none());
    assert!(!app.model.ui.should_quit);
}

#[test]
fn test_reciter_picker_waits_for_startup_list() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.load_reciters();
    let seq = match api_rx.try_recv() {
        Ok(ApiRequest::GetReciters { seq, .. }) => seq,
        other => panic!("expected a reciter request, got {:?}", other),
    };

    app.open_panel(PanelKind::Reciters);

    assert!(api_rx.try_recv().is_err(), "the list already in flight is not requested again");
    assert_eq!(
        app.model.ui.side_panel.as_ref().map(|p| p.content.clone()),
        Some(ContentState::Loading),
        "still loading, not empty"
    );

    handle_api_response(&mut app, ApiResponse::RecitersResult { seq, reciters: Some(vec![]) });
    assert_eq!(
        app.model.ui.side_panel.as_ref().map(|p| p.content.clone()),
        Some(ContentState::Empty)
    );
}

#[test]
fn test_empty_and_failed_narration_list_are_distinct() {
    let (mut app, mut api_rx, _media_rx) = new_app();

    app.open_panel(PanelKind::Riwayat);
    let seq = match api_rx.try_recv() {
        Ok(ApiRequest::GetRiwayat { seq }) => seq,
        other => panic!("expected a narration request, got {:?}", other),
    };
    handle_api_response(&mut app, ApiResponse::RiwayatResult { seq, riwayat: Some(vec![]) });
    assert_eq!(
        app.model.ui.side_panel.as_ref().map(|p| p.content.clone()),
        Some(ContentState::Empty),
        "a valid empty list is not a failure"
    );

    app.open_panel(PanelKind::Riwayat);
    let seq = match api_rx.try_recv() {
        Ok(ApiRequest::GetRiwayat { seq }) => seq,
        other => panic!("expected a narration request, got {:?}", other),
    };
    handle_api_response(&mut app, ApiResponse::RiwayatResult { seq, riwayat: None });
    assert_eq!(
        app.model.ui.side_panel.as_ref().map(|p| p.content.clone()),
        Some(ContentState::Failed)
    );
}
