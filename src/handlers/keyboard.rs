//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Overlays capture keys
//! in this order: go-to-page prompt, search overlay, side panel; anything
//! left falls through to the reader bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::PanelKind;
use crate::App;

/// Rows moved by PageUp/PageDown in lists
const LIST_PAGE_ROWS: i32 = 10;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.page_prompt.is_some() {
        handle_prompt_key(app, key);
        return;
    }

    if app.model.ui.search.open {
        handle_search_key(app, key);
        return;
    }

    if app.model.ui.side_panel.is_some() {
        handle_panel_key(app, key);
        return;
    }

    handle_reader_key(app, key);
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    let Some(buffer) = app.model.ui.page_prompt.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.model.ui.page_prompt = None,
        KeyCode::Enter => {
            let page = crate::logic::ui::parse_prompt_page(buffer);
            app.model.ui.page_prompt = None;
            app.go_to_page(page);
        }
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) => {
            crate::logic::ui::push_prompt_digit(buffer, c);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_search(),
        KeyCode::Enter => {
            // First Enter searches; once results for this query are shown, it opens one
            if app.model.ui.search.query_is_dirty() || app.model.ui.search.rows().is_empty() {
                app.perform_search();
            } else {
                app.activate_search_result();
            }
        }
        KeyCode::Down => app.search_next(),
        KeyCode::Up => app.search_prev(),
        KeyCode::Backspace => {
            app.model.ui.search.query.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.search.query.push(c);
        }
        _ => {}
    }
}

fn handle_panel_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_panel(),
        KeyCode::Enter => app.activate_selected_entry(),
        KeyCode::Down => app.panel_next(),
        KeyCode::Up => app.panel_prev(),
        KeyCode::Char('j') if vim => app.panel_next(),
        KeyCode::Char('k') if vim => app.panel_prev(),
        KeyCode::Char('d') if vim && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.panel_page(LIST_PAGE_ROWS / 2)
        }
        KeyCode::Char('u') if vim && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.panel_page(-LIST_PAGE_ROWS / 2)
        }
        KeyCode::PageDown => app.panel_page(LIST_PAGE_ROWS),
        KeyCode::PageUp => app.panel_page(-LIST_PAGE_ROWS),
        KeyCode::Home => app.panel_page(i32::MIN / 2),
        KeyCode::End => app.panel_page(i32::MAX / 2),
        KeyCode::Tab => {
            // Cycle through the three indexes
            let next = match app.model.ui.side_panel.as_ref().map(|p| p.kind) {
                Some(PanelKind::Surahs) => Some(PanelKind::Juzs),
                Some(PanelKind::Juzs) => Some(PanelKind::Ahzab),
                Some(PanelKind::Ahzab) => Some(PanelKind::Surahs),
                _ => None,
            };
            if let Some(kind) = next {
                app.open_panel(kind);
            }
        }
        _ => {}
    }
}

fn handle_reader_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc => {
            app.close_detail();
            app.model.ui.close_all_panels();
        }

        // Pages run right-to-left: Left turns forward
        KeyCode::Left | KeyCode::PageDown => app.next_page(),
        KeyCode::Right | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('h') if vim => app.next_page(),
        KeyCode::Char('l') if vim => app.prev_page(),
        KeyCode::Home => app.go_to_page(1),
        KeyCode::End => app.go_to_page(app.model.reader.total_pages as i64),
        KeyCode::Char('g') => app.model.ui.page_prompt = Some(String::new()),

        KeyCode::Down => app.move_line_cursor(1),
        KeyCode::Up => app.move_line_cursor(-1),
        KeyCode::Char('j') if vim => app.move_line_cursor(1),
        KeyCode::Char('k') if vim => app.move_line_cursor(-1),

        KeyCode::Enter => app.select_cursor_line(),
        KeyCode::Char('t') | KeyCode::Tab => app.toggle_detail_tab(),
        KeyCode::Char('J') => app.scroll_detail(3),
        KeyCode::Char('K') => app.scroll_detail(-3),
        KeyCode::Char('d') if vim && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_detail(10)
        }
        KeyCode::Char('u') if vim && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_detail(-10)
        }

        KeyCode::Char('s') => app.open_panel(PanelKind::Surahs),
        KeyCode::Char('z') => app.open_panel(PanelKind::Juzs),
        KeyCode::Char('a') => app.open_panel(PanelKind::Ahzab),
        KeyCode::Char('r') => app.open_panel(PanelKind::Reciters),
        KeyCode::Char('w') => app.open_panel(PanelKind::Riwayat),
        KeyCode::Char('/') => app.open_search(),

        KeyCode::Char(' ') => app.toggle_play(),
        KeyCode::Char('p') => app.play_from_cursor(),
        KeyCode::Char(']') => app.next_ayah(),
        KeyCode::Char('[') => app.prev_ayah(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let tenths = c.to_digit(10).unwrap_or(0) as f64;
            app.seek_percent(tenths * 10.0);
        }
        _ => {}
    }
}
