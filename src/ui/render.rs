use crate::App;
use ratatui::Frame;

use super::{detail, dialogs, header, layout, legend, mushaf, player, search, sidebar, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;

    let detail_open = model.ui.detail.open;
    let player_visible = model.audio.current_reciter.is_some();

    let legend_height =
        legend::calculate_legend_height(size.width, model.ui.vim_mode, detail_open, player_visible);
    let layout_info = layout::calculate_layout(size, detail_open, player_visible, legend_height);

    header::render_header(f, layout_info.header_area, &model.reader);

    mushaf::render_page(
        f,
        layout_info.page_area,
        &model.reader.lines,
        model.reader.cursor,
        model.reader.current_page,
    );

    if let Some(detail_area) = layout_info.detail_area {
        detail::render_detail(f, detail_area, &model.ui.detail);
    }

    if let Some(player_area) = layout_info.player_area {
        player::render_player(f, player_area, &model.audio);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        detail_open,
        player_visible,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &model.reader, model.audio.state);

    // Overlays, topmost last
    if let Some(panel) = &model.ui.side_panel {
        sidebar::render_side_panel(f, size, panel);
    }

    if model.ui.search.open {
        search::render_search(f, size, &model.ui.search);
    }

    if let Some(buffer) = &model.ui.page_prompt {
        dialogs::render_page_prompt(f, size, buffer, model.reader.total_pages);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
