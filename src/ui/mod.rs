// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (page, detail split, player, legend)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top page info bar (surah, juz, hizb, page)
// - mushaf: Renders the 15-line page with verse gutter and highlighting
// - detail: Renders the tafseer/translation panel
// - sidebar: Renders index lists and the reciter/narration pickers
// - search: Renders search input box and results
// - player: Renders the player bar and progress gauge
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status line
// - dialogs: Renders the go-to-page prompt
// - toast: Renders toast notifications (brief pop-up messages)

pub mod detail;
pub mod dialogs;
pub mod header;
pub mod layout;
pub mod legend;
pub mod mushaf;
pub mod player;
pub mod render;
pub mod search;
pub mod sidebar;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
