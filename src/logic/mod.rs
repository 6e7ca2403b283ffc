//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - audio: Reciter de-duplication, time→verse lookup, next/prev verse decisions
//! - errors: Failure classification for log lines
//! - formatting: Playback time and width-aware truncation
//! - index: Side-panel rows with bound actions
//! - navigation: List selection and line cursor movement
//! - page: Page clamping, hizb arithmetic, 15-line grid, highlighting
//! - search: Query validation and result previews
//! - ui: UI state transitions (tabs, toasts, page prompt)

pub mod audio;
pub mod errors;
pub mod formatting;
pub mod index;
pub mod navigation;
pub mod page;
pub mod search;
pub mod ui;
