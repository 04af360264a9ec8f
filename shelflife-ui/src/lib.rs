//! # ShelfLife UI - Shared Component Library
//!
//! Shared Makepad widgets, shell components, theme state, and the scope
//! data bundle used by every ShelfLife Studio page.
//!
//! ## Modules
//!
//! - [`widgets`] - Chat panel, chat input, level meter
//! - [`shell`] - Header, sidebar building blocks, status bar
//! - [`theme`] - Runtime dark-mode state and transition animation
//! - [`app_data`] - [`ShelfAppData`] passed through Makepad's `Scope`

pub mod app_data;
pub mod shell;
pub mod theme;
pub mod widgets;

pub use app_data::ShelfAppData;
pub use theme::{ShelfTheme, ThemeListener, THEME_TRANSITION_DURATION};

use makepad_widgets::Cx;

/// Register all shelflife-ui live designs with Makepad.
///
/// The shell calls this once, after `makepad_widgets::live_design` and
/// before the page crates register.
pub fn live_design(cx: &mut Cx) {
    widgets::live_design(cx);
    shell::live_design(cx);
}
