//! Reusable Shell Components for ShelfLife Studio
//!
//! ## Components
//!
//! - [`ShellHeader`] - Application header with logo, title, theme toggle
//! - [`sidebar`] - Sidebar button and divider building blocks (DSL-only)
//! - [`StatusBar`] - Backend reachability and request activity
//!
//! ## Architecture
//!
//! The shell composes these into a consistent layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ShellHeader                                │
//! ├─────────┬───────────────────────────────────┤
//! │         │                                   │
//! │ Sidebar │     Page Content                  │
//! │         │     (predict / voice / chat)      │
//! │         │                                   │
//! ├─────────┴───────────────────────────────────┤
//! │  StatusBar                                  │
//! └─────────────────────────────────────────────┘
//! ```

pub mod header;
pub mod sidebar;
pub mod status_bar;

// Re-export main types
pub use header::{ShellHeader, ShellHeaderAction, ShellHeaderRef, ShellHeaderWidgetExt, ShellHeaderWidgetRefExt};
pub use status_bar::{BackendStatus, StatusBar, StatusBarRef, StatusBarWidgetExt, StatusBarWidgetRefExt};

use makepad_widgets::Cx;

/// Register all shell live designs with Makepad.
///
/// Called from `shelflife_ui::live_design()`. Each block defines its color
/// constants locally; cross-crate constant imports break the live parser.
pub fn live_design(cx: &mut Cx) {
    header::live_design(cx);
    sidebar::live_design(cx);
    status_bar::live_design(cx);
}
