//! Shared widgets for ShelfLife Studio pages.

pub mod chat_input;
pub mod chat_panel;
pub mod level_meter;

pub use chat_input::{ChatInput, ChatInputAction, ChatInputRef, ChatInputWidgetExt};
pub use chat_panel::{ChatPanel, ChatPanelAction, ChatPanelRef, ChatPanelWidgetExt};
pub use level_meter::{LevelMeter, LevelMeterRef, LevelMeterWidgetExt, MeterColors};

use makepad_widgets::Cx;

/// Register all shared widget live designs
pub fn live_design(cx: &mut Cx) {
    chat_panel::live_design(cx);
    chat_input::live_design(cx);
    level_meter::live_design(cx);
}
