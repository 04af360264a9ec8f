//! ShelfLife Chat App - food storage Q&A assistant

pub mod screen;

pub use screen::ChatScreen;

use makepad_widgets::Cx;
use shelflife_widgets::{AppInfo, PageId, ShelfApp};

/// Chat app descriptor
pub struct ChatApp;

impl ShelfApp for ChatApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Chat",
            id: "shelflife-chat",
            description: "Ask the assistant about food storage",
            tab_id: Some(PageId::Chat.tab_live_id()),
            page_id: Some(PageId::Chat.page_live_id()),
            show_in_sidebar: true,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}
