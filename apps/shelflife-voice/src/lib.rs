//! ShelfLife Voice App - record a question and send it for transcription

pub mod capture;
pub mod screen;
pub mod wav;

pub use capture::AudioCapture;
pub use screen::VoiceScreen;

use makepad_widgets::Cx;
use shelflife_widgets::{AppInfo, PageId, ShelfApp};

/// Voice app descriptor
pub struct VoiceApp;

impl ShelfApp for VoiceApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Voice",
            id: "shelflife-voice",
            description: "Record a question and transcribe it",
            tab_id: Some(PageId::Voice.tab_live_id()),
            page_id: Some(PageId::Voice.page_live_id()),
            show_in_sidebar: true,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}
