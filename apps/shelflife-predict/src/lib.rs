//! ShelfLife Predict App - Shelf-life prediction form

pub mod screen;

pub use screen::PredictScreen;

use makepad_widgets::Cx;
use shelflife_widgets::{AppInfo, PageId, ShelfApp};

/// Predict app descriptor
pub struct PredictApp;

impl ShelfApp for PredictApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Predict",
            id: "shelflife-predict",
            description: "Shelf-life prediction from storage conditions",
            tab_id: Some(PageId::Predict.tab_live_id()),
            page_id: Some(PageId::Predict.page_live_id()),
            show_in_sidebar: true,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}
