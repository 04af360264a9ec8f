//! Shared app interface for ShelfLife Studio page crates.

pub mod app_trait;

pub use app_trait::{AppInfo, AppRegistry, PageId, PageRouter, ShelfApp};
