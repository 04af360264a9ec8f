//! # ShelfApp Trait - Page App Interface
//!
//! Standard interface for the page crates that plug into the ShelfLife
//! Studio shell.
//!
//! Due to Makepad's compile-time `live_design!` macro requirements, widget
//! types must still be imported directly in the shell. This trait provides:
//!
//! - **Standardized metadata** - App name, ID, description via [`AppInfo`]
//! - **Consistent registration** - Widget registration via [`ShelfApp::live_design`]
//! - **Runtime queries** - App discovery via [`AppRegistry`]
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! // In LiveHook::after_new_from_doc
//! self.app_registry.register(PredictApp::info());
//! self.app_registry.register(VoiceApp::info());
//!
//! // In LiveRegister
//! <PredictApp as ShelfApp>::live_design(cx);
//! <VoiceApp as ShelfApp>::live_design(cx);
//! ```

use makepad_widgets::{live_id, Action, ButtonAction, Cx, LiveId, WidgetActionCast};

/// Metadata about a registered app
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    /// Description of the app
    pub description: &'static str,
    /// LiveId for the sidebar tab button (for click detection)
    pub tab_id: Option<LiveId>,
    /// LiveId for the page view (for visibility control)
    pub page_id: Option<LiveId>,
    /// Whether this app is shown in the main sidebar
    pub show_in_sidebar: bool,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "",
            id: "",
            description: "",
            tab_id: None,
            page_id: None,
            show_in_sidebar: true,
        }
    }
}

/// Page identifiers for routing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Shelf-life prediction form
    Predict,
    /// Voice assistant
    Voice,
    /// Chat assistant
    Chat,
}

impl PageId {
    /// Get the LiveId for this page's tab button
    pub fn tab_live_id(&self) -> LiveId {
        match self {
            PageId::Predict => live_id!(predict_tab),
            PageId::Voice => live_id!(voice_tab),
            PageId::Chat => live_id!(chat_tab),
        }
    }

    /// Get the LiveId for this page's view
    pub fn page_live_id(&self) -> LiveId {
        match self {
            PageId::Predict => live_id!(predict_page),
            PageId::Voice => live_id!(voice_page),
            PageId::Chat => live_id!(chat_page),
        }
    }
}

/// Router for managing page visibility and navigation
///
/// Centralizes page switching logic. Switching only changes which page view
/// is visible; hidden pages keep their widgets (and the shared state behind
/// them) intact.
#[derive(Default)]
pub struct PageRouter {
    /// Currently active page
    current_page: Option<PageId>,
    /// All registered pages
    pages: Vec<PageId>,
}

impl PageRouter {
    pub fn new() -> Self {
        Self {
            current_page: Some(PageId::Predict), // Default tab
            pages: vec![PageId::Predict, PageId::Voice, PageId::Chat],
        }
    }

    /// Get the current active page
    pub fn current(&self) -> Option<PageId> {
        self.current_page
    }

    /// Navigate to a page, returns true if page changed
    pub fn navigate_to(&mut self, page: PageId) -> bool {
        if self.current_page == Some(page) {
            return false;
        }
        self.current_page = Some(page);
        true
    }

    /// Get all pages that should be hidden (all except current)
    pub fn pages_to_hide(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages
            .iter()
            .copied()
            .filter(move |p| Some(*p) != self.current_page)
    }

    /// Check if any registered tab was clicked in actions (uses path-based detection)
    /// Returns the PageId if a tab click was detected
    pub fn check_tab_click(&self, actions: &[Action]) -> Option<PageId> {
        for action in actions {
            if let Some(wa) = action.as_widget_action() {
                if let ButtonAction::Clicked(_) = wa.cast() {
                    for page in &self.pages {
                        let tab_id = page.tab_live_id();
                        if wa.path.data.iter().any(|id| *id == tab_id) {
                            return Some(*page);
                        }
                    }
                }
            }
        }
        None
    }
}

/// Trait for apps that integrate with the ShelfLife Studio shell
pub trait ShelfApp {
    /// Returns metadata about this app
    fn info() -> AppInfo
    where
        Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of all installed apps
///
/// Apps must still be imported at compile time; this registry provides
/// metadata for runtime queries (e.g. sidebar generation).
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register an app in the registry
    pub fn register(&mut self, info: AppInfo) {
        self.apps.push(info);
    }

    /// Get all registered apps
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    /// Find an app by ID
    pub fn find_by_id(&self, id: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Number of registered apps
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_app_info(id: &'static str) -> AppInfo {
        AppInfo {
            name: "Test App",
            id,
            description: "A test app for unit tests",
            ..Default::default()
        }
    }

    #[test]
    fn test_app_info_fields() {
        let info = AppInfo {
            name: "Predict",
            id: "shelflife-predict",
            description: "Shelf-life prediction form",
            tab_id: Some(PageId::Predict.tab_live_id()),
            page_id: Some(PageId::Predict.page_live_id()),
            show_in_sidebar: true,
        };

        assert_eq!(info.name, "Predict");
        assert_eq!(info.id, "shelflife-predict");
        assert!(info.tab_id.is_some());
        assert!(info.show_in_sidebar);
    }

    #[test]
    fn test_router_defaults_to_predict() {
        let router = PageRouter::new();
        assert_eq!(router.current(), Some(PageId::Predict));
    }

    #[test]
    fn test_router_navigation() {
        let mut router = PageRouter::new();

        assert!(router.navigate_to(PageId::Chat));
        assert_eq!(router.current(), Some(PageId::Chat));

        // Navigating to the current page is a no-op
        assert!(!router.navigate_to(PageId::Chat));
        assert_eq!(router.current(), Some(PageId::Chat));

        assert!(router.navigate_to(PageId::Voice));
        assert_eq!(router.current(), Some(PageId::Voice));
    }

    #[test]
    fn test_router_pages_to_hide() {
        let mut router = PageRouter::new();
        router.navigate_to(PageId::Voice);

        let hidden: Vec<_> = router.pages_to_hide().collect();
        assert_eq!(hidden.len(), 2);
        assert!(hidden.contains(&PageId::Predict));
        assert!(hidden.contains(&PageId::Chat));
        assert!(!hidden.contains(&PageId::Voice));
    }

    #[test]
    fn test_page_ids_distinct() {
        assert_ne!(PageId::Predict.tab_live_id(), PageId::Voice.tab_live_id());
        assert_ne!(PageId::Voice.page_live_id(), PageId::Chat.page_live_id());
    }

    #[test]
    fn test_app_registry_register_and_find() {
        let mut registry = AppRegistry::new();
        assert!(registry.is_empty());

        registry.register(create_test_app_info("app1"));
        registry.register(create_test_app_info("app2"));
        assert_eq!(registry.len(), 2);

        assert!(registry.find_by_id("app1").is_some());
        assert!(registry.find_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_app_registry_preserves_order() {
        let mut registry = AppRegistry::new();
        registry.register(create_test_app_info("first"));
        registry.register(create_test_app_info("second"));

        let apps = registry.apps();
        assert_eq!(apps[0].id, "first");
        assert_eq!(apps[1].id, "second");
    }
}
