//! ShelfLife Studio - Root application
//!
//! Composes the shell chrome (header, sidebar, status bar) around the page
//! apps and owns the shared [`ShelfAppData`] that travels to every screen
//! through Makepad's `Scope`.
//!
//! Responsibilities:
//! - Resolve backend configuration from CLI args and environment
//! - Register page apps and route sidebar navigation
//! - Animate theme transitions and fan dark mode out to the shell chrome
//! - Poll worker events and reflect backend reachability in the status bar

use makepad_widgets::*;
use once_cell::sync::OnceCell;

use shelflife_api::{ApiConfig, ApiEvent};
use shelflife_ui::shell::{BackendStatus, ShellHeaderWidgetRefExt, StatusBarWidgetRefExt};
use shelflife_ui::{ShelfAppData, THEME_TRANSITION_DURATION};
use shelflife_widgets::{AppRegistry, PageId, PageRouter, ShelfApp};

use crate::cli::Args;

/// CLI arguments, set once by main() before app_main() runs
static CLI_ARGS: OnceCell<Args> = OnceCell::new();

/// Store CLI args for the app to read during startup
pub fn set_cli_args(args: Args) {
    let _ = CLI_ARGS.set(args);
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use shelflife_ui::shell::header::ShellHeader;
    use shelflife_ui::shell::status_bar::StatusBar;
    use shelflife_ui::shell::sidebar::SidebarButton;
    use shelflife_ui::shell::sidebar::SidebarDivider;
    use shelflife_predict::screen::PredictScreen;
    use shelflife_voice::screen::VoiceScreen;
    use shelflife_chat::screen::ChatScreen;

    // Color constants (vec4 to avoid hex parsing issues)
    SIDEBAR_BG = vec4(0.976, 0.980, 0.984, 1.0)
    SIDEBAR_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    MAIN_BG = vec4(0.961, 0.969, 0.980, 1.0)
    MAIN_BG_DARK = vec4(0.059, 0.090, 0.165, 1.0)

    App = {{App}} {
        ui: <Window> {
            window: { title: "ShelfLife Studio", inner_size: vec2(1400, 900) }

            body = <View> {
                width: Fill, height: Fill
                flow: Down

                header = <ShellHeader> {}

                content = <View> {
                    width: Fill, height: Fill
                    flow: Right

                    sidebar = <View> {
                        width: 220, height: Fill
                        flow: Down
                        padding: 10
                        spacing: 4
                        show_bg: true
                        draw_bg: {
                            instance dark_mode: 0.0
                            fn pixel(self) -> vec4 {
                                return mix((SIDEBAR_BG), (SIDEBAR_BG_DARK), self.dark_mode);
                            }
                        }

                        predict_tab = <SidebarButton> {
                            text: "Predict"
                            draw_bg: { selected: 1.0 }
                        }
                        voice_tab = <SidebarButton> { text: "Voice" }
                        chat_tab = <SidebarButton> { text: "Chat" }

                        <SidebarDivider> {}

                        <Filler> {}
                    }

                    main_content = <View> {
                        width: Fill, height: Fill
                        flow: Overlay
                        show_bg: true
                        draw_bg: {
                            instance dark_mode: 0.0
                            fn pixel(self) -> vec4 {
                                return mix((MAIN_BG), (MAIN_BG_DARK), self.dark_mode);
                            }
                        }

                        predict_page = <PredictScreen> {}
                        voice_page = <VoiceScreen> { visible: false }
                        chat_page = <ChatScreen> { visible: false }
                    }
                }

                status_bar = <StatusBar> {}
            }
        }
    }
}

app_main!(App);

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,

    /// Shared state handed to every screen through Scope
    #[rust]
    app_data: ShelfAppData,

    /// Sidebar navigation state
    #[rust]
    router: PageRouter,

    /// Installed page apps
    #[rust]
    registry: AppRegistry,

    /// Theme transition animation state
    #[rust]
    theme_anim_active: bool,
    #[rust]
    theme_anim_start: f64,

    /// Poll timer for worker events
    #[rust]
    status_timer: Timer,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        let args = cli_args();

        // CLI flags win over environment variables
        let env_config = ApiConfig::from_env();
        let base_url = args.api_url.clone().unwrap_or(env_config.base_url);
        let timeout_secs = args.api_timeout.unwrap_or(env_config.timeout_secs);
        let config = ApiConfig::from_parts(base_url, timeout_secs);
        ::log::info!(
            "backend: {} (timeout {}s)",
            config.base_url,
            config.timeout_secs
        );

        self.app_data = ShelfAppData::new(config);
        if args.dark_mode {
            self.app_data.theme_mut().set_dark_mode(true);
        }

        self.router = PageRouter::new();

        let mut registry = AppRegistry::new();
        #[cfg(feature = "shelflife-predict")]
        registry.register(shelflife_predict::PredictApp::info());
        #[cfg(feature = "shelflife-voice")]
        registry.register(shelflife_voice::VoiceApp::info());
        #[cfg(feature = "shelflife-chat")]
        registry.register(shelflife_chat::ChatApp::info());
        ::log::info!("registered {} apps", registry.len());
        self.registry = registry;
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        shelflife_ui::live_design(cx);

        #[cfg(feature = "shelflife-predict")]
        <shelflife_predict::PredictApp as ShelfApp>::live_design(cx);
        #[cfg(feature = "shelflife-voice")]
        <shelflife_voice::VoiceApp as ShelfApp>::live_design(cx);
        #[cfg(feature = "shelflife-chat")]
        <shelflife_chat::ChatApp as ShelfApp>::live_design(cx);
    }
}

impl MatchEvent for App {
    fn handle_startup(&mut self, cx: &mut Cx) {
        // Apply initial theme without animation
        self.apply_shell_theme(cx);
        self.ui
            .shell_header(id!(body.header))
            .set_dark_mode(cx, self.app_data.is_dark_mode());
        self.apply_page_visibility(cx);

        self.status_timer = cx.start_interval(1.0);
        ::log::info!("ShelfLife Studio initialized");
    }

    fn handle_actions(&mut self, cx: &mut Cx, actions: &Actions) {
        if self.ui.shell_header(id!(body.header)).theme_toggled(actions) {
            self.app_data.toggle_dark_mode();
            self.ui
                .shell_header(id!(body.header))
                .set_dark_mode(cx, self.app_data.is_dark_mode());
            self.theme_anim_active = true;
            self.theme_anim_start = 0.0;
            cx.new_next_frame();
        }

        if let Some(page) = self.router.check_tab_click(actions) {
            if self.router.navigate_to(page) {
                ::log::debug!("navigating to {:?}", page);
                self.apply_page_visibility(cx);
            }
        }
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        // Theme transition animation
        if let Event::NextFrame(nf) = event {
            if self.theme_anim_active {
                if self.theme_anim_start == 0.0 {
                    self.theme_anim_start = nf.time;
                }
                let elapsed = nf.time - self.theme_anim_start;
                let in_progress = self
                    .app_data
                    .theme_mut()
                    .update_animation(elapsed, THEME_TRANSITION_DURATION);
                self.apply_shell_theme(cx);
                if in_progress {
                    cx.new_next_frame();
                } else {
                    self.theme_anim_active = false;
                }
            }
        }

        // Backend reachability from worker events
        if self.status_timer.is_event(event).is_some() {
            for api_event in self.app_data.worker().poll_events() {
                let status_bar = self.ui.status_bar(id!(body.status_bar));
                match api_event {
                    ApiEvent::RequestSucceeded { endpoint } => {
                        ::log::debug!("{} request succeeded", endpoint);
                        status_bar.set_status(cx, BackendStatus::Reachable);
                        status_bar.set_info(cx, "");
                    }
                    ApiEvent::RequestFailed { endpoint, message } => {
                        ::log::warn!("{} request failed: {}", endpoint, message);
                        status_bar.set_status(cx, BackendStatus::Unreachable);
                        status_bar.set_info(cx, &message);
                    }
                }
            }
        }

        self.ui
            .handle_event(cx, event, &mut Scope::with_data(&mut self.app_data));
        self.match_event(cx, event);
    }
}

impl App {
    /// Fan the current dark mode value out to the shell chrome.
    /// Page screens pick the value up themselves via Scope polling.
    fn apply_shell_theme(&mut self, cx: &mut Cx) {
        let dark_mode = self.app_data.dark_mode_value();

        self.ui
            .shell_header(id!(body.header))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .status_bar(id!(body.status_bar))
            .apply_dark_mode(cx, dark_mode);

        self.ui.view(id!(body.content.sidebar)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.ui.view(id!(body.content.main_content)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });

        for tab in [
            id!(body.content.sidebar.predict_tab),
            id!(body.content.sidebar.voice_tab),
            id!(body.content.sidebar.chat_tab),
        ] {
            self.ui.button(tab).apply_over(cx, live!{
                draw_bg: { dark_mode: (dark_mode) }
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        self.ui.redraw(cx);
    }

    /// Show the current page, hide the rest, and highlight the active tab
    fn apply_page_visibility(&mut self, cx: &mut Cx) {
        let current = match self.router.current() {
            Some(page) => page,
            None => return,
        };

        self.ui
            .view(id!(body.content.main_content.predict_page))
            .set_visible(cx, current == PageId::Predict);
        self.ui
            .view(id!(body.content.main_content.voice_page))
            .set_visible(cx, current == PageId::Voice);
        self.ui
            .view(id!(body.content.main_content.chat_page))
            .set_visible(cx, current == PageId::Chat);

        let predict_selected = if current == PageId::Predict { 1.0 } else { 0.0 };
        let voice_selected = if current == PageId::Voice { 1.0 } else { 0.0 };
        let chat_selected = if current == PageId::Chat { 1.0 } else { 0.0 };

        self.ui.button(id!(body.content.sidebar.predict_tab)).apply_over(cx, live!{
            draw_bg: { selected: (predict_selected) }
        });
        self.ui.button(id!(body.content.sidebar.voice_tab)).apply_over(cx, live!{
            draw_bg: { selected: (voice_selected) }
        });
        self.ui.button(id!(body.content.sidebar.chat_tab)).apply_over(cx, live!{
            draw_bg: { selected: (chat_selected) }
        });

        self.ui.redraw(cx);
    }
}
