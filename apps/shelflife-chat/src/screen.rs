//! Chat Screen - conversation panel, input row, clear and copy actions

use makepad_widgets::*;
use shelflife_api::{ChatView, Phase};
use shelflife_ui::widgets::{ChatInputWidgetExt, ChatPanelWidgetExt};
use shelflife_ui::ShelfAppData;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use shelflife_ui::widgets::chat_panel::ChatPanel;
    use shelflife_ui::widgets::chat_input::ChatInput;

    // Color constants (vec4 to avoid hex parsing issues)
    PAGE_BG = vec4(0.961, 0.969, 0.980, 1.0)
    PAGE_BG_DARK = vec4(0.059, 0.090, 0.165, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    RED_500 = vec4(0.937, 0.267, 0.267, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    ClearButton = <Button> {
        width: Fit, height: 30
        padding: {left: 12, right: 12}
        text: "Clear"
        draw_text: {
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return (WHITE);
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 5.0);
                sdf.fill(mix((SLATE_500), (SLATE_600), self.hover + self.pressed * 0.5));
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 1.0} }
                }
            }
        }
    }

    /// Chat screen - panel, status row, input
    pub ChatScreen = {{ChatScreen}} {
        width: Fill, height: Fill
        flow: Down
        spacing: 10
        padding: 20
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((PAGE_BG), (PAGE_BG_DARK), self.dark_mode);
            }
        }

        chat = <ChatPanel> {}

        status_row = <View> {
            width: Fill, height: Fit
            flow: Right
            align: {y: 0.5}
            spacing: 8

            pending_label = <Label> {
                visible: false
                text: "Assistant is thinking..."
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }

            error_label = <Label> {
                visible: false
                text: ""
                draw_text: {
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return (RED_500);
                    }
                }
            }

            <Filler> {}

            clear_btn = <ClearButton> {}
        }

        input = <ChatInput> {}
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct ChatScreen {
    #[deref]
    view: View,

    /// Poll timer for lifecycle snapshots
    #[rust]
    poll_timer: Timer,

    #[rust]
    initialized: bool,

    /// Last applied dark mode value
    #[rust]
    dark_mode: f64,

    /// Copy button flash animation state
    #[rust]
    copy_flash_active: bool,
    #[rust]
    copy_flash_start: f64,

    /// Cached transcript for the copy action
    #[rust]
    last_view: Option<ChatView>,
}

impl Widget for ChatScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if !self.initialized {
            self.initialized = true;
            self.poll_timer = cx.start_interval(0.1);
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                let dark = data.dark_mode_value();
                if dark != self.dark_mode {
                    self.apply_dark_mode(cx, dark);
                }
            }
        }

        if self.poll_timer.is_event(event).is_some() {
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                let dark = data.dark_mode_value();
                if dark != self.dark_mode {
                    self.apply_dark_mode(cx, dark);
                }
                if let Some(view) = data.state().chat.read_if_dirty() {
                    self.render_chat(cx, &view);
                    self.last_view = Some(view);
                }
            }
        }

        // Copy button flash fade
        if let Event::NextFrame(nf) = event {
            if self.copy_flash_active {
                if self.copy_flash_start == 0.0 {
                    self.copy_flash_start = nf.time;
                }
                let elapsed = nf.time - self.copy_flash_start;
                let fade_start = 0.3;
                let fade_duration = 0.5;
                if elapsed >= fade_start + fade_duration {
                    self.copy_flash_active = false;
                    self.view.chat_panel(id!(chat)).set_copy_flash(cx, 0.0);
                } else if elapsed >= fade_start {
                    let t = (elapsed - fade_start) / fade_duration;
                    let smooth_t = t * t * (3.0 - 2.0 * t);
                    self.view.chat_panel(id!(chat)).set_copy_flash(cx, 1.0 - smooth_t);
                }
                if self.copy_flash_active {
                    cx.new_next_frame();
                }
            }
        }

        if let Some(text) = self.view.chat_input(id!(input)).submitted(&actions) {
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                ::log::info!("chat message submitted ({} chars)", text.len());
                data.dispatch_chat(text, None);
            }
        }

        if self.view.chat_panel(id!(chat)).copy_clicked(&actions) {
            let messages = self
                .last_view
                .as_ref()
                .map(|v| v.messages.as_slice())
                .unwrap_or(&[]);
            let text = self.view.chat_panel(id!(chat)).get_text_for_copy(messages);
            cx.copy_to_clipboard(&text);
            self.view.chat_panel(id!(chat)).set_copy_flash(cx, 1.0);
            self.copy_flash_active = true;
            self.copy_flash_start = 0.0;
            cx.new_next_frame();
        }

        if self.view.button(id!(status_row.clear_btn)).clicked(&actions) {
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                // Also invalidates any reply still in flight
                data.state().chat.clear();
            }
            self.view.chat_panel(id!(chat)).clear(cx);
            self.last_view = None;
        }

        for action in actions {
            cx.action(action);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ChatScreen {
    fn render_chat(&mut self, cx: &mut Cx, view: &ChatView) {
        self.view.chat_panel(id!(chat)).set_messages(cx, &view.messages);

        self.view
            .label(id!(status_row.pending_label))
            .set_visible(cx, view.phase == Phase::Pending);

        let error = self.view.label(id!(status_row.error_label));
        match &view.error {
            Some(msg) if view.phase == Phase::Error => {
                error.set_text(cx, msg);
                error.set_visible(cx, true);
            }
            _ => {
                error.set_text(cx, "");
                error.set_visible(cx, false);
            }
        }

        self.view.redraw(cx);
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(status_row.pending_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.chat_panel(id!(chat)).apply_dark_mode(cx, dark_mode);
        self.view.chat_input(id!(input)).apply_dark_mode(cx, dark_mode);

        self.view.redraw(cx);
    }
}
