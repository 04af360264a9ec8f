//! Chat Panel Widget
//!
//! Conversation display with header, scrollable markdown content, and a
//! copy-transcript button.
//!
//! ## Updating Messages
//!
//! ```rust,ignore
//! let chat = self.view.chat_panel(id!(chat));
//! chat.set_messages(cx, &view.messages);
//! ```

use makepad_widgets::*;
use shelflife_api::ChatMessage;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Panel styling constants
    PANEL_RADIUS = 8.0
    PANEL_PADDING = 12.0

    // Color constants (vec4 to avoid hex parsing issues)
    PANEL_BG = vec4(1.0, 1.0, 1.0, 1.0)
    PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    HEADER_BG = vec4(0.973, 0.980, 0.988, 1.0)
    HEADER_BG_DARK = vec4(0.086, 0.125, 0.188, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)

    /// Copy button with animated feedback
    CopyButton = <View> {
        width: 28, height: 24
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance copied: 0.0
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let c = self.rect_size * 0.5;

                let gray = mix(
                    vec4(0.886, 0.910, 0.941, 1.0),
                    vec4(0.334, 0.371, 0.451, 1.0),
                    self.dark_mode
                );
                let green = mix(
                    vec4(0.063, 0.725, 0.506, 1.0),
                    vec4(0.290, 0.949, 0.424, 1.0),
                    self.dark_mode
                );
                let bg_color = mix(gray, green, self.copied);

                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                sdf.fill(bg_color);

                let icon_base = mix(vec4(0.294, 0.333, 0.388, 1.0), vec4(0.580, 0.639, 0.722, 1.0), self.dark_mode);
                let icon_color = mix(icon_base, vec4(1.0, 1.0, 1.0, 1.0), smoothstep(0.0, 0.3, self.copied));

                // Clipboard icon - back rectangle
                sdf.box(c.x - 4.0, c.y - 2.0, 8.0, 9.0, 1.0);
                sdf.stroke(icon_color, 1.2);

                // Clipboard icon - front rectangle
                sdf.box(c.x - 2.0, c.y - 5.0, 8.0, 9.0, 1.0);
                sdf.fill(bg_color);
                sdf.box(c.x - 2.0, c.y - 5.0, 8.0, 9.0, 1.0);
                sdf.stroke(icon_color, 1.2);

                return sdf.result;
            }
        }
    }

    /// Panel header with title and copy action
    ChatPanelHeader = <View> {
        width: Fill, height: Fit
        flow: Right
        align: {y: 0.5}
        padding: {left: 12, right: 12, top: 10, bottom: 10}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((HEADER_BG), (HEADER_BG_DARK), self.dark_mode);
            }
        }

        title = <Label> {
            text: "Conversation"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 13.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }
        <Filler> {}
        copy_btn = <CopyButton> {}
    }

    /// Chat panel widget - conversation display with header and copy button
    pub ChatPanel = {{ChatPanel}} {
        width: Fill, height: Fill
        flow: Down
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: (PANEL_RADIUS)
            border_size: 1.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let bg = mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
                let border = mix((BORDER), (BORDER_DARK), self.dark_mode);
                sdf.fill(bg);
                sdf.stroke(border, self.border_size);
                return sdf.result;
            }
        }

        header = <ChatPanelHeader> {}

        chat_scroll = <ScrollYView> {
            width: Fill, height: Fill
            flow: Down
            scroll_bars: <ScrollBars> {
                show_scroll_x: false
                show_scroll_y: true
            }

            content_wrapper = <View> {
                width: Fill, height: Fit
                padding: (PANEL_PADDING)
                flow: Down

                content = <Markdown> {
                    width: Fill, height: Fit
                    font_size: 13.0
                    font_color: (TEXT_PRIMARY)
                    paragraph_spacing: 8

                    draw_normal: {
                        text_style: { font_size: 13.0 }
                    }
                    draw_bold: {
                        text_style: { font_size: 13.0 }
                    }
                }
            }
        }
    }
}

/// Format Unix timestamp (milliseconds) to HH:MM:SS
pub fn format_timestamp(timestamp_ms: u64) -> String {
    let total_secs = timestamp_ms / 1000;
    let secs_in_day = total_secs % 86400;
    let hours = secs_in_day / 3600;
    let minutes = (secs_in_day % 3600) / 60;
    let seconds = secs_in_day % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Actions emitted by ChatPanel
#[derive(Clone, Debug, DefaultNone)]
pub enum ChatPanelAction {
    None,
    /// Copy button was clicked
    CopyClicked,
}

#[derive(Live, LiveHook, Widget)]
pub struct ChatPanel {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,

    /// Last message count (for auto-scroll)
    #[rust]
    last_message_count: usize,

    /// Empty state text
    #[live]
    empty_text: String,
}

impl Widget for ChatPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        let copy_btn = self.view.view(id!(header.copy_btn));
        match event.hits(cx, copy_btn.area()) {
            Hit::FingerUp(fe) if fe.was_tap() => {
                cx.widget_action(self.widget_uid(), &scope.path, ChatPanelAction::CopyClicked);
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ChatPanel {
    /// Set messages and update display
    pub fn set_messages(&mut self, cx: &mut Cx, messages: &[ChatMessage]) {
        let text = if messages.is_empty() {
            self.placeholder().to_string()
        } else {
            messages
                .iter()
                .map(|msg| {
                    format!(
                        "**{}** ({}):  \n{}",
                        msg.display_name(),
                        format_timestamp(msg.timestamp),
                        msg.content
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n---\n\n")
        };

        self.view
            .markdown(id!(chat_scroll.content_wrapper.content))
            .set_text(cx, &text);

        // Auto-scroll to bottom on new messages
        if messages.len() > self.last_message_count {
            self.view
                .view(id!(chat_scroll))
                .set_scroll_pos(cx, DVec2 { x: 0.0, y: 1e10 });
        }
        self.last_message_count = messages.len();

        self.view.redraw(cx);
    }

    /// Clear the display back to the empty state
    pub fn clear(&mut self, cx: &mut Cx) {
        self.last_message_count = 0;
        let empty = self.placeholder().to_string();
        self.view
            .markdown(id!(chat_scroll.content_wrapper.content))
            .set_text(cx, &empty);
        self.view.redraw(cx);
    }

    fn placeholder(&self) -> &str {
        if self.empty_text.is_empty() {
            "Ask anything about food storage..."
        } else {
            &self.empty_text
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;
        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.view(id!(header)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(header.title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(id!(header.copy_btn)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }

    /// Set copy button animation state (for feedback)
    pub fn set_copy_flash(&mut self, cx: &mut Cx, value: f64) {
        self.view.view(id!(header.copy_btn)).apply_over(cx, live! {
            draw_bg: { copied: (value) }
        });
        self.view.redraw(cx);
    }

    /// Plain-text transcript for the clipboard
    pub fn get_text_for_copy(&self, messages: &[ChatMessage]) -> String {
        if messages.is_empty() {
            "No messages".to_string()
        } else {
            messages
                .iter()
                .map(|msg| format!("[{}] {}", msg.display_name(), msg.content))
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }
}

impl ChatPanelRef {
    /// Set messages
    pub fn set_messages(&self, cx: &mut Cx, messages: &[ChatMessage]) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_messages(cx, messages);
        }
    }

    /// Clear messages
    pub fn clear(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.clear(cx);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Set copy flash animation
    pub fn set_copy_flash(&self, cx: &mut Cx, value: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_copy_flash(cx, value);
        }
    }

    /// Plain-text transcript for the clipboard
    pub fn get_text_for_copy(&self, messages: &[ChatMessage]) -> String {
        self.borrow()
            .map(|inner| inner.get_text_for_copy(messages))
            .unwrap_or_default()
    }

    /// Check if copy was clicked
    pub fn copy_clicked(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            ChatPanelAction::CopyClicked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        // 01:02:03 into the day
        let ms = (1 * 3600 + 2 * 60 + 3) * 1000;
        assert_eq!(format_timestamp(ms), "01:02:03");
        assert_eq!(format_timestamp(0), "00:00:00");
    }
}
