//! Chat Input Widget
//!
//! Text input row with a send button. Emits `ChatInputAction::Submitted`
//! when the user clicks Send or presses Return, then clears the field.

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants (vec4 to avoid hex parsing issues)
    INPUT_BG = vec4(1.0, 1.0, 1.0, 1.0)
    INPUT_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    INPUT_BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    INPUT_BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)
    INPUT_TEXT = vec4(0.067, 0.090, 0.125, 1.0)
    INPUT_TEXT_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    SEND_GREEN = vec4(0.063, 0.725, 0.506, 1.0)
    SEND_GREEN_HOVER = vec4(0.043, 0.588, 0.412, 1.0)

    SendButton = <Button> {
        width: 72, height: 36
        text: "Send"
        draw_text: {
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return vec4(1.0, 1.0, 1.0, 1.0);
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 6.0);
                let base = mix((SEND_GREEN), (SEND_GREEN_HOVER), self.hover);
                let color = mix(base, (SEND_GREEN_HOVER), self.pressed);
                sdf.fill(color);
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off
                off = {
                    from: {all: Forward {duration: 0.15}}
                    apply: {draw_bg: {hover: 0.0}}
                }
                on = {
                    from: {all: Forward {duration: 0.15}}
                    apply: {draw_bg: {hover: 1.0}}
                }
            }
        }
    }

    /// Chat input row - text field plus send button
    pub ChatInput = {{ChatInput}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 8
        align: {y: 0.5}

        message_input = <TextInput> {
            width: Fill, height: 36
            empty_text: "Type a message..."
            draw_bg: {
                instance dark_mode: 0.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 6.0);
                    sdf.fill(mix((INPUT_BG), (INPUT_BG_DARK), self.dark_mode));
                    sdf.stroke(mix((INPUT_BORDER), (INPUT_BORDER_DARK), self.dark_mode), 1.0);
                    return sdf.result;
                }
            }
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 12.0 }
                fn get_color(self) -> vec4 {
                    return mix((INPUT_TEXT), (INPUT_TEXT_DARK), self.dark_mode);
                }
            }
        }

        send_btn = <SendButton> {}
    }
}

/// Actions emitted by ChatInput
#[derive(Clone, Debug, DefaultNone)]
pub enum ChatInputAction {
    None,
    /// User submitted a non-empty message
    Submitted(String),
}

#[derive(Live, LiveHook, Widget)]
pub struct ChatInput {
    #[deref]
    view: View,
}

impl Widget for ChatInput {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        // Capture nested actions so the button click is visible here
        let actions = cx.capture_actions(|cx| {
            self.view.handle_event(cx, event, scope);
        });

        let mut submit = false;

        if self.view.button(id!(send_btn)).clicked(&actions) {
            submit = true;
        }

        for action in &actions {
            if let Some(wa) = action.as_widget_action() {
                if wa.widget_uid == self.view.text_input(id!(message_input)).widget_uid() {
                    if let TextInputAction::Returned(..) = wa.cast() {
                        submit = true;
                    }
                }
            }
        }

        if submit {
            let input = self.view.text_input(id!(message_input));
            let text = input.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    ChatInputAction::Submitted(trimmed.to_string()),
                );
                input.set_text(cx, "");
                self.view.redraw(cx);
            }
        }

        // Re-dispatch captured actions so outer handlers still see them
        for action in actions {
            cx.action(action);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ChatInput {
    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.view.text_input(id!(message_input)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }

    /// Set the input text (e.g. from a voice transcript)
    pub fn set_text(&mut self, cx: &mut Cx, text: &str) {
        self.view.text_input(id!(message_input)).set_text(cx, text);
        self.view.redraw(cx);
    }
}

impl ChatInputRef {
    /// Check for a submitted message in actions
    pub fn submitted(&self, actions: &Actions) -> Option<String> {
        if let ChatInputAction::Submitted(text) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(text)
        } else {
            None
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Set the input text
    pub fn set_text(&self, cx: &mut Cx, text: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_text(cx, text);
        }
    }
}
