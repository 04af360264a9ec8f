//! Shell Header Widget
//!
//! Application header with logo, title, and theme toggle.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use shelflife_ui::shell::header::*;
//!
//!     header = <ShellHeader> {}
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants (vec4 to avoid hex parsing issues)
    PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    HOVER_BG = vec4(0.0, 0.0, 0.0, 0.05)
    TRANSPARENT = vec4(0.0, 0.0, 0.0, 0.0)
    AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    INDIGO_500 = vec4(0.388, 0.400, 0.945, 1.0)
    GREEN_500 = vec4(0.133, 0.773, 0.373, 1.0)
    GREEN_700 = vec4(0.043, 0.588, 0.412, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// App logo: a leaf in a rounded square
    AppLogo = <View> {
        width: 36, height: 36
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let c = self.rect_size * 0.5;
                sdf.box(2.0, 2.0, self.rect_size.x - 4.0, self.rect_size.y - 4.0, 8.0);
                sdf.fill((GREEN_500));
                // Leaf body
                sdf.circle(c.x - 1.0, c.y + 1.0, 7.0);
                sdf.fill((WHITE));
                // Stem
                sdf.move_to(c.x - 1.0, c.y + 1.0);
                sdf.line_to(c.x + 6.0, c.y - 6.0);
                sdf.stroke((GREEN_700), 1.5);
                return sdf.result;
            }
        }
    }

    /// Theme toggle button with sun/moon icons
    ThemeToggle = <View> {
        width: 36, height: 36
        align: {x: 0.5, y: 0.5}
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let cx = self.rect_size.x * 0.5;
                let cy = self.rect_size.y * 0.5;
                sdf.circle(cx, cy, 16.0);
                sdf.fill(mix((TRANSPARENT), (HOVER_BG), self.hover));
                return sdf.result;
            }
        }

        sun_icon = <View> {
            width: 20, height: 20
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let amber = (AMBER_500);
                    // Sun circle
                    sdf.circle(c.x, c.y, 4.0);
                    sdf.fill(amber);
                    // Sun rays
                    let ray_len = 2.5;
                    let ray_dist = 6.5;
                    sdf.move_to(c.x, c.y - ray_dist);
                    sdf.line_to(c.x, c.y - ray_dist - ray_len);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x, c.y + ray_dist);
                    sdf.line_to(c.x, c.y + ray_dist + ray_len);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x - ray_dist, c.y);
                    sdf.line_to(c.x - ray_dist - ray_len, c.y);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x + ray_dist, c.y);
                    sdf.line_to(c.x + ray_dist + ray_len, c.y);
                    sdf.stroke(amber, 1.5);
                    return sdf.result;
                }
            }
        }

        moon_icon = <View> {
            width: 20, height: 20
            visible: false
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let indigo = (INDIGO_500);
                    sdf.circle(c.x, c.y, 6.0);
                    sdf.fill(indigo);
                    sdf.circle(c.x + 3.5, c.y - 2.5, 4.5);
                    sdf.fill((WHITE));
                    return sdf.result;
                }
            }
        }
    }

    /// Shell Header Widget
    pub ShellHeader = {{ShellHeader}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 12
        align: {y: 0.5}
        padding: {left: 20, right: 20, top: 15, bottom: 15}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
            }
        }

        logo = <AppLogo> {}

        title_label = <Label> {
            text: "ShelfLife Studio"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 24.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        // Spacer
        <View> { width: Fill, height: 1 }

        // Action slots (right side)
        actions_slot = <View> {
            width: Fit, height: Fill
            flow: Right
            spacing: 8
            align: {y: 0.5}

            theme_toggle = <ThemeToggle> {}
        }
    }
}

/// Actions emitted by ShellHeader
#[derive(Clone, Debug, DefaultNone)]
pub enum ShellHeaderAction {
    None,
    /// Theme toggle clicked
    ThemeToggled,
}

#[derive(Live, LiveHook, Widget)]
pub struct ShellHeader {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,

    /// Header title
    #[live]
    title: String,
}

impl Widget for ShellHeader {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        // Handle theme toggle
        let theme_toggle = self.view.view(id!(actions_slot.theme_toggle));
        match event.hits(cx, theme_toggle.area()) {
            Hit::FingerHoverIn(_) => {
                self.view.view(id!(actions_slot.theme_toggle)).apply_over(cx, live!{
                    draw_bg: { hover: 1.0 }
                });
                self.view.redraw(cx);
            }
            Hit::FingerHoverOut(_) => {
                self.view.view(id!(actions_slot.theme_toggle)).apply_over(cx, live!{
                    draw_bg: { hover: 0.0 }
                });
                self.view.redraw(cx);
            }
            Hit::FingerUp(_) => {
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    ShellHeaderAction::ThemeToggled,
                );
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ShellHeader {
    /// Set header title
    pub fn set_title(&mut self, cx: &mut Cx, title: &str) {
        self.title = title.to_string();
        self.view.label(id!(title_label)).set_text(cx, title);
    }

    /// Set dark mode (for theme toggle icon)
    pub fn set_dark_mode(&mut self, cx: &mut Cx, is_dark: bool) {
        self.view.view(id!(actions_slot.theme_toggle.sun_icon)).set_visible(cx, !is_dark);
        self.view.view(id!(actions_slot.theme_toggle.moon_icon)).set_visible(cx, is_dark);
        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });

        self.view.label(id!(title_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });

        self.view.redraw(cx);
    }
}

impl ShellHeaderRef {
    /// Set header title
    pub fn set_title(&self, cx: &mut Cx, title: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_title(cx, title);
        }
    }

    /// Set dark mode (for theme toggle icon)
    pub fn set_dark_mode(&self, cx: &mut Cx, is_dark: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_dark_mode(cx, is_dark);
        }
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if theme toggle was clicked
    pub fn theme_toggled(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            ShellHeaderAction::ThemeToggled
        )
    }
}
