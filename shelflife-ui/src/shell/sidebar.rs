//! Sidebar Building Blocks
//!
//! DSL-only components for the shell's navigation rail. The shell composes
//! its own sidebar layout inline and detects tab clicks via the path-based
//! helpers in `shelflife_widgets`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use shelflife_ui::shell::sidebar::*;
//!
//!     sidebar = <View> {
//!         flow: Down
//!         predict_tab = <SidebarButton> { text: "Predict" }
//!         <SidebarDivider> {}
//!         chat_tab = <SidebarButton> { text: "Chat" }
//!     }
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants
    SLATE_50 = vec4(0.976, 0.980, 0.984, 1.0)
    SLATE_200 = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    SLATE_700 = vec4(0.204, 0.224, 0.275, 1.0)
    SLATE_800 = vec4(0.118, 0.161, 0.231, 1.0)
    GREEN_100 = vec4(0.859, 0.973, 0.906, 1.0)
    GREEN_900 = vec4(0.078, 0.302, 0.216, 1.0)
    DIVIDER = vec4(0.878, 0.906, 0.925, 1.0)
    DIVIDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)

    /// Sidebar menu button with selection and hover states
    pub SidebarButton = <Button> {
        width: Fill, height: Fit
        padding: {top: 12, bottom: 12, left: 12, right: 12}
        margin: 0
        align: {x: 0.0, y: 0.5}
        icon_walk: {width: 20, height: 20, margin: {right: 12}}

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
            pressed = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 1.0} }
                }
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance selected: 0.0
            instance dark_mode: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let light_normal = (SLATE_50);
                let light_hover = (SLATE_200);
                let light_selected = (GREEN_100);
                let dark_normal = (SLATE_800);
                let dark_hover = (SLATE_700);
                let dark_selected = (GREEN_900);
                let normal = mix(light_normal, dark_normal, self.dark_mode);
                let hover_color = mix(light_hover, dark_hover, self.dark_mode);
                let selected_color = mix(light_selected, dark_selected, self.dark_mode);
                let color = mix(
                    mix(normal, hover_color, self.hover),
                    selected_color,
                    self.selected
                );
                sdf.box(2.0, 2.0, self.rect_size.x - 4.0, self.rect_size.y - 4.0, 6.0);
                sdf.fill(color);
                return sdf.result;
            }
        }

        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }

            fn get_color(self) -> vec4 {
                return mix((SLATE_500), (SLATE_400), self.dark_mode);
            }
        }

        draw_icon: {
            fn get_color(self) -> vec4 {
                return (SLATE_500);
            }
        }
    }

    /// Sidebar divider line
    pub SidebarDivider = <View> {
        width: Fill, height: 1
        margin: {top: 8, bottom: 8}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((DIVIDER), (DIVIDER_DARK), self.dark_mode);
            }
        }
    }
}
