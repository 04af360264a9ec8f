//! Microphone Level Meter Widget
//!
//! A 5-segment horizontal level meter for visualizing microphone input
//! while recording a voice question.
//!
//! ## Updating Level
//!
//! ```rust,ignore
//! // Set level (0.0 to 1.0)
//! let meter = self.view.level_meter(id!(mic_meter));
//! meter.set_level(cx, 0.6);
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Individual segment component
    Segment = <RoundedView> {
        width: 8
        height: 14
        show_bg: true
        draw_bg: {
            instance active: 0.0
            instance dark_mode: 0.0
            instance color_r: 0.133
            instance color_g: 0.773
            instance color_b: 0.373
            border_radius: 2.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);

                let on_color = vec4(self.color_r, self.color_g, self.color_b, 1.0);
                let off_color = mix(
                    vec4(0.886, 0.910, 0.941, 1.0),  // off light
                    vec4(0.278, 0.337, 0.412, 1.0),  // off dark
                    self.dark_mode
                );

                sdf.fill(mix(off_color, on_color, self.active));
                return sdf.result;
            }
        }
    }

    /// 5-segment horizontal level meter
    pub LevelMeter = {{LevelMeter}} {
        width: Fit
        height: Fit
        flow: Right
        spacing: 3
        align: {y: 0.5}
        padding: {top: 2, bottom: 2}

        seg_1 = <Segment> {}
        seg_2 = <Segment> {}
        seg_3 = <Segment> {}
        seg_4 = <Segment> {}
        seg_5 = <Segment> {}
    }
}

/// Segment color configuration for the meter
#[derive(Clone, Copy, Debug)]
pub struct MeterColors {
    /// RGB per segment, index 0 is the lowest level
    pub segments: [(f32, f32, f32); 5],
}

impl Default for MeterColors {
    fn default() -> Self {
        // Default: green, green, yellow, orange, red
        Self {
            segments: [
                (0.133, 0.773, 0.373), // Green
                (0.133, 0.773, 0.373), // Green
                (0.918, 0.702, 0.031), // Yellow
                (0.976, 0.451, 0.086), // Orange
                (0.937, 0.267, 0.267), // Red
            ],
        }
    }
}

impl MeterColors {
    /// All segments the same color
    pub fn uniform(r: f32, g: f32, b: f32) -> Self {
        Self {
            segments: [(r, g, b); 5],
        }
    }

    /// Get color for segment index (0-4)
    pub fn get(&self, index: usize) -> (f32, f32, f32) {
        self.segments[index.min(4)]
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct LevelMeter {
    #[deref]
    view: View,

    /// Current level (0.0 to 1.0)
    #[rust]
    level: f32,

    /// Segment colors configuration
    #[rust]
    colors: MeterColors,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for LevelMeter {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl LevelMeter {
    /// Set the level (0.0 to 1.0) and update segment display
    pub fn set_level(&mut self, cx: &mut Cx, level: f32) {
        self.level = level.clamp(0.0, 1.0);
        self.update_segments(cx);
    }

    /// Set segment colors configuration
    pub fn set_colors(&mut self, colors: MeterColors) {
        self.colors = colors;
    }

    /// Apply dark mode to the meter
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;
        self.update_segments(cx);
    }

    /// Update segment states based on current level
    fn update_segments(&mut self, cx: &mut Cx) {
        // Amplify quiet input so speech registers visibly
        let scaled_level = (self.level * 3.0).min(1.0);
        let active_count = (scaled_level * 5.0).ceil() as usize;

        for i in 0..5 {
            let is_active = i < active_count;
            let (r, g, b) = self.colors.get(i);
            let active_val = if is_active { 1.0 } else { 0.0 };

            let seg_view = match i {
                0 => self.view.view(id!(seg_1)),
                1 => self.view.view(id!(seg_2)),
                2 => self.view.view(id!(seg_3)),
                3 => self.view.view(id!(seg_4)),
                _ => self.view.view(id!(seg_5)),
            };

            seg_view.apply_over(cx, live! {
                draw_bg: {
                    active: (active_val),
                    dark_mode: (self.dark_mode),
                    color_r: (r as f64),
                    color_g: (g as f64),
                    color_b: (b as f64),
                }
            });
        }

        self.view.redraw(cx);
    }
}

impl LevelMeterRef {
    /// Set the level (0.0 to 1.0)
    pub fn set_level(&self, cx: &mut Cx, level: f32) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_level(cx, level);
        }
    }

    /// Set segment colors
    pub fn set_colors(&self, colors: MeterColors) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_colors(colors);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Get current level
    pub fn level(&self) -> f32 {
        self.borrow().map(|inner| inner.level).unwrap_or(0.0)
    }
}
