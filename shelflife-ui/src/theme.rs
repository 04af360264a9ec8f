//! Runtime Theme State
//!
//! Runtime dark-mode management complementing the static color constants in
//! the widget `live_design!` blocks. Widgets receive the animation value as
//! a `dark_mode` shader instance (0.0 = light, 1.0 = dark).
//!
//! ## Animation Support
//!
//! For smooth theme transitions, use `update_animation`:
//!
//! ```rust,ignore
//! // On toggle
//! theme.toggle();
//! let anim_start = Cx::time_now();
//!
//! // In NextFrame handler
//! let elapsed = Cx::time_now() - anim_start;
//! if theme.update_animation(elapsed, THEME_TRANSITION_DURATION) {
//!     apply_theme(cx, theme.dark_mode_anim);
//!     cx.new_next_frame();
//! }
//! ```

/// Duration of theme transition animation in seconds
pub const THEME_TRANSITION_DURATION: f64 = 0.25;

/// Runtime theme state for ShelfLife Studio.
#[derive(Clone, Debug)]
pub struct ShelfTheme {
    /// Whether dark mode is enabled
    pub dark_mode: bool,

    /// Animation value (0.0 = light, 1.0 = dark)
    /// Use this value in shader `dark_mode` instance variables.
    pub dark_mode_anim: f64,
}

impl ShelfTheme {
    /// Create a new theme in light mode
    pub fn new() -> Self {
        Self {
            dark_mode: false,
            dark_mode_anim: 0.0,
        }
    }

    /// Create a theme with specified dark mode state
    pub fn with_dark_mode(dark: bool) -> Self {
        Self {
            dark_mode: dark,
            dark_mode_anim: if dark { 1.0 } else { 0.0 },
        }
    }

    /// Check if dark mode is enabled
    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Toggle dark mode
    ///
    /// Only flips the state; animated transitions go through
    /// `update_animation`.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Set dark mode state immediately (no animation)
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.dark_mode_anim = if dark { 1.0 } else { 0.0 };
    }

    /// Update animation value based on elapsed time.
    ///
    /// Returns `true` if animation is still in progress, `false` when complete.
    pub fn update_animation(&mut self, elapsed: f64, duration: f64) -> bool {
        let target = if self.dark_mode { 1.0 } else { 0.0 };

        if elapsed >= duration {
            self.dark_mode_anim = target;
            false
        } else {
            // Ease-out cubic for smooth deceleration
            let t = (elapsed / duration).min(1.0);
            let ease_t = 1.0 - (1.0 - t).powi(3);

            let start = if self.dark_mode { 0.0 } else { 1.0 };
            self.dark_mode_anim = start + (target - start) * ease_t;

            true
        }
    }

    /// Get the target animation value when the transition completes
    pub fn target_value(&self) -> f64 {
        if self.dark_mode {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for ShelfTheme {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for widgets that respond to theme changes
pub trait ThemeListener {
    /// Apply dark mode value to the widget
    fn apply_dark_mode(&self, cx: &mut makepad_widgets::Cx, dark_mode: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = ShelfTheme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_toggle() {
        let mut theme = ShelfTheme::default();

        theme.toggle();
        assert!(theme.is_dark());

        theme.toggle();
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_theme_set_dark_mode() {
        let mut theme = ShelfTheme::default();

        theme.set_dark_mode(true);
        assert!(theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 1.0);

        theme.set_dark_mode(false);
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_animation() {
        let mut theme = ShelfTheme::default();
        theme.toggle();

        // In progress at 50%
        let in_progress = theme.update_animation(0.125, 0.25);
        assert!(in_progress);
        assert!(theme.dark_mode_anim > 0.0);
        assert!(theme.dark_mode_anim < 1.0);

        // Complete at 100%
        let in_progress = theme.update_animation(0.25, 0.25);
        assert!(!in_progress);
        assert_eq!(theme.dark_mode_anim, 1.0);
    }
}
