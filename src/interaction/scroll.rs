/// Scroll offset (px) where the navbar starts changing.
pub const SCROLL_START: f64 = 0.0;
/// Scroll offset (px) where the navbar is fully "floating".
pub const SCROLL_END: f64 = 100.0;
/// Viewports at or below this width never push the bar down.
pub const NARROW_VIEWPORT: f64 = 768.0;
pub const NAV_TRANSITION_MS: u32 = 150;

pub fn progress_between(offset: f64, start: f64, end: f64) -> f64 {
    if !offset.is_finite() {
        return 0.0;
    }
    if end <= start {
        return if offset >= end { 1.0 } else { 0.0 };
    }
    ((offset - start) / (end - start)).clamp(0.0, 1.0)
}

pub fn scroll_progress(offset: f64) -> f64 {
    progress_between(offset, SCROLL_START, SCROLL_END)
}

/// Progress plus whether style transitions may animate.
///
/// The first value comes from [`ScrollTracker::new`] before paint and must
/// not animate. Anything after a real scroll event may.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    progress: f64,
    animated: bool,
}

impl ScrollTracker {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            progress: scroll_progress(initial_offset),
            animated: false,
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.progress = scroll_progress(offset);
        self.animated = true;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn transition_ms(&self) -> u32 {
        if self.animated {
            NAV_TRANSITION_MS
        } else {
            0
        }
    }
}

/// Visual properties of the navbar at a given scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarStyle {
    pub blur_px: f64,
    pub shadow_opacity: f64,
    pub side_margin_pct: f64,
    pub inner_padding_rem: f64,
    pub top_offset_rem: f64,
    pub background_opacity: f64,
}

impl NavbarStyle {
    pub fn at(progress: f64, viewport_width: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let top_offset_rem = if viewport_width <= NARROW_VIEWPORT {
            0.0
        } else {
            p * 0.5
        };
        Self {
            blur_px: p * 8.0,
            shadow_opacity: p * 0.15,
            side_margin_pct: 3.0 + p * 2.0,
            inner_padding_rem: p * 0.5,
            top_offset_rem,
            background_opacity: p,
        }
    }

    fn transition(ms: u32, props: &str) -> String {
        format!("transition-property: {props}; transition-duration: {ms}ms; transition-timing-function: ease-out;")
    }

    /// Style for the fixed outer wrapper.
    pub fn wrapper_css(&self, transition_ms: u32) -> String {
        format!(
            "top: {:.3}rem; {}",
            self.top_offset_rem,
            Self::transition(transition_ms, "top")
        )
    }

    /// Style for the rounded background layer behind the desktop items.
    pub fn background_css(&self, transition_ms: u32) -> String {
        format!(
            "left: {m:.3}%; right: {m:.3}%; opacity: {o:.3}; backdrop-filter: {f}; -webkit-backdrop-filter: {f}; box-shadow: {s}; {t}",
            m = self.side_margin_pct,
            o = self.background_opacity,
            f = self.backdrop_filter(),
            s = self.box_shadow(),
            t = Self::transition(transition_ms, "left, right, opacity, backdrop-filter, box-shadow"),
        )
    }

    /// Style for the content row inside the background layer.
    pub fn content_css(&self, transition_ms: u32) -> String {
        format!(
            "padding-left: {p:.3}rem; padding-right: {p:.3}rem; {t}",
            p = self.inner_padding_rem,
            t = Self::transition(transition_ms, "padding"),
        )
    }

    /// Style for the full-width mobile bar.
    pub fn mobile_css(&self, transition_ms: u32) -> String {
        format!(
            "backdrop-filter: {f}; -webkit-backdrop-filter: {f}; box-shadow: {s}; {t}",
            f = self.backdrop_filter(),
            s = self.box_shadow(),
            t = Self::transition(transition_ms, "backdrop-filter, box-shadow"),
        )
    }

    /// Style for a plain background layer that only fades in.
    pub fn layer_css(&self, transition_ms: u32) -> String {
        format!(
            "opacity: {:.3}; {}",
            self.background_opacity,
            Self::transition(transition_ms, "opacity")
        )
    }

    pub fn backdrop_filter(&self) -> String {
        if self.blur_px <= 0.0 {
            "none".to_string()
        } else {
            format!("blur({:.2}px)", self.blur_px)
        }
    }

    pub fn box_shadow(&self) -> String {
        if self.shadow_opacity <= 0.0 {
            return "none".to_string();
        }
        // secondary shadow keeps the 0.15 : 0.1 ratio
        let secondary = self.shadow_opacity * (0.1 / 0.15);
        format!(
            "0 4px 12px rgba(0, 0, 0, {:.3}), 0 2px 4px rgba(0, 0, 0, {:.3})",
            self.shadow_opacity, secondary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(scroll_progress(0.0), 0.0);
        assert_eq!(scroll_progress(100.0), 1.0);
        assert_eq!(scroll_progress(250.0), 1.0);
        assert_eq!(scroll_progress(-40.0), 0.0);
        assert!(close(scroll_progress(42.0), 0.42));
        assert_eq!(scroll_progress(f64::NAN), 0.0);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(progress_between(5.0, 10.0, 10.0), 0.0);
        assert_eq!(progress_between(10.0, 10.0, 10.0), 1.0);
    }

    #[test]
    fn test_initial_sync_does_not_animate() {
        let mut tracker = ScrollTracker::new(180.0);
        assert_eq!(tracker.progress(), 1.0);
        assert_eq!(tracker.transition_ms(), 0);

        tracker.on_scroll(50.0);
        assert!(close(tracker.progress(), 0.5));
        assert_eq!(tracker.transition_ms(), NAV_TRANSITION_MS);

        // last write wins
        tracker.on_scroll(10.0);
        tracker.on_scroll(0.0);
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn test_derived_values() {
        let style = NavbarStyle::at(0.5, 1280.0);
        assert!(close(style.blur_px, 4.0));
        assert!(close(style.shadow_opacity, 0.075));
        assert!(close(style.side_margin_pct, 4.0));
        assert!(close(style.inner_padding_rem, 0.25));
        assert!(close(style.top_offset_rem, 0.25));

        let top = NavbarStyle::at(0.0, 1280.0);
        assert_eq!(top.backdrop_filter(), "none");
        assert_eq!(top.box_shadow(), "none");
        assert!(close(top.side_margin_pct, 3.0));

        let full = NavbarStyle::at(1.0, 1280.0);
        assert_eq!(full.backdrop_filter(), "blur(8.00px)");
        assert_eq!(
            full.box_shadow(),
            "0 4px 12px rgba(0, 0, 0, 0.150), 0 2px 4px rgba(0, 0, 0, 0.100)"
        );
        assert!(close(full.side_margin_pct, 5.0));
    }

    #[test]
    fn test_narrow_viewport_suppresses_push_down_only() {
        let style = NavbarStyle::at(1.0, 768.0);
        assert_eq!(style.top_offset_rem, 0.0);
        assert!(close(style.blur_px, 8.0));
        assert!(close(style.inner_padding_rem, 0.5));

        assert!(close(NavbarStyle::at(1.0, 769.0).top_offset_rem, 0.5));
    }

    #[test]
    fn test_css_output() {
        let style = NavbarStyle::at(1.0, 1280.0);
        assert!(style.wrapper_css(0).starts_with("top: 0.500rem;"));
        assert!(style.content_css(150).contains("transition-duration: 150ms"));
        assert!(style.background_css(0).contains("left: 5.000%; right: 5.000%;"));
        assert!(NavbarStyle::at(0.25, 400.0).layer_css(0).starts_with("opacity: 0.250;"));
    }
}
