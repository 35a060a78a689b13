//! Values derived from the window scroll position.

/// Vertical parallax factor for the hero background image.
pub const BACKGROUND_FACTOR: f64 = 0.3;
/// Vertical parallax factor for the floating tea cup.
pub const FLOATING_Y_FACTOR: f64 = 0.15;
/// Horizontal drift factor for the floating tea cup.
pub const FLOATING_X_FACTOR: f64 = 0.05;

/// Percentage of the document scrolled, in `[0, 100]`.
///
/// `scroll_height` is the full document height and `viewport_height` the
/// window's inner height. A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// A scroll offset past which something changes state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(pub f64);

impl ScrollThreshold {
    /// Strictly past the threshold.
    pub fn is_past(&self, scroll_y: f64) -> bool {
        scroll_y > self.0
    }
}

/// Hero layer offsets in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffsets {
    /// Background translateY.
    pub background_y: f64,
    /// Floating cup translateY.
    pub floating_y: f64,
    /// Floating cup translateX.
    pub floating_x: f64,
}

impl ParallaxOffsets {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            background_y: scroll_y * BACKGROUND_FACTOR,
            floating_y: scroll_y * FLOATING_Y_FACTOR,
            floating_x: scroll_y * FLOATING_X_FACTOR,
        }
    }

    /// CSS transform for the background layer.
    pub fn background_transform(&self) -> String {
        format!("translateY({}px) scale(1.1)", self.background_y)
    }

    /// CSS transform for the floating cup.
    pub fn floating_transform(&self) -> String {
        format!("translateY({}px) translateX({}px)", self.floating_y, self.floating_x)
    }
}

/// Whether the hero still needs parallax updates: its bottom edge is below
/// the top of the viewport.
pub fn hero_in_view(hero_bottom: f64) -> bool {
    hero_bottom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
    }

    #[test]
    fn test_progress_is_monotone() {
        let mut last = -1.0;
        for y in (0..=2000).step_by(25) {
            let p = scroll_progress(y as f64, 3000.0, 1000.0);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_progress_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let navbar = ScrollThreshold(50.0);
        assert!(!navbar.is_past(50.0));
        assert!(navbar.is_past(50.5));
        assert!(!navbar.is_past(0.0));
    }

    #[test]
    fn test_parallax_offsets() {
        let offsets = ParallaxOffsets::at(100.0);
        assert!((offsets.background_y - 30.0).abs() < 1e-9);
        assert!((offsets.floating_y - 15.0).abs() < 1e-9);
        assert!((offsets.floating_x - 5.0).abs() < 1e-9);
        assert_eq!(ParallaxOffsets::at(0.0), ParallaxOffsets::default());
    }

    #[test]
    fn test_parallax_transforms() {
        let offsets = ParallaxOffsets::at(200.0);
        assert_eq!(offsets.background_transform(), "translateY(60px) scale(1.1)");
        assert_eq!(offsets.floating_transform(), "translateY(30px) translateX(10px)");
    }

    #[test]
    fn test_hero_in_view() {
        assert!(hero_in_view(1.0));
        assert!(!hero_in_view(0.0));
        assert!(!hero_in_view(-20.0));
    }
}
