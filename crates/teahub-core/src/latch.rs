//! One-way visibility flag.

/// Flips from hidden to visible the first time an element intersects the
/// viewport and never flips back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection observation.
    ///
    /// Returns `true` only for the observation that latched the flag, so the
    /// caller knows when to stop observing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert!(!VisibilityLatch::new().is_visible());
    }

    #[test]
    fn test_latches_once() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        assert!(!latch.observe(true));
    }

    #[test]
    fn test_never_resets() {
        let mut latch = VisibilityLatch::new();
        latch.observe(true);
        for _ in 0..3 {
            latch.observe(false);
            assert!(latch.is_visible());
        }
    }
}
