//! Testimonial carousel state machine.
//!
//! Time is passed in as milliseconds on a monotonic clock (the page uses
//! `performance.now()`); the machine never reads a clock itself.

/// Slide position plus the auto-advance flag.
///
/// - A timer tick advances by one slide while auto-advance is on.
/// - Manual navigation (`next`, `previous`, `go_to`) moves immediately,
///   switches auto-advance off and arms a resume deadline `cooldown_ms` in
///   the future. A later interaction replaces the deadline.
/// - [`resume_if_due`](Carousel::resume_if_due) switches auto-advance back on
///   once the deadline has passed.
///
/// The index is always in `0..len` (or 0 for an empty carousel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    auto_advance: bool,
    resume_at: Option<u64>,
    cooldown_ms: u64,
}

impl Carousel {
    /// A carousel over `len` slides, starting at slide 0 with auto-advance on.
    pub fn new(len: usize, cooldown_ms: u32) -> Self {
        Self {
            index: 0,
            len,
            auto_advance: true,
            resume_at: None,
            cooldown_ms: u64::from(cooldown_ms),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    /// When auto-advance will come back, if it is paused.
    pub fn resume_at(&self) -> Option<u64> {
        self.resume_at
    }

    /// Timer tick. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.auto_advance || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        log::debug!("carousel auto-advanced to {}", self.index);
        true
    }

    /// Step forward one slide.
    pub fn next(&mut self, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.pause(now_ms);
    }

    /// Step back one slide.
    pub fn previous(&mut self, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.pause(now_ms);
    }

    /// Jump to a slide. Indices past the end wrap around.
    pub fn go_to(&mut self, slide: usize, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.index = slide % self.len;
        self.pause(now_ms);
    }

    /// Re-enable auto-advance if the cooldown has elapsed.
    ///
    /// Returns whether auto-advance was re-enabled by this call.
    pub fn resume_if_due(&mut self, now_ms: u64) -> bool {
        match self.resume_at {
            Some(deadline) if now_ms >= deadline => {
                self.resume_at = None;
                self.auto_advance = true;
                log::debug!("carousel auto-advance resumed at slide {}", self.index);
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the pending resume, if any. Never more than one
    /// cooldown, even if `now_ms` is earlier than the last interaction.
    pub fn remaining_cooldown(&self, now_ms: u64) -> Option<u64> {
        self.resume_at
            .map(|deadline| deadline.saturating_sub(now_ms).min(self.cooldown_ms))
    }

    /// Transform offset for the slide track, as a percentage of one slide.
    pub fn track_offset_percent(&self) -> usize {
        self.index * 100
    }

    fn pause(&mut self, now_ms: u64) {
        self.auto_advance = false;
        self.resume_at = Some(now_ms.saturating_add(self.cooldown_ms));
        log::debug!(
            "carousel moved to {} manually, auto-advance paused for {}ms",
            self.index,
            self.cooldown_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: u32 = 10_000;

    #[test]
    fn test_initial_state() {
        let carousel = Carousel::new(5, COOLDOWN);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_auto_advancing());
        assert_eq!(carousel.resume_at(), None);
    }

    #[test]
    fn test_tick_wraps() {
        let mut carousel = Carousel::new(3, COOLDOWN);
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.previous(0);
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.go_to(4, 0);
        carousel.next(0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_go_to_wraps_large_index() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.go_to(7, 0);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_manual_interaction_pauses_immediately() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.next(1_000);

        assert!(!carousel.is_auto_advancing());
        assert_eq!(carousel.resume_at(), Some(11_000));
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_resume_only_after_cooldown() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.previous(1_000);

        assert!(!carousel.resume_if_due(1_000));
        assert!(!carousel.resume_if_due(10_999));
        assert!(!carousel.is_auto_advancing());
        assert_eq!(carousel.remaining_cooldown(10_999), Some(1));

        assert!(carousel.resume_if_due(11_000));
        assert!(carousel.is_auto_advancing());
        assert_eq!(carousel.resume_at(), None);
        assert!(!carousel.resume_if_due(20_000));
    }

    #[test]
    fn test_later_interaction_extends_cooldown() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.next(0);
        carousel.next(6_000);

        // The first interaction's deadline has passed but the second has not.
        assert!(!carousel.resume_if_due(10_000));
        assert!(carousel.resume_if_due(16_000));
    }

    #[test]
    fn test_remaining_cooldown_never_exceeds_one_cooldown() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.go_to(2, 500_000);

        assert_eq!(carousel.remaining_cooldown(504_000), Some(6_000));
        // A reading from before the interaction still waits one cooldown.
        assert_eq!(carousel.remaining_cooldown(1_000), Some(u64::from(COOLDOWN)));
        assert_eq!(carousel.remaining_cooldown(0), Some(u64::from(COOLDOWN)));
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        assert!(!carousel.resume_if_due(50_000));
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0, COOLDOWN);
        assert!(!carousel.tick());
        carousel.next(0);
        carousel.previous(0);
        carousel.go_to(3, 0);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_auto_advancing());
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_sequences() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        let mut expected: i64 = 0;
        for step in 0..200u64 {
            match step % 7 {
                0 | 3 => {
                    carousel.previous(step);
                    expected -= 1;
                }
                1 | 5 => {
                    carousel.next(step);
                    expected += 1;
                }
                2 => {
                    carousel.go_to(step as usize, step);
                    expected = step as i64;
                }
                _ => {
                    carousel.resume_if_due(step + COOLDOWN as u64);
                    if carousel.tick() {
                        expected += 1;
                    }
                }
            }
            assert!(carousel.index() < carousel.len());
            assert_eq!(carousel.index() as i64, expected.rem_euclid(5));
        }
    }

    #[test]
    fn test_track_offset() {
        let mut carousel = Carousel::new(5, COOLDOWN);
        carousel.go_to(3, 0);
        assert_eq!(carousel.track_offset_percent(), 300);
    }
}
