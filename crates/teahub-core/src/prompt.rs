//! Floating contact button and its one-time tooltip.

use crate::scroll::ScrollThreshold;

/// What the caller should schedule after a scroll update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    /// Nothing to do.
    None,
    /// First time past the threshold: show the tooltip after the configured
    /// delay, then hide it after its visible period.
    ScheduleTooltip,
}

/// State of the floating contact button.
///
/// The button follows the scroll position in both directions. The tooltip is
/// offered once per page view, the first time the threshold is crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPrompt {
    threshold: ScrollThreshold,
    button_visible: bool,
    tooltip_offered: bool,
    tooltip_visible: bool,
}

impl ContactPrompt {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: ScrollThreshold(threshold),
            button_visible: false,
            tooltip_offered: false,
            tooltip_visible: false,
        }
    }

    pub fn is_button_visible(&self) -> bool {
        self.button_visible
    }

    pub fn is_tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    /// Update from the current scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) -> PromptAction {
        self.button_visible = self.threshold.is_past(scroll_y);
        if self.button_visible && !self.tooltip_offered {
            self.tooltip_offered = true;
            log::debug!("contact tooltip scheduled at scroll offset {}", scroll_y);
            return PromptAction::ScheduleTooltip;
        }
        PromptAction::None
    }

    /// The tooltip delay elapsed.
    pub fn show_tooltip(&mut self) {
        self.tooltip_visible = true;
    }

    /// The tooltip period elapsed.
    pub fn hide_tooltip(&mut self) {
        self.tooltip_visible = false;
    }

    /// The user closed the tooltip. It is not offered again.
    pub fn dismiss(&mut self) {
        self.tooltip_offered = true;
        self.tooltip_visible = false;
    }
}
