//! Browser glue: scroll listeners, timers and intersection observers.
//!
//! Everything registered here is released when the owning component is
//! cleaned up.

use std::time::Duration;

use leptos::{ev, html, prelude::*};
use teahub_core::scroll::scroll_progress;
use teahub_core::VisibilityLatch;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Monotonic milliseconds since page load (`performance.now()`), 0 outside
/// a browser.
pub fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() as u64)
        .unwrap_or(0)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// `window.scrollY`, 0 outside a browser.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current document scroll percentage.
pub fn document_scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    scroll_progress(scroll_y(), height, viewport)
}

/// Run `on_scroll` with the scroll offset on every window scroll event.
pub fn on_window_scroll(on_scroll: impl Fn(f64) + 'static) {
    let handle = window_event_listener(ev::scroll, move |_| on_scroll(scroll_y()));
    on_cleanup(move || handle.remove());
}

/// Smooth-scroll to the element with the given id.
pub fn scroll_to_anchor(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    let Some(target) = target else {
        log::debug!("no element #{} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// A single pending timeout. Setting a new one cancels the previous one;
/// the pending timeout is cancelled on cleanup.
#[derive(Clone, Copy)]
pub struct TimeoutSlot(StoredValue<Option<TimeoutHandle>>);

impl TimeoutSlot {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new(None));
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn set(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(callback, Duration::from_millis(u64::from(delay_ms))) {
            Ok(handle) => {
                self.0.try_set_value(Some(handle));
            }
            Err(e) => log::warn!("failed to schedule timeout: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.0.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

/// A repeating timer that can be started and stopped; stopped on cleanup.
#[derive(Clone, Copy)]
pub struct IntervalSlot(StoredValue<Option<IntervalHandle>>);

impl IntervalSlot {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new(None));
        on_cleanup(move || slot.stop());
        slot
    }

    /// Start ticking every `period_ms`, replacing a running timer.
    pub fn start(&self, period_ms: u32, tick: impl Fn() + 'static) {
        self.stop();
        match set_interval_with_handle(tick, Duration::from_millis(u64::from(period_ms))) {
            Ok(handle) => {
                self.0.try_set_value(Some(handle));
            }
            Err(e) => log::warn!("failed to start interval: {:?}", e),
        }
    }

    pub fn stop(&self) {
        if let Some(Some(handle)) = self.0.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

/// Whether `target` has ever been at least `threshold` visible.
///
/// The observer disconnects as soon as the section has been seen.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let latch = RwSignal::new(VisibilityLatch::new());
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move || {
        let Some(section) = target.get() else {
            return;
        };
        if observer.with_value(Option::is_some) || latch.get_untracked().is_visible() {
            return;
        }

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if latch.try_update(|l| l.observe(intersecting)) == Some(true) {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(created) => {
                created.observe(&section);
                observer.set_value(Some((created, callback)));
            }
            Err(e) => {
                log::warn!("IntersectionObserver unavailable ({:?}), showing section", e);
                latch.update(|l| {
                    l.observe(true);
                });
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some((observer, _callback)) = slot.take() {
                observer.disconnect();
            }
        });
    });

    Signal::derive(move || latch.with(VisibilityLatch::is_visible))
}

/// CSS classes for an element that fades in once its section is visible.
pub fn reveal_class(base: &'static str, visible: Signal<bool>) -> impl Fn() -> String {
    move || {
        if visible.get() {
            format!("{} reveal is-visible", base)
        } else {
            format!("{} reveal", base)
        }
    }
}
