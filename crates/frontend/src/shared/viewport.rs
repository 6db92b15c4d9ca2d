//! Compact layout detection from the window width

use leptos::prelude::*;

/// `true` when a viewport of `width` px should use the compact layout
pub fn is_compact_width(width: f64, breakpoint_px: u32) -> bool {
    width < f64::from(breakpoint_px)
}

fn is_compact_now(breakpoint_px: u32) -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| is_compact_width(w, breakpoint_px))
        .unwrap_or(false)
}

/// Store `next` unless it is unchanged. A disposed signal is left alone.
fn refresh_compact(compact: RwSignal<bool>, next: bool) {
    if compact.try_get_untracked() != Some(next) {
        compact.try_set(next);
    }
}

/// Reactive "compact layout" flag, recomputed on every window resize.
///
/// The resize listener is removed when the owning component is cleaned up.
pub fn use_is_compact(breakpoint_px: u32) -> Signal<bool> {
    let compact = RwSignal::new(is_compact_now(breakpoint_px));

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        refresh_compact(compact, is_compact_now(breakpoint_px));
    });
    on_cleanup(move || handle.remove());

    compact.into()
}
