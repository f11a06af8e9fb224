//! Browser bindings for the motion primitives.
//!
//! Each hook wires one `curv_motion` state machine to a DOM signal and hands
//! back a Leptos signal for the view. Everything a hook registers with the
//! browser (observers, listeners, pending frames) is torn down with the
//! owning component.

use std::time::Duration;

use curv_motion::scroll::{ElementRect, ScrollRange};
use curv_motion::tween::{CountUp, Typewriter};
use curv_motion::{RevealLatch, RevealOptions};
use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `true` once `target` has scrolled into view. Never flips back.
pub fn use_reveal<E>(target: NodeRef<E>, options: RevealOptions) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (shown, set_shown) = signal(false);
    let slot: StoredValue<Option<(IntersectionObserver, ObserverCallback)>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move || {
        let Some(node) = target.get() else {
            return;
        };
        if shown.get_untracked() || slot.with_value(Option::is_some) {
            return;
        }
        let element: web_sys::Element = node.unchecked_into();

        let mut latch = RevealLatch::new();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch.observe(intersecting) {
                    observer.disconnect();
                    let _ = set_shown.try_set(true);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin());
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                slot.set_value(Some((observer, callback)));
            }
            Err(err) => {
                // No observer support: show the content rather than hide it forever
                tracing::warn!(?err, "IntersectionObserver unavailable");
                set_shown.set(true);
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|slot| {
            if let Some((observer, _callback)) = slot.take() {
                observer.disconnect();
            }
        });
    });

    shown
}

/// Class string that gains `revealed` once `shown` fires.
pub fn reveal_class(
    base: &'static str,
    shown: ReadSignal<bool>,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || {
        if shown.get() {
            format!("{base} revealed")
        } else {
            base.to_string()
        }
    }
}

/// Progress of `target` through `range`, updated on every window scroll.
pub fn use_scroll_progress<E>(target: NodeRef<E>, range: ScrollRange) -> ReadSignal<f64>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (progress, set_progress) = signal(0.0);

    let measure = move || {
        let (Some(node), Some(window)) = (target.get_untracked(), web_sys::window()) else {
            return;
        };
        let element: web_sys::Element = node.unchecked_into();
        let bounds = element.get_bounding_client_rect();
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();
        let rect = ElementRect {
            top: bounds.top(),
            height: bounds.height(),
        };
        let _ = set_progress.try_set(range.progress(rect, viewport));
    };

    Effect::new(move || {
        if target.get().is_some() {
            measure();
        }
    });

    let listener = window_event_listener(leptos::ev::scroll, move |_| measure());
    on_cleanup(move || listener.remove());

    progress
}

/// Runs `counter` on animation frames once `start` turns true.
pub fn use_count_up(counter: CountUp, start: ReadSignal<bool>) -> ReadSignal<i64> {
    let (value, set_value) = signal(counter.from);

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !start.get() {
            return false;
        }
        count_frame(counter, js_sys::Date::now(), set_value);
        true
    });

    value
}

fn count_frame(counter: CountUp, began_ms: f64, set_value: WriteSignal<i64>) {
    let elapsed = Duration::from_secs_f64(((js_sys::Date::now() - began_ms) / 1000.0).max(0.0));
    if set_value.try_set(counter.value_at(elapsed)).is_some() {
        // component is gone
        return;
    }
    if !counter.is_finished(elapsed) {
        request_animation_frame(move || count_frame(counter, began_ms, set_value));
    }
}

/// Plays `typewriter` frame by frame once `start` turns true.
pub fn use_typewriter(typewriter: Typewriter, start: ReadSignal<bool>) -> ReadSignal<String> {
    let (text, set_text) = signal(typewriter.initial());

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !start.get() {
            return false;
        }
        for (due, frame) in typewriter.schedule() {
            set_timeout(
                move || {
                    let _ = set_text.try_set(frame);
                },
                due,
            );
        }
        true
    });

    text
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
