use js_sys::{Array, Date, Function, Reflect};
use log::debug;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage,
    Window,
};

use crate::site::{
    navigation::{Section, SectionScroller},
    scroll::{Reveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD},
    theme::{PreferenceStorage, Theme},
};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`, absorbing every failure (private mode, disabled storage).
pub struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        let written = local_storage()
            .map(|storage| storage.set_item(key, value).is_ok())
            .unwrap_or(false);

        if !written {
            debug!("theme preference not persisted; keeping in-memory value");
        }
        written
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
            let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Applies the theme inside `document.startViewTransition` when the browser
/// has it, falling back to an immediate swap.
pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

/// Section anchors in the live document.
pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    type Target = Element;

    fn locate(&self, section: Section) -> Option<Element> {
        window()?.document()?.get_element_by_id(section.id())
    }

    fn scroll_into_view(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn current_year() -> i32 {
    Date::new_0().get_full_year() as i32
}

/// A passive window scroll listener. Dropping it detaches the listener.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = window()?;
        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Watches one element until it first intersects the viewport, then
/// disconnects. Dropping it disconnects early.
pub struct VisibilitySubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilitySubscription {
    pub fn observe_once(element: &Element, on_visible: impl FnOnce() + 'static) -> Option<Self> {
        let mut reveal = Reveal::default();
        let mut on_visible = Some(on_visible);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());

                if reveal.observe(intersecting) {
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
