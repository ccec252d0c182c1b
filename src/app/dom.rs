//! Thin wrappers over the browser APIs the components poke at directly.
//!
//! Everything here is a no-op when the element it needs is missing.

use std::time::Duration;

use leptos::prelude::{document, set_timeout, window};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::interaction::{
    menu::{lock_styles, LOCK_PROPERTIES, NAV_OPEN_CLASS},
    theme::{ThemeMode, INSTANT_THEME_CLASS, INSTANT_THEME_MS},
    Rect,
};

fn best_effort(res: Result<(), JsValue>, what: &str) {
    if let Err(e) = res {
        log::debug!("{what} failed: {e:?}");
    }
}

fn root() -> Option<Element> {
    document().document_element()
}

fn body() -> Option<HtmlElement> {
    document().body()
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn apply_theme_class(mode: ThemeMode) {
    let Some(root) = root() else { return };
    let classes = root.class_list();
    best_effort(classes.remove_1(mode.toggled().class()), "remove theme class");
    best_effort(classes.add_1(mode.class()), "add theme class");
}

/// Disable CSS transitions on the root for a short window so a theme switch
/// repaints in one frame.
pub fn suppress_transitions() {
    let Some(root) = root() else { return };
    best_effort(
        root.class_list().add_1(INSTANT_THEME_CLASS),
        "add instant-theme",
    );
    set_timeout(
        move || {
            if let Some(root) = self::root() {
                best_effort(
                    root.class_list().remove_1(INSTANT_THEME_CLASS),
                    "remove instant-theme",
                );
            }
        },
        Duration::from_millis(INSTANT_THEME_MS),
    );
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn scroll_to(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}

/// Smooth-scroll to the element with `id`. False when it isn't on this page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = document().get_element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn lock_body(offset: f64) {
    let (Some(root), Some(body)) = (root(), body()) else {
        return;
    };
    best_effort(root.class_list().add_1(NAV_OPEN_CLASS), "lock root");
    best_effort(body.class_list().add_1(NAV_OPEN_CLASS), "lock body");
    let style = body.style();
    for (prop, value) in lock_styles(offset) {
        best_effort(style.set_property(prop, &value), prop);
    }
}

pub fn unlock_body() {
    let (Some(root), Some(body)) = (root(), body()) else {
        return;
    };
    best_effort(root.class_list().remove_1(NAV_OPEN_CLASS), "unlock root");
    best_effort(body.class_list().remove_1(NAV_OPEN_CLASS), "unlock body");
    let style = body.style();
    for prop in LOCK_PROPERTIES {
        best_effort(style.remove_property(prop).map(|_| ()), prop);
    }
}

/// `(touch events, max touch points)` for the current device.
pub fn touch_support() -> (bool, i32) {
    let window = window();
    let touch_events = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
        .unwrap_or(false);
    (touch_events, window.navigator().max_touch_points())
}
