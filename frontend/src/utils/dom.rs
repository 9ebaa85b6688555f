//! Thin web-sys helpers. Everything that reads or writes the live document
//! goes through here so the state machines stay free of DOM types.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, window, HtmlElement};
use yew::prelude::*;

use crate::navigation::OverscrollPolicy;
use crate::preferences::{Language, PreferenceSnapshot};
use crate::viewport::{MotionMode, Viewport};

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Uniform sample in `[0, 1)`.
pub fn random() -> f64 {
    js_sys::Math::random()
}

/// `scrollTop` of the element with `id`, `None` if it is not mounted.
pub fn element_scroll_top(id: &str) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(id)?;
    Some(f64::from(element.scroll_top()))
}

fn root_and_body() -> Option<(HtmlElement, HtmlElement)> {
    let document = window()?.document()?;
    let root = document.document_element()?.dyn_into::<HtmlElement>().ok()?;
    let body = document.body()?;
    Some((root, body))
}

pub fn apply_overscroll(policy: OverscrollPolicy) {
    let Some((root, body)) = root_and_body() else {
        return;
    };
    for element in [root, body] {
        if let Err(e) = element
            .style()
            .set_property("overscroll-behavior-y", policy.css_value())
        {
            log::warn!("Failed to set overscroll behavior: {:?}", e);
        }
    }
}

/// Reflect theme and language on the document so styling and text direction
/// follow without asking the store.
pub fn apply_preferences(snapshot: &PreferenceSnapshot) {
    let Some((root, body)) = root_and_body() else {
        return;
    };
    let state = snapshot.document();
    let _ = root.class_list().toggle_with_force("dark", state.dark);
    if let Err(e) = root.set_attribute("dir", state.dir) {
        log::warn!("Failed to set text direction: {:?}", e);
    }

    let classes = body.class_list();
    for language in Language::ALL {
        let _ = classes.remove_1(language.body_class());
    }
    let _ = classes.add_1(state.body_class);
}

pub fn current_viewport() -> Viewport {
    let Some(win) = window() else {
        return Viewport::default();
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64());
    let height = win.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => Viewport::default(),
    }
}

pub fn motion_mode() -> MotionMode {
    let reduce = window()
        .and_then(|w| w.match_media(MotionMode::MEDIA_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    MotionMode::from_media_match(reduce)
}

/// Live viewport, refreshed on `resize`.
#[hook]
pub fn use_viewport() -> Viewport {
    let viewport = use_state(Viewport::default);
    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                viewport.set(current_viewport());
                let listener = window().map(|win| {
                    EventListener::new(&win, "resize", move |_| {
                        viewport.set(current_viewport());
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }
    *viewport
}

#[hook]
pub fn use_motion_mode() -> MotionMode {
    let mode = use_state(MotionMode::default);
    {
        let mode = mode.clone();
        use_effect_with_deps(
            move |_| {
                mode.set(motion_mode());
                || ()
            },
            (),
        );
    }
    *mode
}
