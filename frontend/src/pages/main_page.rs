use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::page_indicator::PageIndicator;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::components::theme_ripple::ThemeRipple;
use crate::config::{NavConfig, LAST_PAGE_CONTENT_ID};
use crate::navigation::{NavigationController, OverscrollPolicy};
use crate::pages::{page1, page2, page3, page4, page5, page6, page7};
use crate::utils::dom;
use crate::utils::driver::Driver;

fn first_touch_y(event: &TouchEvent, changed: bool) -> Option<f64> {
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_y()))
}

fn render_slide(page: u8, active: bool, on_jump_to_last: &Callback<()>) -> Html {
    match page {
        1 => html! { <page1::Page1 {active} on_jump_to_last={on_jump_to_last.clone()} /> },
        2 => html! { <page2::Page2 {active} on_jump_to_last={on_jump_to_last.clone()} /> },
        3 => html! { <page3::Page3 {active} /> },
        4 => html! { <page4::Page4 {active} /> },
        5 => html! { <page5::Page5 {active} /> },
        6 => html! { <page6::Page6 {active} /> },
        7 => html! { <page7::Page7 {active} /> },
        _ => html! {},
    }
}

/// Full-screen slide deck. Owns the navigation controller and every input
/// listener that feeds it.
#[function_component]
pub fn MainPage() -> Html {
    let force_update = use_force_update();
    let nav = use_state(move || {
        Driver::new(
            NavigationController::new(NavConfig::from_build_env()),
            move || force_update.force_update(),
        )
    });
    let container_ref = use_node_ref();

    // Wheel on the window, touch on the deck. Listeners are RAII handles and
    // go away together with every pending navigation timer.
    {
        let nav = (*nav).clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                let options = EventListenerOptions::enable_prevent_default();

                if let Some(win) = window() {
                    let nav = nav.clone();
                    listeners.push(EventListener::new_with_options(&win, "wheel", options, move |event| {
                        let Some(event) = event.dyn_ref::<WheelEvent>() else {
                            return;
                        };
                        let scroll_top = dom::element_scroll_top(LAST_PAGE_CONTENT_ID);
                        let outcome =
                            nav.update(|controller, now| controller.handle_wheel(event.delta_y(), scroll_top, now));
                        if outcome.suppress_native {
                            event.prevent_default();
                        }
                    }));
                }

                if let Some(container) = container_ref.cast::<HtmlElement>() {
                    let start_nav = nav.clone();
                    listeners.push(EventListener::new_with_options(&container, "touchstart", options, move |event| {
                        if let Some(y) = event.dyn_ref::<TouchEvent>().and_then(|e| first_touch_y(e, false)) {
                            start_nav.update(|controller, _| controller.touch_start(y));
                        }
                    }));

                    let move_nav = nav.clone();
                    listeners.push(EventListener::new_with_options(&container, "touchmove", options, move |event| {
                        let Some(y) = event.dyn_ref::<TouchEvent>().and_then(|e| first_touch_y(e, false)) else {
                            return;
                        };
                        if move_nav.borrow().touch_move(y).should_prevent_default() {
                            event.prevent_default();
                        }
                    }));

                    let end_nav = nav.clone();
                    listeners.push(EventListener::new_with_options(&container, "touchend", options, move |event| {
                        let Some(y) = event.dyn_ref::<TouchEvent>().and_then(|e| first_touch_y(e, true)) else {
                            return;
                        };
                        let scroll_top = dom::element_scroll_top(LAST_PAGE_CONTENT_ID);
                        let outcome = end_nav.update(|controller, now| controller.touch_end(y, scroll_top, now));
                        if outcome.suppress_native {
                            event.prevent_default();
                        }
                    }));
                } else {
                    log::warn!("Slide container missing, touch navigation disabled");
                }

                move || {
                    drop(listeners);
                    nav.teardown();
                    dom::apply_overscroll(OverscrollPolicy::None);
                }
            },
            (),
        );
    }

    let (current_page, total_pages, mounted) = {
        let controller = nav.borrow();
        (controller.current_page(), controller.total_pages(), controller.mounted_pages())
    };

    use_effect_with_deps(
        |page| {
            dom::apply_overscroll(OverscrollPolicy::for_page(*page));
            || ()
        },
        current_page,
    );

    let navigate = {
        let nav = (*nav).clone();
        Callback::from(move |page: u8| {
            nav.update(|controller, now| controller.navigate_to(i16::from(page), now));
        })
    };
    let on_jump_to_last = {
        let nav = (*nav).clone();
        Callback::from(move |_: ()| {
            nav.update(|controller, now| controller.jump_to_last(now));
        })
    };

    let track_style = format!(
        "position: relative; width: 100%; height: 100%; transition: transform 800ms ease-in-out; transform: translateY(-{}vh);",
        u32::from(current_page - 1) * 100
    );

    html! {
        <div ref={container_ref} class="main-page" style="position: relative; width: 100%; height: 100vh; overflow: hidden;">
            <ThemeRipple />
            <Header on_logo_click={navigate.reform(|_| 1)} />
            <Footer />
            <PageIndicator {current_page} {total_pages} on_page_click={navigate.clone()} />
            <ScrollIndicator visible={current_page != total_pages} />

            <div class="page-track" style={track_style}>
                { for (1..=total_pages).map(|page| html! {
                    <section key={page.to_string()} class="page-slot" style="width: 100%; height: 100vh;">
                        if mounted.contains(page) {
                            { render_slide(page, page == current_page, &on_jump_to_last) }
                        }
                    </section>
                }) }
            </div>
        </div>
    }
}
