use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::app::use_preferences;
use crate::i18n::translate;
use crate::preferences::{Language, RipplePoint, TextDirection, Theme};

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_logo_click: Callback<()>,
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("header.blog", "#blog"),
    ("header.faq", "#faq"),
    ("header.privacy", "#privacy"),
    ("header.about", "#about"),
];

/// Centre of the clicked control, falling back to the pointer position.
fn ripple_origin(e: &MouseEvent) -> RipplePoint {
    e.target_dyn_into::<Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            RipplePoint {
                x: rect.left() + rect.width() / 2.0,
                y: rect.top() + rect.height() / 2.0,
            }
        })
        .unwrap_or(RipplePoint {
            x: f64::from(e.client_x()),
            y: f64::from(e.client_y()),
        })
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;
    let theme = prefs.snapshot.theme;
    let dropdown_open = use_state(|| false);

    // Close the language dropdown on any mousedown outside of it.
    {
        let handle = dropdown_open.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    window().and_then(|w| w.document()).map(|document| {
                        let dropdown_open = handle.clone();
                        EventListener::new(&document, "mousedown", move |event| {
                            let inside = event
                                .target()
                                .and_then(|target| target.dyn_into::<Element>().ok())
                                .and_then(|element| element.closest(".language-dropdown").ok().flatten())
                                .is_some();
                            if !inside {
                                dropdown_open.set(false);
                            }
                        })
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            *dropdown_open,
        );
    }

    let on_toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let on_toggle_theme = {
        let toggle_theme = prefs.toggle_theme.clone();
        Callback::from(move |e: MouseEvent| toggle_theme.emit(Some(ripple_origin(&e))))
    };

    let on_logo_click = props.on_logo_click.reform(|_: MouseEvent| ());
    let rtl = language.direction() == TextDirection::Rtl;

    html! {
        <header class="site-header glass">
            <div class="site-header-inner">
                <img
                    src="/logo-64.png"
                    alt="Logo"
                    width="40"
                    height="40"
                    class="site-logo"
                    onclick={on_logo_click}
                />

                <nav class="site-nav">
                    { for NAV_LINKS.iter().map(|(key, href)| html! {
                        <a key={*href} href={*href} class="site-nav-link">{translate(key, language)}</a>
                    }) }
                </nav>

                <div class="site-header-actions">
                    <div class="language-dropdown">
                        <button
                            class="language-button"
                            aria-label={translate("header.language", language)}
                            onclick={on_toggle_dropdown}
                        >
                            <span class="language-code">{language.as_str()}</span>
                            <span class="language-native">{language.native_name()}</span>
                        </button>
                        if *dropdown_open {
                            <div
                                class={classes!("language-menu", glass_side(rtl))}
                                dir={language.direction().as_str()}
                            >
                                { for Language::ALL.iter().map(|lang| {
                                    let lang = *lang;
                                    let set_language = prefs.set_language.clone();
                                    let dropdown_open = dropdown_open.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        set_language.emit(lang);
                                        dropdown_open.set(false);
                                    });
                                    html! {
                                        <button
                                            key={lang.as_str()}
                                            class={classes!("language-option", (lang == language).then_some("selected"))}
                                            {onclick}
                                        >
                                            {lang.native_name()}
                                        </button>
                                    }
                                }) }
                            </div>
                        }
                    </div>

                    <button
                        class="theme-toggle"
                        aria-label={translate("header.theme", language)}
                        onclick={on_toggle_theme}
                    >
                        { if theme == Theme::Dark { "☀" } else { "☾" } }
                    </button>

                    <a href="#login" class="login-button">{translate("header.login", language)}</a>
                </div>
            </div>
        </header>
    }
}

/// Dropdown opens towards the inside of the page.
fn glass_side(rtl: bool) -> &'static str {
    if rtl {
        "align-left"
    } else {
        "align-right"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_opens_towards_the_page() {
        assert_eq!(glass_side(false), "align-right");
        assert_eq!(glass_side(true), "align-left");
    }

    #[test]
    fn nav_links_are_translated_everywhere() {
        for (key, href) in NAV_LINKS {
            assert!(href.starts_with('#'));
            for lang in Language::ALL {
                assert_ne!(translate(key, lang), key);
            }
        }
    }
}
