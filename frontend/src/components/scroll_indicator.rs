use yew::prelude::*;

use crate::app::use_preferences;
use crate::i18n::translate;

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollIndicatorProps {
    pub visible: bool,
}

/// "Scroll" hint with a mouse on desktop, "Swipe" with a hand on phones.
/// Which one shows is left to the stylesheet's breakpoint.
#[function_component]
pub fn ScrollIndicator(props: &ScrollIndicatorProps) -> Html {
    let prefs = use_preferences();
    if !props.visible {
        return html! {};
    }
    let language = prefs.snapshot.language;

    html! {
        <>
            <div class="scroll-indicator scroll-indicator-desktop">
                <div class="mouse-icon">
                    <div class="mouse-wheel"></div>
                </div>
                <span class="scroll-indicator-label">{translate("scroll.scroll", language)}</span>
            </div>
            <div class="scroll-indicator scroll-indicator-mobile">
                <svg class="swipe-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M8 13v-8.5a1.5 1.5 0 0 1 3 0v7.5" />
                    <path d="M11 11.5v-2a1.5 1.5 0 0 1 3 0v2.5" />
                    <path d="M14 10.5a1.5 1.5 0 0 1 3 0v1.5" />
                    <path d="M17 11.5a1.5 1.5 0 0 1 3 0v4.5a6 6 0 0 1 -6 6h-2h.208a6 6 0 0 1 -5.012 -2.7l-.196 -.3c-.312 -.479 -1.407 -2.388 -3.286 -5.728a1.5 1.5 0 0 1 .536 -2.022a1.867 1.867 0 0 1 2.28 .28l1.47 1.47" />
                </svg>
                <span class="scroll-indicator-label">{translate("scroll.swipe", language)}</span>
            </div>
        </>
    }
}
