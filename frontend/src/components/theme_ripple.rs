use yew::prelude::*;

use crate::app::use_preferences;

/// Expanding circle drawn over everything while the theme flips.
#[function_component]
pub fn ThemeRipple() -> Html {
    let prefs = use_preferences();
    let Some(origin) = prefs.snapshot.active_ripple() else {
        return html! {};
    };

    html! {
        <div
            class="theme-ripple"
            style={format!(
                "position: fixed; left: {}px; top: {}px; pointer-events: none; z-index: 100; \
                 transform: translate(-50%, -50%); animation: theme-ripple 500ms ease-out forwards;",
                origin.x, origin.y
            )}
        >
            <div style="width: 100vw; height: 100vh; border-radius: 50%; \
                        background: radial-gradient(circle, var(--bg-main) 0%, transparent 70%);">
            </div>
        </div>
    }
}
