use yew::prelude::*;

use super::SlideProps;
use crate::app::use_preferences;
use crate::i18n::page_name;

const BEAM_COUNT: usize = 5;

/// Bridge between the problem slides and the product slides.
#[function_component]
pub fn Page4(props: &SlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;

    html! {
        <div
            class={classes!("slide", "slide-solution", props.active.then_some("revealed"))}
            dir={language.direction().as_str()}
        >
            <div class="light-beams">
                { for (0..BEAM_COUNT).map(|i| html! {
                    <span
                        key={i}
                        class="light-beam"
                        style={format!("left: {}%; animation-delay: {}ms;", 10 + i * 20, i * 150)}
                    />
                }) }
            </div>
            <h1 class="solution-title">{page_name(4, language)}</h1>
            <div class="solution-shield">{"🛡"}</div>
        </div>
    }
}
