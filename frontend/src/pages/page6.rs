use yew::prelude::*;

use super::SlideProps;
use crate::app::use_preferences;

const ORBITAL_WORDS: [&str; 4] = ["TRANSPARENT", "COMMUNITY", "VERIFIED", "TRUSTWORTHY"];
const CLIENTS: [&str; 7] = ["V2Ray V", "V2RayNG", "V2RayN", "V2RayA", "Sing-box", "Qv2ray", "Hiddify"];

/// Degrees around the badge for item `index` of `count`.
fn orbit_angle(index: usize, count: usize) -> f64 {
    360.0 * index as f64 / count.max(1) as f64
}

#[function_component]
pub fn Page6(props: &SlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;

    html! {
        <div
            class={classes!("slide", "slide-technologies", props.active.then_some("spinning"))}
            dir={language.direction().as_str()}
        >
            <div class="orbit">
                <h1 class="open-source-badge">{"OPEN SOURCE"}</h1>
                { for ORBITAL_WORDS.iter().enumerate().map(|(i, word)| html! {
                    <span
                        key={*word}
                        class="orbital-word"
                        style={format!(
                            "transform: rotate({0}deg) translateX(12rem) rotate(-{0}deg);",
                            orbit_angle(i, ORBITAL_WORDS.len())
                        )}
                    >
                        {*word}
                    </span>
                }) }
            </div>
            <ul class="client-list">
                { for CLIENTS.iter().map(|client| html! {
                    <li key={*client} class="client-badge">{*client}</li>
                }) }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_the_circle_evenly() {
        let angles: Vec<_> = (0..4).map(|i| orbit_angle(i, 4)).collect();
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
        assert_eq!(orbit_angle(0, 0), 0.0);
    }
}
