use yew::prelude::*;

use super::SlideProps;
use crate::app::use_preferences;
use crate::i18n::page_name;
use crate::utils::dom::{use_motion_mode, use_viewport};

const BUILDING_WORDS: [&str; 4] = ["ENCRYPT", "TUNNEL", "PROTECT", "PRIVATE"];

/// Horizontal start and stagger for particle `index` of `count`, so the
/// particles spread evenly and leave one after another.
pub fn particle_layout(index: usize, count: usize, cycle_secs: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let left = (index as f64 + 0.5) * 100.0 / count as f64;
    let delay = cycle_secs * index as f64 / count as f64;
    (left, delay)
}

#[function_component]
pub fn Page5(props: &SlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;
    let viewport = use_viewport();
    let motion = use_motion_mode();

    let count = viewport.particle_count();
    let cycle = viewport.particle_cycle_secs();
    let play_state = if props.active && motion.animates() { "running" } else { "paused" };

    html! {
        <div class="slide slide-security" dir={language.direction().as_str()}>
            <div class="particles">
                { for (0..count).map(|i| {
                    let (left, delay) = particle_layout(i, count, cycle);
                    html! {
                        <span
                            key={i}
                            class="particle"
                            style={format!(
                                "left: {:.2}%; animation-duration: {}s; animation-delay: {:.2}s; animation-play-state: {};",
                                left, cycle, delay, play_state
                            )}
                        />
                    }
                }) }
            </div>
            <h1 class="security-title">{page_name(5, language)}</h1>
            <div class="building-words">
                { for BUILDING_WORDS.iter().enumerate().map(|(i, word)| html! {
                    <span
                        key={*word}
                        class="building-word"
                        style={format!("animation-delay: {}ms; animation-play-state: {};", i * 400, play_state)}
                    >
                        {*word}
                    </span>
                }) }
            </div>
        </div>
    }
}
