use yew::prelude::*;

use super::SlideProps;
use crate::app::use_preferences;
use crate::timeline::Timeline;
use crate::utils::animation::use_timeline;
use crate::utils::dom::{self, use_motion_mode, use_viewport};

const MORPH_WORDS: [&str; 4] = ["BLOCKED", "CENSORED", "RESTRICTED", "FORBIDDEN"];
const MORPH_STEP_MS: f64 = 3_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub color: &'static str,
}

pub const SERVICES: [Service; 8] = [
    Service { name: "YouTube", color: "#ff0000" },
    Service { name: "Instagram", color: "#e1306c" },
    Service { name: "Spotify", color: "#1db954" },
    Service { name: "Netflix", color: "#e50914" },
    Service { name: "X", color: "#111111" },
    Service { name: "Facebook", color: "#1877f2" },
    Service { name: "Telegram", color: "#229ed9" },
    Service { name: "SoundCloud", color: "#ff5500" },
];

/// Random `count` services (Fisher-Yates over [`SERVICES`]); `rng` yields
/// samples in `[0, 1)`.
pub fn pick_services(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Service> {
    let mut pool = SERVICES.to_vec();
    for i in (1..pool.len()).rev() {
        let j = ((rng() * (i + 1) as f64) as usize).min(i);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

#[function_component]
pub fn Page3(props: &SlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;
    let motion = use_motion_mode();
    let viewport = use_viewport();

    let (word, _) = use_timeline(props.active && motion.animates(), |_| {
        Timeline::uniform(MORPH_WORDS, MORPH_STEP_MS)
    });
    let word = word.unwrap_or(MORPH_WORDS[0]);

    let services = use_memo(|count| pick_services(*count, dom::random), viewport.service_card_count());

    html! {
        <div class="slide slide-restrictions" dir={language.direction().as_str()}>
            <h1 class="morph-word" key={word}>{word}</h1>
            <div class="service-grid">
                { for services.iter().map(|service| html! {
                    <div
                        key={service.name}
                        class="service-card blocked"
                        style={format!("border-color: {};", service.color)}
                    >
                        <span class="service-name">{service.name}</span>
                        <span class="service-blocked-mark">{"⊘"}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
