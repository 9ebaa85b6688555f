use yew::prelude::*;

use super::CtaSlideProps;
use crate::app::use_preferences;
use crate::i18n::{translate, translate_list};
use crate::timeline::{glitch_cycle, GlitchPhase, Timeline};
use crate::utils::animation::{use_ticker, use_timeline};
use crate::utils::dom::{self, use_motion_mode};

const ENTITY_KEYS: [&str; 3] = [
    "page2.entities.police",
    "page2.entities.hacker",
    "page2.entities.isp",
];
const ENTITY_HOP_MS: f64 = 3_500.0;
const JITTER_PERIOD_MS: u32 = 100;

/// Spot the headline occupies during `cycle`: 0 is the centre, the rest are
/// the orbital word positions in order.
pub fn headline_spot(cycle: u32, orbit_len: usize) -> usize {
    (cycle as usize) % (orbit_len + 1)
}

/// Orbit slot in percent of the slide.
pub fn orbit_position(slot: usize, orbit_len: usize) -> (f64, f64) {
    if slot == 0 || orbit_len == 0 {
        return (50.0, 50.0);
    }
    let angle = std::f64::consts::TAU * (slot - 1) as f64 / orbit_len as f64 - std::f64::consts::FRAC_PI_2;
    (50.0 + 32.0 * angle.cos(), 50.0 + 28.0 * angle.sin())
}

pub fn jitter_amplitude(phase: GlitchPhase) -> f64 {
    match phase {
        GlitchPhase::Glitch => 30.0,
        _ => 4.0,
    }
}

#[function_component]
pub fn Page2(props: &CtaSlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;
    let motion = use_motion_mode();
    let running = props.active && motion.animates();

    let words = translate_list("page2.surveillance", language);
    let orbit_len = words.len();

    let (phase, cursor) = use_timeline(running, |cycle| {
        glitch_cycle(cycle == 0, headline_spot(cycle, orbit_len) == 0)
    });
    let phase = phase.unwrap_or(GlitchPhase::Hold);
    let (entity_target, _) = use_timeline(running, |_| Timeline::uniform(0..orbit_len, ENTITY_HOP_MS));

    // raw samples, scaled by the current phase at render time
    let jitter = use_state(|| (0.5, 0.5));
    {
        let jitter = jitter.clone();
        use_ticker(running, JITTER_PERIOD_MS, move || {
            jitter.set((dom::random(), dom::random()));
        });
    }

    // the jump lands at the start of the settle step
    let spot = match phase {
        GlitchPhase::Settle => headline_spot(cursor.cycle + 1, orbit_len),
        _ => headline_spot(cursor.cycle, orbit_len),
    };
    let (hx, hy) = orbit_position(spot, orbit_len);
    let amplitude = jitter_amplitude(phase);
    let (jx, jy) = ((jitter.0 - 0.5) * amplitude, (jitter.1 - 0.5) * amplitude);
    let entity_base = entity_target.unwrap_or(0);
    let on_cta = props.on_jump_to_last.reform(|_: MouseEvent| ());

    html! {
        <div class="slide slide-tracked" dir={language.direction().as_str()}>
            { for words.iter().enumerate().map(|(i, word)| {
                let (x, y) = orbit_position(i + 1, orbit_len);
                html! {
                    <span class="orbit-word" style={format!("position: absolute; left: {:.2}%; top: {:.2}%;", x, y)}>
                        {*word}
                    </span>
                }
            }) }
            { for ENTITY_KEYS.iter().enumerate().map(|(i, key)| {
                let slot = (entity_base + i * 2) % orbit_len.max(1) + 1;
                let (x, y) = orbit_position(slot, orbit_len);
                html! {
                    <span class="surveillance-entity" style={format!("position: absolute; left: {:.2}%; top: {:.2}%; transition: left 3s, top 3s;", x, y)}>
                        {translate(key, language)}
                    </span>
                }
            }) }
            <h1
                class={classes!("hero-title", (phase == GlitchPhase::Glitch).then_some("glitching"))}
                style={format!(
                    "position: absolute; left: {:.2}%; top: {:.2}%; transform: translate(calc(-50% + {:.1}px), calc(-50% + {:.1}px));",
                    hx, hy, jx, jy
                )}
            >
                {translate("page2.hero", language)}
            </h1>
            <button class="hero-cta" onclick={on_cta}>
                {translate("page2.ctaButton", language)}
            </button>
        </div>
    }
}
