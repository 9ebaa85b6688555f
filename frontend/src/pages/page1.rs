use yew::prelude::*;

use super::CtaSlideProps;
use crate::app::use_preferences;
use crate::i18n::{translate, translate_list};
use crate::utils::animation::use_ticker;
use crate::utils::dom::{self, use_motion_mode};

const JITTER_PERIOD_MS: u32 = 200;
const JITTER_AMPLITUDE_PX: f64 = 10.0;
/// Threat words stay outside this radius (in % of the slide) around the hero.
const EXCLUSION_RADIUS: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordPlacement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Spreads `count` words on a ring around the hero text, in percent of the
/// slide. Deterministic so the layout does not jump between renders.
pub fn scatter_words(count: usize) -> Vec<WordPlacement> {
    let radius = EXCLUSION_RADIUS + 7.0;
    (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / count as f64 + 0.35;
            WordPlacement {
                x: 50.0 + radius * angle.cos(),
                y: 50.0 + radius * angle.sin() * 0.9,
                rotation: if i % 2 == 0 { -8.0 } else { 6.0 },
            }
        })
        .collect()
}

/// Map two uniform samples to a symmetric offset of at most `amplitude / 2`.
pub fn jitter_offset(rx: f64, ry: f64, amplitude: f64) -> (f64, f64) {
    ((rx - 0.5) * amplitude, (ry - 0.5) * amplitude)
}

#[function_component]
pub fn Page1(props: &CtaSlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;
    let motion = use_motion_mode();
    let glitch = use_state(|| (0.0, 0.0));

    {
        let glitch = glitch.clone();
        use_ticker(props.active && motion.animates(), JITTER_PERIOD_MS, move || {
            glitch.set(jitter_offset(dom::random(), dom::random(), JITTER_AMPLITUDE_PX));
        });
    }

    let threats = translate_list("page1.threats", language);
    let placements = scatter_words(threats.len());
    let (gx, gy) = *glitch;
    let on_cta = props.on_jump_to_last.reform(|_: MouseEvent| ());

    html! {
        <div class="slide slide-dangers" dir={language.direction().as_str()}>
            { for threats.iter().zip(placements).map(|(word, place)| html! {
                <span
                    class="threat-word"
                    style={format!(
                        "position: absolute; left: {:.2}%; top: {:.2}%; transform: translate(-50%, -50%) rotate({}deg);",
                        place.x, place.y, place.rotation
                    )}
                >
                    {*word}
                </span>
            }) }
            <h1
                class="hero-title glitch"
                data-text={translate("page1.hero", language)}
                style={format!("transform: translate({:.1}px, {:.1}px);", gx, gy)}
            >
                {translate("page1.hero", language)}
            </h1>
            <button class="hero-cta" onclick={on_cta}>
                {translate("page1.ctaButton", language)}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_stay_clear_of_the_hero() {
        for count in 1..=8 {
            for place in scatter_words(count) {
                let dx = place.x - 50.0;
                let dy = place.y - 50.0;
                assert!((dx * dx + dy * dy).sqrt() > EXCLUSION_RADIUS - 4.0);
                assert!((0.0..=100.0).contains(&place.x));
                assert!((0.0..=100.0).contains(&place.y));
            }
        }
    }

    #[test]
    fn jitter_is_centred() {
        assert_eq!(jitter_offset(0.5, 0.5, 10.0), (0.0, 0.0));
        assert_eq!(jitter_offset(0.0, 1.0, 10.0), (-5.0, 5.0));
    }
}
