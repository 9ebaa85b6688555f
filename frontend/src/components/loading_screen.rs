use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::animation::use_ticker;
use crate::utils::dom;

const LOGO_DELAY_MS: u32 = 300;
const PROGRESS_TICK_MS: u32 = 150;
const COMPLETE_DELAY_MS: u32 = 500;

/// One simulated loading step: 10 to 25 points, capped at 100.
pub fn next_progress(current: f64, sample: f64) -> f64 {
    (current + sample * 15.0 + 10.0).min(100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Progress(f64);

impl Reducible for Progress {
    /// Uniform sample driving the next step.
    type Action = f64;

    fn reduce(self: Rc<Self>, sample: f64) -> Rc<Self> {
        Rc::new(Progress(next_progress(self.0, sample)))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[function_component]
pub fn LoadingScreen(props: &LoadingScreenProps) -> Html {
    let progress = use_reducer(Progress::default);
    let show_logo = use_state(|| false);
    let done = progress.0 >= 100.0;

    {
        let show_logo = show_logo.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOGO_DELAY_MS, move || show_logo.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let progress = progress.clone();
        use_ticker(!done, PROGRESS_TICK_MS, move || progress.dispatch(dom::random()));
    }

    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |done| {
                let timeout = done.then(|| Timeout::new(COMPLETE_DELAY_MS, move || on_complete.emit(())));
                move || drop(timeout)
            },
            done,
        );
    }

    html! {
        <div class="loading-screen" style="position: fixed; inset: 0; z-index: 200; display: flex; flex-direction: column; align-items: center; justify-content: center;">
            if *show_logo {
                <img src="/logo-64.png" alt="Logo" width="96" height="96" class="loading-logo glitch" />
            }
            <div class="loading-bar" style="width: 16rem; height: 4px; margin-top: 2rem; background: rgba(255, 255, 255, 0.1);">
                <div class="loading-bar-fill" style={format!("width: {:.0}%; height: 100%; background: #ef4444; transition: width 150ms;", progress.0)}></div>
            </div>
            <span class="loading-percent">{format!("{:.0}%", progress.0)}</span>
        </div>
    }
}
