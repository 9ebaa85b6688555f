use yew::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::config::RippleConfig;
use crate::pages::main_page::MainPage;
use crate::preferences::{BrowserStorage, Language, PreferenceSnapshot, PreferenceStore, RipplePoint};
use crate::utils::dom;
use crate::utils::driver::Driver;

/// What components get to see of the preference store: a read-only
/// snapshot plus the two ways of changing it.
#[derive(Clone, PartialEq)]
pub struct PreferenceContext {
    pub snapshot: PreferenceSnapshot,
    pub toggle_theme: Callback<Option<RipplePoint>>,
    pub set_language: Callback<Language>,
}

#[hook]
pub fn use_preferences() -> PreferenceContext {
    use_context::<PreferenceContext>().unwrap_or_else(|| PreferenceContext {
        snapshot: PreferenceStore::uninitialized(BrowserStorage, RippleConfig::default()).snapshot(),
        toggle_theme: Callback::noop(),
        set_language: Callback::noop(),
    })
}

#[function_component]
pub fn App() -> Html {
    let force_update = use_force_update();
    let store = use_state(move || {
        Driver::new(
            PreferenceStore::uninitialized(BrowserStorage, RippleConfig::from_build_env()),
            move || force_update.force_update(),
        )
    });

    // Storage is only read once we are actually running in the browser.
    {
        let store = (*store).clone();
        use_effect_with_deps(
            move |_| {
                store.update(|prefs, _| prefs.initialize());
                move || store.teardown()
            },
            (),
        );
    }

    let snapshot = store.borrow().snapshot();
    use_effect_with_deps(
        |snapshot| {
            dom::apply_preferences(snapshot);
            || ()
        },
        snapshot,
    );

    let actions = {
        let store = (*store).clone();
        use_memo(
            move |_| {
                let toggle = store.clone();
                let toggle_theme = Callback::from(move |origin: Option<RipplePoint>| {
                    toggle.update(|prefs, now| prefs.toggle_theme(origin, now));
                });
                let set_language = Callback::from(move |language: Language| {
                    log::info!("Language set to {}", language);
                    store.update(|prefs, _| prefs.set_language(language));
                });
                (toggle_theme, set_language)
            },
            (),
        )
    };

    let loading = use_state(|| true);
    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    let context = PreferenceContext {
        snapshot,
        toggle_theme: actions.0.clone(),
        set_language: actions.1.clone(),
    };

    html! {
        <ContextProvider<PreferenceContext> context={context}>
            if *loading {
                <LoadingScreen on_complete={on_loaded} />
            } else {
                <MainPage />
            }
        </ContextProvider<PreferenceContext>>
    }
}
