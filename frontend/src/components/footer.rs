use yew::prelude::*;

use crate::app::use_preferences;
use crate::i18n::translate;

#[function_component]
pub fn Footer() -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;

    html! {
        <footer class="site-footer" dir={language.direction().as_str()}>
            <a href="#privacy-policy" class="footer-link">
                {translate("footer.privacyPolicy", language)}
            </a>
        </footer>
    }
}
