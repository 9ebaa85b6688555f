use yew::prelude::*;

use crate::app::use_preferences;
use crate::i18n::page_name;

#[derive(Properties, PartialEq, Clone)]
pub struct PageIndicatorProps {
    pub current_page: u8,
    pub total_pages: u8,
    pub on_page_click: Callback<u8>,
}

#[function_component]
pub fn PageIndicator(props: &PageIndicatorProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;

    html! {
        <nav class="page-indicator" style="position: fixed; right: 2rem; top: 50%; transform: translateY(-50%); z-index: 50; display: flex; flex-direction: column; gap: 1rem;">
            { for (1..=props.total_pages).map(|page| {
                let name = page_name(page, language);
                let active = page == props.current_page;
                let onclick = props.on_page_click.reform(move |_: MouseEvent| page);
                html! {
                    <button
                        key={page.to_string()}
                        class={classes!("page-indicator-dot", active.then_some("active"))}
                        aria-label={format!("Go to {}", name)}
                        aria-current={active.then_some("page")}
                        {onclick}
                    >
                        <span class="page-indicator-bar" style={format!("height: {}px;", if active { 32 } else { 20 })}></span>
                        <span class="page-indicator-label">{name}</span>
                    </button>
                }
            }) }
        </nav>
    }
}
