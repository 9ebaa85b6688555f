use yew::prelude::*;

use super::SlideProps;
use crate::app::use_preferences;
use crate::config::LAST_PAGE_CONTENT_ID;
use crate::i18n::translate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub data: &'static str,
    pub popular: bool,
    pub extras: &'static [&'static str],
}

pub const PLANS: [Plan; 4] = [
    Plan { name: "Starter", price: "$2.50", data: "50GB", popular: false, extras: &[] },
    Plan { name: "Pro", price: "$5.99", data: "100GB", popular: true, extras: &[] },
    Plan { name: "Premium", price: "$7.99", data: "150GB", popular: false, extras: &[] },
    Plan { name: "Ultimate", price: "$9.99", data: "200GB", popular: false, extras: &["Priority support"] },
];

/// Last slide. Its content scrolls on its own; navigation reads the scroll
/// offset of `#page-7-content` to decide when to hand control back.
#[function_component]
pub fn Page7(props: &SlideProps) -> Html {
    let prefs = use_preferences();
    let language = prefs.snapshot.language;

    html! {
        <div
            id={LAST_PAGE_CONTENT_ID}
            class={classes!("slide", "slide-freedom", props.active.then_some("active"))}
            dir={language.direction().as_str()}
            style="height: 100vh; overflow-y: auto; -webkit-overflow-scrolling: touch;"
        >
            <section class="freedom-hero">
                <h1 class="freedom-title">{translate("page7.hero", language)}</h1>
            </section>

            <section class="free-trial glass">
                <h2>{translate("page7.freeTrialTitle", language)}</h2>
                <p class="no-credit-card">{translate("page7.noCreditCard", language)}</p>
                <a href="#signup" class="hero-cta">{translate("page7.getStarted", language)}</a>
            </section>

            <section class="pricing">
                { for PLANS.iter().map(|plan| html! {
                    <div key={plan.name} class={classes!("pricing-card", "glass", plan.popular.then_some("popular"))}>
                        <h3>{plan.name}</h3>
                        <div class="pricing-price">{plan.price}<span class="pricing-period">{"/mo"}</span></div>
                        <div class="pricing-data">{plan.data}</div>
                        <ul>
                            { for plan.extras.iter().map(|extra| html! { <li>{*extra}</li> }) }
                        </ul>
                        <a href="#signup" class="pricing-cta">{translate("page7.getStarted", language)}</a>
                    </div>
                }) }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Pro"]);
    }

    #[test]
    fn only_ultimate_has_extras() {
        assert!(PLANS.iter().take(3).all(|p| p.extras.is_empty()));
        assert_eq!(PLANS[3].extras, &["Priority support"]);
    }
}
