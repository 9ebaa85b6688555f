pub mod main_page;
pub mod page1;
pub mod page2;
pub mod page3;
pub mod page4;
pub mod page5;
pub mod page6;
pub mod page7;

use yew::prelude::*;

/// Props shared by every slide. Inactive slides are mounted neighbours and
/// keep their decorative timers stopped.
#[derive(Properties, PartialEq, Clone)]
pub struct SlideProps {
    pub active: bool,
}

/// Slides that offer the "skip to pricing" call to action.
#[derive(Properties, PartialEq, Clone)]
pub struct CtaSlideProps {
    pub active: bool,
    pub on_jump_to_last: Callback<()>,
}
