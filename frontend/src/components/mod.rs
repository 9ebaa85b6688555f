pub mod footer;
pub mod header;
pub mod loading_screen;
pub mod page_indicator;
pub mod scroll_indicator;
pub mod theme_ripple;
