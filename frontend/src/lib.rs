pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod navigation;
pub mod pages;
pub mod preferences;
pub mod scheduler;
pub mod timeline;
pub mod utils;
pub mod viewport;

pub use app::App;
