pub mod animation;
pub mod dom;
pub mod driver;
