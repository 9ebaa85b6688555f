pub mod controller;
pub mod gesture;
pub mod window;

pub use controller::{NavEvent, NavigationController};
pub use gesture::{TouchDecision, TouchEndOutcome, WheelOutcome};
pub use window::{MountWindow, OverscrollPolicy};
