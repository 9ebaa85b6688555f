pub mod storage;
pub mod store;
pub mod theme;

pub use storage::{BrowserStorage, MemoryStorage, PreferenceStorage, StorageError};
pub use store::{DocumentState, PreferenceEvent, PreferenceSnapshot, PreferenceStore, RipplePoint};
pub use theme::{Language, TextDirection, Theme};
