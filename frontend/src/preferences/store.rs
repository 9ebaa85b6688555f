//! Display mode and language, the only state that outlives a reload.
//!
//! The store is built once by the app root and handed down; components only
//! ever see a [`PreferenceSnapshot`] plus the two mutation callbacks.

use log::{debug, warn};

use super::storage::PreferenceStorage;
use super::theme::{Language, TextDirection, Theme};
use crate::config::{RippleConfig, LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::scheduler::{Clocked, Scheduler};

/// Viewport coordinates the theme ripple grows from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RipplePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceSnapshot {
    pub theme: Theme,
    pub language: Language,
    pub ripple_origin: Option<RipplePoint>,
    pub is_rippling: bool,
}

impl PreferenceSnapshot {
    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// Document-level reflection of this snapshot.
    pub fn document(&self) -> DocumentState {
        DocumentState {
            dark: self.theme.is_dark(),
            dir: self.direction().as_str(),
            body_class: self.language.body_class(),
        }
    }

    /// Origin of the ripple currently on screen, if any.
    pub fn active_ripple(&self) -> Option<RipplePoint> {
        if self.is_rippling {
            self.ripple_origin
        } else {
            None
        }
    }
}

/// `dark` class and `dir` attribute on the root element, one `lang-*` class
/// on the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentState {
    pub dark: bool,
    pub dir: &'static str,
    pub body_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreferenceEvent {
    ThemeChanged(Theme),
    RippleEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreferenceAction {
    FlipTheme,
    EndRipple,
}

pub struct PreferenceStore<S> {
    storage: S,
    config: RippleConfig,
    initialized: bool,
    theme: Theme,
    language: Language,
    ripple_origin: Option<RipplePoint>,
    is_rippling: bool,
    scheduler: Scheduler<PreferenceAction>,
    events: Vec<PreferenceEvent>,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Defaults only; storage is not touched until [`Self::initialize`], so
    /// this is safe to build before the page is interactive.
    pub fn uninitialized(storage: S, config: RippleConfig) -> Self {
        Self {
            storage,
            config,
            initialized: false,
            theme: Theme::default(),
            language: Language::default(),
            ripple_origin: None,
            is_rippling: false,
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    /// Reconcile with persisted values once running client side. Missing or
    /// unreadable values keep the defaults.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        if let Some(theme) = self.read_persisted::<Theme>(THEME_STORAGE_KEY) {
            self.theme = theme;
        }
        if let Some(language) = self.read_persisted::<Language>(LANGUAGE_STORAGE_KEY) {
            self.language = language;
        }
        self.initialized = true;
        self.persist(THEME_STORAGE_KEY, self.theme.as_str());
        self.persist(LANGUAGE_STORAGE_KEY, self.language.as_str());
        debug!("Preferences loaded: theme={} language={}", self.theme, self.language);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            theme: self.theme,
            language: self.language,
            ripple_origin: self.ripple_origin,
            is_rippling: self.is_rippling,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Start the ripple now and flip the theme a moment later so the ripple
    /// covers the colour change. Each scheduled flip inverts whatever the
    /// theme is when it fires, so back-to-back toggles cancel out.
    pub fn toggle_theme(&mut self, origin: Option<RipplePoint>, now_ms: f64) {
        if !self.initialized {
            debug!("Theme toggle before initialization ignored");
            return;
        }
        if let Some(origin) = origin {
            self.ripple_origin = Some(origin);
            self.is_rippling = true;
        }
        self.scheduler
            .schedule(now_ms, self.config.flip_delay_ms, PreferenceAction::FlipTheme);
        self.scheduler
            .schedule(now_ms, self.config.duration_ms, PreferenceAction::EndRipple);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if self.initialized {
            self.persist(LANGUAGE_STORAGE_KEY, language.as_str());
        }
    }

    fn read_persisted<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        match self.storage.read(key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring unknown {} value {:?}", key, raw);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read {}: {}", key, e);
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.write(key, value) {
            warn!("Could not persist {}: {}", key, e);
        }
    }

    fn apply(&mut self, action: PreferenceAction) {
        match action {
            PreferenceAction::FlipTheme => {
                self.theme = self.theme.toggled();
                self.persist(THEME_STORAGE_KEY, self.theme.as_str());
                self.events.push(PreferenceEvent::ThemeChanged(self.theme));
            }
            PreferenceAction::EndRipple => {
                self.is_rippling = false;
                self.ripple_origin = None;
                self.events.push(PreferenceEvent::RippleEnded);
            }
        }
    }
}

impl<S: PreferenceStorage> Clocked for PreferenceStore<S> {
    type Event = PreferenceEvent;

    fn advance(&mut self, now_ms: f64) {
        for (_, action) in self.scheduler.drain_due(now_ms) {
            self.apply(action);
        }
    }

    fn take_events(&mut self) -> Vec<PreferenceEvent> {
        std::mem::take(&mut self.events)
    }

    fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }

    fn teardown(&mut self) {
        self.scheduler.clear();
        self.events.clear();
        self.is_rippling = false;
        self.ripple_origin = None;
    }
}
