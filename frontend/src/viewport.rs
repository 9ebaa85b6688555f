//! Layout decisions that depend on the live viewport. Everything here is a
//! pure function of an injected [`Viewport`]; `utils::dom::use_viewport`
//! feeds it from `resize` events.

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    /// Desktop-sized guess used until the real size is known.
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }

    /// Blocked-service cards shown on the restrictions slide.
    pub fn service_card_count(&self) -> usize {
        if self.is_mobile() {
            6
        } else {
            8
        }
    }

    /// Floating particles on the security slide.
    pub fn particle_count(&self) -> usize {
        if self.is_mobile() {
            8
        } else {
            20
        }
    }

    /// Slower cycles on phones keep the frame budget down.
    pub fn particle_cycle_secs(&self) -> f64 {
        if self.is_mobile() {
            3.0
        } else {
            2.0
        }
    }
}

/// The single reduced-motion switch. `Reduced` stops every decorative
/// timeline; page transitions are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    #[default]
    Full,
    Reduced,
}

impl MotionMode {
    pub const MEDIA_QUERY: &'static str = "(prefers-reduced-motion: reduce)";

    pub fn from_media_match(reduce: bool) -> Self {
        if reduce {
            MotionMode::Reduced
        } else {
            MotionMode::Full
        }
    }

    pub fn animates(&self) -> bool {
        matches!(self, MotionMode::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(Viewport::new(767.0, 900.0).is_mobile());
        assert!(!Viewport::new(768.0, 900.0).is_mobile());
    }

    #[test]
    fn phone_gets_fewer_cards_and_particles() {
        let phone = Viewport::new(390.0, 844.0);
        let desktop = Viewport::default();
        assert_eq!(phone.service_card_count(), 6);
        assert_eq!(desktop.service_card_count(), 8);
        assert_eq!(phone.particle_count(), 8);
        assert_eq!(desktop.particle_count(), 20);
        assert!(phone.particle_cycle_secs() > desktop.particle_cycle_secs());
    }

    #[test]
    fn reduced_motion_stops_animation() {
        assert!(MotionMode::from_media_match(false).animates());
        assert!(!MotionMode::from_media_match(true).animates());
    }
}
