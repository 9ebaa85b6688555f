use super::controller::NavEvent;

/// What the wheel listener should do with the native event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelOutcome {
    pub suppress_native: bool,
    pub events: Vec<NavEvent>,
}

impl WheelOutcome {
    pub(crate) fn native() -> Self {
        Self::default()
    }

    pub(crate) fn suppressed(events: Vec<NavEvent>) -> Self {
        Self {
            suppress_native: true,
            events,
        }
    }
}

/// Per-`touchmove` ownership decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchDecision {
    /// The controller owns the gesture; call `preventDefault`.
    Intercept,
    /// Leave the event alone so native scrolling or pull-to-refresh runs.
    PassThrough,
}

impl TouchDecision {
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, TouchDecision::Intercept)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEndOutcome {
    pub suppress_native: bool,
    pub events: Vec<NavEvent>,
}

/// Vertical direction of a gesture in page terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Positive wheel delta scrolls the document down, i.e. to the next slide.
    pub fn from_wheel(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        }
    }

    /// `diff` is `start_y - end_y`; a positive value is a swipe up.
    pub fn from_swipe(diff: f64) -> Self {
        if diff > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        }
    }

    pub fn apply(&self, page: u8) -> i16 {
        match self {
            Direction::Next => i16::from(page) + 1,
            Direction::Previous => i16::from(page) - 1,
        }
    }
}

/// The last slide scrolls on its own; only its top edge hands control back.
pub fn is_at_top(scroll_top: Option<f64>) -> bool {
    matches!(scroll_top, Some(top) if top <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(Direction::from_wheel(12.0), Direction::Next);
        assert_eq!(Direction::from_wheel(-3.0), Direction::Previous);
        // zero delta counts as "up", same as the browser handler it replaces
        assert_eq!(Direction::from_wheel(0.0), Direction::Previous);
    }

    #[test]
    fn direction_can_leave_the_valid_range() {
        assert_eq!(Direction::Previous.apply(1), 0);
        assert_eq!(Direction::Next.apply(7), 8);
    }

    #[test]
    fn missing_container_is_not_at_top() {
        assert!(is_at_top(Some(0.0)));
        assert!(!is_at_top(Some(14.0)));
        assert!(!is_at_top(None));
    }
}
