//! Finite `(state, duration)` sequences for the decorative slide animations.
//!
//! A slide builds the timeline for its current cycle and `utils::animation`
//! walks it step by step, one timeout per step.

#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    pub state: S,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<S> {
    steps: Vec<Step<S>>,
}

impl<S> Timeline<S> {
    /// Zero-length and negative steps are dropped.
    pub fn new(steps: impl IntoIterator<Item = (S, f64)>) -> Self {
        let steps = steps
            .into_iter()
            .filter(|(_, duration_ms)| *duration_ms > 0.0)
            .map(|(state, duration_ms)| Step { state, duration_ms })
            .collect();
        Self { steps }
    }

    /// Same duration for every state, e.g. a word carousel.
    pub fn uniform(states: impl IntoIterator<Item = S>, duration_ms: f64) -> Self {
        Self::new(states.into_iter().map(|state| (state, duration_ms)))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }
}

/// Offline inspection of a timeline. The hooks only walk it step by step.
#[cfg(test)]
impl<S> Timeline<S> {
    pub fn total_duration(&self) -> f64 {
        self.steps.iter().map(|step| step.duration_ms).sum()
    }

    /// State active `elapsed_ms` after the start, `None` once finished.
    pub fn state_at(&self, elapsed_ms: f64) -> Option<&S> {
        if elapsed_ms < 0.0 {
            return None;
        }
        let mut start = 0.0;
        for step in &self.steps {
            if elapsed_ms < start + step.duration_ms {
                return Some(&step.state);
            }
            start += step.duration_ms;
        }
        None
    }

    /// Like [`Self::state_at`] but wrapping around forever.
    pub fn looped_state_at(&self, elapsed_ms: f64) -> Option<&S> {
        let total = self.total_duration();
        if total <= 0.0 {
            return None;
        }
        self.state_at(elapsed_ms.rem_euclid(total))
    }

    /// Start offset of every step.
    pub fn starts(&self) -> impl Iterator<Item = (f64, &S)> + '_ {
        self.steps.iter().scan(0.0, |start, step| {
            let at = *start;
            *start += step.duration_ms;
            Some((at, &step.state))
        })
    }
}

/// Phases of the surveillance slide's headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchPhase {
    /// Word sits still with a faint jitter.
    Hold,
    /// Heavy jitter right before the jump.
    Glitch,
    /// Word has jumped to its next spot and is settling.
    Settle,
}

pub const FIRST_HOLD_MS: f64 = 2_000.0;
pub const CENTER_HOLD_MS: f64 = 3_500.0;
pub const ORBIT_HOLD_MS: f64 = 2_500.0;
pub const GLITCH_MS: f64 = 500.0;
pub const SETTLE_MS: f64 = 50.0;

/// Hold longer at the centre so the headline stays readable.
pub fn glitch_hold_ms(first_run: bool, at_center: bool) -> f64 {
    if first_run {
        FIRST_HOLD_MS
    } else if at_center {
        CENTER_HOLD_MS
    } else {
        ORBIT_HOLD_MS
    }
}

pub fn glitch_cycle(first_run: bool, at_center: bool) -> Timeline<GlitchPhase> {
    Timeline::new([
        (GlitchPhase::Hold, glitch_hold_ms(first_run, at_center)),
        (GlitchPhase::Glitch, GLITCH_MS),
        (GlitchPhase::Settle, SETTLE_MS),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_at_walks_steps_in_order() {
        let timeline = Timeline::new([('a', 100.0), ('b', 50.0), ('c', 10.0)]);
        assert_eq!(timeline.total_duration(), 160.0);
        assert_eq!(timeline.state_at(0.0), Some(&'a'));
        assert_eq!(timeline.state_at(99.9), Some(&'a'));
        assert_eq!(timeline.state_at(100.0), Some(&'b'));
        assert_eq!(timeline.state_at(155.0), Some(&'c'));
        assert_eq!(timeline.state_at(160.0), None);
        assert_eq!(timeline.state_at(-1.0), None);
    }

    #[test]
    fn looped_state_wraps() {
        let timeline = Timeline::uniform(["BLOCKED", "CENSORED"], 3_000.0);
        assert_eq!(timeline.looped_state_at(6_500.0), Some(&"BLOCKED"));
        assert_eq!(timeline.looped_state_at(9_100.0), Some(&"CENSORED"));
        assert_eq!(Timeline::<u8>::new([]).looped_state_at(10.0), None);
    }

    #[test]
    fn empty_steps_are_dropped() {
        let timeline = Timeline::new([(1, 0.0), (2, 10.0), (3, -4.0)]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.step(0).map(|s| s.state), Some(2));
    }

    #[test]
    fn starts_are_cumulative() {
        let timeline = glitch_cycle(true, false);
        let starts: Vec<_> = timeline.starts().map(|(at, phase)| (at, *phase)).collect();
        assert_eq!(
            starts,
            vec![
                (0.0, GlitchPhase::Hold),
                (2_000.0, GlitchPhase::Glitch),
                (2_500.0, GlitchPhase::Settle),
            ]
        );
    }

    #[test]
    fn glitch_cycle_length_depends_on_position() {
        assert_eq!(glitch_cycle(true, true).total_duration(), 2_550.0);
        assert_eq!(glitch_cycle(false, true).total_duration(), 4_050.0);
        assert_eq!(glitch_cycle(false, false).total_duration(), 3_050.0);
    }
}
