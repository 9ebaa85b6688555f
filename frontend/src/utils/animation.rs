use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::timeline::Timeline;

/// Position inside a repeating timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimelineCursor {
    pub cycle: u32,
    pub step: usize,
}

impl TimelineCursor {
    fn next(self, steps: usize) -> Self {
        if self.step + 1 < steps {
            Self {
                step: self.step + 1,
                ..self
            }
        } else {
            Self {
                cycle: self.cycle.wrapping_add(1),
                step: 0,
            }
        }
    }
}

/// Walks `build(cycle)` step by step while `active`, starting the next cycle
/// when one finishes. Only the timeout for the current step is ever pending;
/// it is cancelled when the slide deactivates or unmounts.
#[hook]
pub fn use_timeline<S, F>(active: bool, build: F) -> (Option<S>, TimelineCursor)
where
    S: Clone + 'static,
    F: Fn(u32) -> Timeline<S>,
{
    let cursor = use_state(TimelineCursor::default);
    let timeline = build(cursor.cycle);
    let steps = timeline.len();
    let step = timeline.step(cursor.step);
    let state = step.map(|step| step.state.clone());
    let duration_ms = step.map(|step| step.duration_ms).unwrap_or(0.0);

    {
        let handle = cursor.clone();
        use_effect_with_deps(
            move |&(active, current, duration_ms, steps)| {
                let timeout = (active && steps > 0).then(|| {
                    Timeout::new(duration_ms.round() as u32, move || {
                        handle.set(current.next(steps));
                    })
                });
                move || drop(timeout)
            },
            (active, *cursor, duration_ms, steps),
        );
    }

    (state, *cursor)
}

/// Calls `tick` every `period_ms` while `active`.
#[hook]
pub fn use_ticker<F>(active: bool, period_ms: u32, tick: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |&(active, period_ms)| {
            let interval = active.then(|| Interval::new(period_ms, tick));
            move || drop(interval)
        },
        (active, period_ms),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_into_next_cycle() {
        let start = TimelineCursor::default();
        let second = start.next(3);
        assert_eq!(second, TimelineCursor { cycle: 0, step: 1 });
        let wrapped = second.next(3).next(3);
        assert_eq!(wrapped, TimelineCursor { cycle: 1, step: 0 });
    }

    #[test]
    fn single_step_timeline_advances_cycle_every_time() {
        let cursor = TimelineCursor::default().next(1).next(1);
        assert_eq!(cursor, TimelineCursor { cycle: 2, step: 0 });
    }
}
