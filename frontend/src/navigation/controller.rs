//! Slide navigation state machine.
//!
//! One slide is current at a time. Any page change takes the transition lock
//! for a fixed cooldown and every intent that arrives while the lock is held is
//! dropped, never queued. The last slide is an ordinary scrollable document:
//! it only hands control back when its own content sits at the top.

use log::debug;

use super::gesture::{is_at_top, Direction, TouchDecision, TouchEndOutcome, WheelOutcome};
use super::window::{MountWindow, OverscrollPolicy};
use crate::config::NavConfig;
use crate::scheduler::{Clocked, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    PageChanged { from: u8, to: u8 },
    TransitionSettled { page: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    /// End of the cooldown that follows a page change.
    Settle,
    /// Debounced wheel gesture.
    WheelStep(Direction),
    /// One hop of the jump-to-last flythrough.
    Flythrough(u8),
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    config: NavConfig,
    current: u8,
    transitioning: bool,
    touch_start_y: Option<f64>,
    scheduler: Scheduler<NavAction>,
    events: Vec<NavEvent>,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl NavigationController {
    pub fn new(config: NavConfig) -> Self {
        let config = NavConfig {
            total_pages: config.total_pages.max(1),
            ..config
        };
        Self {
            config,
            current: 1,
            transitioning: false,
            touch_start_y: None,
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    pub fn current_page(&self) -> u8 {
        self.current
    }

    pub fn total_pages(&self) -> u8 {
        self.config.total_pages
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_last_page(&self) -> bool {
        self.current == self.config.total_pages
    }

    pub fn mounted_pages(&self) -> MountWindow {
        MountWindow::around(self.current, self.config.total_pages)
    }

    pub fn overscroll_policy(&self) -> OverscrollPolicy {
        OverscrollPolicy::for_page(self.current)
    }

    pub fn navigate_to(&mut self, target: i16, now_ms: f64) -> Vec<NavEvent> {
        if target < 1 || target > i16::from(self.config.total_pages) {
            debug!("Ignoring navigation to out-of-range page {}", target);
            return Vec::new();
        }
        if self.transitioning {
            debug!("Ignoring navigation to page {} during transition", target);
            return Vec::new();
        }
        // range checked above
        let target = target as u8;

        self.transitioning = true;
        self.scheduler
            .schedule(now_ms, self.config.transition_cooldown_ms, NavAction::Settle);
        self.set_page(target).into_iter().collect()
    }

    /// `scroll_top` is the last slide's content offset, `None` when that
    /// container is not in the document.
    pub fn handle_wheel(&mut self, delta_y: f64, scroll_top: Option<f64>, now_ms: f64) -> WheelOutcome {
        if self.transitioning {
            return WheelOutcome::suppressed(Vec::new());
        }

        self.scheduler
            .cancel_where(|action| matches!(action, NavAction::WheelStep(_)));

        if self.is_last_page() {
            if delta_y < 0.0 && is_at_top(scroll_top) {
                let events = self.navigate_to(i16::from(self.current) - 1, now_ms);
                return WheelOutcome::suppressed(events);
            }
            return WheelOutcome::native();
        }

        self.scheduler.schedule(
            now_ms,
            self.config.wheel_debounce_ms,
            NavAction::WheelStep(Direction::from_wheel(delta_y)),
        );
        WheelOutcome::suppressed(Vec::new())
    }

    pub fn touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    /// Decides per move event whether the controller owns the gesture or the
    /// browser keeps it for native scrolling and pull-to-refresh.
    pub fn touch_move(&self, y: f64) -> TouchDecision {
        let Some(start) = self.touch_start_y else {
            return TouchDecision::PassThrough;
        };
        let diff = start - y;

        if self.current == 1 && diff < 0.0 {
            // nothing above the first slide, so dragging down means refresh
            return TouchDecision::PassThrough;
        }
        if self.is_last_page() {
            return TouchDecision::PassThrough;
        }
        TouchDecision::Intercept
    }

    pub fn touch_end(&mut self, y: f64, scroll_top: Option<f64>, now_ms: f64) -> TouchEndOutcome {
        let Some(start) = self.touch_start_y.take() else {
            return TouchEndOutcome::default();
        };
        if self.transitioning {
            return TouchEndOutcome::default();
        }

        let diff = start - y;
        let threshold = self.config.swipe_threshold_px;

        if self.is_last_page() {
            if diff < -threshold && is_at_top(scroll_top) {
                let events = self.navigate_to(i16::from(self.current) - 1, now_ms);
                return TouchEndOutcome {
                    suppress_native: true,
                    events,
                };
            }
            return TouchEndOutcome::default();
        }

        if diff.abs() <= threshold {
            return TouchEndOutcome::default();
        }
        if self.current == 1 && diff < 0.0 {
            return TouchEndOutcome::default();
        }

        let target = Direction::from_swipe(diff).apply(self.current);
        TouchEndOutcome {
            suppress_native: true,
            events: self.navigate_to(target, now_ms),
        }
    }

    /// Fly through every remaining slide to the last one. Only offered from
    /// the first two slides; the lock is held for the whole sequence.
    pub fn jump_to_last(&mut self, now_ms: f64) -> bool {
        if self.current > 2 || self.transitioning {
            debug!("Ignoring jump to last page from page {}", self.current);
            return false;
        }
        if self.is_last_page() {
            return false;
        }

        self.transitioning = true;
        let step = self.config.flythrough_step_ms;
        for (index, page) in (self.current + 1..=self.config.total_pages).enumerate() {
            self.scheduler
                .schedule(now_ms, index as f64 * step, NavAction::Flythrough(page));
        }
        true
    }

    fn set_page(&mut self, page: u8) -> Option<NavEvent> {
        let from = self.current;
        self.current = page;
        if from == page {
            return None;
        }
        debug!("Page {} -> {}", from, page);
        Some(NavEvent::PageChanged { from, to: page })
    }

    fn apply(&mut self, due_ms: f64, action: NavAction) {
        match action {
            NavAction::Settle => {
                self.transitioning = false;
                self.events.push(NavEvent::TransitionSettled { page: self.current });
            }
            NavAction::WheelStep(direction) => {
                let events = self.navigate_to(direction.apply(self.current), due_ms);
                self.events.extend(events);
            }
            NavAction::Flythrough(page) => {
                if let Some(event) = self.set_page(page) {
                    self.events.push(event);
                }
                if page == self.config.total_pages {
                    self.scheduler
                        .schedule(due_ms, self.config.transition_cooldown_ms, NavAction::Settle);
                }
            }
        }
    }
}

impl Clocked for NavigationController {
    type Event = NavEvent;

    fn advance(&mut self, now_ms: f64) {
        loop {
            let due = self.scheduler.drain_due(now_ms);
            if due.is_empty() {
                break;
            }
            for (due_ms, action) in due {
                self.apply(due_ms, action);
            }
        }
    }

    fn take_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }

    fn teardown(&mut self) {
        self.scheduler.clear();
        self.events.clear();
        self.touch_start_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: f64 = 800.0;

    fn controller() -> NavigationController {
        NavigationController::default()
    }

    /// Navigate and let the cooldown run out.
    fn settle_on(nav: &mut NavigationController, page: u8, now: &mut f64) {
        nav.navigate_to(i16::from(page), *now);
        *now += COOLDOWN;
        nav.advance(*now);
        assert!(!nav.is_transitioning());
    }

    fn page_changes(events: &[NavEvent]) -> Vec<u8> {
        events
            .iter()
            .filter_map(|event| match event {
                NavEvent::PageChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_on_first_page_idle() {
        let nav = controller();
        assert_eq!(nav.current_page(), 1);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.mounted_pages().pages().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(nav.overscroll_policy(), OverscrollPolicy::Auto);
    }

    #[test]
    fn navigate_to_every_page_updates_window() {
        for page in 1..=7u8 {
            let mut nav = controller();
            let mut now = 0.0;
            settle_on(&mut nav, page, &mut now);
            assert_eq!(nav.current_page(), page);
            assert_eq!(nav.mounted_pages(), MountWindow::around(page, 7));
            assert!(nav.mounted_pages().contains(page));
        }
    }

    #[test]
    fn out_of_range_targets_are_ignored() {
        let mut nav = controller();
        for target in [-1, 0, 8, 100] {
            assert!(nav.navigate_to(target, 0.0).is_empty());
            assert_eq!(nav.current_page(), 1);
            assert!(!nav.is_transitioning());
        }
    }

    #[test]
    fn second_navigation_during_cooldown_is_dropped() {
        let mut nav = controller();
        let first = nav.navigate_to(3, 0.0);
        assert_eq!(first, vec![NavEvent::PageChanged { from: 1, to: 3 }]);
        assert!(nav.navigate_to(5, 100.0).is_empty());

        nav.advance(COOLDOWN);
        assert_eq!(nav.current_page(), 3);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.take_events(), vec![NavEvent::TransitionSettled { page: 3 }]);

        // nothing was queued for later either
        nav.advance(10_000.0);
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn lock_is_released_exactly_after_cooldown() {
        let mut nav = controller();
        nav.navigate_to(2, 1_000.0);
        nav.advance(1_000.0 + COOLDOWN - 1.0);
        assert!(nav.is_transitioning());
        nav.advance(1_000.0 + COOLDOWN);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn wheel_is_debounced_into_one_step() {
        let mut nav = controller();
        for (i, t) in [0.0, 10.0, 20.0, 30.0].into_iter().enumerate() {
            let outcome = nav.handle_wheel(4.0 + i as f64, None, t);
            assert!(outcome.suppress_native);
            assert!(outcome.events.is_empty());
        }
        nav.advance(79.0);
        assert_eq!(nav.current_page(), 1);
        nav.advance(80.0);
        assert_eq!(nav.current_page(), 2);
        assert!(nav.is_transitioning());
    }

    #[test]
    fn latest_wheel_direction_wins() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 4, &mut now);
        nav.handle_wheel(30.0, None, now);
        nav.handle_wheel(-30.0, None, now + 20.0);
        nav.advance(now + 100.0);
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn wheel_during_transition_is_suppressed_and_dropped() {
        let mut nav = controller();
        nav.navigate_to(2, 0.0);
        let outcome = nav.handle_wheel(50.0, None, 10.0);
        assert!(outcome.suppress_native);
        nav.advance(COOLDOWN + 100.0);
        assert_eq!(nav.current_page(), 2);
    }

    #[test]
    fn wheel_up_on_first_page_goes_nowhere() {
        let mut nav = controller();
        nav.handle_wheel(-40.0, None, 0.0);
        nav.advance(100.0);
        assert_eq!(nav.current_page(), 1);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn wheel_up_on_last_page_at_top_returns_to_previous() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 7, &mut now);

        let outcome = nav.handle_wheel(-20.0, Some(0.0), now);
        assert!(outcome.suppress_native);
        assert_eq!(page_changes(&outcome.events), vec![6]);
        assert_eq!(nav.current_page(), 6);
    }

    #[test]
    fn wheel_on_scrolled_last_page_stays_native() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 7, &mut now);

        let up = nav.handle_wheel(-20.0, Some(240.0), now);
        assert!(!up.suppress_native);
        let down = nav.handle_wheel(20.0, Some(0.0), now);
        assert!(!down.suppress_native);
        nav.advance(now + 1_000.0);
        assert_eq!(nav.current_page(), 7);
    }

    #[test]
    fn pull_down_on_first_page_is_left_to_the_browser() {
        let mut nav = controller();
        nav.touch_start(100.0);
        assert_eq!(nav.touch_move(180.0), TouchDecision::PassThrough);
        let end = nav.touch_end(260.0, None, 0.0);
        assert!(!end.suppress_native);
        assert!(end.events.is_empty());
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn same_pull_down_on_third_page_is_intercepted() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 3, &mut now);

        nav.touch_start(100.0);
        assert_eq!(nav.touch_move(180.0), TouchDecision::Intercept);
        let end = nav.touch_end(260.0, None, now);
        assert!(end.suppress_native);
        assert_eq!(page_changes(&end.events), vec![2]);
    }

    #[test]
    fn swipe_up_on_first_page_is_owned_by_controller() {
        let mut nav = controller();
        nav.touch_start(400.0);
        assert!(nav.touch_move(350.0).should_prevent_default());
        let end = nav.touch_end(300.0, None, 0.0);
        assert!(end.suppress_native);
        assert_eq!(nav.current_page(), 2);
    }

    #[test]
    fn short_swipes_do_not_navigate() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 3, &mut now);
        nav.touch_start(300.0);
        let end = nav.touch_end(251.0, None, now);
        assert!(!end.suppress_native);
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn last_page_touch_only_acts_at_top_when_dragging_down() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 7, &mut now);

        nav.touch_start(100.0);
        assert_eq!(nav.touch_move(200.0), TouchDecision::PassThrough);
        let scrolled = nav.touch_end(200.0, Some(35.0), now);
        assert!(scrolled.events.is_empty());

        nav.touch_start(300.0);
        let swipe_up = nav.touch_end(100.0, Some(0.0), now);
        assert!(swipe_up.events.is_empty());
        assert_eq!(nav.current_page(), 7);

        nav.touch_start(100.0);
        let at_top = nav.touch_end(200.0, Some(0.0), now);
        assert!(at_top.suppress_native);
        assert_eq!(nav.current_page(), 6);
    }

    #[test]
    fn touch_end_during_transition_is_ignored() {
        let mut nav = controller();
        nav.navigate_to(3, 0.0);
        nav.touch_start(400.0);
        let end = nav.touch_end(100.0, None, 10.0);
        assert_eq!(end, TouchEndOutcome::default());
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn touch_end_without_start_does_nothing() {
        let mut nav = controller();
        assert_eq!(nav.touch_end(10.0, None, 0.0), TouchEndOutcome::default());
        assert_eq!(nav.touch_move(10.0), TouchDecision::PassThrough);
    }

    #[test]
    fn jump_to_last_visits_every_page_in_order() {
        let mut nav = controller();
        assert!(nav.jump_to_last(0.0));
        assert!(nav.is_transitioning());

        let mut visited = Vec::new();
        let mut now = 0u32;
        while now <= 5 * 120 {
            nav.advance(f64::from(now));
            visited.extend(page_changes(&nav.take_events()));
            now += 10;
        }
        assert_eq!(visited, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(nav.current_page(), 7);
        assert!(nav.is_transitioning());

        nav.advance(600.0 + COOLDOWN - 1.0);
        assert!(nav.is_transitioning());
        nav.advance(600.0 + COOLDOWN);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn jump_to_last_from_second_page() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 2, &mut now);
        assert!(nav.jump_to_last(now));
        nav.advance(now + 10_000.0);
        assert_eq!(page_changes(&nav.take_events()), vec![3, 4, 5, 6, 7]);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn late_advance_still_replays_flythrough_in_order() {
        let mut nav = controller();
        nav.jump_to_last(0.0);
        nav.advance(5_000.0);
        let events = nav.take_events();
        assert_eq!(page_changes(&events), vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(events.last(), Some(&NavEvent::TransitionSettled { page: 7 }));
    }

    #[test]
    fn jump_to_last_rejected_elsewhere() {
        for page in 3..=7u8 {
            let mut nav = controller();
            let mut now = 0.0;
            settle_on(&mut nav, page, &mut now);
            assert!(!nav.jump_to_last(now));
            assert!(!nav.is_transitioning());
            assert_eq!(nav.current_page(), page);
        }
    }

    #[test]
    fn flythrough_cannot_be_interrupted() {
        let mut nav = controller();
        nav.jump_to_last(0.0);
        nav.advance(250.0);
        assert!(nav.navigate_to(1, 260.0).is_empty());
        assert!(nav.handle_wheel(-10.0, None, 270.0).events.is_empty());
        assert!(!nav.jump_to_last(280.0));
        nav.advance(10_000.0);
        assert_eq!(nav.current_page(), 7);
    }

    #[test]
    fn teardown_cancels_every_pending_timer() {
        let mut nav = controller();
        nav.jump_to_last(0.0);
        nav.advance(130.0);
        assert_eq!(nav.current_page(), 3);

        nav.teardown();
        assert_eq!(nav.next_deadline(), None);
        nav.advance(10_000.0);
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn overscroll_follows_current_page() {
        let mut nav = controller();
        let mut now = 0.0;
        settle_on(&mut nav, 2, &mut now);
        assert_eq!(nav.overscroll_policy(), OverscrollPolicy::None);
        settle_on(&mut nav, 1, &mut now);
        assert_eq!(nav.overscroll_policy(), OverscrollPolicy::Auto);
    }

    #[test]
    fn event_queue_stays_bounded_across_a_long_session() {
        let mut nav = controller();
        let mut now = 0.0;
        for round in 0..1000u32 {
            let target = if round % 2 == 0 { 2 } else { 1 };
            nav.navigate_to(target, now);
            now += COOLDOWN;
            nav.advance(now);
            assert!(nav.take_events().len() <= 1);
        }

        assert!(nav.jump_to_last(now));
        nav.advance(now + 130.0);
        nav.teardown();
        assert!(nav.take_events().is_empty());
    }
}
