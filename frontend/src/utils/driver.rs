use std::cell::{Ref, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use super::dom::now_ms;
use crate::scheduler::Clocked;

/// Runs a [`Clocked`] state machine on the browser event loop.
///
/// Holds at most one pending `Timeout`, armed for the machine's earliest
/// deadline. Replacing or dropping the handle cancels it, so [`Driver::teardown`]
/// leaves nothing behind that could fire after the owning component is gone.
pub struct Driver<T> {
    inner: Rc<RefCell<T>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    notify: Rc<dyn Fn()>,
}

impl<T> Clone for Driver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            timer: self.timer.clone(),
            notify: self.notify.clone(),
        }
    }
}

impl<T: Clocked + 'static> Driver<T> {
    /// `notify` runs after every mutation; components pass their re-render
    /// handle here.
    pub fn new(value: T, notify: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            timer: Rc::new(RefCell::new(None)),
            notify: Rc::new(notify),
        }
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutate with the current time, drain whatever the machine queued, then
    /// re-arm the timer.
    pub fn update<R>(&self, f: impl FnOnce(&mut T, f64) -> R) -> R {
        let result = {
            let mut inner = self.inner.borrow_mut();
            let result = f(&mut inner, now_ms());
            for event in inner.take_events() {
                log::debug!("{:?}", event);
            }
            result
        };
        self.rearm();
        (self.notify)();
        result
    }

    pub fn teardown(&self) {
        self.timer.borrow_mut().take();
        self.inner.borrow_mut().teardown();
    }

    fn rearm(&self) {
        let deadline = self.inner.borrow().next_deadline();
        let timeout = deadline.map(|due| {
            let delay = (due - now_ms()).max(0.0).ceil() as u32;
            let driver = self.clone();
            Timeout::new(delay, move || {
                driver.update(|state, now| state.advance(now));
            })
        });
        *self.timer.borrow_mut() = timeout;
    }
}
