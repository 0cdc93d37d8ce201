use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

// Collapses a burst of events into one firing after a quiet period.
pub(crate) struct DebounceState {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl DebounceState {
    pub(crate) fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    pub(crate) fn record(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    pub(crate) fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

// At most one firing per window, on the leading edge.
pub(crate) struct ThrottleGate {
    limit_ms: f64,
    open_at: f64,
}

impl ThrottleGate {
    pub(crate) fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            open_at: 0.0,
        }
    }

    pub(crate) fn try_fire(&mut self, now_ms: f64) -> bool {
        if now_ms < self.open_at {
            return false;
        }
        self.open_at = now_ms + self.limit_ms;
        true
    }
}

pub(crate) fn debounce<A: 'static>(wait_ms: u32, f: impl FnMut(A) + 'static) -> impl FnMut(A) {
    let f = Rc::new(RefCell::new(f));
    let state = Rc::new(RefCell::new(DebounceState::new(f64::from(wait_ms))));
    let last_arg: Rc<RefCell<Option<A>>> = Rc::new(RefCell::new(None));
    move |arg: A| {
        state.borrow_mut().record(js_sys::Date::now());
        *last_arg.borrow_mut() = Some(arg);
        let f = Rc::clone(&f);
        let state = Rc::clone(&state);
        let last_arg = Rc::clone(&last_arg);
        // every call schedules a check; only the one past the final deadline fires
        Timeout::new(wait_ms, move || {
            if state.borrow_mut().fire_if_due(js_sys::Date::now()) {
                if let Some(arg) = last_arg.borrow_mut().take() {
                    (f.borrow_mut())(arg);
                }
            }
        })
        .forget();
    }
}

pub(crate) fn throttle<A: 'static>(limit_ms: u32, mut f: impl FnMut(A) + 'static) -> impl FnMut(A) {
    let mut gate = ThrottleGate::new(f64::from(limit_ms));
    move |arg: A| {
        if gate.try_fire(js_sys::Date::now()) {
            f(arg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn debounce_fires_once_after_quiet_period() {
        let mut state = DebounceState::new(300.0);
        let calls = [0.0, 10.0, 20.0, 30.0, 40.0];
        for &at in &calls {
            state.record(at);
        }
        let mut fired = 0;
        for &at in &calls {
            if state.fire_if_due(at + 300.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(state.fire_if_due(1_000.0), false);
    }

    #[test]
    fn debounce_deadline_tracks_the_last_call() {
        let mut state = DebounceState::new(300.0);
        state.record(0.0);
        state.record(250.0);
        assert_eq!(state.fire_if_due(300.0), false);
        assert_eq!(state.fire_if_due(550.0), true);
    }

    #[test]
    fn throttle_fires_on_leading_edge_once_per_window() {
        let mut gate = ThrottleGate::new(500.0);
        assert!(gate.try_fire(0.0));
        assert!(!gate.try_fire(100.0));
        assert!(!gate.try_fire(499.0));
        assert!(gate.try_fire(500.0));
        assert!(!gate.try_fire(999.0));
        assert!(gate.try_fire(1_000.0));
    }
}
