use folio_core::{Debounce, Gate, Throttle};
use gloo_timers::callback::Timeout;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Wrap `f` so it runs at most once per `limit_ms`, with one trailing run
/// for calls that arrive during the cooldown.
pub fn throttle(limit_ms: u32, f: impl FnMut() + 'static) -> impl FnMut() + 'static {
    let gate = Rc::new(RefCell::new(Throttle::new(Duration::from_millis(limit_ms.into()))));
    let f = Rc::new(RefCell::new(f));
    let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let decision = gate.borrow_mut().call(Instant::now());
        match decision {
            Gate::Run => (f.borrow_mut())(),
            Gate::Defer(delay) => {
                let gate = gate.clone();
                let f = f.clone();
                let timer = Timeout::new(delay.as_millis() as u32, move || {
                    if gate.borrow_mut().flush(Instant::now()) {
                        (f.borrow_mut())();
                    }
                });
                *trailing.borrow_mut() = Some(timer);
            }
            Gate::Skip => {}
        }
    }
}

/// Wrap `f` so it runs once `wait_ms` after the last call.
pub fn debounce(wait_ms: u32, f: impl FnMut() + 'static) -> impl FnMut() + 'static {
    let state = Rc::new(RefCell::new(Debounce::new(Duration::from_millis(wait_ms.into()))));
    let f = Rc::new(RefCell::new(f));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let wait = state.borrow_mut().call(Instant::now());
        let state = state.clone();
        let f = f.clone();
        // Replacing the previous timeout cancels it. The extra millisecond
        // covers timers that fire a hair before the deadline.
        *pending.borrow_mut() = Some(Timeout::new(wait.as_millis() as u32 + 1, move || {
            if state.borrow_mut().fire(Instant::now()) {
                (f.borrow_mut())();
            }
        }));
    }
}
