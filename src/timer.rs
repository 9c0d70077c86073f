use std::time::Duration;

/// Schedules one-shot callbacks. Dropping the returned handle before the
/// delay elapses cancels the callback.
pub trait Scheduler {
    type Handle;

    fn schedule<F>(&self, delay: Duration, action: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn callbacks_fire_in_due_order() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let handles: Vec<_> = [300u64, 0, 150]
            .into_iter()
            .map(|millis| {
                let fired = fired.clone();
                scheduler.schedule(Duration::from_millis(millis), move || {
                    fired.borrow_mut().push(millis)
                })
            })
            .collect();

        scheduler.advance_ms(200);
        assert_eq!(*fired.borrow(), vec![0, 150]);

        scheduler.advance_ms(100);
        assert_eq!(*fired.borrow(), vec![0, 150, 300]);
        assert_eq!(scheduler.pending(), 0);
        drop(handles);
    }

    #[test]
    fn dropping_handle_cancels_callback() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(false));

        let handle = {
            let fired = fired.clone();
            scheduler.schedule(Duration::from_millis(50), move || *fired.borrow_mut() = true)
        };
        drop(handle);
        scheduler.advance_ms(1_000);

        assert!(!*fired.borrow());
        assert_eq!(scheduler.pending(), 0);
    }
}
