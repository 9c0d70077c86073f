use std::{cell::Cell, rc::Rc, time::Duration};

use crate::timer::Scheduler;

/// Delay between consecutive items revealed as a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    interval: Duration,
}

impl Stagger {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn delay_for(self, index: usize) -> Duration {
        self.interval
            .checked_mul(u32::try_from(index).unwrap_or(u32::MAX))
            .unwrap_or(Duration::MAX)
    }
}

/// One list item that reveals `index * interval` after its parent does.
///
/// The pending timer is owned here; dropping the item or calling
/// [`StaggeredItem::teardown`] cancels it.
pub struct StaggeredItem<S: Scheduler> {
    index: usize,
    stagger: Stagger,
    revealed: Rc<Cell<bool>>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> StaggeredItem<S> {
    pub fn new(index: usize, stagger: Stagger) -> Self {
        Self {
            index,
            stagger,
            revealed: Rc::new(Cell::new(false)),
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reacts to the parent's reveal signal. `on_reveal` runs once, when the
    /// item's delay has elapsed.
    pub fn parent_visibility_changed<F>(&mut self, visible: bool, scheduler: &S, on_reveal: F)
    where
        F: FnOnce() + 'static,
    {
        if !visible {
            self.pending = None;
            return;
        }
        if self.is_revealed() || self.is_pending() {
            return;
        }

        let revealed = self.revealed.clone();
        let delay = self.stagger.delay_for(self.index);
        self.pending = Some(scheduler.schedule(delay, move || {
            revealed.set(true);
            on_reveal();
        }));
    }

    pub fn teardown(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use std::cell::RefCell;

    fn stagger_ms(millis: u64) -> Stagger {
        Stagger::new(Duration::from_millis(millis))
    }

    #[test]
    fn delays_grow_linearly_with_index() {
        let stagger = stagger_ms(150);

        assert_eq!(stagger.delay_for(0), Duration::ZERO);
        assert_eq!(stagger.delay_for(3), Duration::from_millis(450));
    }

    #[test]
    fn four_cards_reveal_at_150ms_steps_in_index_order() {
        let scheduler = ManualScheduler::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut cards: Vec<StaggeredItem<ManualScheduler>> =
            (0..4).map(|index| StaggeredItem::new(index, stagger_ms(150))).collect();

        for card in cards.iter_mut() {
            let order = order.clone();
            let scheduler_clock = scheduler.clone();
            let index = card.index();
            card.parent_visibility_changed(true, &scheduler, move || {
                order.borrow_mut().push((index, scheduler_clock.now()));
            });
        }
        assert!(cards.iter().all(|card| !card.is_revealed()));

        scheduler.advance_ms(0);
        assert!(cards[0].is_revealed());
        assert!(!cards[1].is_revealed());

        scheduler.advance_ms(449);
        assert!(!cards[3].is_revealed());
        scheduler.advance_ms(1);

        assert!(cards.iter().all(StaggeredItem::is_revealed));
        let expected: Vec<(usize, Duration)> = (0..4)
            .map(|index| (index, Duration::from_millis(150 * index as u64)))
            .collect();
        assert_eq!(*order.borrow(), expected);
    }

    #[test]
    fn item_is_already_revealed_when_callback_runs() {
        let scheduler = ManualScheduler::default();
        let item: Rc<RefCell<StaggeredItem<ManualScheduler>>> =
            Rc::new(RefCell::new(StaggeredItem::new(1, stagger_ms(150))));
        let seen = Rc::new(Cell::new(None));
        {
            let observer = Rc::downgrade(&item);
            let seen = seen.clone();
            item.borrow_mut().parent_visibility_changed(true, &scheduler, move || {
                seen.set(observer.upgrade().map(|item| item.borrow().is_revealed()));
            });
        }

        scheduler.advance_ms(150);

        assert_eq!(seen.get(), Some(true));
        assert!(item.borrow().is_revealed());
    }

    #[test]
    fn hidden_parent_schedules_nothing() {
        let scheduler = ManualScheduler::default();
        let mut item = StaggeredItem::new(2, stagger_ms(150));

        item.parent_visibility_changed(false, &scheduler, || {});

        assert!(!item.is_pending());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn repeated_visible_signal_keeps_single_timer() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let mut item = StaggeredItem::new(1, stagger_ms(150));

        for _ in 0..3 {
            let fired = fired.clone();
            item.parent_visibility_changed(true, &scheduler, move || fired.set(fired.get() + 1));
        }
        scheduler.advance_ms(1_000);

        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn teardown_before_delay_prevents_mutation() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(false));
        let mut item = StaggeredItem::new(3, stagger_ms(150));
        {
            let fired = fired.clone();
            item.parent_visibility_changed(true, &scheduler, move || fired.set(true));
        }

        scheduler.advance_ms(300);
        item.teardown();
        scheduler.advance_ms(1_000);

        assert!(!fired.get());
        assert!(!item.is_revealed());
    }

    #[test]
    fn dropping_item_cancels_pending_reveal() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(false));
        let mut item = StaggeredItem::new(1, stagger_ms(150));
        {
            let fired = fired.clone();
            item.parent_visibility_changed(true, &scheduler, move || fired.set(true));
        }

        drop(item);
        scheduler.advance_ms(1_000);

        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }
}
