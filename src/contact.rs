use std::{cell::Cell, rc::Rc, time::Duration};

use log::info;

use crate::timer::Scheduler;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Ready,
    Sent,
}

impl ContactStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Ready => "Send Message",
            Self::Sent => "Message Sent! ✅",
        }
    }

    pub fn disabled(self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Local-only contact form. Submitting shows a confirmation that reverts
/// after a fixed delay; nothing leaves the page.
pub struct ContactForm<S: Scheduler> {
    revert_after: Duration,
    status: Rc<Cell<ContactStatus>>,
    notify: Rc<dyn Fn(ContactStatus)>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> ContactForm<S> {
    pub fn new(revert_after: Duration, notify: impl Fn(ContactStatus) + 'static) -> Self {
        Self {
            revert_after,
            status: Rc::new(Cell::new(ContactStatus::Ready)),
            notify: Rc::new(notify),
            pending: None,
        }
    }

    pub fn status(&self) -> ContactStatus {
        self.status.get()
    }

    /// Returns `false` while a confirmation is already showing.
    pub fn submit(&mut self, scheduler: &S) -> bool {
        if self.status().disabled() {
            return false;
        }

        info!("contact form submitted; confirmation shown locally");
        self.set(ContactStatus::Sent);

        let status = self.status.clone();
        let notify = self.notify.clone();
        self.pending = Some(scheduler.schedule(self.revert_after, move || {
            status.set(ContactStatus::Ready);
            notify(ContactStatus::Ready);
        }));
        true
    }

    pub fn teardown(&mut self) {
        self.pending = None;
    }

    fn set(&self, status: ContactStatus) {
        self.status.set(status);
        (self.notify)(status);
    }
}
