//! Contact form state for one mounted contact page.
//!
//! A successful submit shows the acknowledgement for a fixed window and then
//! clears the form. The pending clear belongs to the session: `teardown`
//! cancels it, so it can never reach a later page's form.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use super::form::{ContactForm, Field, Submission};
use super::schedule::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Acknowledged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    MissingFields(Vec<Field>),
    AlreadyAcknowledged,
    TornDown,
}

struct Inner<H> {
    form: ContactForm,
    phase: Phase,
    pending_reset: Option<H>,
    torn_down: bool,
}

pub struct ContactSession<S: Scheduler> {
    inner: Rc<RefCell<Inner<S::Handle>>>,
    scheduler: S,
    ack_window_ms: u32,
    notify: Rc<dyn Fn()>,
}

impl<S: Scheduler + Clone> Clone for ContactSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            scheduler: self.scheduler.clone(),
            ack_window_ms: self.ack_window_ms,
            notify: self.notify.clone(),
        }
    }
}

impl<S> ContactSession<S>
where
    S: Scheduler,
    S::Handle: 'static,
{
    /// `notify` runs after every state change so the view can re-render.
    pub fn new(scheduler: S, ack_window_ms: u32, notify: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                form: ContactForm::default(),
                phase: Phase::Editing,
                pending_reset: None,
                torn_down: false,
            })),
            scheduler,
            ack_window_ms,
            notify: Rc::new(notify),
        }
    }

    pub fn form(&self) -> ContactForm {
        self.inner.borrow().form.clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase
    }

    /// Edits are ignored while the acknowledgement is showing and after teardown.
    pub fn update(&self, field: Field, value: String) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down || inner.phase == Phase::Acknowledged {
                return;
            }
            inner.form.set(field, value);
        }
        (self.notify)();
    }

    pub fn submit(&self) -> Result<Submission, SubmitRejected> {
        let submission = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                return Err(SubmitRejected::TornDown);
            }
            if inner.phase == Phase::Acknowledged {
                return Err(SubmitRejected::AlreadyAcknowledged);
            }
            let missing = inner.form.missing_required();
            if !missing.is_empty() {
                warn!("Contact form missing required fields: {:?}", missing);
                return Err(SubmitRejected::MissingFields(missing));
            }
            inner.phase = Phase::Acknowledged;
            inner.form.submission()
        };

        match serde_json::to_string(&submission) {
            Ok(json) => info!("Form submitted: {}", json),
            Err(e) => warn!("Form submitted, could not encode fields: {}", e),
        }

        let handle = self.scheduler.schedule(self.ack_window_ms, self.reset_task());
        self.inner.borrow_mut().pending_reset = Some(handle);
        (self.notify)();
        Ok(submission)
    }

    fn reset_task(&self) -> Box<dyn FnOnce()> {
        let inner = Rc::downgrade(&self.inner);
        let notify = self.notify.clone();
        Box::new(move || {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let fired = {
                let mut inner = inner.borrow_mut();
                if inner.torn_down {
                    return;
                }
                inner.form = ContactForm::default();
                inner.phase = Phase::Editing;
                inner.pending_reset.take()
            };
            drop(fired);
            debug!("Contact form cleared after acknowledgement");
            notify();
        })
    }

    /// Cancels any pending reset and disables the session. Idempotent.
    pub fn teardown(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                return;
            }
            inner.torn_down = true;
            inner.pending_reset.take()
        };
        if pending.is_some() {
            debug!("Cancelled pending contact form reset");
        }
    }
}
