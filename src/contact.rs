use std::{future::Future, time::Duration};

use futures::future::{abortable, AbortHandle, Aborted};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.as_str())]
    MissingField(FormField),
    #[error("Couldn't encode message")]
    Encode,
    #[error("Couldn't send message: {0}")]
    Transport(String),
    #[error("Submission cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated form, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Form contents plus `idle -> submitting -> submitted -> idle` status.
/// A failed send drops back to idle with `error` set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub error: Option<String>,
}

impl ContactState {
    pub fn is_locked(&self) -> bool {
        self.status != SubmitStatus::Idle
    }

    /// Starts a submission. Ignored while locked; a blank field stays idle
    /// and surfaces through `error`.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_locked() {
            return None;
        }
        let message = match self.form.validate() {
            Ok(message) => message,
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };
        self.status = SubmitStatus::Submitting;
        self.error = None;
        Some(message)
    }

    pub fn finish(&mut self, result: Result<(), ContactError>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                self.form = ContactForm::default();
                self.error = None;
            }
            Err(e) => {
                self.status = SubmitStatus::Idle;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn expire(&mut self) {
        if self.status == SubmitStatus::Submitted {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Submitting => "Sending...",
            SubmitStatus::Submitted => "Message Sent!",
        }
    }
}

/// Delivers a contact message somewhere.
pub trait Transport {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), ContactError>>;
}

pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Waits on the browser's timer queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        leptos::prelude::set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        async move {
            let _ = rx.await;
        }
    }
}

/// Stand-in transport: encodes the payload, waits, and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedTransport<S> {
    sleeper: S,
    delay: Duration,
}

impl<S: Sleeper> SimulatedTransport<S> {
    pub fn new(sleeper: S, delay: Duration) -> Self {
        Self { sleeper, delay }
    }
}

impl<S: Sleeper> Transport for SimulatedTransport<S> {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let payload = serde_json::to_string(message).map_err(|_| ContactError::Encode)?;
        log::debug!("simulating delivery of {} byte payload", payload.len());
        self.sleeper.sleep(self.delay).await;
        Ok(())
    }
}

/// Wraps delivery so the caller can drop it mid-flight via the returned handle.
pub fn submit<T: Transport>(
    transport: T,
    message: ContactMessage,
) -> (impl Future<Output = Result<(), ContactError>>, AbortHandle) {
    let (fut, handle) = abortable(async move { transport.send(&message).await });
    let fut = async move {
        match fut.await {
            Ok(res) => res,
            Err(Aborted) => Err(ContactError::Cancelled),
        }
    };
    (fut, handle)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use futures::executor::block_on;

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingSleeper {
        calls: Rc<RefCell<Vec<Duration>>>,
    }

    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.calls.borrow_mut().push(duration);
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        async fn send(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Transport("connection refused".to_string()))
        }
    }

    struct PendingTransport<'a>(&'a AtomicUsize);

    impl Transport for PendingTransport<'_> {
        async fn send(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            futures::future::pending::<()>().await;
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.form.set(FormField::Name, "Jane Doe");
        state.form.set(FormField::Email, "jane@example.com");
        state.form.set(FormField::Subject, "Project Inquiry");
        state.form.set(FormField::Message, "Hello there");
        state
    }

    #[test]
    fn test_validate_reports_first_missing() {
        let mut form = filled().form;
        form.set(FormField::Subject, "   ");
        form.set(FormField::Message, "");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(FormField::Subject))
        );
        assert_eq!(
            ContactError::MissingField(FormField::Email).to_string(),
            "email is required"
        );
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = filled();
        let sleeper = RecordingSleeper::default();
        let transport = SimulatedTransport::new(sleeper.clone(), Duration::from_millis(2000));

        let message = state.begin_submit().expect("idle form should submit");
        assert_eq!(state.status, SubmitStatus::Submitting);
        assert!(state.is_locked());
        assert_eq!(state.button_label(), "Sending...");

        // locked while submitting
        let before = state.clone();
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state, before);

        let (fut, _handle) = submit(transport, message);
        state.finish(block_on(fut));
        assert_eq!(*sleeper.calls.borrow(), vec![Duration::from_millis(2000)]);
        assert_eq!(state.status, SubmitStatus::Submitted);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.button_label(), "Message Sent!");

        // locked while submitted too
        let before = state.clone();
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state, before);

        state.expire();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert!(!state.is_locked());
    }

    #[test]
    fn test_incomplete_form_is_not_submitted() {
        let mut state = filled();
        state.form.set(FormField::Email, "");
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.error.as_deref(), Some("email is required"));
    }

    #[test]
    fn test_whitespace_field_reports_error() {
        // `required` accepts "   ", so the rejection has to be visible here
        let mut state = filled();
        state.form.set(FormField::Subject, "   ");
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.error.as_deref(), Some("subject is required"));
        assert_eq!(state.form.subject, "   ");

        state.form.set(FormField::Subject, "Project Inquiry");
        assert!(state.begin_submit().is_some());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_transport_failure_returns_to_idle() {
        let mut state = filled();
        let message = state.begin_submit().unwrap();
        let (fut, _handle) = submit(FailingTransport, message);
        state.finish(block_on(fut));
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(
            state.error.as_deref(),
            Some("Couldn't send message: connection refused")
        );
        assert_eq!(state.form.name, "Jane Doe");

        // retry clears the error
        assert!(state.begin_submit().is_some());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_abort_drops_in_flight_delivery() {
        let delivered = AtomicUsize::new(0);
        let mut state = filled();
        let message = state.begin_submit().unwrap();
        let (fut, handle) = submit(PendingTransport(&delivered), message);
        handle.abort();
        assert_eq!(block_on(fut), Err(ContactError::Cancelled));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_owner_cleanup_cancels_submission() {
        use leptos::prelude::{on_cleanup, Owner};

        let delivered = AtomicUsize::new(0);
        let message = filled().begin_submit().unwrap();
        let (fut, handle) = submit(PendingTransport(&delivered), message);

        let owner = Owner::new();
        owner.with(|| on_cleanup(move || handle.abort()));
        owner.cleanup();

        assert_eq!(block_on(fut), Err(ContactError::Cancelled));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let mut state = filled();
        state.finish(Ok(()));
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form.name, "Jane Doe");
        state.expire();
        assert_eq!(state.status, SubmitStatus::Idle);
    }
}
