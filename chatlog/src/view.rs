//! Student and volunteer view state machines.
//!
//! ARCHITECTURE
//! ============
//! A view owns its local copy of the log, a per-mount alias, the compose-box
//! draft, and a live subscription to remote writes. Mounting seeds and loads
//! the log; dropping the view releases the subscription. The view replaces
//! its local copy with the appended sequence after its own sends, since the
//! change feed never echoes a context's own writes.
//!
//! UI adapters pass an `on_change` hook to mirror the local copy into their
//! reactive state; it fires after remote deliveries and after local sends.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::RefCell;
use std::rc::Rc;

use time::OffsetDateTime;

use crate::clock::Clock;
use crate::message::Message;
use crate::message_log::{LogError, MessageLog};
use crate::store::{ChangeFeed, LogStore, Subscription};

/// Canned volunteer replies, in display order.
pub const QUICK_RESPONSES: [&str; 5] = [
    "Entendo como você está se sentindo. Você não está sozinho(a) nisso.",
    "É normal sentir-se assim às vezes. Que tal conversarmos sobre o que está te preocupando?",
    "Você foi muito corajoso(a) ao compartilhar isso. Como posso te ajudar?",
    "Lembre-se: você é mais forte do que imagina. Vamos encontrar uma solução juntos.",
    "Seus sentimentos são válidos. Quer me contar mais sobre o que está acontecendo?",
];

/// Result of a send that passed validation or was silently skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was appended and local state now includes it.
    Sent(Message),
    /// Blank text; nothing was written.
    Ignored,
}

impl SendOutcome {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Volunteer send rejection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The volunteer has not gone online.
    #[error("volunteer must be online to send messages")]
    Offline,
    #[error(transparent)]
    Log(#[from] LogError),
}

/// Snapshot for the volunteer session panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub message_count: usize,
    pub online: bool,
    /// Timestamp of the last message in the log, if any.
    pub last_activity: Option<OffsetDateTime>,
}

impl SessionStatus {
    #[must_use]
    pub fn availability_label(&self) -> &'static str {
        if self.online { "Disponível para ajudar" } else { "Fora de serviço" }
    }
}

type ChangeHook = Rc<dyn Fn(&[Message])>;

struct Participant<S> {
    chat_log: MessageLog<S>,
    alias: String,
    clock: Box<dyn Clock>,
    messages: Rc<RefCell<Vec<Message>>>,
    on_change: ChangeHook,
    draft: String,
    subscription: Subscription,
}

impl<S: LogStore + ChangeFeed> Participant<S> {
    fn mount(chat_log: MessageLog<S>, alias: String, clock: Box<dyn Clock>, on_change: ChangeHook) -> Self {
        let initial = match chat_log.initialize_if_empty(clock.as_ref()) {
            Ok(messages) => messages,
            Err(err) => {
                log::warn!("{alias}: could not seed message log: {err}");
                chat_log.load()
            }
        };
        let messages = Rc::new(RefCell::new(initial));

        let sink = Rc::clone(&messages);
        let hook = Rc::clone(&on_change);
        let subscription = chat_log.subscribe(move |next| {
            sink.replace(next.clone());
            hook(next.as_slice());
        });

        Self { chat_log, alias, clock, messages, on_change, draft: String::new(), subscription }
    }

    fn append(&mut self, text: &str, as_volunteer: bool) -> Result<SendOutcome, LogError> {
        let at = self.clock.now();
        let message = if as_volunteer {
            Message::volunteer(text, &self.alias, at)
        } else {
            Message::student(text, &self.alias, at)
        };
        let next = self.chat_log.append(message.clone())?;
        self.messages.replace(next.clone());
        (self.on_change)(next.as_slice());
        Ok(SendOutcome::Sent(message))
    }

    fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// =============================================================================
// STUDENT
// =============================================================================

/// Student chat session.
pub struct StudentView<S> {
    inner: Participant<S>,
}

impl<S: LogStore + ChangeFeed> StudentView<S> {
    /// Seed if empty, load, and subscribe for the lifetime of the view.
    pub fn mount(chat_log: MessageLog<S>, alias: impl Into<String>, clock: impl Clock + 'static) -> Self {
        Self::mount_with(chat_log, alias, clock, |_| {})
    }

    /// [`StudentView::mount`] with a hook fired whenever local state changes.
    pub fn mount_with(
        chat_log: MessageLog<S>,
        alias: impl Into<String>,
        clock: impl Clock + 'static,
        on_change: impl Fn(&[Message]) + 'static,
    ) -> Self {
        Self { inner: Participant::mount(chat_log, alias.into(), Box::new(clock), Rc::new(on_change)) }
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.inner.alias
    }

    /// Local copy of the log.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.inner.messages()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.inner.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.inner.draft = text.into();
    }

    /// Append `text` as this student. Blank text is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] when the write fails; local state is unchanged.
    pub fn send(&mut self, text: &str) -> Result<SendOutcome, LogError> {
        if is_blank(text) {
            return Ok(SendOutcome::Ignored);
        }
        self.inner.append(text, false)
    }

    /// Send the draft, clearing it once the message is appended.
    ///
    /// # Errors
    ///
    /// Same as [`StudentView::send`]; the draft is kept on failure.
    pub fn send_draft(&mut self) -> Result<SendOutcome, LogError> {
        let text = self.inner.draft.clone();
        let outcome = self.send(&text)?;
        if outcome.is_sent() {
            self.inner.draft.clear();
        }
        Ok(outcome)
    }

    /// Whether `message` is attributed to this session (alias match).
    #[must_use]
    pub fn is_own(&self, message: &Message) -> bool {
        message.is_from(&self.inner.alias)
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.inner.subscription.is_active()
    }

    /// Tear the view down, releasing its subscription.
    pub fn unmount(self) {
        drop(self);
    }
}

// =============================================================================
// VOLUNTEER
// =============================================================================

/// Volunteer chat session. Starts offline.
pub struct VolunteerView<S> {
    inner: Participant<S>,
    online: bool,
}

impl<S: LogStore + ChangeFeed> VolunteerView<S> {
    /// Seed if empty, load, and subscribe for the lifetime of the view.
    pub fn mount(chat_log: MessageLog<S>, alias: impl Into<String>, clock: impl Clock + 'static) -> Self {
        Self::mount_with(chat_log, alias, clock, |_| {})
    }

    /// [`VolunteerView::mount`] with a hook fired whenever local state changes.
    pub fn mount_with(
        chat_log: MessageLog<S>,
        alias: impl Into<String>,
        clock: impl Clock + 'static,
        on_change: impl Fn(&[Message]) + 'static,
    ) -> Self {
        Self {
            inner: Participant::mount(chat_log, alias.into(), Box::new(clock), Rc::new(on_change)),
            online: false,
        }
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.inner.alias
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.inner.messages()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.inner.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.inner.draft = text.into();
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Flip the local online flag and return the new value. Not persisted.
    pub fn toggle_online(&mut self) -> bool {
        self.online = !self.online;
        self.online
    }

    /// Append `text` as this volunteer.
    ///
    /// Blank text is ignored before the online check.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Offline`] while offline, or [`SendError::Log`] when
    /// the write fails.
    pub fn send(&mut self, text: &str) -> Result<SendOutcome, SendError> {
        if is_blank(text) {
            return Ok(SendOutcome::Ignored);
        }
        if !self.online {
            return Err(SendError::Offline);
        }
        Ok(self.inner.append(text, true)?)
    }

    /// Send the draft, clearing it once the message is appended.
    ///
    /// # Errors
    ///
    /// Same as [`VolunteerView::send`]; the draft is kept on failure.
    pub fn send_draft(&mut self) -> Result<SendOutcome, SendError> {
        let text = self.inner.draft.clone();
        let outcome = self.send(&text)?;
        if outcome.is_sent() {
            self.inner.draft.clear();
        }
        Ok(outcome)
    }

    /// Copy a canned reply into the draft without sending.
    pub fn use_quick_response(&mut self, text: &str) {
        self.inner.draft = text.to_owned();
    }

    #[must_use]
    pub fn quick_responses() -> &'static [&'static str] {
        &QUICK_RESPONSES
    }

    /// Volunteer-style attribution, independent of which session wrote it.
    #[must_use]
    pub fn is_volunteer_style(message: &Message) -> bool {
        message.is_volunteer
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let messages = self.inner.messages.borrow();
        SessionStatus {
            message_count: messages.len(),
            online: self.online,
            last_activity: messages.last().map(|m| m.timestamp),
        }
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.inner.subscription.is_active()
    }

    /// Tear the view down, releasing its subscription.
    pub fn unmount(self) {
        drop(self);
    }
}
