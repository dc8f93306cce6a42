//! Reactive mirror of a mounted chat view.
//!
//! A page holds one `RwSignal<ChatState>`; the `chatlog` view writes into it
//! through its change hook so components re-render on local sends and on
//! writes from other tabs alike.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chatlog::{Message, SessionStatus};

/// Page-local chat state.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Alias assigned at mount; empty until the client mounts the view.
    pub alias: String,
    pub messages: Vec<Message>,
    pub draft: String,
    /// Volunteer availability. Always `false` for students.
    pub online: bool,
}

impl ChatState {
    /// Whether the compose box holds sendable text.
    pub fn has_draft(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Volunteer session panel snapshot.
    pub fn session_status(&self) -> SessionStatus {
        SessionStatus {
            message_count: self.messages.len(),
            online: self.online,
            last_activity: self.messages.last().map(|m| m.timestamp),
        }
    }
}

/// Which page is rendering the log, which decides bubble alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Perspective {
    /// Right-align messages whose sender matches this alias.
    Student { alias: String },
    /// Right-align every volunteer message, whoever wrote it.
    Volunteer,
}

impl Perspective {
    pub fn is_right_aligned(&self, message: &Message) -> bool {
        match self {
            Self::Student { alias } => message.is_from(alias),
            Self::Volunteer => message.is_volunteer,
        }
    }
}
