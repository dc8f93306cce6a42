//! The shared, ordered, append-only message log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every participant view reads and writes the same key. The stored value is
//! replaced whole on each append; there is no incremental write and no
//! version check.
//!
//! TRADE-OFFS
//! ==========
//! Reads fail soft: an absent key, an unreadable store, or a malformed value
//! all read as an empty log. Writes fail loud so the sending view can tell
//! its user.

#[cfg(test)]
#[path = "message_log_test.rs"]
mod message_log_test;

use crate::clock::Clock;
use crate::message::{Message, decode_log, encode_log};
use crate::store::{ChangeFeed, LogStore, StoreError, Subscription};

/// Storage key the web client and CLI share by default.
pub const DEFAULT_KEY: &str = "openMindMessages";

/// Error returned by log mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The store rejected the write; nothing was persisted or broadcast.
    #[error("failed to write message log: {0}")]
    Write(#[from] StoreError),
    /// The log could not be serialized.
    #[error("failed to encode message log: {0}")]
    Encode(String),
}

/// Message log over a [`LogStore`] under one key.
#[derive(Clone, Debug)]
pub struct MessageLog<S> {
    store: S,
    key: String,
}

impl<S: LogStore> MessageLog<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Log under [`DEFAULT_KEY`].
    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_KEY)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current log, or an empty one when nothing readable is stored.
    #[must_use]
    pub fn load(&self) -> Vec<Message> {
        match self.store.read(&self.key) {
            Ok(Some(raw)) => decode_or_empty(&self.key, &raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("message log {}: read failed, treating as empty: {err}", self.key);
                Vec::new()
            }
        }
    }

    /// Seed the welcome message when the log is empty; no-op otherwise.
    ///
    /// Returns the log as it stands after the call.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] when the seed cannot be written.
    pub fn initialize_if_empty(&self, clock: &dyn Clock) -> Result<Vec<Message>, LogError> {
        let current = self.load();
        if !current.is_empty() {
            return Ok(current);
        }
        let seeded = vec![Message::welcome(clock.now())];
        self.persist(&seeded)?;
        log::debug!("message log {}: seeded welcome message", self.key);
        Ok(seeded)
    }

    /// Persist `load() ++ [message]` as one write and return the new log.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] when the write fails; the stored log is unchanged.
    pub fn append(&self, message: Message) -> Result<Vec<Message>, LogError> {
        let mut next = self.load();
        next.push(message);
        self.persist(&next)?;
        Ok(next)
    }

    fn persist(&self, messages: &[Message]) -> Result<(), LogError> {
        let raw = encode_log(messages).map_err(|e| LogError::Encode(e.to_string()))?;
        self.store.write(&self.key, &raw).inspect_err(|err| {
            log::warn!("message log {}: write of {} messages failed: {err}", self.key, messages.len());
        })?;
        Ok(())
    }
}

impl<S: LogStore + ChangeFeed> MessageLog<S> {
    /// Call `callback` with the decoded log whenever another context writes it.
    ///
    /// A cleared or malformed value delivers an empty log.
    pub fn subscribe(&self, callback: impl Fn(Vec<Message>) + 'static) -> Subscription {
        let key = self.key.clone();
        self.store.on_remote_change(
            &self.key,
            Box::new(move |raw: Option<&str>| {
                let messages = raw.map(|raw| decode_or_empty(&key, raw)).unwrap_or_default();
                callback(messages);
            }),
        )
    }
}

fn decode_or_empty(key: &str, raw: &str) -> Vec<Message> {
    match decode_log(raw) {
        Ok(messages) => messages,
        Err(err) => {
            log::warn!("message log {key}: malformed value, treating as empty: {err}");
            Vec::new()
        }
    }
}
