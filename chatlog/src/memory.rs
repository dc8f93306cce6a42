//! In-process store standing in for one browser profile.
//!
//! A [`MemoryStore`] is the shared hub; each [`MemoryContext`] plays one
//! execution context (a tab). A write through one context notifies handlers
//! registered through every *other* context, mirroring how the browser
//! `storage` event skips the document that made the change. Out-of-band
//! mutations ([`MemoryStore::clear`], [`MemoryStore::put_raw`]) notify all
//! contexts.
//!
//! Handlers are snapshotted before delivery, so a handler may register,
//! release, or write without re-entrancy panics.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::store::{ChangeFeed, ChangeHandler, LogStore, StoreError, Subscription};

type SharedHandler = Rc<dyn Fn(Option<&str>)>;

struct Registration {
    id: u64,
    context: u64,
    key: String,
    handler: SharedHandler,
}

#[derive(Default)]
struct Hub {
    values: HashMap<String, String>,
    registrations: Vec<Registration>,
    next_registration: u64,
    next_context: u64,
    quota: Option<usize>,
    unavailable: bool,
}

impl Hub {
    /// Bytes held by every entry except `key`.
    fn used_excluding(&self, key: &str) -> usize {
        self.values
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn handlers_for(&self, key: &str, origin: Option<u64>) -> Vec<SharedHandler> {
        self.registrations
            .iter()
            .filter(|r| r.key == key && Some(r.context) != origin)
            .map(|r| Rc::clone(&r.handler))
            .collect()
    }
}

/// Shared in-memory storage hub.
#[derive(Clone, Default)]
pub struct MemoryStore {
    hub: Rc<RefCell<Hub>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new execution context to this hub.
    #[must_use]
    pub fn context(&self) -> MemoryContext {
        let mut hub = self.hub.borrow_mut();
        let id = hub.next_context;
        hub.next_context += 1;
        MemoryContext { store: self.clone(), id }
    }

    /// Limit total stored bytes (keys plus values). `None` removes the limit.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.hub.borrow_mut().quota = bytes;
    }

    /// Make every read and write fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.hub.borrow_mut().unavailable = unavailable;
    }

    /// Current raw value under `key`, bypassing availability checks.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.hub.borrow().values.get(key).cloned()
    }

    /// Replace `key` out-of-band and notify every context.
    pub fn put_raw(&self, key: &str, raw: &str) {
        self.hub.borrow_mut().values.insert(key.to_owned(), raw.to_owned());
        self.notify(key, Some(raw), None);
    }

    /// Remove `key` out-of-band and notify every context.
    pub fn clear(&self, key: &str) {
        self.hub.borrow_mut().values.remove(key);
        self.notify(key, None, None);
    }

    /// Number of live registrations across all contexts.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.hub.borrow().registrations.len()
    }

    fn notify(&self, key: &str, value: Option<&str>, origin: Option<u64>) {
        let handlers = self.hub.borrow().handlers_for(key, origin);
        for handler in handlers {
            handler(value);
        }
    }
}

/// One execution context attached to a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryContext {
    store: MemoryStore,
    id: u64,
}

impl MemoryContext {
    /// The hub this context belongs to.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

impl LogStore for MemoryContext {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let hub = self.store.hub.borrow();
        if hub.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(hub.values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        {
            let mut hub = self.store.hub.borrow_mut();
            if hub.unavailable {
                return Err(StoreError::Unavailable);
            }
            if let Some(quota) = hub.quota {
                if hub.used_excluding(key) + key.len() + value.len() > quota {
                    return Err(StoreError::QuotaExceeded { bytes: value.len() });
                }
            }
            hub.values.insert(key.to_owned(), value.to_owned());
        }
        self.store.notify(key, Some(value), Some(self.id));
        Ok(())
    }
}

impl ChangeFeed for MemoryContext {
    fn on_remote_change(&self, key: &str, handler: ChangeHandler) -> Subscription {
        let id = {
            let mut hub = self.store.hub.borrow_mut();
            let id = hub.next_registration;
            hub.next_registration += 1;
            hub.registrations.push(Registration {
                id,
                context: self.id,
                key: key.to_owned(),
                handler: Rc::from(handler),
            });
            id
        };
        let hub: Weak<RefCell<Hub>> = Rc::downgrade(&self.store.hub);
        Subscription::new(move || {
            if let Some(hub) = hub.upgrade() {
                hub.borrow_mut().registrations.retain(|r| r.id != id);
            }
        })
    }
}
