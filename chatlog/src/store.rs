//! Storage and change-notification seams.
//!
//! DESIGN
//! ======
//! `LogStore` is a whole-value key/value store (browser `localStorage`, a
//! directory of files, or the in-memory hub). `ChangeFeed` delivers writes
//! made by *other* contexts; a context never hears its own writes, so the
//! writer must update its local copy itself.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::rc::Rc;

/// Error returned by a [`LogStore`] write or read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing storage cannot be reached at all.
    #[error("storage is unavailable")]
    Unavailable,
    /// The write would exceed the storage quota.
    #[error("storage quota exceeded writing {bytes} bytes")]
    QuotaExceeded { bytes: usize },
    /// Any other backend failure, with its description.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Whole-value key/value storage.
pub trait LogStore {
    /// Read the raw value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: LogStore + ?Sized> LogStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

impl<T: LogStore + ?Sized> LogStore for Rc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Callback receiving the raw new value of a key; `None` means cleared.
pub type ChangeHandler = Box<dyn Fn(Option<&str>)>;

/// Notifications about writes made by other contexts.
pub trait ChangeFeed {
    /// Register `handler` for remote changes to `key` until the returned
    /// subscription is released or dropped.
    fn on_remote_change(&self, key: &str, handler: ChangeHandler) -> Subscription;
}

impl<T: ChangeFeed + ?Sized> ChangeFeed for &T {
    fn on_remote_change(&self, key: &str, handler: ChangeHandler) -> Subscription {
        (**self).on_remote_change(key, handler)
    }
}

impl<T: ChangeFeed + ?Sized> ChangeFeed for Rc<T> {
    fn on_remote_change(&self, key: &str, handler: ChangeHandler) -> Subscription {
        (**self).on_remote_change(key, handler)
    }
}

/// Scoped registration with a [`ChangeFeed`].
///
/// Dropping the subscription unregisters the handler.
#[must_use = "dropping a subscription unregisters it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription that runs `release` exactly once when released or dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Subscription with nothing to release, for feeds that never deliver.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Whether the subscription still holds a registration.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Unregister now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
