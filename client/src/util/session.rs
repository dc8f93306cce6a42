//! Page-scoped holder for a mounted `chatlog` view.
//!
//! DESIGN
//! ======
//! Views are `!Send` (they own `Rc` state and JS closures) while Leptos event
//! handlers must be `Send`. `SessionSlot` is a `Copy` handle that stores the
//! view in a thread-local arena cell in the browser. On the server the slot
//! stays empty: views are only mounted client-side, after hydration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::marker::PhantomData;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// `Copy` handle to an optional page-owned value.
pub struct SessionSlot<V: 'static> {
    #[cfg(feature = "hydrate")]
    inner: StoredValue<Option<V>, LocalStorage>,
    marker: PhantomData<fn() -> V>,
}

impl<V: 'static> Clone for SessionSlot<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for SessionSlot<V> {}

impl<V: 'static> Default for SessionSlot<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: 'static> SessionSlot<V> {
    /// An empty slot owned by the current reactive owner.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            inner: StoredValue::new_local(None),
            marker: PhantomData,
        }
    }

    /// Store `value`, dropping any previous one.
    pub fn fill(&self, value: V) {
        #[cfg(feature = "hydrate")]
        {
            let previous = self.inner.try_update_value(|slot| slot.replace(value)).flatten();
            drop(previous);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(value);
        }
    }

    /// Run `f` against the stored value, if any.
    pub fn with_mut<U>(&self, f: impl FnOnce(&mut V) -> U) -> Option<U> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.try_update_value(|slot| slot.as_mut().map(f)).flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = f;
            None
        }
    }

    /// Read the stored value, if any.
    pub fn with<U>(&self, f: impl FnOnce(&V) -> U) -> Option<U> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.try_with_value(|slot| slot.as_ref().map(f)).flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = f;
            None
        }
    }

    /// Drop the stored value. Dropping a view releases its subscription.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let taken = self.inner.try_update_value(Option::take).flatten();
            drop(taken);
        }
    }

    pub fn is_filled(&self) -> bool {
        self.with(|_| ()).is_some()
    }
}
