//! Browser `localStorage` backing for the shared message log.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStore` is the production [`LogStore`]/[`ChangeFeed`] pair. Every tab
//! on the same origin shares one `localStorage`; the browser fires a `storage`
//! event in every *other* tab after a write, which is exactly the
//! never-echo-to-writer contract `chatlog` expects from a change feed.
//!
//! Outside the `hydrate` feature (SSR and native tests) storage is reported
//! unavailable and subscriptions are detached.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use chatlog::{ChangeFeed, ChangeHandler, LogStore, StoreError, Subscription};

/// Handle to `window.localStorage`. Holds no state of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl LogStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|err| dom_error(&err, 0))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|err| dom_error(&err, value.len()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

impl ChangeFeed for BrowserStore {
    fn on_remote_change(&self, key: &str, handler: ChangeHandler) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            listen(key.to_owned(), handler)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, handler);
            Subscription::detached()
        }
    }
}

/// Browsers disagree on the name of the quota error.
pub fn is_quota_exceeded(name: &str) -> bool {
    matches!(name, "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED")
}

/// Whether a `storage` event with `event_key` concerns `key`. A missing key
/// means the whole store was cleared.
pub fn affects_key(event_key: Option<&str>, key: &str) -> bool {
    event_key.map_or(true, |k| k == key)
}

/// Map a DOM exception name and message onto the store error taxonomy.
pub fn classify(name: &str, message: &str, bytes: usize) -> StoreError {
    if is_quota_exceeded(name) {
        StoreError::QuotaExceeded { bytes }
    } else if name == "SecurityError" {
        StoreError::Unavailable
    } else {
        StoreError::Backend(format!("{name}: {message}"))
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn dom_error(err: &wasm_bindgen::JsValue, bytes: usize) -> StoreError {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) => classify(&ex.name(), &ex.message(), bytes),
        None => StoreError::Backend(format!("{err:?}")),
    }
}

#[cfg(feature = "hydrate")]
fn listen(key: String, handler: ChangeHandler) -> Subscription {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return Subscription::detached();
    };

    let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
        if affects_key(event.key().as_deref(), &key) {
            handler(event.new_value().as_deref());
        }
    });

    if let Err(err) = window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref()) {
        log::warn!("storage: listener not installed: {err:?}");
        return Subscription::detached();
    }

    Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
    })
}
