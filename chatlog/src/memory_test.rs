use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<Option<String>>>>, ChangeHandler) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handler: ChangeHandler = Box::new(move |raw| sink.borrow_mut().push(raw.map(str::to_owned)));
    (seen, handler)
}

// =============================================================
// Read / write
// =============================================================

#[test]
fn read_absent_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.context().read("k").unwrap(), None);
}

#[test]
fn contexts_share_values() {
    let store = MemoryStore::new();
    let a = store.context();
    let b = store.context();
    a.write("k", "v1").unwrap();
    assert_eq!(b.read("k").unwrap().as_deref(), Some("v1"));
    assert_eq!(store.raw("k").as_deref(), Some("v1"));
}

#[test]
fn unavailable_store_rejects_reads_and_writes() {
    let store = MemoryStore::new();
    let ctx = store.context();
    store.set_unavailable(true);
    assert_eq!(ctx.read("k"), Err(StoreError::Unavailable));
    assert_eq!(ctx.write("k", "v"), Err(StoreError::Unavailable));
    assert_eq!(store.raw("k"), None);
}

#[test]
fn quota_counts_other_entries_and_keeps_previous_value() {
    let store = MemoryStore::new();
    let ctx = store.context();
    store.set_quota(Some(10));
    ctx.write("a", "1234").unwrap();
    // "a"+"1234" = 5 bytes used; "k"+"12345" = 6 more exceeds 10.
    assert_eq!(ctx.write("k", "12345"), Err(StoreError::QuotaExceeded { bytes: 5 }));
    ctx.write("a", "123456789").unwrap();
    assert_eq!(ctx.read("a").unwrap().as_deref(), Some("123456789"));
}

// =============================================================
// Change feed
// =============================================================

#[test]
fn writer_context_is_not_notified() {
    let store = MemoryStore::new();
    let a = store.context();
    let b = store.context();
    let (seen_a, handler_a) = recorder();
    let (seen_b, handler_b) = recorder();
    let _sa = a.on_remote_change("k", handler_a);
    let _sb = b.on_remote_change("k", handler_b);

    a.write("k", "v").unwrap();

    assert!(seen_a.borrow().is_empty());
    assert_eq!(*seen_b.borrow(), vec![Some("v".to_owned())]);
}

#[test]
fn other_keys_are_filtered() {
    let store = MemoryStore::new();
    let a = store.context();
    let b = store.context();
    let (seen, handler) = recorder();
    let _sub = b.on_remote_change("k", handler);
    a.write("other", "v").unwrap();
    assert!(seen.borrow().is_empty());
}

#[test]
fn out_of_band_mutations_notify_everyone() {
    let store = MemoryStore::new();
    let a = store.context();
    let (seen, handler) = recorder();
    let _sub = a.on_remote_change("k", handler);
    store.put_raw("k", "garbage");
    store.clear("k");
    assert_eq!(*seen.borrow(), vec![Some("garbage".to_owned()), None]);
}

#[test]
fn released_subscription_stops_delivery() {
    let store = MemoryStore::new();
    let a = store.context();
    let b = store.context();
    let (seen, handler) = recorder();
    let sub = b.on_remote_change("k", handler);
    assert_eq!(store.subscriber_count(), 1);
    sub.release();
    assert_eq!(store.subscriber_count(), 0);
    a.write("k", "v").unwrap();
    assert!(seen.borrow().is_empty());
}

#[test]
fn handler_may_write_during_delivery() {
    let store = MemoryStore::new();
    let a = store.context();
    let b = store.context();
    let echo = b.clone();
    let _sub = b.on_remote_change(
        "k",
        Box::new(move |raw| {
            if raw == Some("ping") {
                echo.write("reply", "pong").unwrap();
            }
        }),
    );
    a.write("k", "ping").unwrap();
    assert_eq!(store.raw("reply").as_deref(), Some("pong"));
}

#[test]
fn subscription_outliving_store_releases_quietly() {
    let sub = {
        let store = MemoryStore::new();
        let ctx = store.context();
        ctx.on_remote_change("k", Box::new(|_| {}))
    };
    sub.release();
}
