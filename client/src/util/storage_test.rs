use super::*;

// =============================================================
// Event filtering
// =============================================================

#[test]
fn affects_key_matches_exact_key() {
    assert!(affects_key(Some("openMindMessages"), "openMindMessages"));
    assert!(!affects_key(Some("gauntlet_week_1_dark"), "openMindMessages"));
}

#[test]
fn affects_key_treats_clear_as_change() {
    assert!(affects_key(None, "openMindMessages"));
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn quota_names_from_both_engines() {
    assert!(is_quota_exceeded("QuotaExceededError"));
    assert!(is_quota_exceeded("NS_ERROR_DOM_QUOTA_REACHED"));
    assert!(!is_quota_exceeded("NotFoundError"));
}

#[test]
fn classify_quota_carries_size() {
    assert_eq!(classify("QuotaExceededError", "full", 42), StoreError::QuotaExceeded { bytes: 42 });
}

#[test]
fn classify_security_error_as_unavailable() {
    assert_eq!(classify("SecurityError", "denied", 1), StoreError::Unavailable);
}

#[test]
fn classify_other_errors_as_backend() {
    assert_eq!(classify("InvalidStateError", "boom", 1), StoreError::Backend("InvalidStateError: boom".to_owned()));
}

// =============================================================
// Native fallback
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_build_reports_unavailable() {
    assert_eq!(BrowserStore.read("openMindMessages"), Err(StoreError::Unavailable));
    assert_eq!(BrowserStore.write("openMindMessages", "[]"), Err(StoreError::Unavailable));
    assert!(!BrowserStore.on_remote_change("openMindMessages", Box::new(|_| {})).is_active());
}
