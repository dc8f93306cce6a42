//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable without a browser.

pub mod rng;
pub mod session;
pub mod storage;
pub mod clock;
