//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (mounting the `chatlog` view and
//! mapping its results to notices) and delegates rendering details to
//! `components`.

pub mod chat;
pub mod home;
pub mod volunteer;
