//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `toast`) so components can depend on
//! small focused models. Both are plain structs held in `RwSignal`s; the chat
//! rules themselves live in `chatlog`.

pub mod chat;
pub mod toast;
