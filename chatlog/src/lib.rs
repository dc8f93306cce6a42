//! Shared message log for the Open Mind support chat.
//!
//! This crate is UI-framework agnostic. It owns the persisted message record,
//! the read-modify-write log over an injectable key/value store, the
//! cross-context change feed seam, and the student/volunteer view state
//! machines that the `client` pages and the `cli` drive.
//!
//! CONSISTENCY
//! ===========
//! The log is one whole value under one key. Appends read the current value,
//! push, and write the full sequence back. Two contexts appending at once race
//! and the last write wins; that is the accepted consistency model.

pub mod alias;
pub mod clock;
pub mod memory;
pub mod message;
pub mod message_log;
pub mod store;
pub mod view;

pub use alias::{student_alias, volunteer_alias};
pub use clock::{Clock, SteppingClock, SystemClock};
pub use memory::{MemoryContext, MemoryStore};
pub use message::{Message, SYSTEM_SENDER, WELCOME_TEXT};
pub use message_log::{DEFAULT_KEY, LogError, MessageLog};
pub use store::{ChangeFeed, ChangeHandler, LogStore, StoreError, Subscription};
pub use view::{QUICK_RESPONSES, SendError, SendOutcome, SessionStatus, StudentView, VolunteerView};
