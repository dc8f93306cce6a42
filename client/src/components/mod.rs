//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surfaces shared by the student and volunteer
//! pages. They read page state through props and report user intent through
//! callbacks; the page owns the mounted `chatlog` view.

pub mod composer;
pub mod message_list;
pub mod quick_responses;
pub mod session_panel;
pub mod toaster;
