//! Browser glue shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the controller
//! and components to improve reuse and testability.

pub mod dark_mode;
pub mod dispatch;
pub mod dom;
pub mod resume;
