//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `relay` talks to the third-party mail relay and `types` defines the
//! payload it accepts.

pub mod relay;
pub mod types;
