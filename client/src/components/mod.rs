//! Page sections and floating controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component reads the shared `RwSignal<PageCore>` from context and
//! reports user input through `util::dispatch`. None of them touch the DOM
//! directly except the skills observer.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod notification;
pub mod skills;
