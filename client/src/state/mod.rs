//! Page state slices owned by the controller.
//!
//! DESIGN
//! ======
//! Each slice is plain data with small update methods and no browser
//! dependency, so the whole page can be exercised in unit tests.

pub mod contact;
pub mod menu;
pub mod notification;
pub mod scroll;
pub mod shortcuts;
pub mod skills;
pub mod theme;
pub mod typing;
