//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; the page owns listener setup and
//! delegates rendering to `components`.

pub mod home;
