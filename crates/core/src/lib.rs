#![forbid(unsafe_code)]
//! Domain model for the Basel guide: quiz content and sessions, progress,
//! unlock rules, places and the user profile.

pub mod catalog;
pub mod model;
pub mod share;
pub mod unlock;

pub use unlock::{UnlockState, all_passed, unlocked};
