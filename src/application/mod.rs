//! Application layer: the action registry, the admin actions and their
//! validation rules.
//!
//! Actions receive their services through [`registry::ActionContext`] and talk
//! to the user only through the [`crate::domain::ports::Io`] port, so every
//! action can be driven by test doubles.

pub mod actions;
pub mod registry;
pub mod validation;
