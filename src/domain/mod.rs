//! Domain types and the ports the admin actions depend on.

pub mod charge;
pub mod format;
pub mod ports;
pub mod user;
