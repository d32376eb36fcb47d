//! Inbound adapters: the console I/O surface and the action host.

pub mod console;
pub mod host;
