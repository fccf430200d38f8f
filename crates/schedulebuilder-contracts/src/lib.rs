// Public contracts for the Schedule Builder API
// This crate defines the wire DTOs shared by the server and its clients.

pub mod event;

pub use event::*;
