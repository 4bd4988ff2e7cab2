//! Gateway handlers.
//!
//! Each handler validates its input, logs the call and forwards it to the
//! server through `ShareItClient`, returning the server's answer unchanged.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
