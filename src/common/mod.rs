//! Shared utilities used by both the server and the client.

pub mod logger;
pub mod time;
