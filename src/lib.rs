//! Room-based multiplayer quiz application library.
//!
//! This library provides the quiz room coordinator (lifecycle, scoring,
//! polling-based synchronization) together with the HTTP server and the
//! short-poll CLI client built around it.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// client
pub mod client;

// shared library
pub mod common;
