//! # staterec application library
//!
//! Everything the `staterec` binary does, exposed so integration tests can
//! drive the console over in-memory buffers.

pub mod cli;
pub mod config;
pub mod console;
