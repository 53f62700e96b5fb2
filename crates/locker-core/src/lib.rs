//! Core domain + application logic for the media locker bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and SQLite live
//! behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod control;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod menu;
pub mod messaging;
pub mod store;

pub use errors::{Error, Result};
