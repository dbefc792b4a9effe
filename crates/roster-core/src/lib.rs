//! Core types and trait definitions for the Roster user directory.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! Every other crate depends on it; it depends on nothing proprietary.

pub mod error;
pub mod service;
pub mod user;

pub use error::{Error, Result};
pub use service::UserService;
pub use user::{Preferences, User, UserFields};
