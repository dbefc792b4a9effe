//! In-memory backend for the Roster user directory.
//!
//! Records live in a single `Vec` behind one reader/writer lock. Nothing
//! survives a restart; [`seed`] fills a fresh store with synthetic users so
//! the service has something to show.

pub mod seed;

mod service;
mod store;

pub use service::StoreUserService;
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
