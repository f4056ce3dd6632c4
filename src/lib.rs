//! In-memory student registry.
//!
//! The [`store`] module is the record access layer: ID and name lookups,
//! the combined ID + name resolution rules, create-without-overwrite,
//! sparse updates and deletes. The [`http`] module (feature `http`) exposes
//! it over axum.

pub mod config;
pub mod store;
pub mod student;

#[cfg(feature = "http")]
pub mod http;

pub use config::ServerConfig;
pub use store::{
    InMemoryStudentStore, Resolution, Roster, StoreError, StudentStore, MAX_LOOKUP_ID,
    MIN_LOOKUP_ID,
};
pub use student::{Patch, StudentId, StudentRecord, UpdatePatch, ValidationError};
