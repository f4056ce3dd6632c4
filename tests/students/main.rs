//! Student registry integration tests.
//!
//! - store: the record access layer through the public `StudentStore` API
//! - scenario: the seed-create-find-update-delete walk-through
//! - http: the axum routes exercised with reqwest

mod store;
mod scenario;
