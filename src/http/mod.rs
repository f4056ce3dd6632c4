//! HTTP transport for the student store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` - greeting
//! - `GET /all-students` - every record, keyed by ID
//! - `GET /get-student/:student_id` - lookup by ID (`1 <= id < 100`)
//! - `GET /get-student-by-name?name=` - first record with that name
//! - `GET /get-student-details?name=&test=` - same, `test` required
//! - `GET /get-student-details/:student_id?name=` - ID lookup, optionally confirmed by name
//! - `POST /create-student/:student_id` - body is a full record
//! - `PUT /update-student/:student_id` - body is a sparse patch
//! - `DELETE /delete-student/:student_id`
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_registry::{http, InMemoryStudentStore};
//!
//! let store = Arc::new(InMemoryStudentStore::seeded());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly
//! http::serve(store, "127.0.0.1:8000").await?;
//! ```

mod error;
mod handlers;
mod logging;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use tracing::info;

use crate::store::StudentStore;

pub use error::ApiError;

/// Build an axum `Router` serving the student routes from `store`.
pub fn router<S: StudentStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/all-students", get(handlers::all_students::<S>))
        .route("/get-student/:student_id", get(handlers::get_student::<S>))
        .route(
            "/get-student-by-name",
            get(handlers::get_student_by_name::<S>),
        )
        .route(
            "/get-student-details",
            get(handlers::get_student_details::<S>),
        )
        .route(
            "/get-student-details/:student_id",
            get(handlers::get_student_details_by_id::<S>),
        )
        .route(
            "/create-student/:student_id",
            post(handlers::create_student::<S>),
        )
        .route(
            "/update-student/:student_id",
            put(handlers::update_student::<S>),
        )
        .route(
            "/delete-student/:student_id",
            delete(handlers::delete_student::<S>),
        )
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(store)
}

/// Serve the store over HTTP at the given address (e.g. `"127.0.0.1:8000"`).
pub async fn serve<S: StudentStore + 'static>(
    store: Arc<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "student registry listening");
    axum::serve(listener, app).await
}
