//! Route handlers. Each one parses its parameters, calls one store
//! operation and renders the outcome.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::error::ApiError;
use crate::store::{Resolution, Roster, StudentStore};
use crate::student::{StudentId, StudentRecord, UpdatePatch};

/// Query for `GET /get-student-by-name`.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// Query for `GET /get-student-details`. `test` is required but unused.
#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    #[serde(default)]
    pub name: Option<String>,
    pub test: String,
}

/// Query for `GET /get-student-details/:student_id`.
#[derive(Debug, Deserialize)]
pub struct DetailsByIdQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_test")]
    pub test: String,
}

const DETAILS_ID_NOT_FOUND: &str = "Student ID not found";
const UPDATE_ID_NOT_FOUND: &str = "No such student ID";
const DELETE_ID_NOT_FOUND: &str = "No such ID student";

fn default_test() -> String {
    "default_test".to_string()
}

fn student_id(path: Result<Path<u32>, PathRejection>) -> Result<StudentId, ApiError> {
    let Path(raw) = path?;
    Ok(StudentId::new(raw)?)
}

/// `GET /`
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Hello World" }))
}

/// `GET /all-students`
pub async fn all_students<S: StudentStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Roster>, ApiError> {
    Ok(Json(store.get_all()?))
}

/// `GET /get-student/:student_id`
pub async fn get_student<S: StudentStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let Path(raw) = path?;
    Ok(Json(store.get_by_id(raw)?))
}

/// `GET /get-student-by-name?name=`
pub async fn get_student_by_name<S: StudentStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let Query(query) = query?;
    Ok(Json(store.get_by_name(query.name.as_deref())?))
}

/// `GET /get-student-details?name=&test=`
pub async fn get_student_details<S: StudentStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<DetailsQuery>, QueryRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let Query(query) = query?;
    debug!(test = %query.test, "student details by name");
    Ok(Json(store.get_by_name(query.name.as_deref())?))
}

/// `GET /get-student-details/:student_id?name=&test=`
pub async fn get_student_details_by_id<S: StudentStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<u32>, PathRejection>,
    query: Result<Query<DetailsByIdQuery>, QueryRejection>,
) -> Result<Json<Resolution>, ApiError> {
    let id = student_id(path)?;
    let Query(query) = query?;
    debug!(student_id = %id, test = %query.test, "student details by id");
    let resolution = store
        .get_by_id_and_name(id, query.name.as_deref())
        .map_err(|err| ApiError::from(err).missing_id_reads(DETAILS_ID_NOT_FOUND))?;
    Ok(Json(resolution))
}

/// `POST /create-student/:student_id`
pub async fn create_student<S: StudentStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<u32>, PathRejection>,
    body: Result<Json<StudentRecord>, JsonRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let id = student_id(path)?;
    let Json(record) = body?;
    record.validate()?;
    Ok(Json(store.create(id, record)?))
}

/// `PUT /update-student/:student_id`
pub async fn update_student<S: StudentStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<u32>, PathRejection>,
    body: Result<Json<UpdatePatch>, JsonRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let id = student_id(path)?;
    let Json(patch) = body?;
    patch.validate()?;
    let record = store
        .update(id, &patch)
        .map_err(|err| ApiError::from(err).missing_id_reads(UPDATE_ID_NOT_FOUND))?;
    Ok(Json(record))
}

/// `DELETE /delete-student/:student_id`
pub async fn delete_student<S: StudentStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = student_id(path)?;
    store
        .delete(id)
        .map_err(|err| ApiError::from(err).missing_id_reads(DELETE_ID_NOT_FOUND))?;
    Ok(Json(json!({ "message": "Student deleted successfully" })))
}
