use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use models::{Student, StudentInput};
use serde::Deserialize;
use service::student::StudentStats;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive fragment; blank or missing lists every student
    pub q: Option<String>,
}

#[utoipa::path(
    get, path = "/api/students", tag = "students",
    responses(
        (status = 200, description = "All students", body = [crate::openapi::StudentDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.students.get_all_students().await?))
}

#[utoipa::path(
    get, path = "/api/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Student>, JsonApiError> {
    state
        .students
        .get_student_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("student"))
}

#[utoipa::path(
    post, path = "/api/students", tag = "students",
    request_body = crate::openapi::StudentInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StudentDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<Student>), JsonApiError> {
    input.validate()?;
    let created = state.students.create_student(input.into()).await?;
    info!(id = ?created.id, "created student");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student ID")),
    request_body = crate::openapi::StudentInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, JsonApiError> {
    input.validate()?;
    match state.students.update_student(&id, input.into()).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(JsonApiError::not_found("student")),
    }
}

#[utoipa::path(
    delete, path = "/api/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    if state.students.delete_student(&id).await? {
        info!(%id, "deleted student");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("student"))
    }
}

#[utoipa::path(
    get, path = "/api/students/search", tag = "students",
    params(SearchQuery),
    responses((status = 200, description = "Matches", body = [crate::openapi::StudentDoc]))
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.students.search_students(query.q.as_deref()).await?))
}

#[utoipa::path(
    get, path = "/api/students/search/course", tag = "students",
    params(SearchQuery),
    responses((status = 200, description = "Matches", body = [crate::openapi::StudentDoc]))
)]
pub async fn search_by_course(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.students.search_students_by_course(query.q.as_deref()).await?))
}

#[utoipa::path(
    get, path = "/api/students/stats", tag = "students",
    responses((status = 200, description = "Totals", body = crate::openapi::StudentStatsDoc))
)]
pub async fn stats(State(state): State<ServerState>) -> Result<Json<StudentStats>, JsonApiError> {
    Ok(Json(state.students.student_stats().await?))
}
