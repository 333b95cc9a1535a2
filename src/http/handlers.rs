//! Route handlers for the `/projects` resource.
//!
//! Each handler takes the store lock for one synchronous
//! lookup-and-mutate step and releases it before returning, so store
//! mutations never interleave.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extract::JsonBody;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::projects::{Project, ProjectId, ProjectInput};

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
}

/// `GET /projects?title=X`
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Project>> {
    let projects = state.store.lock().list(query.title.as_deref());
    Json(projects)
}

/// `POST /projects`
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> Json<Project> {
    let project = Project::from_input(ProjectId::generate(), input);

    let size = {
        let mut store = state.store.lock();
        store.append(project.clone());
        store.len()
    };
    metrics::record_store_size(size);

    tracing::debug!(id = %project.id, "Project created");
    Json(project)
}

/// `PUT /projects/{id}`
///
/// Replaces the whole record: fields missing from the body are cleared.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> Result<Json<Project>, ApiError> {
    let id = ProjectId::parse(&id).ok_or(ApiError::InvalidId)?;

    let project = {
        let mut store = state.store.lock();
        let index = store.find_index_by_id(&id).ok_or(ApiError::NotFound)?;
        let project = Project::from_input(id, input);
        store.replace_at(index, project.clone());
        project
    };

    tracing::debug!(id = %project.id, "Project updated");
    Ok(Json(project))
}

/// `DELETE /projects/{id}`
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = ProjectId::parse(&id).ok_or(ApiError::InvalidId)?;

    let size = {
        let mut store = state.store.lock();
        let index = store.find_index_by_id(&id).ok_or(ApiError::NotFound)?;
        store.remove_at(index);
        store.len()
    };
    metrics::record_store_size(size);

    tracing::debug!(id = %id, "Project deleted");
    Ok(StatusCode::OK)
}
