use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{SampleError, SampleService};
use crate::model::{Page, PageRequest, Sample, SampleId, SortDirection, SortField, SortSpec};
use crate::store::traits::SampleStore;

pub type AppState<S> = Arc<SampleService<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Optional paging and sorting query parameters for the list endpoint.
/// Missing values fall back to page 0, size 10, id descending.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<SortField>,
    pub dir: Option<SortDirection>,
}

impl ListQuery {
    fn into_page_request(self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.size.unwrap_or(defaults.size),
            SortSpec {
                field: self.sort.unwrap_or(defaults.sort.field),
                direction: self.dir.unwrap_or(defaults.sort.direction),
            },
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

// NotFound maps to 404, the two request-shaped failures to 400, and store
// failures to 500; the domain message text goes out verbatim.
fn error_response(err: SampleError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        SampleError::NotFound => StatusCode::NOT_FOUND,
        SampleError::AlreadyCreated | SampleError::BadRequest => StatusCode::BAD_REQUEST,
        SampleError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(&err.to_string())))
}

pub async fn list_samples<S: SampleStore>(
    State(service): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Sample>>, (StatusCode, Json<ErrorResponse>)> {
    match service.list(query.into_page_request()).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn get_sample<S: SampleStore>(
    State(service): State<AppState<S>>,
    Path(sample_id): Path<SampleId>,
) -> Result<Json<Sample>, (StatusCode, Json<ErrorResponse>)> {
    match service.get_by_id(sample_id).await {
        Ok(sample) => Ok(Json(sample)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn add_sample<S: SampleStore>(
    State(service): State<AppState<S>>,
    RequestJson(sample): RequestJson<Sample>,
) -> Result<(StatusCode, Json<Sample>), (StatusCode, Json<ErrorResponse>)> {
    match service.add(sample).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => Err(error_response(e)),
    }
}

/// PUT carries a full sample payload next to the path id; the service
/// rejects the call when the two ids disagree before touching the name.
pub async fn update_sample<S: SampleStore>(
    State(service): State<AppState<S>>,
    Path(sample_id): Path<SampleId>,
    RequestJson(sample): RequestJson<Sample>,
) -> Result<Json<Sample>, (StatusCode, Json<ErrorResponse>)> {
    match service.update_from_payload(sample_id, sample).await {
        Ok(updated) => Ok(Json(updated)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn delete_sample<S: SampleStore>(
    State(service): State<AppState<S>>,
    Path(sample_id): Path<SampleId>,
) -> Result<Json<Sample>, (StatusCode, Json<ErrorResponse>)> {
    match service.delete(sample_id).await {
        Ok(deleted) => Ok(Json(deleted)),
        Err(e) => Err(error_response(e)),
    }
}
