use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::handlers::{self, AppState};
use crate::store::traits::SampleStore;

pub fn create_router<S: SampleStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Sample management
        .route("/samples", get(handlers::list_samples::<S>))
        .route("/samples", post(handlers::add_sample::<S>))
        .route("/samples/:sample_id", get(handlers::get_sample::<S>))
        .route("/samples/:sample_id", put(handlers::update_sample::<S>))
        .route("/samples/:sample_id", delete(handlers::delete_sample::<S>))
}
