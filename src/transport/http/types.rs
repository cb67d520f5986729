use crate::app::movie_store::MovieStore;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MovieStore>,
}

/// A full movie row as persisted. Unset columns serialize as JSON null.
#[derive(Serialize, Debug, sqlx::FromRow, ToSchema)]
pub struct Movie {
    pub movie_id: i64,
    pub director_id: Option<i64>,
    pub movie_name: Option<String>,
    pub lead_actor: Option<String>,
}

/// A director name row. Kept object-wrapped (unlike the movie name lists,
/// which return bare strings) to match the published contract.
#[derive(Serialize, Debug, sqlx::FromRow, ToSchema)]
pub struct DirectorName {
    pub director_name: Option<String>,
}

/// Body for POST /movies. Only the lead actor is settable at creation.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateMovieRequest {
    #[serde(default, rename = "leadActor")]
    pub lead_actor: Option<String>,
}

/// Body for PUT /movies/{movie_id}. Only the lead actor is mutable.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateMovieRequest {
    #[serde(default, rename = "leadActor")]
    pub lead_actor: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
