use crate::app::movie_store::BindValue;
use crate::transport::http::handlers::common::internal_error;
use crate::transport::http::types::{AppState, DirectorName};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use sqlx::{FromRow, Row};

#[utoipa::path(
    get,
    path = "/directors",
    responses(
        (status = 200, description = "All director name rows", body = Vec<DirectorName>),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn list_directors_handler(State(state): State<AppState>) -> impl IntoResponse {
    let rows = match state
        .store
        .fetch_all("SELECT director_name FROM director", &[])
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error(e),
    };

    let directors: Result<Vec<DirectorName>, sqlx::Error> =
        rows.iter().map(DirectorName::from_row).collect();
    match directors {
        Ok(directors) => Json(directors).into_response(),
        Err(e) => internal_error(e.into()),
    }
}

#[utoipa::path(
    get,
    path = "/directors/{director_id}/movies",
    params(
        ("director_id" = String, Path, description = "Director id")
    ),
    responses(
        (status = 200, description = "Names of movies by this director, empty if none", body = Vec<Option<String>>),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn list_director_movies_handler(
    State(state): State<AppState>,
    Path(director_id): Path<String>,
) -> impl IntoResponse {
    let rows = match state
        .store
        .fetch_all(
            "SELECT movie_name FROM movie WHERE director_id = ?",
            &[BindValue::Text(director_id)],
        )
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error(e),
    };

    let names: Result<Vec<Option<String>>, sqlx::Error> = rows
        .iter()
        .map(|row| row.try_get::<Option<String>, _>("movie_name"))
        .collect();
    match names {
        Ok(names) => Json(names).into_response(),
        Err(e) => internal_error(e.into()),
    }
}
