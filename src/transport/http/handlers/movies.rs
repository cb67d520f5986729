use crate::app::movie_store::BindValue;
use crate::transport::http::handlers::common::internal_error;
use crate::transport::http::types::{AppState, CreateMovieRequest, Movie, UpdateMovieRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::{FromRow, Row};

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movie names (bare strings, null when unset), in store order", body = Vec<Option<String>>),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn list_movies_handler(State(state): State<AppState>) -> impl IntoResponse {
    let rows = match state
        .store
        .fetch_all("SELECT movie_name FROM movie", &[])
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

#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie created", body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn create_movie_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> impl IntoResponse {
    // A missing or unparseable body behaves like an absent field, not a 4xx.
    let request = request.map(|Json(r)| r).unwrap_or_default();

    match state
        .store
        .execute(
            "INSERT INTO movie (lead_actor) VALUES (?)",
            &[BindValue::from(request.lead_actor)],
        )
        .await
    {
        Ok(()) => "Movie Successfully Added".into_response(),
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/movies/{movie_id}",
    params(
        ("movie_id" = String, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "The full movie row", body = Movie),
        (status = 404, description = "No movie with that id", body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> impl IntoResponse {
    let row = match state
        .store
        .fetch_optional(
            "SELECT * FROM movie WHERE movie_id = ?",
            &[BindValue::Text(movie_id)],
        )
        .await
    {
        Ok(row) => row,
        Err(e) => return internal_error(e),
    };

    match row {
        Some(row) => match Movie::from_row(&row) {
            Ok(movie) => Json(movie).into_response(),
            Err(e) => internal_error(e.into()),
        },
        None => (StatusCode::NOT_FOUND, "Movie Not Found").into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/movies/{movie_id}",
    params(
        ("movie_id" = String, Path, description = "Movie id")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Update applied (no existence check)", body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    request: Result<Json<UpdateMovieRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = request.map(|Json(r)| r).unwrap_or_default();

    match state
        .store
        .execute(
            "UPDATE movie SET lead_actor = ? WHERE movie_id = ?",
            &[BindValue::from(request.lead_actor), BindValue::Text(movie_id)],
        )
        .await
    {
        Ok(()) => "Movie Details Updated".into_response(),
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/movies/{movie_id}",
    params(
        ("movie_id" = String, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Delete applied (no existence check)", body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> impl IntoResponse {
    match state
        .store
        .execute(
            "DELETE FROM movie WHERE movie_id = ?",
            &[BindValue::Text(movie_id)],
        )
        .await
    {
        Ok(()) => "Movie Removed".into_response(),
        Err(e) => internal_error(e),
    }
}
