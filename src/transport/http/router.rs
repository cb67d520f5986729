use crate::transport::http::handlers::{directors, health, movies};
use crate::transport::http::types::{
    CreateMovieRequest, DirectorName, HealthResponse, Movie, UpdateMovieRequest,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        movies::list_movies_handler,
        movies::create_movie_handler,
        movies::get_movie_handler,
        movies::update_movie_handler,
        movies::delete_movie_handler,
        directors::list_directors_handler,
        directors::list_director_movies_handler
    ),
    components(schemas(
        Movie,
        DirectorName,
        CreateMovieRequest,
        UpdateMovieRequest,
        HealthResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/movies",
            get(movies::list_movies_handler).post(movies::create_movie_handler),
        )
        .route(
            "/movies/:movie_id",
            get(movies::get_movie_handler)
                .put(movies::update_movie_handler)
                .delete(movies::delete_movie_handler),
        )
        .route("/directors", get(directors::list_directors_handler))
        .route(
            "/directors/:director_id/movies",
            get(directors::list_director_movies_handler),
        )
        .with_state(app_state)
}
