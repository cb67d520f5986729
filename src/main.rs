use movie_catalog::transport;
use movie_catalog::{config, MovieStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Store Initialization ---
    println!("> Initializing MovieStore...");
    let store = MovieStore::connect(&config::database_url()).await?;
    println!("> MovieStore initialized successfully.");

    let app_state = transport::http::AppState {
        store: Arc::new(store),
    };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let port = config::port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("> API server listening on http://0.0.0.0:{}", port);
    println!("> Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C). Bye.");
        }
    }

    Ok(())
}
