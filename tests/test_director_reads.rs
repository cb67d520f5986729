//! Director read paths. Directors are never written through the HTTP surface,
//! so the rows are seeded directly through the pool, the way an external
//! process would populate them.

use movie_catalog::{transport, MovieStore};
use serde_json::json;
use std::sync::Arc;

fn temp_db_url(tag: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "movie_catalog_test_{}_{}.db",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    format!("sqlite://{}?mode=rwc", path.display())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_director_reads() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = "http://127.0.0.1:3102";
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let store = Arc::new(MovieStore::connect(&temp_db_url("directors")).await?);

    // Seed two directors and three movies, one with a dangling director_id.
    for name in ["Nolan", "Villeneuve"] {
        sqlx::query("INSERT INTO director (director_name) VALUES (?)")
            .bind(name)
            .execute(store.pool())
            .await?;
    }
    for (director_id, movie_name) in [
        (Some(1i64), "Inception"),
        (Some(1i64), "Dunkirk"),
        (Some(77i64), "Orphaned"),
    ] {
        sqlx::query("INSERT INTO movie (director_id, movie_name) VALUES (?, ?)")
            .bind(director_id)
            .bind(movie_name)
            .execute(store.pool())
            .await?;
    }

    let state = transport::http::AppState {
        store: store.clone(),
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3102").await?;
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Wait for the server to be ready
    for _ in 0..30 {
        match tokio::net::TcpStream::connect("127.0.0.1:3102").await {
            Ok(_) => break,
            Err(_) => tokio::time::sleep(tokio::time::Duration::from_millis(100)).await,
        }
    }

    // Director list keeps the column wrapper; movie lists return bare strings.
    let directors = client
        .get(format!("{}/directors", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(
        directors,
        json!([
            { "director_name": "Nolan" },
            { "director_name": "Villeneuve" }
        ])
    );

    let nolan_movies = client
        .get(format!("{}/directors/1/movies", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(nolan_movies, json!(["Inception", "Dunkirk"]));

    // A director with no movies (or no row at all) yields an empty array.
    let no_movies = client
        .get(format!("{}/directors/2/movies", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(no_movies, json!([]));

    // The dangling director_id is reachable too: the relationship is advisory.
    let orphaned = client
        .get(format!("{}/directors/77/movies", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(orphaned, json!(["Orphaned"]));

    // Full movie list is a bare-string array, in store order.
    let all_names = client
        .get(format!("{}/movies", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(all_names, json!(["Inception", "Dunkirk", "Orphaned"]));

    let health = client
        .get(format!("{}/health", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(health["success"].as_bool().unwrap_or(false));

    server.abort();
    let _ = server.await;
    Ok(())
}
