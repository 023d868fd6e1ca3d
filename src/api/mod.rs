pub mod error;
pub mod handlers;
pub mod state;

use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline::schema::SheetSchema;

use state::AppState;

/// Serve the live dashboard until the process is stopped.
pub async fn serve(
    host: &str,
    port: u16,
    workbook_dir: &Path,
    schema: SheetSchema,
    refresh_secs: u64,
) -> Result<()> {
    let state = AppState::new(workbook_dir.to_path_buf(), schema, refresh_secs);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(handlers::index))
        .route("/api/data", get(handlers::data))
        .layer(cors)
        .with_state(state);

    let addr = format!("{host}:{port}");
    println!("gexboard dashboard listening on {addr}");
    println!("  Dashboard: http://{addr}/");
    println!("  Data:      GET http://{addr}/api/data");
    println!("  Refresh:   every {refresh_secs}s");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    axum::serve(listener, app).await.context("running server")?;

    Ok(())
}
