use axum::Json;
use axum::extract::State;
use axum::response::Html;

use crate::model::Shaped;
use crate::pipeline;
use crate::render;
use crate::source::CsvWorkbook;

use super::error::ApiError;
use super::state::{AppState, AppStateInner};

/// Dashboard page; all data arrives later via `/api/data` polls.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::dashboard::render_page(state.inner.refresh_secs))
}

/// Shaped pipeline output as JSON, re-read from the workbook at most once
/// per refresh window.
pub async fn data(State(state): State<AppState>) -> Result<Json<Shaped>, ApiError> {
    let mut cache = state.inner.cache.lock().await;
    let shaped = cache.get_or_refresh(|| load(&state.inner))?;
    Ok(Json(shaped))
}

/// One full pipeline run: open the workbook snapshot, shape, discard the
/// handle. A read failure is returned to the client as-is.
fn load(inner: &AppStateInner) -> anyhow::Result<Shaped> {
    let workbook = CsvWorkbook::open(&inner.workbook_dir)?;
    Ok(pipeline::shape(&workbook, &inner.schema)?)
}
