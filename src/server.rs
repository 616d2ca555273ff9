use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::{
    corpus,
    engine::{self, EngineParams},
    error::{Error, Result},
    render::HtmlRenderer,
};

/// Everything a report request needs.
#[derive(Clone)]
pub struct AppState {
    /// Corpus directory used when the request does not name one.
    pub default_folder: PathBuf,
    pub params: Arc<EngineParams>,
    pub renderer: Arc<HtmlRenderer>,
}

#[derive(Debug, Deserialize)]
struct ReportQuery {
    /// Overrides the corpus directory for this request.
    folder: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new().route("/", get(report)).with_state(state)
}

async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> std::result::Result<Html<String>, (StatusCode, String)> {
    let folder = query
        .folder
        .map(PathBuf::from)
        .unwrap_or_else(|| state.default_folder.clone());
    let label = folder.display().to_string();

    tracing::info!(folder = %label, "building overlap report");

    // A corpus run is CPU-bound; keep it off the async workers.
    let outcome = tokio::task::spawn_blocking(move || {
        let documents = corpus::load_corpus(&folder, None)?;
        let report = engine::rank(&documents, &state.params);
        Ok::<_, Error>(state.renderer.render_report(&label, &report))
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("report task failed: {e}"),
        )
    })?;

    match outcome {
        Ok(page) => Ok(Html(page)),
        Err(e) => Err((StatusCode::BAD_REQUEST, format!("Error: {e}"))),
    }
}

/// Serve the HTML report until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
