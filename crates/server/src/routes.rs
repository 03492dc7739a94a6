pub mod records;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use configs::ServerConfig;
use sea_orm::DatabaseConnection;
use service::records::{domain::ValidationPolicy, repo::seaorm::SeaOrmRecordRepository, RecordService};

use crate::views::Views;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub records: Arc<RecordService<SeaOrmRecordRepository>>,
    pub views: Arc<Views>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, policy: ValidationPolicy) -> Result<Self, minijinja::Error> {
        let repo = Arc::new(SeaOrmRecordRepository { db });
        Ok(Self {
            records: Arc::new(RecordService::new(repo, policy)),
            views: Arc::new(Views::new()?),
        })
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: record pages, health check and static files
pub fn build_router(state: ServerState, cfg: &ServerConfig) -> Router {
    // one registration for deletion; GET stays only for old links
    let delete_route = if cfg.legacy_get_delete {
        post(records::delete).get(records::delete)
    } else {
        post(records::delete)
    };

    Router::new()
        .route("/", get(records::index))
        .route("/crear", get(records::new_form).post(records::create))
        .route("/alumno/:id", get(records::show))
        .route("/editar/:id", get(records::edit_form).post(records::update))
        .route("/eliminar/:id", delete_route)
        .route("/health", get(health))
        .fallback_service(ServeDir::new(&cfg.static_dir))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
