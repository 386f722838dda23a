use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/retirada", get(handlers::retirada).post(handlers::scan))
        .route("/retirada/voltar", get(handlers::back))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
