use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::render_page;
use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct ScanForm {
    #[serde(default)]
    pub codigo: String,
}

pub async fn root() -> Redirect {
    Redirect::to("/retirada")
}

pub async fn retirada(State(state): State<AppState>) -> Html<String> {
    let controller = state.new_controller();
    Html(render_page(controller.state(), &state.config))
}

/// Enter in the scan field submits the form here.
pub async fn scan(
    State(state): State<AppState>,
    form: Result<Form<ScanForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form.map_err(|rejection| {
        warn!("rejected scan form: {rejection}");
        AppError::from(rejection)
    })?;

    let mut controller = state.new_controller();
    if let Some(ticket) = controller.submit_form(&form.codigo) {
        let applied = controller.run_lookup(state.client.as_ref(), ticket).await;
        info!(?applied, "scan handled");
    }
    Ok(Html(render_page(controller.state(), &state.config)))
}

/// Back control of the selection view.
pub async fn back(State(state): State<AppState>) -> Html<String> {
    let mut controller = state.new_controller();
    controller.back();
    Html(render_page(controller.state(), &state.config))
}

pub async fn healthz() -> &'static str {
    "ok"
}
