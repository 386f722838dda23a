use crate::config::Config;
use crate::controller::PageController;
use crate::lookup::LookupClient;
use crate::render::RenderContext;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<dyn LookupClient>,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn LookupClient>) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// Fresh controller for one page load. Nothing carries over between loads.
    pub fn new_controller(&self) -> PageController {
        PageController::new(RenderContext::new(
            self.config.lang,
            self.config.static_img_prefix.clone(),
        ))
    }
}
