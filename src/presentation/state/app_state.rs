use std::sync::Arc;

use crate::application::ports::ChatClient;
use crate::application::services::ExtractionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub chat_client: Arc<dyn ChatClient>,
    pub settings: Settings,
}
