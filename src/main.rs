use std::net::SocketAddr;
use std::sync::Arc;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use tokio::net::TcpListener;

use docsift::application::ports::{ChatClient, TextRecognizer};
use docsift::application::services::ExtractionService;
use docsift::infrastructure::extraction::{DocxExtractor, ImageExtractor, PdfExtractor};
use docsift::infrastructure::llm::GeminiClient;
use docsift::infrastructure::observability::{TracingConfig, init_tracing};
use docsift::infrastructure::ocr::TesseractRecognizer;
use docsift::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;

    let mut settings: Settings = configuration.try_deserialize()?;

    if settings.llm.api_key.is_empty() {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            settings.llm.api_key = key;
        }
    }
    if settings.llm.api_key.trim().is_empty() {
        anyhow::bail!("GEMINI_API_KEY is not set; the chat endpoint cannot start without it");
    }

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let recognizer: Arc<dyn TextRecognizer> = Arc::new(TesseractRecognizer::new(
        settings.ocr.language.clone(),
        settings.ocr.datapath.clone(),
    ));

    let extraction_service = Arc::new(ExtractionService::new(
        Arc::new(PdfExtractor::new(Arc::clone(&recognizer))),
        Arc::new(DocxExtractor::new()),
        Arc::new(ImageExtractor::new(Arc::clone(&recognizer))),
    ));

    let chat_client: Arc<dyn ChatClient> = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.base_url.clone(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        extraction_service,
        chat_client,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
