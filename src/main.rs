use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use deck_analyst::application::ports::{JobRepository, LlmClient, ResultCache, TextExtractor};
use deck_analyst::application::services::{
    AnalysisService, AnalysisWorker, JobProcessor, LlmPitchAnalyzer,
};
use deck_analyst::infrastructure::llm::{MockLlmClient, create_llm_client};
use deck_analyst::infrastructure::observability::init_tracing;
use deck_analyst::infrastructure::persistence::{InMemoryJobRepository, MokaResultCache};
use deck_analyst::infrastructure::text_processing::{ExtractorFactory, MockTextExtractor};
use deck_analyst::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&settings.logging, environment);

    let (text_extractor, llm_client) = build_gateways(&settings)?;
    let analyzer = Arc::new(LlmPitchAnalyzer::new(llm_client));

    let job_repository: Arc<dyn JobRepository> = Arc::new(InMemoryJobRepository::new());
    let result_cache: Arc<dyn ResultCache> = Arc::new(MokaResultCache::new(
        settings.cache.max_entries,
        settings.cache.ttl(),
    ));

    let (sender, receiver) = mpsc::channel(settings.worker.queue_capacity);

    let worker = AnalysisWorker::new(
        receiver,
        JobProcessor::new(
            text_extractor,
            analyzer,
            Arc::clone(&job_repository),
            Arc::clone(&result_cache),
        ),
        settings.worker.max_concurrent_jobs,
    );
    tokio::spawn(worker.run());

    let analysis_service = Arc::new(AnalysisService::new(
        job_repository,
        result_cache,
        sender,
        settings.upload.max_file_size_bytes,
    ));

    let state = AppState {
        analysis_service,
        max_upload_bytes: settings.upload.max_file_size_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_gateways(
    settings: &Settings,
) -> anyhow::Result<(Arc<dyn TextExtractor>, Arc<dyn LlmClient>)> {
    if settings.scaffold.enabled {
        let delay = Duration::from_millis(settings.scaffold.mock_response_delay_ms);
        tracing::warn!(
            delay_ms = settings.scaffold.mock_response_delay_ms,
            "Scaffold mode: using mock extraction and analysis gateways"
        );
        return Ok((
            Arc::new(MockTextExtractor::with_delay(delay)),
            Arc::new(MockLlmClient::default().delayed(delay)),
        ));
    }

    let text_extractor = ExtractorFactory::create(&settings.extraction)?;
    let llm_client = create_llm_client(&settings.llm)?;
    Ok((text_extractor, llm_client))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
