#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use tokio::sync::{Semaphore, mpsc};
use tower::ServiceExt;

use deck_analyst::application::ports::{
    JobRepository, LlmClient, ResultCache, TextExtractionError, TextExtractor,
};
use deck_analyst::application::services::{
    AnalysisService, AnalysisWorker, JobProcessor, LlmPitchAnalyzer,
};
use deck_analyst::domain::{Document, Job, JobId};
use deck_analyst::infrastructure::llm::MockLlmClient;
use deck_analyst::infrastructure::persistence::{InMemoryJobRepository, MokaResultCache};
use deck_analyst::infrastructure::text_processing::MockTextExtractor;
use deck_analyst::presentation::{AppState, create_router};

pub const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;
pub const TEST_QUEUE_CAPACITY: usize = 16;
pub const TEST_MAX_CONCURRENT_JOBS: usize = 4;
pub const PDF_MIME: &str = "application/pdf";
pub const SAMPLE_DECK: &[u8] = b"InnovateTech. Revolutionizing the future of AI. Seeking $2M seed.";
const BOUNDARY: &str = "deck-analyst-test-boundary";

/// Blocks every extraction until the test hands out a permit.
pub struct GatedTextExtractor {
    gate: Arc<Semaphore>,
    inner: MockTextExtractor,
}

impl GatedTextExtractor {
    pub fn new() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        (
            Self {
                gate: Arc::clone(&gate),
                inner: MockTextExtractor::default(),
            },
            gate,
        )
    }
}

#[async_trait::async_trait]
impl TextExtractor for GatedTextExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractionError> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| TextExtractionError::ExtractionFailed(e.to_string()))?;
        self.inner.extract_text(data, document).await
    }
}

#[derive(Default)]
pub struct CountingTextExtractor {
    pub calls: AtomicUsize,
    inner: MockTextExtractor,
}

impl CountingTextExtractor {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextExtractor for CountingTextExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.extract_text(data, document).await
    }
}

pub struct FailingTextExtractor;

#[async_trait::async_trait]
impl TextExtractor for FailingTextExtractor {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<String, TextExtractionError> {
        Err(TextExtractionError::ExtractionFailed(
            "Document AI returned 500 Internal Server Error".to_string(),
        ))
    }
}

pub struct TestHarness {
    pub service: Arc<AnalysisService>,
    pub jobs: Arc<InMemoryJobRepository>,
    pub cache: Arc<MokaResultCache>,
}

impl TestHarness {
    pub fn router(&self) -> Router {
        create_router(AppState {
            analysis_service: Arc::clone(&self.service),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        })
    }

    /// Polls until the job leaves `processing`, or gives up after about two seconds.
    pub async fn wait_for_terminal(&self, job_id: JobId) -> Job {
        for _ in 0..200 {
            let job = self.service.get_status(job_id).await.unwrap();
            if job.status().is_terminal() {
                return job;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("job {job_id} never reached a terminal state");
    }
}

/// Wires the service and a running worker around the given gateways.
pub fn spawn_harness(
    text_extractor: Arc<dyn TextExtractor>,
    llm_client: Arc<dyn LlmClient>,
) -> TestHarness {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let cache = Arc::new(MokaResultCache::default());
    let (sender, receiver) = mpsc::channel(TEST_QUEUE_CAPACITY);

    let job_repository: Arc<dyn JobRepository> = jobs.clone();
    let result_cache: Arc<dyn ResultCache> = cache.clone();

    let worker = AnalysisWorker::new(
        receiver,
        JobProcessor::new(
            text_extractor,
            Arc::new(LlmPitchAnalyzer::new(llm_client)),
            Arc::clone(&job_repository),
            Arc::clone(&result_cache),
        ),
        TEST_MAX_CONCURRENT_JOBS,
    );
    tokio::spawn(worker.run());

    let service = Arc::new(AnalysisService::new(
        job_repository,
        result_cache,
        sender,
        TEST_MAX_UPLOAD_BYTES,
    ));

    TestHarness {
        service,
        jobs,
        cache,
    }
}

pub fn default_harness() -> TestHarness {
    spawn_harness(
        Arc::new(MockTextExtractor::default()),
        Arc::new(MockLlmClient::default()),
    )
}

pub fn multipart_upload(filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
