use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::application::ports::TextExtractionError;

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Supplies the bearer token for each Document AI request.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, TextExtractionError>;
}

/// A fixed token from configuration. Google access tokens expire after about
/// an hour, so this is only meant for emulators, proxies and tests.
pub struct StaticAccessToken(String);

impl StaticAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessToken {
    async fn access_token(&self) -> Result<String, TextExtractionError> {
        Ok(self.0.clone())
    }
}

/// Application Default Credentials via `gcp_auth`. The credential source is
/// discovered on first use and tokens are cached and refreshed by it.
#[derive(Default)]
pub struct GoogleAccessToken {
    provider: OnceCell<Arc<dyn gcp_auth::TokenProvider>>,
}

impl GoogleAccessToken {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessTokenProvider for GoogleAccessToken {
    async fn access_token(&self) -> Result<String, TextExtractionError> {
        let provider = self
            .provider
            .get_or_try_init(|| async {
                let provider = gcp_auth::provider().await?;
                tracing::info!("Google application default credentials loaded");
                Ok::<_, gcp_auth::Error>(provider)
            })
            .await
            .map_err(|e| {
                TextExtractionError::ExtractionFailed(format!("Google credentials unavailable: {e}"))
            })?;

        let token = provider.token(&[CLOUD_PLATFORM_SCOPE]).await.map_err(|e| {
            TextExtractionError::ExtractionFailed(format!("Google access token refresh failed: {e}"))
        })?;

        Ok(token.as_str().to_string())
    }
}
