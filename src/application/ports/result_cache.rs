use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Analysis, Fingerprint};

/// A finished analysis remembered by the fingerprint of the file it came from.
/// Only successful results are ever cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResult {
    pub filename: String,
    pub analysis: Analysis,
}

#[async_trait]
pub trait ResultCache: Send + Sync {
    async fn get(&self, fingerprint: &Fingerprint) -> Option<CachedResult>;

    async fn put(&self, fingerprint: Fingerprint, result: CachedResult);
}
