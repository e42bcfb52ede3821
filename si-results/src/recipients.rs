//! Per-org recipient key registry.
//!
//! Populated by the application layer as reviewers enroll or rotate keys;
//! read by the packager when a job's results are sealed for an org. A key
//! rotated after archives exist simply cannot open the older archives —
//! there is no re-encryption of stored blobs.

use crate::error::{ResultsError, ResultsResult};
use crate::types::RecipientKey;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe registry of each org's reviewer public keys.
#[derive(Clone, Default)]
pub struct RecipientRegistry {
    keys: Arc<RwLock<HashMap<String, Vec<RecipientKey>>>>,
}

impl RecipientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an org's full key set.
    pub async fn set_org_keys(&self, org_slug: impl Into<String>, keys: Vec<RecipientKey>) {
        self.keys.write().await.insert(org_slug.into(), keys);
    }

    /// Adds one enrolled key to an org.
    pub async fn add_org_key(&self, org_slug: impl Into<String>, key: RecipientKey) {
        self.keys
            .write()
            .await
            .entry(org_slug.into())
            .or_default()
            .push(key);
    }

    /// Returns an org's keys, failing fast when none are enrolled.
    pub async fn org_keys(&self, org_slug: &str) -> ResultsResult<Vec<RecipientKey>> {
        let keys = self.keys.read().await.get(org_slug).cloned();
        match keys {
            Some(keys) if !keys.is_empty() => Ok(keys),
            _ => Err(ResultsError::Config(format!(
                "no recipient keys enrolled for org {org_slug}"
            ))),
        }
    }

    /// Drops an org's keys, e.g. when the org is deactivated.
    pub async fn remove_org(&self, org_slug: &str) -> Option<Vec<RecipientKey>> {
        self.keys.write().await.remove(org_slug)
    }
}
