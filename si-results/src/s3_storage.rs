//! S3-backed artifact storage.

use crate::config::ResultsConfig;
use crate::error::{ResultsError, ResultsResult};
use crate::storage::ResultsStorage;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

/// Artifact storage over an S3 bucket.
///
/// Credentials come from the ambient AWS provider chain; an endpoint
/// override switches to path-style addressing for MinIO-style testing.
pub struct S3Storage {
    client: S3Client,
    bucket: String,
}

impl S3Storage {
    pub async fn connect(config: &ResultsConfig) -> Self {
        let base = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_types::region::Region::new(config.s3_region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&base);
        if let Some(ref endpoint) = config.s3_endpoint_override {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: S3Client::from_conf(builder.build()),
            bucket: config.s3_bucket.clone(),
        }
    }
}

impl ResultsStorage for S3Storage {
    async fn put(&self, key: &str, data: Vec<u8>) -> ResultsResult<()> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| ResultsError::Storage(format!("upload failed for {key}: {e}")))?;

        debug!("uploaded {size} bytes to s3://{}/{key}", self.bucket);
        Ok(())
    }

    async fn get(&self, key: &str) -> ResultsResult<Vec<u8>> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ResultsError::Storage(format!("fetch failed for {key}: {e}")))?;

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| ResultsError::Storage(format!("failed to read body for {key}: {e}")))?;

        Ok(body.into_bytes().to_vec())
    }

    async fn exists(&self, key: &str) -> ResultsResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(ResultsError::Storage(format!(
                        "head object failed for {key}: {service_err}"
                    )))
                }
            }
        }
    }
}
