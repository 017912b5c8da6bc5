//! File upload endpoints
//!
//! Direct-to-storage pattern, three sequential round trips:
//!
//! 1. POST /files/presign – obtain a short-lived signed PUT target
//! 2. PUT the bytes straight to the storage service
//! 3. PATCH /files/profiles/:id/media – register the object key
//!
//! There is no compensating rollback: if step 3 fails the object stays
//! uploaded but unregistered.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{FileUploadRequest, FileUploadResponse, UploadPurpose};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct FilesApi {
    http: Arc<HttpClient>,
}

impl FilesApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// POST /files/presign – signed upload target, tenant-scoped object key
    pub async fn presign(&self, request: &FileUploadRequest) -> Result<FileUploadResponse, ApiError> {
        self.http.post("/files/presign", request).await
    }

    /// PUT the file bytes directly to the pre-signed URL
    pub async fn upload(
        &self,
        target: &FileUploadResponse,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        self.http
            .put_binary(&target.upload_url, bytes, content_type)
            .await
    }

    /// PATCH /files/profiles/:id/media – persist the uploaded object key.
    /// `profile_photo` appends to the photo list; `horoscope` overwrites.
    pub async fn register_media(
        &self,
        profile_id: Uuid,
        object_key: &str,
        purpose: UploadPurpose,
    ) -> Result<(), ApiError> {
        self.http
            .patch_query_unit(
                &format!("/files/profiles/{profile_id}/media"),
                &[("object_key", object_key), ("purpose", purpose.as_str())],
            )
            .await
    }

    /// Run the full three-step flow for one file. Content type is inferred
    /// from the file name.
    pub async fn upload_media(
        &self,
        profile_id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
        purpose: UploadPurpose,
    ) -> Result<String, ApiError> {
        let content_type = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .to_string();

        let target = self
            .presign(&FileUploadRequest {
                file_name: file_name.to_string(),
                content_type: content_type.clone(),
                upload_purpose: purpose,
            })
            .await?;
        debug!("Presigned upload target: {}", target.object_key);

        self.upload(&target, bytes, &content_type).await?;
        self.register_media(profile_id, &target.object_key, purpose)
            .await?;

        Ok(target.object_key)
    }
}
