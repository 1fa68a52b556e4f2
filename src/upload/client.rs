use crate::config::{ConfigError, ServerConfig};
use crate::upload::error::UploadError;
use crate::upload::types::{RejectionPayload, SelectedFile};
use crate::utils::file_size::FileSizeUtils;
use reqwest::multipart::{Form, Part};
use reqwest::Url;

#[derive(Debug, Clone)]
pub struct DatasetUploader {
    client: reqwest::Client,
    url: Url,
    field_name: String,
}

impl DatasetUploader {
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: reqwest::Client::new(),
            url: config.upload_url()?,
            field_name: config.field_name.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Any 2xx status counts as success and its body is ignored.
    pub async fn upload(&self, file: &SelectedFile) -> Result<(), UploadError> {
        let content = tokio::fs::read(&file.path)
            .await
            .map_err(|source| UploadError::Read {
                path: file.path.clone(),
                source,
            })?;

        tracing::info!(
            file = %file.name,
            size = %FileSizeUtils::format_size(content.len() as u64),
            url = %self.url,
            "uploading dataset"
        );

        let part = Part::bytes(content).file_name(file.name.clone());
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(file = %file.name, %status, "dataset uploaded");
            return Ok(());
        }

        let body = response.bytes().await?;
        let payload = match serde_json::from_slice::<RejectionPayload>(&body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(%status, error = %e, "upload error response is not a JSON payload");
                RejectionPayload::default()
            }
        };

        tracing::warn!(
            file = %file.name,
            %status,
            message = payload.message.as_deref().unwrap_or_default(),
            "dataset rejected"
        );

        Err(UploadError::Rejected { status, payload })
    }
}
