//! HTTP Upload Repository Implementation
//!
//! UploadRepositoryのHTTP（multipart/form-data）実装

use async_trait::async_trait;
use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::adapter::http::client::{build_http_client, classify_error, runs_endpoint};
use crate::adapter::http::models::RunResponse;
use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::results_archive::RESULTS_ARCHIVE_NAME;
use crate::domain::errors::{UploadErrorKind, UploaderError};
use crate::domain::repositories::upload_repository::{
    UploadRepository, UploadRequest, UploadResult,
};

/// Error bodies are cut to this many characters in messages
const MAX_ERROR_BODY_CHARS: usize = 500;

/// HTTPアップロードリポジトリ
pub struct HttpUploadRepository {
    client: Client,
    base_url: String,
}

impl HttpUploadRepository {
    /// 設定からリポジトリを作成（ネットワーク接続はまだ行わない）
    pub fn new(config: &UploadConfig) -> Result<Self, UploaderError> {
        Ok(Self {
            client: build_http_client(config.timeout, config.verify_tls)?,
            base_url: config.url.clone(),
        })
    }

    /// multipartフォームを組み立てる
    ///
    /// - `results`: ZIPアーカイブ
    /// - `meta`: 実行メタデータ（JSON）
    /// - `config`: 任意のレポート設定ファイル
    fn build_form(request: UploadRequest) -> Result<Form, UploaderError> {
        let meta = serde_json::to_string(&request.metadata)
            .map_err(|e| UploaderError::upload(UploadErrorKind::Packaging, e))?;

        let results = Part::bytes(request.archive.into_bytes())
            .file_name(RESULTS_ARCHIVE_NAME)
            .mime_str("application/zip")
            .map_err(|e| UploaderError::upload(UploadErrorKind::Packaging, e))?;
        let meta = Part::text(meta)
            .mime_str("application/json")
            .map_err(|e| UploaderError::upload(UploadErrorKind::Packaging, e))?;

        let mut form = Form::new().part("results", results).part("meta", meta);

        if let Some(config) = request.report_config {
            let part = Part::bytes(config.contents)
                .file_name(config.file_name)
                .mime_str("text/javascript")
                .map_err(|e| UploaderError::upload(UploadErrorKind::Packaging, e))?;
            form = form.part("config", part);
        }

        Ok(form)
    }
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", cut)
    }
}

#[async_trait]
impl UploadRepository for HttpUploadRepository {
    async fn submit(&self, request: UploadRequest) -> Result<UploadResult, UploaderError> {
        let endpoint = runs_endpoint(&self.base_url, &request.project)?;
        let project = request.project.clone();
        let archive_size = request.archive.len();
        let form = Self::build_form(request)?;

        info!("Uploading {} bytes to {}", archive_size, endpoint);

        let response = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Report service rejected upload: {}", status);
            return Err(UploaderError::upload(
                UploadErrorKind::Rejected {
                    status: status.as_u16(),
                },
                format!("server responded with {}: {}", status, truncate_body(&body)),
            ));
        }

        if !content_type.contains("application/json") {
            return Err(UploaderError::upload(
                UploadErrorKind::InvalidResponse,
                format!("unexpected response content-type: {:?}", content_type),
            ));
        }

        let body: RunResponse = response.json().await.map_err(classify_error)?;
        let result = body.into_result(&self.base_url, &project);

        info!(
            "Upload accepted: project={} run_id={} status={}",
            result.project, result.run_id, result.status
        );

        Ok(result)
    }
}
