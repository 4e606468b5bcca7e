//! Report Service HTTP Client
//!
//! reqwestクライアントの構築、エンドポイント解決、エラー分類

use reqwest::{Client, Url};
use std::time::Duration;

use crate::application::use_cases::resolve_config::parse_service_url;
use crate::domain::errors::{UploadErrorKind, UploaderError};

/// Versioned API prefix of the report service
pub const API_PREFIX: [&str; 2] = ["api", "v1"];

static USER_AGENT: &str = concat!("allure-uploader/", env!("CARGO_PKG_VERSION"));

/// Build a client whose total request time is bounded by `timeout`
pub fn build_http_client(timeout: Duration, verify_tls: bool) -> Result<Client, UploaderError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(!verify_tls)
        .build()
        .map_err(|e| UploaderError::configuration(format!("failed to build HTTP client: {}", e)))
}

/// `{base_url}/api/v1/projects/{project}/runs`
///
/// The project is a single path segment, so it is percent-encoded.
pub fn runs_endpoint(base_url: &str, project: &str) -> Result<Url, UploaderError> {
    let mut url = parse_service_url(base_url)?;

    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| {
            UploaderError::configuration(format!("upload URL cannot be a base: {}", base_url))
        })?
        .pop_if_empty()
        .extend(API_PREFIX)
        .extend(["projects", project, "runs"]);

    Ok(url)
}

/// Map a transport error onto the upload error taxonomy
pub fn classify_error(err: reqwest::Error) -> UploaderError {
    let kind = if err.is_timeout() {
        UploadErrorKind::Timeout
    } else if let Some(status) = err.status() {
        UploadErrorKind::Rejected {
            status: status.as_u16(),
        }
    } else if err.is_decode() {
        UploadErrorKind::InvalidResponse
    } else {
        UploadErrorKind::Network
    };
    UploaderError::upload(kind, err)
}
