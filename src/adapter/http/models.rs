//! Report Service Response Models

use serde::Deserialize;

use crate::domain::repositories::upload_repository::UploadResult;

/// `run_id` arrives as a number, but some deployments send it as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RunId {
    Number(u64),
    Text(String),
}

impl RunId {
    pub fn as_u64(&self) -> u64 {
        match self {
            RunId::Number(n) => *n,
            RunId::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

/// Response body of `POST /api/v1/projects/{project}/runs`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunResponse {
    pub project: Option<String>,
    pub run_id: Option<RunId>,
    pub ui_url: Option<String>,
    pub latest_url: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl RunResponse {
    /// Domain::UploadResultに変換
    pub fn into_result(self, base_url: &str, requested_project: &str) -> UploadResult {
        let ui_url = self.ui_url.unwrap_or_default();
        let remote_reference = if ui_url.is_empty() {
            None
        } else {
            Some(join_service_url(base_url, &ui_url))
        };

        UploadResult {
            success: self.error.is_none(),
            remote_reference,
            project: self
                .project
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| requested_project.to_string()),
            run_id: self.run_id.as_ref().map(RunId::as_u64).unwrap_or(0),
            ui_url,
            latest_url: self.latest_url.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| "unknown".to_string()),
            error: self.error,
        }
    }
}

/// Resolve a service-relative path (e.g. `/reports/demo/1`) against the base URL
pub fn join_service_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
