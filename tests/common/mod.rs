//! Report service stub shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How the stub answers an upload
#[derive(Clone, Copy, Debug)]
pub enum StubBehavior {
    Accept,
    Reject(u16),
    PlainText,
    ReportError,
    Hang,
}

/// One multipart part as received by the stub
#[derive(Clone, Debug)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// One upload as received by the stub
#[derive(Clone, Debug)]
pub struct ReceivedUpload {
    pub project: String,
    pub parts: Vec<ReceivedPart>,
}

impl ReceivedUpload {
    pub fn part(&self, name: &str) -> Option<&ReceivedPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn meta(&self) -> serde_json::Value {
        let part = self.part("meta").expect("meta part should be present");
        serde_json::from_slice(&part.data).expect("meta should be JSON")
    }

    /// File name -> contents of the uploaded results archive
    pub fn archive_entries(&self) -> HashMap<String, String> {
        let part = self.part("results").expect("results part should be present");
        let mut zip = zip::ZipArchive::new(Cursor::new(part.data.clone())).unwrap();
        let mut entries = HashMap::new();
        for i in 0..zip.len() {
            let mut file = zip.by_index(i).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            entries.insert(file.name().to_string(), content);
        }
        entries
    }
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    uploads: Arc<Mutex<Vec<ReceivedUpload>>>,
}

/// Handle for the stub report service
pub struct ReportServiceStub {
    base_url: String,
    uploads: Arc<Mutex<Vec<ReceivedUpload>>>,
    task: JoinHandle<()>,
}

impl ReportServiceStub {
    pub async fn spawn(behavior: StubBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let uploads = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            uploads: Arc::clone(&uploads),
        };
        let app = Router::new()
            .route("/api/v1/projects/{project}/runs", post(handle_upload))
            .with_state(state);

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/", addr),
            uploads,
            task,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl Drop for ReportServiceStub {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle_upload(
    State(state): State<StubState>,
    UrlPath(project): UrlPath<String>,
    mut multipart: Multipart,
) -> Response {
    if let StubBehavior::Hang = state.behavior {
        tokio::time::sleep(Duration::from_secs(60)).await;
    }

    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            data,
        });
    }
    state.uploads.lock().unwrap().push(ReceivedUpload {
        project: project.clone(),
        parts,
    });

    match state.behavior {
        StubBehavior::Accept | StubBehavior::Hang => Json(json!({
            "project": project,
            "run_id": 7,
            "ui_url": format!("/reports/{}/7/", project),
            "latest_url": format!("/reports/{}/latest/", project),
            "status": "queued"
        }))
        .into_response(),
        StubBehavior::Reject(code) => (
            StatusCode::from_u16(code).unwrap(),
            "report service unavailable",
        )
            .into_response(),
        StubBehavior::PlainText => "ok".into_response(),
        StubBehavior::ReportError => Json(json!({
            "project": project,
            "status": "failed",
            "error": "bad archive"
        }))
        .into_response(),
    }
}

/// Write a small allure-results directory
pub fn write_results(dir: &Path) {
    fs::create_dir_all(dir.join("attachments")).unwrap();
    fs::write(
        dir.join("0a1b-result.json"),
        r#"{"name":"test_login","status":"passed"}"#,
    )
    .unwrap();
    fs::write(dir.join("attachments").join("0a1b-attachment.txt"), "stdout").unwrap();
}
