//! # Uploader Errors
//!
//! アップロード処理のエラー分類

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error used as the underlying cause of an upload failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// アップロード失敗の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorKind {
    /// 制限時間内に応答がなかった
    Timeout,
    /// 接続失敗などのネットワークエラー
    Network,
    /// サーバーが非2xxステータスを返した
    Rejected { status: u16 },
    /// サーバーの応答を解釈できなかった
    InvalidResponse,
    /// 結果ディレクトリのアーカイブ化に失敗した
    Packaging,
}

impl fmt::Display for UploadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadErrorKind::Timeout => write!(f, "timeout"),
            UploadErrorKind::Network => write!(f, "network"),
            UploadErrorKind::Rejected { status } => write!(f, "rejected with status {}", status),
            UploadErrorKind::InvalidResponse => write!(f, "invalid response"),
            UploadErrorKind::Packaging => write!(f, "packaging"),
        }
    }
}

/// Errors surfaced by configuration resolution and the upload itself
#[derive(Debug, Error)]
pub enum UploaderError {
    /// 必須の設定値が欠けている、または不正
    #[error("configuration error: {0}")]
    Configuration(String),

    /// 結果ディレクトリが存在しない
    #[error("allure results dir not found: {}", .0.display())]
    MissingResults(PathBuf),

    /// 送信に失敗した（原因を保持）
    #[error("upload failed ({kind}): {source}")]
    Upload {
        kind: UploadErrorKind,
        #[source]
        source: BoxError,
    },
}

impl UploaderError {
    pub fn configuration(message: impl Into<String>) -> Self {
        UploaderError::Configuration(message.into())
    }

    pub fn upload(kind: UploadErrorKind, source: impl Into<BoxError>) -> Self {
        UploaderError::Upload {
            kind,
            source: source.into(),
        }
    }

    /// Returns the failure kind for `Upload` errors
    pub fn kind(&self) -> Option<UploadErrorKind> {
        match self {
            UploaderError::Upload { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    #[inline]
    pub fn is_timeout(&self) -> bool {
        self.kind() == Some(UploadErrorKind::Timeout)
    }
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &(dyn std::error::Error + 'static)) -> String {
    let mut messages = vec![e.to_string()];
    let mut cause = e.source();
    while let Some(inner) = cause {
        let message = inner.to_string();
        // Display of the outer error often already embeds its direct cause
        if !messages.iter().any(|m| m.contains(&message)) {
            messages.push(message);
        }
        cause = inner.source();
    }
    messages.join(" | ")
}
