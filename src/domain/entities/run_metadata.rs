//! # RunMetadata Entity
//!
//! アップロードに添付するテスト実行メタデータ

use serde::{Deserialize, Serialize};

/// テスト実行メタデータ
///
/// `meta` パートとしてJSONで送信される
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// 実行のきっかけ（CIイベント名、またはローカル実行時は "local"）
    pub trigger: String,
    /// ブランチ名
    pub branch: Option<String>,
    /// コミットSHA
    pub commit: Option<String>,
    /// 実行開始時刻（UTC, `%Y-%m-%dT%H:%M:%SZ`）
    pub started_at: String,
    /// このアップロード試行のID
    pub upload_id: String,
    /// アップロード元のホスト名
    pub hostname: Option<String>,
    /// ラップしたテストコマンドの終了コード
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_status: Option<i32>,
}

impl RunMetadata {
    /// テストコマンドの終了コードを記録したメタデータを返す
    pub fn with_exit_status(mut self, exit_status: Option<i32>) -> Self {
        self.exit_status = exit_status;
        self
    }
}
