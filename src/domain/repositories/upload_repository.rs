//! # Upload Repository Trait
//!
//! 結果アーカイブの送信を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::results_archive::ResultsArchive;
use crate::domain::entities::run_metadata::RunMetadata;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::results_repository::ReportConfigFile;

/// 送信リクエスト
///
/// 1回のアップロードで送信する内容一式
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// 送信先プロジェクト
    pub project: String,
    /// ZIP化された結果ディレクトリ
    pub archive: ResultsArchive,
    /// テスト実行メタデータ
    pub metadata: RunMetadata,
    /// 任意のレポート設定ファイル
    pub report_config: Option<ReportConfigFile>,
}

/// アップロード結果
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    /// サービスが実行を受け付けたかどうか
    pub success: bool,
    /// レポートの参照先（サービスが返した場合）
    pub remote_reference: Option<String>,
    pub project: String,
    pub run_id: u64,
    pub ui_url: String,
    pub latest_url: String,
    pub status: String,
    /// サービスが報告したエラー
    pub error: Option<String>,
}

impl UploadResult {
    /// アップロードが成功したかチェックします。
    ///
    /// # 例
    ///
    /// ```
    /// use allure_uploader::domain::repositories::upload_repository::UploadResult;
    ///
    /// let mut result = UploadResult {
    ///     success: true,
    ///     remote_reference: Some("http://reports/demo/1".to_string()),
    ///     project: "demo".to_string(),
    ///     run_id: 1,
    ///     ui_url: "/demo/1".to_string(),
    ///     latest_url: "/demo/latest".to_string(),
    ///     status: "queued".to_string(),
    ///     error: None,
    /// };
    /// assert!(result.is_success());
    ///
    /// // サービスがエラーを報告したケース
    /// result.success = false;
    /// result.error = Some("report generation failed".to_string());
    /// assert!(!result.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.success && self.error.is_none()
    }
}

/// アップロードリポジトリ
///
/// 結果アーカイブの送信を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// リクエストを1回だけ送信する（リトライしない）
    ///
    /// # Errors
    ///
    /// タイムアウト、ネットワークエラー、サーバーによる拒否の場合に
    /// `UploaderError::Upload` を返す
    async fn submit(&self, request: UploadRequest) -> Result<UploadResult, UploaderError>;
}
