//! # Upload Results Use Case
//!
//! 結果ディレクトリをパッケージングし、1回だけ送信するユースケース

use log::info;
use std::sync::Arc;

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::run_metadata::RunMetadata;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::results_repository::ResultsRepository;
use crate::domain::repositories::upload_repository::{
    UploadRepository, UploadRequest, UploadResult,
};

/// 結果アップロードユースケース
pub struct UploadResultsUseCase<R: ResultsRepository, U: UploadRepository> {
    results_repository: Arc<R>,
    upload_repository: Arc<U>,
}

impl<R: ResultsRepository, U: UploadRepository> UploadResultsUseCase<R, U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `results_repository` - 結果リポジトリ
    /// * `upload_repository` - アップロードリポジトリ
    pub fn new(results_repository: Arc<R>, upload_repository: Arc<U>) -> Self {
        Self {
            results_repository,
            upload_repository,
        }
    }

    /// 送信内容を準備する（ネットワークには触れない）
    ///
    /// # Errors
    ///
    /// 結果ディレクトリが存在しない場合、設定ファイルが存在しない場合、
    /// アーカイブ化に失敗した場合にエラーを返す
    pub async fn prepare(
        &self,
        config: &UploadConfig,
        metadata: RunMetadata,
    ) -> Result<UploadRequest, UploaderError> {
        let archive = self.results_repository.package(&config.results_dir).await?;
        info!(
            "Packaged {} files from {} ({} bytes)",
            archive.file_count(),
            config.results_dir.display(),
            archive.len()
        );

        let report_config = match &config.config_path {
            Some(path) => Some(self.results_repository.read_report_config(path).await?),
            None => None,
        };

        Ok(UploadRequest {
            project: config.project.clone(),
            archive,
            metadata,
            report_config,
        })
    }

    /// 結果をアップロードする
    ///
    /// # Errors
    ///
    /// 準備に失敗した場合は送信を行わずにエラーを返す。
    /// 送信の失敗はリトライせずにそのまま返す
    pub async fn execute(
        &self,
        config: &UploadConfig,
        metadata: RunMetadata,
    ) -> Result<UploadResult, UploaderError> {
        let request = self.prepare(config, metadata).await?;
        self.upload_repository.submit(request).await
    }
}
