//! # Results Repository Trait
//!
//! 結果ディレクトリの読み取りとパッケージングを抽象化

use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::results_archive::ResultsArchive;
use crate::domain::errors::UploaderError;

/// Report configuration file sent as the optional `config` part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfigFile {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// 結果リポジトリ
///
/// 結果ディレクトリの発見とアーカイブ化を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResultsRepository: Send + Sync {
    /// 結果ディレクトリをアーカイブ化する
    ///
    /// # Errors
    ///
    /// ディレクトリが存在しない場合は `UploaderError::MissingResults`、
    /// 読み取りに失敗した場合は `UploadErrorKind::Packaging` を返す
    async fn package(&self, results_dir: &Path) -> Result<ResultsArchive, UploaderError>;

    /// レポート設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルが存在しない場合は `UploaderError::Configuration` を返す
    async fn read_report_config(&self, path: &Path) -> Result<ReportConfigFile, UploaderError>;
}
