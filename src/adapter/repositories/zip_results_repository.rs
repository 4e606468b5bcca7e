//! Zip Results Repository Implementation
//!
//! ResultsRepositoryのファイルシステム + ZIP実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs::File;
use std::io::{self, Cursor};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::entities::results_archive::ResultsArchive;
use crate::domain::errors::{UploadErrorKind, UploaderError};
use crate::domain::repositories::results_repository::{ReportConfigFile, ResultsRepository};

/// 設定ファイル名が取得できない場合のデフォルト
const DEFAULT_REPORT_CONFIG_NAME: &str = "allure.config.mjs";

/// ファイルシステムベースの結果リポジトリ
pub struct ZipResultsRepository;

impl ZipResultsRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 結果ディレクトリをアーカイブ化する（内部実装）
    fn package_internal(results_dir: &Path) -> Result<ResultsArchive, UploaderError> {
        if !results_dir.is_dir() {
            warn!("Results directory does not exist: {}", results_dir.display());
            return Err(UploaderError::MissingResults(results_dir.to_path_buf()));
        }

        let archive = Self::zip_directory(results_dir)
            .map_err(|e| UploaderError::upload(UploadErrorKind::Packaging, e))?;

        if archive.file_count() == 0 {
            warn!("Results directory is empty: {}", results_dir.display());
        }

        Ok(archive)
    }

    /// ディレクトリ配下の全ファイルを相対パスでZIPに格納する
    ///
    /// シンボリックリンクのディレクトリは辿らない（結果ディレクトリ外のファイルを含めないため）。
    /// ファイルを指すシンボリックリンクはリンク先の内容で格納する。
    fn zip_directory(results_dir: &Path) -> Result<ResultsArchive> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut file_count = 0;

        for entry in WalkDir::new(results_dir)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| {
                format!("Failed to walk results directory: {}", results_dir.display())
            })?;
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(results_dir)
                .context("Walked outside of the results directory")?;
            let name = archive_entry_name(relative);

            writer
                .start_file(name.as_str(), options)
                .with_context(|| format!("Failed to add {} to archive", name))?;
            let mut file = File::open(entry.path())
                .with_context(|| format!("Failed to read result file: {}", entry.path().display()))?;
            io::copy(&mut file, &mut writer)
                .with_context(|| format!("Failed to compress {}", name))?;

            file_count += 1;
        }

        let cursor = writer.finish().context("Failed to finalize archive")?;

        info!(
            "Archived {} files from {}",
            file_count,
            results_dir.display()
        );

        Ok(ResultsArchive::new(cursor.into_inner(), file_count))
    }
}

/// Archive entry names always use `/` separators
fn archive_entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl ResultsRepository for ZipResultsRepository {
    async fn package(&self, results_dir: &Path) -> Result<ResultsArchive, UploaderError> {
        // ZIP作成はブロッキングI/Oなので、tokio::task::spawn_blockingでラップ
        let results_dir = results_dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::package_internal(&results_dir))
            .await
            .map_err(|e| {
                UploaderError::upload(
                    UploadErrorKind::Packaging,
                    anyhow::anyhow!("Failed to spawn blocking task: {}", e),
                )
            })?
    }

    async fn read_report_config(&self, path: &Path) -> Result<ReportConfigFile, UploaderError> {
        if !path.is_file() {
            return Err(UploaderError::configuration(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let contents = tokio::fs::read(path).await.map_err(|e| {
            UploaderError::configuration(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(ReportConfigFile {
            file_name: report_config_name(path),
            contents,
        })
    }
}

fn report_config_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_REPORT_CONFIG_NAME.to_string())
}

impl Default for ZipResultsRepository {
    fn default() -> Self {
        Self::new()
    }
}
