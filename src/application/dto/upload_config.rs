//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

use std::path::PathBuf;
use std::time::Duration;

/// 結果ディレクトリのデフォルト値
pub const DEFAULT_RESULTS_DIR: &str = "allure-results";

/// 送信タイムアウトのデフォルト値
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// アップロード設定
///
/// 1回のテスト実行につき1度だけ解決され、以降は変更されない
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    /// 送信先サービスのベースURL
    pub url: String,
    /// 送信先プロジェクト
    pub project: String,
    /// 結果ディレクトリ
    pub results_dir: PathBuf,
    /// 送信タイムアウト（接続から応答受信までの合計、常に0より大きい）
    pub timeout: Duration,
    /// 任意のレポート設定ファイル
    pub config_path: Option<PathBuf>,
    /// TLS証明書を検証するかどうか
    pub verify_tls: bool,
}

impl UploadConfig {
    /// 必須項目のみを指定し、残りはデフォルト値で設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use allure_uploader::application::dto::upload_config::UploadConfig;
    /// use std::path::PathBuf;
    /// use std::time::Duration;
    ///
    /// let config = UploadConfig::new("http://reports.local/", "demo")
    ///     .with_timeout(Duration::from_secs(5))
    ///     .with_config_path(Some(PathBuf::from("allurerc.mjs")));
    ///
    /// assert_eq!(config.results_dir, PathBuf::from("allure-results"));
    /// assert_eq!(config.timeout, Duration::from_secs(5));
    /// assert!(config.verify_tls);
    /// ```
    pub fn new(url: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            project: project.into(),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            timeout: DEFAULT_TIMEOUT,
            config_path: None,
            verify_tls: true,
        }
    }

    pub fn with_results_dir(mut self, results_dir: impl Into<PathBuf>) -> Self {
        self.results_dir = results_dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_defaults() {
        let config = UploadConfig::new("http://x/", "demo");

        assert_eq!(config.url, "http://x/");
        assert_eq!(config.project, "demo");
        assert_eq!(config.results_dir, PathBuf::from("allure-results"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.config_path.is_none());
        assert!(config.verify_tls);
    }

    #[test]
    fn test_upload_config_builders() {
        let config = UploadConfig::new("http://x/", "demo")
            .with_results_dir("/tmp/results")
            .with_timeout(Duration::from_millis(2500))
            .with_config_path(Some(PathBuf::from("allurerc.mjs")))
            .with_verify_tls(false);

        assert_eq!(config.results_dir, PathBuf::from("/tmp/results"));
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.config_path, Some(PathBuf::from("allurerc.mjs")));
        assert!(!config.verify_tls);
    }

    #[test]
    fn test_upload_config_clone() {
        let config = UploadConfig::new("http://x/", "demo");
        let cloned = config.clone();
        assert_eq!(cloned, config);
    }
}
