//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::application::use_cases::resolve_config::UploadFlags;

/// テスト結果（allure-results）をレポートサービスにアップロードするCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "allure-uploader")]
#[command(
    about = "Upload Allure results to a remote report service after a test run",
    long_about = None
)]
pub struct Args {
    /// Enable uploading of Allure results
    #[arg(long = "allure-upload")]
    pub allure_upload: bool,

    /// Report service base URL [env: ALLURE_UPLOAD_URL]
    #[arg(long = "allure-upload-url", value_name = "URL")]
    pub url: Option<String>,

    /// Project to upload into [env: ALLURE_UPLOAD_PROJECT]
    #[arg(long = "allure-upload-project", value_name = "PROJECT")]
    pub project: Option<String>,

    /// Allure results directory [env: ALLURE_RESULTS_DIR] [default: allure-results]
    #[arg(long = "alluredir", visible_alias = "allure-results-dir", value_name = "DIR")]
    pub results_dir: Option<String>,

    /// Upload timeout in seconds [env: ALLURE_UPLOAD_TIMEOUT] [default: 30]
    #[arg(long = "allure-upload-timeout", value_name = "SECONDS")]
    pub timeout: Option<String>,

    /// Report configuration file sent with the results [env: ALLURE_CONFIG]
    #[arg(long = "allure-config", value_name = "PATH")]
    pub config: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long = "allure-upload-insecure")]
    pub insecure: bool,

    /// Dry run mode - package results but don't actually upload
    #[arg(long)]
    pub dry_run: bool,

    /// Test command to run before uploading
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Args {
    /// 設定解決用のフラグ値を取り出す
    pub fn upload_flags(&self) -> UploadFlags {
        UploadFlags {
            url: self.url.clone(),
            project: self.project.clone(),
            results_dir: self.results_dir.clone(),
            timeout: self.timeout.clone(),
            config_path: self.config.clone(),
            insecure: self.insecure,
        }
    }
}
