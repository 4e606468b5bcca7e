//! # Resolve Config Use Case
//!
//! フラグ > 環境変数 > デフォルト値 の優先順位で設定を解決する

use reqwest::Url;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::dto::upload_config::{UploadConfig, DEFAULT_RESULTS_DIR, DEFAULT_TIMEOUT};
use crate::domain::errors::UploaderError;

pub const ENV_UPLOAD_URL: &str = "ALLURE_UPLOAD_URL";
pub const ENV_UPLOAD_PROJECT: &str = "ALLURE_UPLOAD_PROJECT";
pub const ENV_RESULTS_DIR: &str = "ALLURE_RESULTS_DIR";
pub const ENV_UPLOAD_TIMEOUT: &str = "ALLURE_UPLOAD_TIMEOUT";
pub const ENV_CONFIG: &str = "ALLURE_CONFIG";

/// 環境変数の読み取り元
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// コマンドラインから渡された生のフラグ値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadFlags {
    pub url: Option<String>,
    pub project: Option<String>,
    pub results_dir: Option<String>,
    pub timeout: Option<String>,
    pub config_path: Option<String>,
    pub insecure: bool,
}

/// 設定を解決する
///
/// 各項目はフラグ、対応する環境変数、デフォルト値の順に採用される。
/// 空文字や空白のみの値は未指定として扱う。
///
/// # Errors
///
/// URLまたはプロジェクトが未指定の場合、タイムアウトが `Duration` として
/// 表現できる正の値でない場合、URLが解析できないか `http`/`https` でない場合に
/// `UploaderError::Configuration` を返す
pub fn resolve_config(
    flags: &UploadFlags,
    env: &dyn EnvSource,
) -> Result<UploadConfig, UploaderError> {
    let url = pick(flags.url.as_deref(), env, ENV_UPLOAD_URL).ok_or_else(|| {
        UploaderError::configuration(format!(
            "missing upload URL (use --allure-upload-url or {})",
            ENV_UPLOAD_URL
        ))
    })?;
    let project = pick(flags.project.as_deref(), env, ENV_UPLOAD_PROJECT).ok_or_else(|| {
        UploaderError::configuration(format!(
            "missing upload project (use --allure-upload-project or {})",
            ENV_UPLOAD_PROJECT
        ))
    })?;

    parse_service_url(&url)?;

    let results_dir = pick(flags.results_dir.as_deref(), env, ENV_RESULTS_DIR)
        .unwrap_or_else(|| DEFAULT_RESULTS_DIR.to_string());

    let timeout = match pick(flags.timeout.as_deref(), env, ENV_UPLOAD_TIMEOUT) {
        Some(raw) => parse_timeout(&raw)?,
        None => DEFAULT_TIMEOUT,
    };

    let config_path = pick(flags.config_path.as_deref(), env, ENV_CONFIG).map(|p| expand_path(&p));

    Ok(UploadConfig::new(url, project)
        .with_results_dir(expand_path(&results_dir))
        .with_timeout(timeout)
        .with_config_path(config_path)
        .with_verify_tls(!flags.insecure))
}

fn pick(flag: Option<&str>, env: &dyn EnvSource, key: &str) -> Option<String> {
    non_empty(flag.map(str::to_string)).or_else(|| non_empty(env.var(key)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 秒数（小数可）を `Duration` に変換する。0に丸められる値や上限を超える値は不正
fn parse_timeout(raw: &str) -> Result<Duration, UploaderError> {
    raw.parse::<f64>()
        .ok()
        .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
        .filter(|timeout| !timeout.is_zero())
        .ok_or_else(|| {
            UploaderError::configuration(format!(
                "upload timeout must be a positive number of seconds: {}",
                raw
            ))
        })
}

/// サービスのベースURLを解析する
///
/// 設定解決時とエンドポイント組み立て時の両方で同じ検証を使う
pub fn parse_service_url(raw: &str) -> Result<Url, UploaderError> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        UploaderError::configuration(format!("invalid upload URL {}: {}", raw, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UploaderError::configuration(format!(
            "upload URL must use http or https: {}",
            raw
        )));
    }
    if url.cannot_be_a_base() || !url.host_str().is_some_and(|host| !host.is_empty()) {
        return Err(UploaderError::configuration(format!(
            "upload URL has no host: {}",
            raw
        )));
    }

    Ok(url)
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
