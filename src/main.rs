//! Allure Uploader
//!
//! テスト実行後に allure-results をレポートサービスにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::process::ExitCode;

use allure_uploader::driver::{Args, UploadWorkflow};
use anyhow::Result;
use clap::Parser;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    let workflow = UploadWorkflow::new();
    let code = workflow.execute(args).await?;

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
