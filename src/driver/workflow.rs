//! Workflow Orchestration
//!
//! テストコマンドの実行とアップロードのオーケストレーション

use anyhow::{Context, Result};
use log::{info, warn};

use std::sync::Arc;

use crate::adapter::env::ProcessEnv;
use crate::adapter::http::models::join_service_url;
use crate::adapter::metadata::collect_run_metadata;
use crate::adapter::repositories::http_upload_repository::HttpUploadRepository;
use crate::adapter::repositories::zip_results_repository::ZipResultsRepository;
use crate::application::use_cases::resolve_config::{resolve_config, EnvSource};
use crate::application::use_cases::upload_results::UploadResultsUseCase;
use crate::domain::errors::{error_chain_to_string, UploaderError};
use crate::domain::repositories::upload_repository::UploadResult;

use super::cli::Args;

/// Exit code used when the upload fails and no test command was run
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Upload Workflow
pub struct UploadWorkflow {
    env: Arc<dyn EnvSource>,
}

impl UploadWorkflow {
    /// Create a workflow reading the process environment
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }

    /// Create a workflow with an injected environment source
    pub fn with_env(env: impl EnvSource + 'static) -> Self {
        Self { env: Arc::new(env) }
    }

    /// Execute the workflow and return the process exit code
    ///
    /// When a test command is given its exit code is returned unchanged;
    /// upload failures are only reported.
    pub async fn execute(&self, args: Args) -> Result<i32> {
        info!("Starting allure uploader...");

        let exit_status = match args.command.split_first() {
            Some((program, rest)) => Some(run_test_command(program, rest).await?),
            None => None,
        };

        if !args.allure_upload {
            info!("Upload disabled (pass --allure-upload to enable)");
            return Ok(exit_status.unwrap_or(0));
        }

        let accepted = match self.upload(&args, exit_status).await {
            Ok(accepted) => accepted,
            Err(e) => {
                report_failure(&e);
                false
            }
        };

        Ok(match (accepted, exit_status) {
            (_, Some(code)) => code,
            (true, None) => 0,
            (false, None) => FAILURE_EXIT_CODE,
        })
    }

    /// Resolve configuration, package and submit; returns whether the service accepted the run
    async fn upload(&self, args: &Args, exit_status: Option<i32>) -> Result<bool, UploaderError> {
        let config = resolve_config(&args.upload_flags(), self.env.as_ref())?;

        println!("✓ Using configuration:");
        println!("  URL: {}", config.url);
        println!("  Project: {}", config.project);
        println!("  Results: {}", config.results_dir.display());
        println!("  Timeout: {}s", config.timeout.as_secs_f64());
        if let Some(path) = &config.config_path {
            println!("  Config: {}", path.display());
        }

        let metadata = collect_run_metadata(self.env.as_ref()).with_exit_status(exit_status);
        info!("Upload id: {}", metadata.upload_id);

        let use_case = UploadResultsUseCase::new(
            Arc::new(ZipResultsRepository::new()),
            Arc::new(HttpUploadRepository::new(&config)?),
        );

        if args.dry_run {
            let request = use_case.prepare(&config, metadata).await?;
            println!("✓ Dry-run mode (not actually uploading)");
            println!(
                "  Would upload {} files ({} bytes) to project {}",
                request.archive.file_count(),
                request.archive.len(),
                request.project
            );
            return Ok(true);
        }

        let result = use_case.execute(&config, metadata).await?;
        print_summary(&config.url, &result);

        Ok(result.is_success())
    }
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_test_command(program: &str, args: &[String]) -> Result<i32> {
    info!("Running test command: {} {}", program, args.join(" "));

    let status = tokio::process::Command::new(program)
        .args(args)
        .status()
        .await
        .with_context(|| format!("Failed to run test command: {}", program))?;

    // Killed by a signal: no exit code
    let code = status.code().unwrap_or(FAILURE_EXIT_CODE);
    info!("Test command exited with {}", code);
    Ok(code)
}

fn print_summary(base_url: &str, result: &UploadResult) {
    println!("✓ Allure upload");
    println!("  project: {}", result.project);
    println!("  run_id: {}", result.run_id);
    println!("  status: {}", result.status);
    if let Some(reference) = &result.remote_reference {
        println!("  ui: {}", reference);
    }
    if !result.latest_url.is_empty() {
        println!("  latest: {}", join_service_url(base_url, &result.latest_url));
    }
    if let Some(error) = &result.error {
        warn!("Report service reported an error: {}", error);
        println!("⚠ Report service reported an error: {}", error);
    }
}

fn report_failure(e: &UploaderError) {
    let message = error_chain_to_string(e);
    warn!("Allure upload failed: {}", message);
    println!("⚠ Allure upload FAILED");
    println!("  {}", message);
}
