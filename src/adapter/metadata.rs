//! Run Metadata Collection
//!
//! CI環境変数とホスト情報からテスト実行メタデータを収集

use chrono::Utc;
use uuid::Uuid;

use crate::application::use_cases::resolve_config::EnvSource;
use crate::domain::entities::run_metadata::RunMetadata;

const TRIGGER_VARS: &[&str] = &["CI_PIPELINE_SOURCE", "GITHUB_EVENT_NAME"];
const BRANCH_VARS: &[&str] = &["CI_COMMIT_REF_NAME", "GITHUB_REF_NAME"];
const COMMIT_VARS: &[&str] = &["CI_COMMIT_SHA", "GITHUB_SHA"];

/// Collect run metadata from GitLab/GitHub CI variables
pub fn collect_run_metadata(env: &dyn EnvSource) -> RunMetadata {
    RunMetadata {
        trigger: first_set(env, TRIGGER_VARS).unwrap_or_else(|| "local".to_string()),
        branch: first_set(env, BRANCH_VARS),
        commit: first_set(env, COMMIT_VARS),
        started_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        upload_id: Uuid::new_v4().to_string(),
        hostname: hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok()),
        exit_status: None,
    }
}

fn first_set(env: &dyn EnvSource, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env.var(key))
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_local_run_defaults() {
        let meta = collect_run_metadata(&env(&[]));

        assert_eq!(meta.trigger, "local");
        assert!(meta.branch.is_none());
        assert!(meta.commit.is_none());
        assert!(meta.exit_status.is_none());
        assert!(Uuid::parse_str(&meta.upload_id).is_ok());
        assert!(NaiveDateTime::parse_from_str(&meta.started_at, "%Y-%m-%dT%H:%M:%SZ").is_ok());
    }

    #[test]
    fn test_gitlab_variables() {
        let meta = collect_run_metadata(&env(&[
            ("CI_PIPELINE_SOURCE", "merge_request_event"),
            ("CI_COMMIT_REF_NAME", "feature/x"),
            ("CI_COMMIT_SHA", "deadbeef"),
        ]));

        assert_eq!(meta.trigger, "merge_request_event");
        assert_eq!(meta.branch.as_deref(), Some("feature/x"));
        assert_eq!(meta.commit.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn test_github_variables() {
        let meta = collect_run_metadata(&env(&[
            ("GITHUB_EVENT_NAME", "push"),
            ("GITHUB_REF_NAME", "main"),
            ("GITHUB_SHA", "cafebabe"),
        ]));

        assert_eq!(meta.trigger, "push");
        assert_eq!(meta.branch.as_deref(), Some("main"));
        assert_eq!(meta.commit.as_deref(), Some("cafebabe"));
    }

    #[test]
    fn test_gitlab_wins_and_empty_values_are_skipped() {
        let meta = collect_run_metadata(&env(&[
            ("CI_PIPELINE_SOURCE", ""),
            ("GITHUB_EVENT_NAME", "push"),
            ("CI_COMMIT_SHA", "gitlab-sha"),
            ("GITHUB_SHA", "github-sha"),
        ]));

        assert_eq!(meta.trigger, "push");
        assert_eq!(meta.commit.as_deref(), Some("gitlab-sha"));
    }

    #[test]
    fn test_upload_ids_are_unique() {
        let a = collect_run_metadata(&env(&[]));
        let b = collect_run_metadata(&env(&[]));
        assert_ne!(a.upload_id, b.upload_id);
    }
}
