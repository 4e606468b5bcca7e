//! # Allure Uploader
//!
//! テスト実行後に Allure の結果ディレクトリをレポートサービスへアップロードするツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エラー分類、エンティティ、Repository trait（外部依存なし）
//! - **Application層**: 設定解決とアップロードのユースケース
//! - **Adapter層**: 外部システムとの統合（HTTP, ZIP, 環境変数）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
