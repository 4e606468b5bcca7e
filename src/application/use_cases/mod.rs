//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **resolve_config**: フラグ・環境変数・デフォルト値から設定を解決
//! - **UploadResultsUseCase**: 結果ディレクトリのパッケージングと送信

pub mod resolve_config;
pub mod upload_results;
