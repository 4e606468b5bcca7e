//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **RunMetadata**: アップロードに添付するテスト実行メタデータ
//! - **ResultsArchive**: 結果ディレクトリをZIP化したバリューオブジェクト

pub mod results_archive;
pub mod run_metadata;
