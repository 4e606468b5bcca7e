//! # Domain Layer
//!
//! アップロード処理の核心となる型とルールを定義します。
//!
//! ## 特徴
//!
//! - HTTPやファイルシステムについて何も知らない
//! - 外部システムとの境界はRepository traitとして定義
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（RunMetadata, ResultsArchiveなど）
//! - **errors**: アップロード処理のエラー分類
//! - **repositories**: Repository trait（インターフェース定義のみ）

pub mod entities;
pub mod errors;
pub mod repositories;
