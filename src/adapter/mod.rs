//! Adapter Layer
//!
//! 外部システム（HTTPサービス, ファイルシステム, 環境変数）との統合

pub mod env;
pub mod http;
pub mod metadata;
pub mod repositories;
