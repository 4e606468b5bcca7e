//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod http_upload_repository;
pub mod zip_results_repository;
