//! # Data Transfer Objects

pub mod upload_config;

pub use upload_config::UploadConfig;
