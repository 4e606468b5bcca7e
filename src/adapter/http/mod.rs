//! HTTP Adapter Modules
//!
//! レポートサービスとの通信のためのアダプターモジュール

pub mod client;
pub mod models;
