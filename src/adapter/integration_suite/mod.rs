//! Integration Suite Adapter Modules
//!
//! 統合プラットフォーム API（OAuth2 + CSRF + リソース更新）のアダプター

pub mod client;
pub mod requests;

pub use client::IntegrationSuiteClient;
