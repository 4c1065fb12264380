//! Adapter Layer
//!
//! 外部システム（統合プラットフォーム API, ファイルシステム, 子プロセス）との統合

pub mod config;
pub mod http;
pub mod integration_suite;
pub mod repositories;
