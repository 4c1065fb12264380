//! # Domain Repositories
//!
//! 外部能力の trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - テストではフェイク実装に差し替える

pub mod integration_client;
pub mod script_reader;
pub mod test_runner;
