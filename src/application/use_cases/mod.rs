//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadScriptsUseCase**: 認証してスクリプトを一括アップロード
//! - **RunTestsUseCase**: テストスクリプトの実行

pub mod upload_scripts;
