//! # inco
//!
//! Groovy スクリプトのテスト実行と、統合プラットフォームへのアップロードを行うツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、エラー分類、外部能力の trait（外部依存なし）
//! - **Application層**: アプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（HTTP, ファイルシステム, 子プロセス, 設定）
//! - **Driver層**: CLI、依存性注入
//!
//! アップロードは OAuth2 client-credentials でアクセストークンを取得し、
//! CSRF トークンを取得してから、スクリプトごとにリソースを更新します。

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
