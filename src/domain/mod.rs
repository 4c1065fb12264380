//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやファイルシステムについて何も知らない
//! - 外部との境界は trait（インターフェース定義のみ）で表現する
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Iflow, Script, Session など）
//! - **errors**: プロトコルクライアントのエラー分類
//! - **repositories**: 外部能力の trait（IntegrationClient, ScriptReader, TestRunner）

pub mod entities;
pub mod errors;
pub mod repositories;
