//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Iflow / Script**: アップロード対象のリソースマニフェスト
//! - **Session**: 1回のアップロード実行で使うアクセストークンとCSRFトークン
//! - **TestOutcome / TestReport**: テスト実行結果

pub mod iflow;
pub mod session;
pub mod test_outcome;
