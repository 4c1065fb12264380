//! # Integration Client Trait
//!
//! 統合プラットフォーム API への3段階プロトコルを抽象化

use async_trait::async_trait;

use crate::domain::entities::iflow::{Iflow, Script};
use crate::domain::errors::ClientError;

/// 認証付きアップロードクライアント
///
/// 呼び出し順序は `request_token` → `fetch_csrf_token` → `update_resource`。
/// トークンは実装が保持するセッションに格納される。
#[async_trait]
pub trait IntegrationClient: Send + Sync {
    /// OAuth2 client-credentials でアクセストークンを取得する
    ///
    /// # Errors
    ///
    /// 想定外のステータス、トークン欠落、JSON パース失敗、送信失敗
    async fn request_token(&mut self) -> Result<(), ClientError>;

    /// アクセストークンを使って CSRF トークンを取得する
    ///
    /// # Errors
    ///
    /// アクセストークン未取得の場合はネットワーク呼び出しなしで
    /// [`ClientError::NoAccessToken`] を返す
    async fn fetch_csrf_token(&mut self) -> Result<(), ClientError>;

    /// スクリプトの内容で Iflow リソースを更新する
    ///
    /// # Errors
    ///
    /// いずれかのトークンが未取得の場合はネットワーク呼び出しなしで失敗する
    async fn update_resource(
        &self,
        payload: &[u8],
        iflow: &Iflow,
        script: &Script,
    ) -> Result<(), ClientError>;
}
