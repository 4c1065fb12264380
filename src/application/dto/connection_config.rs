//! # Connection Configuration DTO
//!
//! 統合プラットフォームへの接続設定のData Transfer Object

use std::fmt;

/// 接続設定
///
/// トークンエンドポイント、API のベース URL、クライアント資格情報
#[derive(Clone)]
pub struct ConnectionConfig {
    /// OAuth2 トークンエンドポイント（`grant_type` クエリは含まない）
    pub token_url: String,
    /// API のベース URL（`/api/v1` は含まない）
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ConnectionConfig {
    /// 新しい接続設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use inco::application::dto::connection_config::ConnectionConfig;
    ///
    /// let config = ConnectionConfig::new(
    ///     "https://auth.example.com/oauth/token".to_string(),
    ///     "https://api.example.com".to_string(),
    ///     "client-id".to_string(),
    ///     "client-secret".to_string(),
    /// );
    ///
    /// assert_eq!(config.api_url, "https://api.example.com");
    /// ```
    pub fn new(
        token_url: String,
        api_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            token_url,
            api_url,
            client_id,
            client_secret,
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
