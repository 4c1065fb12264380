//! # Client Errors
//!
//! プロトコルクライアントのエラー分類
//!
//! - 事前条件エラー: トークン未取得（ネットワーク呼び出し前に発生）
//! - プロトコルエラー: 想定外のステータス、トークン欠落
//! - リクエスト構築エラー: 不正な URL やヘッダ値
//! - トランスポートエラー: 送信そのものの失敗（そのまま伝播）

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no access token: request access token first")]
    NoAccessToken,

    #[error("no csrf token: request csrf token first")]
    NoCsrfToken,

    #[error("unexpected status code - {status}{}", describe_body(.body))]
    UnexpectedStatus { status: u16, body: String },

    #[error("empty access token")]
    EmptyAccessToken,

    #[error("invalid token response")]
    InvalidTokenResponse(#[source] serde_json::Error),

    #[error("no csrf token found in x-csrf-token response header")]
    CsrfTokenNotFound,

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error(transparent)]
    Transport(anyhow::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn describe_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}
