//! # Session
//!
//! 1回のアップロード実行に閉じた認証状態

use std::fmt;

/// アクセストークンと CSRF トークン
///
/// プロトコルクライアントが排他的に所有する。永続化も共有もしない。
/// 空文字列のトークンは「未取得」として扱う。
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    csrf_token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    pub fn set_csrf_token(&mut self, token: impl Into<String>) {
        self.csrf_token = Some(token.into());
    }
}

// Tokens must never end up in logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |token: Option<&str>| token.map(|_| "<redacted>");
        f.debug_struct("Session")
            .field("access_token", &redact(self.access_token()))
            .field("csrf_token", &redact(self.csrf_token()))
            .finish()
    }
}
