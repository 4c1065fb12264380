//! # Script Reader Trait
//!
//! アップロードするスクリプト内容の読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ScriptReader: Send + Sync {
    /// パスからスクリプトのバイト列を読み込む
    async fn read(&self, path: &str) -> Result<Vec<u8>>;
}
