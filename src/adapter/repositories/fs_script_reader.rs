//! File Script Reader Implementation
//!
//! ScriptReaderのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domain::repositories::script_reader::ScriptReader;

/// ファイルシステムからスクリプトを読み込むリーダー
pub struct FsScriptReader;

impl FsScriptReader {
    /// 新しいリーダーを作成
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptReader for FsScriptReader {
    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let expanded_path = shellexpand::tilde(path);
        tokio::fs::read(expanded_path.as_ref())
            .await
            .with_context(|| format!("Failed to read script file: {}", expanded_path))
    }
}

impl Default for FsScriptReader {
    fn default() -> Self {
        Self::new()
    }
}
