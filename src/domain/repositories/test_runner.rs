//! # Test Runner Trait
//!
//! テストスクリプトの発見と実行を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::entities::test_outcome::TestOutcome;

/// テストランナー
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// 設定されたパスを実行対象のスクリプトに展開する
    ///
    /// # Arguments
    ///
    /// * `path` - ファイルまたはディレクトリのパス
    ///
    /// # Errors
    ///
    /// パスが存在しない場合、またはスクリプトが1つも見つからない場合にエラーを返す
    async fn resolve(&self, path: &str) -> Result<Vec<PathBuf>>;

    /// 1つのテストスクリプトを実行する
    ///
    /// 子プロセスの出力は実行中に流し、[`TestOutcome`] にも保持する。
    ///
    /// # Errors
    ///
    /// プロセスを起動できなかった場合にエラーを返す。
    /// 終了コードが非0の場合はエラーではなく失敗した [`TestOutcome`] を返す。
    async fn run(&self, script: &Path) -> Result<TestOutcome>;
}
