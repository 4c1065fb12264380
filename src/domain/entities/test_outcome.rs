//! # Test Outcome
//!
//! テストスクリプト実行結果のバリューオブジェクト

use std::path::PathBuf;

/// 1つのテストスクリプトの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub path: PathBuf,
    pub success: bool,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestOutcome {
    pub fn passed(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            success: true,
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn failed(path: impl Into<PathBuf>, exit_code: Option<i32>) -> Self {
        Self {
            path: path.into(),
            success: false,
            exit_code,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// テスト実行全体のレポート
#[derive(Debug, Clone, Default)]
pub struct TestReport {
    outcomes: Vec<TestOutcome>,
    /// 解決できなかった設定パスの数
    unresolved_paths: usize,
}

impl TestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: TestOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn record_unresolved(&mut self) {
        self.unresolved_paths += 1;
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// 失敗したスクリプト数（解決できなかったパスを含む）
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count() + self.unresolved_paths
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
