//! Process Test Runner Implementation
//!
//! TestRunnerの外部プロセス実装（デフォルトは `groovy -cp src <script>`）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;
use walkdir::WalkDir;

use crate::domain::entities::test_outcome::TestOutcome;
use crate::domain::repositories::test_runner::TestRunner;

pub const DEFAULT_TEST_COMMAND: &str = "groovy";
pub const DEFAULT_TEST_CLASSPATH: &str = "src";
const TEST_SCRIPT_EXTENSION: &str = "groovy";

/// テストインタープリタを子プロセスとして起動するランナー
pub struct ProcessTestRunner {
    command: String,
    classpath: String,
}

impl ProcessTestRunner {
    /// 新しいランナーを作成
    ///
    /// # Arguments
    ///
    /// * `command` - インタープリタのコマンド
    /// * `classpath` - `-cp` に渡すクラスパス
    pub fn new(command: impl Into<String>, classpath: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            classpath: classpath.into(),
        }
    }

    /// テストスクリプトを発見する（内部実装）
    fn resolve_internal(path: &str) -> Result<Vec<PathBuf>> {
        let expanded_path = shellexpand::tilde(path);
        let path = PathBuf::from(expanded_path.as_ref());

        if !path.exists() {
            anyhow::bail!("Test path does not exist: {}", path.display());
        }

        if path.is_file() {
            return Ok(vec![path]);
        }

        let mut scripts: Vec<PathBuf> = WalkDir::new(&path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| {
                p.is_file() && p.extension().and_then(|s| s.to_str()) == Some(TEST_SCRIPT_EXTENSION)
            })
            .collect();
        scripts.sort();

        if scripts.is_empty() {
            anyhow::bail!("No test scripts found in {}", path.display());
        }

        info!(
            "Found {} test scripts in {}",
            scripts.len(),
            path.display()
        );

        Ok(scripts)
    }
}

impl Default for ProcessTestRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_COMMAND, DEFAULT_TEST_CLASSPATH)
    }
}

#[async_trait]
impl TestRunner for ProcessTestRunner {
    async fn resolve(&self, path: &str) -> Result<Vec<PathBuf>> {
        // ディレクトリ走査はブロッキングなので spawn_blocking でラップ
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::resolve_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn run(&self, script: &Path) -> Result<TestOutcome> {
        debug!(
            "Executing {} -cp {} {}",
            self.command,
            self.classpath,
            script.display()
        );

        let mut child = Command::new(&self.command)
            .arg("-cp")
            .arg(&self.classpath)
            .arg(script)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to launch {}", self.command))?;

        let child_stdout = child.stdout.take().context("Child stdout was not piped")?;
        let child_stderr = child.stderr.take().context("Child stderr was not piped")?;

        // 出力は終了を待たずに流しつつ、結果用にも保持する
        let (stdout, stderr, status) = tokio::try_join!(
            forward_output(child_stdout, tokio::io::stdout()),
            forward_output(child_stderr, tokio::io::stderr()),
            async {
                child
                    .wait()
                    .await
                    .with_context(|| format!("Failed to wait for {}", self.command))
            },
        )?;

        Ok(TestOutcome {
            path: script.to_path_buf(),
            success: status.success(),
            exit_code: status.code(),
            stdout,
            stderr,
        })
    }
}

/// 子プロセスの出力を行単位で `sink` に書き出し、読み込んだ内容を返す
///
/// 書き込みの失敗は警告ログのみで、読み込みは最後まで続ける。
async fn forward_output<R, W>(source: R, mut sink: W) -> Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(source);
    let mut captured = Vec::new();
    let mut line = Vec::new();
    let mut echo = true;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .await
            .context("Failed to read test output")?;
        if read == 0 {
            break;
        }
        captured.extend_from_slice(&line);

        if echo {
            let written = match sink.write_all(&line).await {
                Ok(()) => sink.flush().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                warn!("Failed to echo test output: {}", e);
                echo = false;
            }
        }
    }

    Ok(String::from_utf8_lossy(&captured).into_owned())
}
