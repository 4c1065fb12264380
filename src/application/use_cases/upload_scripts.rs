//! # Upload Scripts Use Case
//!
//! スクリプト一括アップロードユースケース
//!
//! セットアップ（トークン取得、CSRF トークン取得）は失敗した時点で全体を中断する。
//! 個々のスクリプトの読み込み・更新の失敗はログに記録して次へ進み、
//! 最後に1つの集約エラーとして返す。

use std::sync::Arc;

use log::{error, info};
use thiserror::Error;

use crate::domain::entities::iflow::{count_scripts, Iflow, Script};
use crate::domain::errors::ClientError;
use crate::domain::repositories::integration_client::IntegrationClient;
use crate::domain::repositories::script_reader::ScriptReader;

/// アップロード実行のエラー
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("RequestToken")]
    RequestToken(#[source] ClientError),

    #[error("FetchCSRFToken")]
    FetchCsrfToken(#[source] ClientError),

    /// Individual causes are only reported through the log.
    #[error("some reading/uploading scripts failed ({failed} of {total})")]
    ScriptsFailed { failed: usize, total: usize },
}

/// アップロード結果のサマリー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded_count: usize,
    pub failed_count: usize,
}

/// スクリプト一括アップロードユースケース
pub struct UploadScriptsUseCase<R: ScriptReader> {
    script_reader: Arc<R>,
}

impl<R: ScriptReader> UploadScriptsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `script_reader` - スクリプト内容の読み込み元
    pub fn new(script_reader: Arc<R>) -> Self {
        Self { script_reader }
    }

    /// 認証してから全 Iflow の全スクリプトを順番にアップロードする
    ///
    /// # Errors
    ///
    /// - トークン取得に失敗した場合は [`UploadError::RequestToken`]（アップロードは行わない）
    /// - CSRF トークン取得に失敗した場合は [`UploadError::FetchCsrfToken`]
    /// - 1つでもスクリプトが失敗した場合は [`UploadError::ScriptsFailed`]
    pub async fn execute<C: IntegrationClient>(
        &self,
        client: &mut C,
        iflows: &[Iflow],
    ) -> Result<UploadSummary, UploadError> {
        info!("Requesting access token");
        client
            .request_token()
            .await
            .map_err(UploadError::RequestToken)?;

        info!("Fetching CSRF token");
        client
            .fetch_csrf_token()
            .await
            .map_err(UploadError::FetchCsrfToken)?;

        let total = count_scripts(iflows);
        info!("Uploading {} scripts from {} iflows", total, iflows.len());

        let mut summary = UploadSummary::default();

        for iflow in iflows {
            for script in &iflow.scripts {
                if self.upload_script(client, iflow, script).await {
                    summary.uploaded_count += 1;
                } else {
                    summary.failed_count += 1;
                }
            }
        }

        if summary.failed_count > 0 {
            return Err(UploadError::ScriptsFailed {
                failed: summary.failed_count,
                total,
            });
        }

        Ok(summary)
    }

    /// 1つのスクリプトを読み込んでアップロードする。失敗はここでログに記録する。
    async fn upload_script<C: IntegrationClient>(
        &self,
        client: &C,
        iflow: &Iflow,
        script: &Script,
    ) -> bool {
        let payload = match self.script_reader.read(&script.path).await {
            Ok(payload) => payload,
            Err(e) => {
                error!(
                    "Failed to read script {} ({}) of iflow {} {}: {:#}",
                    script.id, script.path, iflow.id, iflow.version, e
                );
                println!("✗ Failed to read {}", script.id);
                return false;
            }
        };

        match client.update_resource(&payload, iflow, script).await {
            Ok(()) => {
                info!(
                    "Uploaded script {} to iflow {} {}",
                    script.id, iflow.id, iflow.version
                );
                println!("✓ Uploaded {}", script.id);
                true
            }
            Err(e) => {
                error!(
                    "Failed to upload script {} to iflow {} {}: {:#}",
                    script.id, iflow.id, iflow.version, e
                );
                match e.status() {
                    Some(status) => println!("✗ Failed to upload {} ({})", script.id, status),
                    None => println!("✗ Failed to upload {}", script.id),
                }
                false
            }
        }
    }
}
