//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション（依存性注入とユースケースの起動）

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::{Config, Credentials, ENV_API_URL, ENV_TOKEN_URL};
use crate::adapter::http::ReqwestTransport;
use crate::adapter::integration_suite::IntegrationSuiteClient;
use crate::adapter::repositories::fs_script_reader::FsScriptReader;
use crate::adapter::repositories::process_test_runner::ProcessTestRunner;
use crate::application::dto::connection_config::ConnectionConfig;
use crate::application::use_cases::run_tests::RunTestsUseCase;
use crate::application::use_cases::upload_scripts::{UploadScriptsUseCase, UploadSummary};
use crate::domain::entities::iflow::count_scripts;
use crate::domain::entities::test_outcome::TestReport;

use super::cli::Command;

/// Strips trailing slashes so endpoint paths can be appended
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// One-line result of a test run, marked ✓ only when everything passed
pub fn format_test_summary(report: &TestReport) -> String {
    let marker = if report.is_success() { "✓" } else { "✗" };
    format!(
        "{} {} passed, {} failed",
        marker,
        report.passed_count(),
        report.failed_count()
    )
}

/// inco Workflow
pub struct IncoWorkflow {
    config: Config,
}

impl IncoWorkflow {
    /// Create a new workflow instance with the loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the requested command
    pub async fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::Test => {
                self.run_tests().await?;
            }
            Command::Upload => {
                let credentials = Credentials::from_env()?;
                self.run_uploads(credentials).await?;
            }
        }
        Ok(())
    }

    /// Run every configured test path
    pub async fn run_tests(&self) -> Result<TestReport> {
        info!("Running tests with {}", self.config.test_command);

        let runner = Arc::new(ProcessTestRunner::new(
            self.config.test_command.clone(),
            self.config.test_classpath.clone(),
        ));
        let report = RunTestsUseCase::new(runner)
            .execute(&self.config.test_paths)
            .await;

        println!("{}", format_test_summary(&report));

        if !report.is_success() {
            anyhow::bail!("tests failed");
        }

        Ok(report)
    }

    /// Upload every configured script to the integration platform
    pub async fn run_uploads(&self, credentials: Credentials) -> Result<UploadSummary> {
        if self.config.token_url.is_empty() {
            anyhow::bail!(
                "tokenURL is not configured (set it in the config file or {})",
                ENV_TOKEN_URL
            );
        }
        if self.config.api_url.is_empty() {
            anyhow::bail!(
                "apiURL is not configured (set it in the config file or {})",
                ENV_API_URL
            );
        }

        println!("✓ Using configuration:");
        if !self.config.tenant_url.is_empty() {
            println!("  Tenant: {}", self.config.tenant_url);
        }
        println!("  API: {}", self.config.api_url);
        println!(
            "  Scripts: {} in {} iflows",
            count_scripts(&self.config.upload_scripts),
            self.config.upload_scripts.len()
        );

        let transport = ReqwestTransport::new(self.config.timeout())?;
        let connection = ConnectionConfig::new(
            self.config.token_url.clone(),
            normalize_base_url(&self.config.api_url),
            credentials.client_id,
            credentials.client_secret,
        );
        let mut client = IntegrationSuiteClient::new(transport, connection);

        let use_case = UploadScriptsUseCase::new(Arc::new(FsScriptReader::new()));
        let summary = use_case
            .execute(&mut client, &self.config.upload_scripts)
            .await?;

        println!("Upload completed !");

        Ok(summary)
    }
}
