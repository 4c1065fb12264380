//! inco - Groovy script tester and uploader
//!
//! テストの実行と、統合プラットフォームへのスクリプトアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use inco::adapter::config::Config;
use inco::driver::{Args, IncoWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let Some(command) = args.command else {
        println!("inco !");
        return Ok(());
    };

    // Load configuration; empty URLs fall back to the environment
    let config = Config::load(&args.config)?.with_env_fallbacks();

    // Create workflow with injected configuration
    let workflow = IncoWorkflow::new(config);

    workflow.execute(command).await
}
