//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// Groovy スクリプトのテストと統合プラットフォームへのアップロードを行うCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "inco")]
#[command(about = "make groovy script manipulation easy", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Use config to run tests
    Test,
    /// Use config to upload iflow scripts
    Upload,
}
