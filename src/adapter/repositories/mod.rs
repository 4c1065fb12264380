//! Repository Implementations
//!
//! Domain層の trait の実装

pub mod fs_script_reader;
pub mod process_test_runner;
