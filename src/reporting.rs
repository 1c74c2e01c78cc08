//! # Reporting Module / 报告模块
//!
//! This module handles the display of verification results. All reporting goes
//! to standard output; the harness persists no state of its own.
//!
//! 此模块处理验证结果的显示。所有报告都输出到标准输出；
//! 工具自身不持久化任何状态。

pub mod console;

// Re-export common reporting functions
pub use console::{print_failure_details, print_summary};
