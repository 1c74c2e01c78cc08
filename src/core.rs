//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Matrix Verify,
//! including the configuration matrix, the verification pipeline and the driver.
//!
//! 此模块包含 Matrix Verify 的核心功能，
//! 包括配置矩阵、验证流水线和驱动器。

pub mod driver;
pub mod matrix;
pub mod models;
pub mod pipeline;

// Re-exports
pub use matrix::{ConfigurationDescriptor, ConfigurationSet};
pub use models::RunOutcome;
pub use pipeline::{run_pipeline, RunContext};
