//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Matrix Verify,
//! including command execution, workspace management and i18n support.
//!
//! 此模块为 Matrix Verify 提供基础设施服务，
//! 包括命令执行、工作区管理和国际化支持。

pub mod command;
pub mod workspace;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
