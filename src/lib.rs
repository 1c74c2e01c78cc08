//! # Matrix Verify Library / Matrix Verify 库
//!
//! This library provides the core functionality for the Matrix Verify tool,
//! a build-verification harness that drives a matrix of CMake configurations
//! through isolated configure, build and test cycles.
//!
//! 此库为 Matrix Verify 工具提供核心功能，
//! 这是一个构建验证工具，在隔离的 configure、build 和 test 周期中
//! 驱动一个 CMake 配置矩阵。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration matrix, verification pipeline and driver
//! - `infra` - Infrastructure services like command execution and workspace management
//! - `reporting` - Verification result reporting
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置矩阵、验证流水线和驱动器
//! - `infra` - 基础设施服务，如命令执行和工作区管理
//! - `reporting` - 验证结果报告
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::driver;
pub use crate::core::matrix;
pub use crate::core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
