//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the harness:
//! the per-configuration run outcome and the error types produced by the
//! pipeline steps.
//!
//! 此模块定义整个工具中使用的核心数据结构：
//! 每个配置的运行结果以及流水线步骤产生的错误类型。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::core::matrix::ConfigurationDescriptor;
use crate::infra::t;

/// The final result of one configuration's pipeline run. Exactly one outcome
/// is produced per descriptor; outcomes are consumed for reporting only and
/// never halt the driver.
///
/// 单个配置流水线运行的最终结果。每个描述符恰好产生一个结果；
/// 结果仅用于报告，绝不会使驱动器停止。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Configure, build and tests all succeeded.
    /// configure、build 和测试全部成功。
    Success {
        /// The configuration that was verified / 被验证的配置
        descriptor: ConfigurationDescriptor,
        /// Wall time for the whole pipeline run / 整个流水线运行的耗时
        duration: Duration,
    },
    /// The configuration tool exited non-zero; build and tests were skipped.
    /// 配置工具以非零值退出；build 和测试被跳过。
    ConfigureFailed {
        descriptor: ConfigurationDescriptor,
        /// The captured tool output / 捕获的工具输出
        output: String,
        duration: Duration,
    },
    /// The build tool exited non-zero; tests were skipped.
    /// 构建工具以非零值退出；测试被跳过。
    BuildFailed {
        descriptor: ConfigurationDescriptor,
        output: String,
        duration: Duration,
    },
    /// The test tool exited non-zero. This is data about the product under
    /// test, not about the harness, so the pipeline still ran to completion.
    /// 测试工具以非零值退出。这是关于被测产品的数据，而不是关于工具本身，
    /// 因此流水线仍然运行到完成。
    TestsFailed {
        descriptor: ConfigurationDescriptor,
        output: String,
        duration: Duration,
    },
}

impl RunOutcome {
    /// The descriptor this outcome belongs to.
    pub fn descriptor(&self) -> &ConfigurationDescriptor {
        match self {
            RunOutcome::Success { descriptor, .. }
            | RunOutcome::ConfigureFailed { descriptor, .. }
            | RunOutcome::BuildFailed { descriptor, .. }
            | RunOutcome::TestsFailed { descriptor, .. } => descriptor,
        }
    }

    /// Gets the name of the configuration for display.
    /// 获取配置名称以供显示。
    pub fn configuration_name(&self) -> &str {
        &self.descriptor().name
    }

    /// Checks whether the outcome is any kind of failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, RunOutcome::Success { .. })
    }

    /// Checks whether the configuration itself was unbuildable, i.e. the
    /// pipeline aborted before the test step.
    /// 检查配置本身是否无法构建，即流水线在测试步骤之前中止。
    pub fn is_broken_build(&self) -> bool {
        matches!(
            self,
            RunOutcome::ConfigureFailed { .. } | RunOutcome::BuildFailed { .. }
        )
    }

    /// Wall time of the pipeline run up to the point the outcome was decided.
    pub fn duration(&self) -> Duration {
        match self {
            RunOutcome::Success { duration, .. }
            | RunOutcome::ConfigureFailed { duration, .. }
            | RunOutcome::BuildFailed { duration, .. }
            | RunOutcome::TestsFailed { duration, .. } => *duration,
        }
    }

    /// The captured tool output for failed runs. `None` for successful runs.
    /// 失败运行的捕获工具输出。成功运行为 `None`。
    pub fn output(&self) -> Option<&str> {
        match self {
            RunOutcome::Success { .. } => None,
            RunOutcome::ConfigureFailed { output, .. }
            | RunOutcome::BuildFailed { output, .. }
            | RunOutcome::TestsFailed { output, .. } => Some(output),
        }
    }

    /// Gets the status of the outcome as a localized string for display.
    /// 以本地化字符串形式获取结果状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            RunOutcome::Success { .. } => {
                t!("report.status_success", locale = locale).to_string()
            }
            RunOutcome::ConfigureFailed { .. } => {
                t!("report.status_configure_failed", locale = locale).to_string()
            }
            RunOutcome::BuildFailed { .. } => {
                t!("report.status_build_failed", locale = locale).to_string()
            }
            RunOutcome::TestsFailed { .. } => {
                t!("report.status_tests_failed", locale = locale).to_string()
            }
        }
    }
}

/// A per-configuration fatal step failure. Either of these aborts the
/// remaining forward states of the pipeline and sends it straight to cleanup;
/// neither is ever re-raised past the pipeline boundary.
///
/// 单个配置的致命步骤失败。任何一个都会中止流水线剩余的前进状态并直接进入清理；
/// 两者都不会越过流水线边界再次抛出。
#[derive(Debug)]
pub enum StepError {
    /// The configuration tool exited non-zero or could not be spawned.
    /// 配置工具以非零值退出或无法启动。
    Configure { output: String },
    /// The build tool exited non-zero or could not be spawned.
    /// 构建工具以非零值退出或无法启动。
    Build { output: String },
}

impl StepError {
    /// Consumes the error and yields the captured output for the outcome record.
    pub fn into_output(self) -> String {
        match self {
            StepError::Configure { output } | StepError::Build { output } => output,
        }
    }

    /// Converts the step failure into the outcome recorded for the descriptor.
    /// 将步骤失败转换为为该描述符记录的结果。
    pub fn into_outcome(
        self,
        descriptor: ConfigurationDescriptor,
        duration: Duration,
    ) -> RunOutcome {
        match self {
            StepError::Configure { output } => RunOutcome::ConfigureFailed {
                descriptor,
                output,
                duration,
            },
            StepError::Build { output } => RunOutcome::BuildFailed {
                descriptor,
                output,
                duration,
            },
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Configure { .. } => write!(f, "configuration step failed"),
            StepError::Build { .. } => write!(f, "build step failed"),
        }
    }
}

impl std::error::Error for StepError {}
