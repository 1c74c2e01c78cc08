//! # Verification Pipeline Module / 验证流水线模块
//!
//! This module runs the full prepare→configure→build→test→clean sequence for a
//! single configuration descriptor. The states advance in strict order with no
//! branching back; the terminal state is always the cleaned workspace.
//!
//! A configure or build failure abandons the remaining forward states and goes
//! straight to cleanup: the configuration is unbuildable and nothing downstream
//! is meaningful. A test failure is an observation about the product under
//! test, so it is reported and the pipeline completes as usual. Failures are
//! values, never unwinds, and none of them escapes to the driver.
//!
//! 此模块为单个配置描述符运行完整的 prepare→configure→build→test→clean 序列。
//! 状态严格顺序推进，不会回退；终止状态始终是已清理的工作区。
//!
//! configure 或 build 失败会放弃剩余的前进状态并直接进入清理：
//! 该配置无法构建，后续步骤没有意义。测试失败是对被测产品的观察，
//! 因此被报告后流水线照常完成。失败是值而非展开，并且都不会逃逸到驱动器。

use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use crate::core::matrix::{ConfigurationDescriptor, ToolSet};
use crate::core::models::{RunOutcome, StepError};
use crate::infra::command::spawn_and_capture;
use crate::infra::t;
use crate::infra::workspace::{Workspace, WorkspaceError, WORKSPACE_DIR_NAME};

/// Everything a pipeline run needs, threaded through each step explicitly.
/// The process-wide current directory is never touched.
///
/// 流水线运行所需的一切，显式地传递给每个步骤。
/// 进程级当前目录永远不会被修改。
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Canonical path of the source tree handed to the configuration tool.
    /// 传给配置工具的源码树规范路径。
    pub source_dir: PathBuf,
    /// Where the workspace directory is created for every run.
    /// 每次运行创建工作区目录的位置。
    pub workspace_root: PathBuf,
    /// Parallelism degree handed to the build and test tools.
    /// 传给构建和测试工具的并行度。
    pub jobs: usize,
    /// The external tools to delegate to / 委托的外部工具
    pub tools: ToolSet,
}

impl RunContext {
    /// Builds a context rooted at `source_dir`, with the workspace at its
    /// fixed relative location.
    pub fn new(source_dir: PathBuf, jobs: usize, tools: ToolSet) -> Self {
        let workspace_root = source_dir.join(WORKSPACE_DIR_NAME);
        Self {
            source_dir,
            workspace_root,
            jobs,
            tools,
        }
    }
}

/// Runs the full pipeline for one descriptor.
///
/// The workspace is prepared first and released exactly once as the final
/// step, on every path out of the run. Only a [`WorkspaceError`] propagates to
/// the caller: the environment is unusable and the whole matrix must stop.
/// Every other failure is folded into the returned [`RunOutcome`].
///
/// 为一个描述符运行完整流水线。
///
/// 工作区首先被准备，并在每条退出路径上作为最后一步恰好释放一次。
/// 只有 [`WorkspaceError`] 会传播给调用者：环境不可用，整个矩阵必须停止。
/// 其他所有失败都被折叠进返回的 [`RunOutcome`]。
pub async fn run_pipeline(
    cx: &RunContext,
    descriptor: &ConfigurationDescriptor,
) -> Result<RunOutcome, WorkspaceError> {
    let workspace = Workspace::prepare(cx.workspace_root.clone())?;

    // run_steps is infallible by construction, so the clean below is reached
    // on every path on which prepare succeeded.
    let outcome = run_steps(cx, &workspace, descriptor).await;

    workspace.clean()?;
    Ok(outcome)
}

/// The forward states of the pipeline: configure, build, test.
async fn run_steps(
    cx: &RunContext,
    workspace: &Workspace,
    descriptor: &ConfigurationDescriptor,
) -> RunOutcome {
    let start = Instant::now();

    if let Err(err) = configure(cx, workspace, descriptor).await {
        return abandon(descriptor, err, start);
    }

    if let Err(err) = build(cx, workspace, descriptor).await {
        return abandon(descriptor, err, start);
    }

    match test(cx, workspace, descriptor).await {
        TestStatus::Passed => {
            let duration = start.elapsed();
            println!(
                "{}",
                t!(
                    "run.configuration_passed",
                    name = &descriptor.name,
                    duration = format!("{:.2}", duration.as_secs_f64())
                )
                .green()
            );
            RunOutcome::Success {
                descriptor: descriptor.clone(),
                duration,
            }
        }
        TestStatus::Failed { output } => {
            // Reported, not gating: the pipeline completed.
            // 仅报告，不作为门禁：流水线已完成。
            println!(
                "{}",
                t!(
                    "run.tests_failed",
                    name = &descriptor.name,
                    options = format!("{:?}", descriptor.build_options)
                )
                .yellow()
            );
            RunOutcome::TestsFailed {
                descriptor: descriptor.clone(),
                output,
                duration: start.elapsed(),
            }
        }
    }
}

/// Records a configure/build failure with the descriptor's contents and skips
/// straight to cleanup.
///
/// 记录 configure/build 失败及描述符的内容，并直接跳到清理。
fn abandon(
    descriptor: &ConfigurationDescriptor,
    err: StepError,
    start: Instant,
) -> RunOutcome {
    println!(
        "{}",
        t!(
            "run.configuration_broken",
            name = &descriptor.name,
            step = err.to_string(),
            options = format!("{:?}", descriptor.build_options)
        )
        .red()
    );
    err.into_outcome(descriptor.clone(), start.elapsed())
}

/// Outcome of the test step. Spawn failures are folded into `Failed`, like any
/// other non-zero exit: they say nothing about the harness itself.
/// 测试步骤的结果。启动失败与其他非零退出一样折叠进 `Failed`：
/// 它们与工具本身无关。
enum TestStatus {
    Passed,
    Failed { output: String },
}

/// Invokes the external configuration tool with the descriptor's build options
/// plus the source-directory argument, inside the workspace.
///
/// 在工作区内调用外部配置工具，传入描述符的构建选项和源码目录参数。
async fn configure(
    cx: &RunContext,
    workspace: &Workspace,
    descriptor: &ConfigurationDescriptor,
) -> Result<(), StepError> {
    println!(
        "{}",
        t!("run.configuring", name = &descriptor.name).blue()
    );

    let mut cmd = tokio::process::Command::new(&cx.tools.configure);
    cmd.args(&descriptor.build_options)
        .arg(&cx.source_dir)
        .kill_on_drop(true)
        .current_dir(workspace.path());

    let (status_res, output) = spawn_and_capture(cmd).await;
    relay_output(&output);

    match status_res {
        Ok(status) if status.success() => Ok(()),
        Ok(_) => Err(StepError::Configure { output }),
        Err(e) => Err(StepError::Configure {
            output: join_spawn_error(output, &cx.tools.configure, e),
        }),
    }
}

/// Invokes the external build tool with the configured parallelism degree.
///
/// 以配置的并行度调用外部构建工具。
async fn build(
    cx: &RunContext,
    workspace: &Workspace,
    descriptor: &ConfigurationDescriptor,
) -> Result<(), StepError> {
    println!(
        "{}",
        t!("run.building", name = &descriptor.name, jobs = cx.jobs).blue()
    );

    let mut cmd = tokio::process::Command::new(&cx.tools.build);
    cmd.arg("-j")
        .arg(cx.jobs.to_string())
        .kill_on_drop(true)
        .current_dir(workspace.path());

    let (status_res, output) = spawn_and_capture(cmd).await;
    relay_output(&output);

    match status_res {
        Ok(status) if status.success() => Ok(()),
        Ok(_) => Err(StepError::Build { output }),
        Err(e) => Err(StepError::Build {
            output: join_spawn_error(output, &cx.tools.build, e),
        }),
    }
}

/// Invokes the external test tool with failure output enabled, the parallelism
/// degree, and the descriptor's exclusion filters. The exit code is observed
/// but never gates the pipeline.
///
/// 调用外部测试工具，启用失败输出、并行度和描述符的排除过滤器。
/// 退出码会被观察，但绝不作为流水线的门禁。
async fn test(
    cx: &RunContext,
    workspace: &Workspace,
    descriptor: &ConfigurationDescriptor,
) -> TestStatus {
    println!(
        "{}",
        t!("run.testing", name = &descriptor.name).blue()
    );

    let mut cmd = tokio::process::Command::new(&cx.tools.test);
    cmd.arg("--output-on-failure")
        .arg("-j")
        .arg(cx.jobs.to_string())
        .args(&descriptor.test_filters)
        .kill_on_drop(true)
        .current_dir(workspace.path());

    let (status_res, output) = spawn_and_capture(cmd).await;
    relay_output(&output);

    match status_res {
        Ok(status) if status.success() => TestStatus::Passed,
        Ok(_) => TestStatus::Failed { output },
        Err(e) => TestStatus::Failed {
            output: join_spawn_error(output, &cx.tools.test, e),
        },
    }
}

/// Forwards captured tool output to stdout, where all failure information for
/// the whole run lives.
/// 将捕获的工具输出转发到 stdout，整个运行的所有失败信息都在那里。
fn relay_output(output: &str) {
    if !output.trim().is_empty() {
        println!("{}", output.trim());
    }
}

/// Appends a spawn error to whatever output was captured before it happened.
fn join_spawn_error(output: String, tool: &str, e: std::io::Error) -> String {
    format!("{output}{}: {e}\n", tool)
}
