//! # Driver Module / 驱动器模块
//!
//! Iterates the configuration set in declaration order and runs the pipeline
//! for each entry unconditionally. One configuration's outcome never decides
//! whether the next one runs; the only thing that stops the matrix is an
//! unusable environment.
//!
//! 按声明顺序迭代配置集合，并无条件地为每个条目运行流水线。
//! 一个配置的结果绝不会决定下一个是否运行；
//! 唯一能使矩阵停止的是不可用的环境。

use colored::*;

use crate::core::matrix::ConfigurationSet;
use crate::core::models::RunOutcome;
use crate::core::pipeline::{run_pipeline, RunContext};
use crate::infra::t;
use crate::infra::workspace::WorkspaceError;

/// Runs every descriptor of the set to completion, strictly sequentially.
///
/// Configurations share the single workspace path, so descriptor i's cleanup
/// must finish before descriptor i+1's prepare begins; awaiting each pipeline
/// to completion gives exactly that bracketing. Only a [`WorkspaceError`]
/// escapes; it aborts the remaining matrix.
///
/// 严格按顺序将集合中的每个描述符运行到完成。
///
/// 各配置共享同一个工作区路径，因此描述符 i 的清理必须在描述符 i+1 的准备开始之前完成；
/// 等待每条流水线完成恰好给出了这种括号式的顺序。
/// 只有 [`WorkspaceError`] 会逃逸；它会中止剩余的矩阵。
pub async fn run_matrix(
    cx: &RunContext,
    set: &ConfigurationSet,
) -> Result<Vec<RunOutcome>, WorkspaceError> {
    let total = set.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, descriptor) in set.iter().enumerate() {
        println!(
            "\n{}",
            t!(
                "run.starting",
                index = index + 1,
                total = total,
                name = &descriptor.name
            )
            .bold()
        );

        let outcome = run_pipeline(cx, descriptor).await?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
