//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which drives every configuration
//! of the matrix through its pipeline and reports the outcomes.
//!
//! 此模块实现 `run` 命令，驱动矩阵中的每个配置完成其流水线并报告结果。

use anyhow::{Context, Result};
use colored::*;
use std::{env, fs, path::PathBuf};

use crate::{
    core::{
        driver,
        matrix::{self, MatrixFile},
        pipeline::RunContext,
    },
    infra::t,
    reporting::{print_failure_details, print_summary},
};

/// Executes the run command with the provided arguments.
///
/// The process exits successfully once every configuration has been attempted,
/// no matter how many of them failed: failures are discovered by reading the
/// emitted report. Only an unusable environment (workspace errors, an
/// unreadable matrix file, a missing source tree) produces a non-zero exit.
///
/// # Arguments
/// * `jobs` - Parallelism degree for the external tools; defaults to the
///   available logical CPU count
/// * `config` - Optional path to a matrix file; the built-in matrix otherwise
/// * `source_dir` - Path to the source tree under verification
/// * `language` - The locale selected before the matrix file was read
///
/// 一旦每个配置都被尝试过，进程即成功退出，无论其中有多少失败：
/// 失败通过阅读输出的报告来发现。只有不可用的环境
/// （工作区错误、不可读的矩阵文件、缺失的源码树）才会产生非零退出。
pub async fn execute(
    jobs: Option<usize>,
    config: Option<PathBuf>,
    source_dir: PathBuf,
    language: &str,
) -> Result<()> {
    let (matrix_file, config_path) = match config {
        Some(path) => {
            let matrix_file = matrix::load_matrix_file(&path)?;
            (matrix_file, Some(path))
        }
        None => (MatrixFile::builtin(), None),
    };

    // A matrix file's language wins over the detected one, like any of its
    // other settings.
    let locale = match config_path {
        Some(_) => matrix_file.language.clone(),
        None => language.to_string(),
    };
    rust_i18n::set_locale(&locale);

    let source_root = fs::canonicalize(&source_dir)
        .with_context(|| t!("source_dir_not_found", path = source_dir.display()).to_string())?;

    println!(
        "{}",
        t!("source_root_detected", path = source_root.display())
    );
    match &config_path {
        Some(path) => println!("{}", t!("matrix_loaded", path = path.display())),
        None => println!("{}", t!("matrix_builtin")),
    }

    let set = matrix_file.to_set();
    if set.is_empty() {
        println!("{}", t!("no_configurations").green());
        return Ok(());
    }

    let jobs = jobs.unwrap_or_else(num_cpus::get);
    println!(
        "{}",
        t!("verifying_configurations", count = set.len(), jobs = jobs).bold()
    );
    println!("{}", t!("current_os", os = env::consts::OS).cyan());

    let cx = RunContext::new(source_root, jobs, matrix_file.tools.clone());
    let outcomes = driver::run_matrix(&cx, &set).await?;

    print_summary(&outcomes, &locale);

    let failures: Vec<_> = outcomes.iter().filter(|o| o.is_failure()).collect();
    if failures.is_empty() {
        println!("\n{}", t!("all_configurations_passed").green().bold());
    } else {
        print_failure_details(&failures, &locale);
        println!(
            "\n{}",
            t!(
                "some_configurations_failed",
                failed = failures.len(),
                total = outcomes.len()
            )
            .red()
            .bold()
        );
    }

    Ok(())
}
