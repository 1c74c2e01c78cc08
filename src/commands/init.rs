//! # Init Command Module / 初始化命令模块
//!
//! Scaffolds a `Matrix.toml` containing the built-in matrix, giving users a
//! starting point to extend with their own configurations.
//!
//! 生成包含内置矩阵的 `Matrix.toml`，为用户提供扩展自己配置的起点。

use anyhow::{bail, Context, Result};
use colored::*;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

use crate::core::matrix::{MatrixFile, DEFAULT_MATRIX_FILE};
use crate::infra::t;

/// Writes the default matrix file into the current directory.
///
/// An existing file is never overwritten silently: interactively the user is
/// asked, non-interactively the command refuses.
///
/// 将默认矩阵文件写入当前目录。
///
/// 已存在的文件绝不会被静默覆盖：交互模式下询问用户，非交互模式下命令拒绝执行。
pub fn run_init(locale: &str, non_interactive: bool) -> Result<()> {
    let path = Path::new(DEFAULT_MATRIX_FILE);

    if path.exists() {
        if non_interactive {
            bail!(t!("init.exists", locale = locale, path = path.display()).to_string());
        }

        let overwrite = Confirm::new()
            .with_prompt(
                t!("init.exists_overwrite", locale = locale, path = path.display()).to_string(),
            )
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", t!("init.aborted", locale = locale).yellow());
            return Ok(());
        }
    }

    let contents = toml::to_string_pretty(&MatrixFile::builtin())
        .context("failed to serialize the default matrix")?;
    fs::write(path, contents)
        .with_context(|| t!("init.write_failed", locale = locale, path = path.display()).to_string())?;

    println!(
        "{}",
        t!("init.written", locale = locale, path = path.display()).green()
    );
    Ok(())
}
