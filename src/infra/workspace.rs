//! # Workspace Module / 工作区模块
//!
//! This module manages the isolated working directory in which one
//! configuration is configured, built and tested. The directory is created
//! immediately before a pipeline run and removed immediately after it,
//! success or failure; it never outlives its owning run.
//!
//! 此模块管理隔离的工作目录，单个配置在其中进行 configure、build 和 test。
//! 该目录在流水线运行开始前立即创建，运行结束后立即删除，无论成功与否；
//! 它绝不会比拥有它的运行存活得更久。

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed relative location of the workspace under the source tree.
/// 工作区在源码树下的固定相对位置。
pub const WORKSPACE_DIR_NAME: &str = "build";

/// Which filesystem operation a [`WorkspaceError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceAction {
    Create,
    Remove,
}

/// A fatal environment error: the workspace directory could not be created or
/// removed. This aborts the entire run, not just the current configuration,
/// because the environment itself is unusable until the operator intervenes.
///
/// 致命的环境错误：工作区目录无法创建或删除。
/// 这会中止整个运行，而不仅仅是当前配置，
/// 因为在操作者介入之前环境本身不可用。
#[derive(Debug)]
pub struct WorkspaceError {
    pub action: WorkspaceAction,
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            WorkspaceAction::Create => "create",
            WorkspaceAction::Remove => "remove",
        };
        write!(
            f,
            "failed to {} workspace directory '{}': {}",
            verb,
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// An exclusive handle to the working directory of one pipeline run.
/// The handle is threaded through each step explicitly; the process-wide
/// current directory is never changed. `clean` consumes the handle, so a
/// workspace can be released at most once and no step can use it afterwards.
///
/// 单个流水线运行的工作目录的独占句柄。
/// 句柄被显式地传递给每个步骤；进程级当前目录永远不会被更改。
/// `clean` 会消耗句柄，因此一个工作区最多只能被释放一次，之后任何步骤都无法再使用它。
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Creates the working directory. Fails if it already exists or cannot be
    /// created: a leftover or unwritable workspace means the environment is in
    /// an unknown state.
    ///
    /// 创建工作目录。如果它已存在或无法创建则失败：
    /// 残留的或不可写的工作区意味着环境处于未知状态。
    pub fn prepare(root: PathBuf) -> Result<Self, WorkspaceError> {
        fs::create_dir(&root).map_err(|source| WorkspaceError {
            action: WorkspaceAction::Create,
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// The directory in which the pipeline steps run.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Recursively removes the working directory, releasing the workspace.
    /// Invoked exactly once per `prepare`, on every exit path of the pipeline.
    ///
    /// 递归删除工作目录，释放工作区。
    /// 每次 `prepare` 恰好调用一次，覆盖流水线的每条退出路径。
    pub fn clean(self) -> Result<(), WorkspaceError> {
        fs::remove_dir_all(&self.root).map_err(|source| WorkspaceError {
            action: WorkspaceAction::Remove,
            path: self.root.clone(),
            source,
        })
    }
}
