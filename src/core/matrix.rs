//! # Configuration Matrix Module / 配置矩阵模块
//!
//! This module defines the build-configuration matrix: immutable descriptors
//! for each matrix entry, the ordered set they form, and the optional TOML
//! matrix file they can be loaded from.
//!
//! 此模块定义构建配置矩阵：每个矩阵条目的不可变描述符、
//! 它们组成的有序集合，以及可选的 TOML 矩阵文件加载方式。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infra::t;

/// Build options shared by every configuration: a deterministic seed and
/// benchmarking disabled. Preset-specific options are appended after these,
/// because later flags win under the configuration tool's own resolution rules.
///
/// 每个配置共享的构建选项：确定性种子并禁用基准测试。
/// 预设特定的选项附加在这些之后，因为在配置工具自己的解析规则下后面的标志优先。
pub const BASELINE_OPTIONS: &[&str] = &["-DSEED=ZERO", "-DBENCH=0"];

/// The default file name scaffolded by `init` and read by `--config`.
pub const DEFAULT_MATRIX_FILE: &str = "Matrix.toml";

/// One entry of the verification matrix: the complete, ordered list of
/// build-time options and the ordered list of test exclusion filters.
/// Immutable once constructed; option strings are opaque to this layer and
/// are never deduplicated or validated.
///
/// 验证矩阵的一个条目：完整、有序的构建选项列表和有序的测试排除过滤器列表。
/// 构造后不可变；选项字符串对本层是不透明的，不会被去重或校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDescriptor {
    /// The name of the configuration, used for identification in logs.
    /// 配置的名称，用于在日志中进行识别。
    pub name: String,
    /// The full option list handed to the configuration tool, baseline first.
    /// 传给配置工具的完整选项列表，基线选项在前。
    pub build_options: Vec<String>,
    /// Exclusion patterns handed verbatim to the test runner.
    /// 原样传给测试运行器的排除模式。
    pub test_filters: Vec<String>,
}

impl ConfigurationDescriptor {
    /// Builds a descriptor from a baseline and a preset-specific extension.
    /// The baseline always comes first; order is preserved on both sides.
    pub fn new(
        name: impl Into<String>,
        baseline: &[String],
        extension: &[String],
        test_filters: Vec<String>,
    ) -> Self {
        let mut build_options = baseline.to_vec();
        build_options.extend(extension.iter().cloned());
        Self {
            name: name.into(),
            build_options,
            test_filters,
        }
    }
}

/// The external tools the pipeline delegates to. Names are resolved through
/// `PATH`; a matrix file may override them, which is also how the integration
/// tests substitute recording stubs.
///
/// 流水线委托的外部工具。名称通过 `PATH` 解析；
/// 矩阵文件可以覆盖它们，集成测试也以此方式替换为记录用的桩工具。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSet {
    /// The build-configuration tool / 构建配置工具
    #[serde(default = "default_configure_tool")]
    pub configure: String,
    /// The build tool / 构建工具
    #[serde(default = "default_build_tool")]
    pub build: String,
    /// The test-execution tool / 测试执行工具
    #[serde(default = "default_test_tool")]
    pub test: String,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self {
            configure: default_configure_tool(),
            build: default_build_tool(),
            test: default_test_tool(),
        }
    }
}

fn default_configure_tool() -> String {
    "cmake".to_string()
}

fn default_build_tool() -> String {
    "make".to_string()
}

fn default_test_tool() -> String {
    "ctest".to_string()
}

/// One `[[configurations]]` entry of a matrix file. `build` holds only the
/// preset-specific extension; the shared baseline is prepended at set
/// construction time.
///
/// 矩阵文件的一个 `[[configurations]]` 条目。`build` 仅包含预设特定的扩展；
/// 共享基线在构造集合时被添加到前面。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// The unique name for the configuration / 配置的唯一名称
    pub name: String,
    /// Preset-specific options appended after the baseline.
    /// 附加在基线之后的预设特定选项。
    #[serde(default)]
    pub build: Vec<String>,
    /// Test exclusion filters for this configuration.
    /// 此配置的测试排除过滤器。
    #[serde(default)]
    pub test: Vec<String>,
}

/// The entire verification matrix, either built in or loaded from a TOML file.
/// It contains global settings and the ordered list of configurations.
///
/// 整个验证矩阵，可以是内置的，也可以从 TOML 文件加载。
/// 它包含全局设置和有序的配置列表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixFile {
    /// The language for the harness's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The shared baseline prepended to every configuration's options.
    /// 添加到每个配置选项前面的共享基线。
    #[serde(default = "default_baseline")]
    pub baseline: Vec<String>,

    /// External tool overrides / 外部工具覆盖
    #[serde(default)]
    pub tools: ToolSet,

    /// The ordered matrix entries; declaration order is execution order.
    /// 有序的矩阵条目；声明顺序即执行顺序。
    pub configurations: Vec<MatrixEntry>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_baseline() -> Vec<String> {
    BASELINE_OPTIONS.iter().map(|s| s.to_string()).collect()
}

impl MatrixFile {
    /// The built-in matrix, used whenever no `--config` file is given and
    /// serialized verbatim by the `init` command. The option strings are
    /// opaque, including their embedded quotes.
    ///
    /// 内置矩阵，在未给出 `--config` 文件时使用，并由 `init` 命令原样序列化。
    /// 选项字符串是不透明的，包括其中嵌入的引号。
    pub fn builtin() -> Self {
        let entry = |name: &str, build: &[&str], test: &[&str]| MatrixEntry {
            name: name.to_string(),
            build: build.iter().map(|s| s.to_string()).collect(),
            test: test.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            language: default_language(),
            baseline: default_baseline(),
            tools: ToolSet::default(),
            configurations: vec![
                entry("baseline", &[], &["-E", "test_bn|test_fpx"]),
                entry(
                    "ecc-prime-projc",
                    &[
                        "-DFP_PRIME=255",
                        "-DEC_METHD='PRIME'",
                        "-DEP_METHD='PROJC;LWNAF;LWNAF;BASIC'",
                    ],
                    &["-E", "test_bn|test_fb|test_fpx|test_eb"],
                ),
                entry(
                    "ecc-edwards-projc",
                    &[
                        "-DFP_PRIME=255",
                        "-DEC_METHD='EDWARD'",
                        "-DED_METHD='PROJC;LWNAF;LWNAF;BASIC'",
                    ],
                    &["-E", "test_bn|test_fb|test_fpx|test_eb"],
                ),
                entry(
                    "ecc-edwards-extnd",
                    &[
                        "-DFP_PRIME=255",
                        "-DEC_METHD='EDWARD'",
                        "-DED_METHD='EXTND;LWNAF_MIXED;LWNAF_MIXED;BASIC'",
                    ],
                    &["-E", "test_bn|test_fb|test_fpx|test_eb|test_ec"],
                ),
            ],
        }
    }

    /// Expands the matrix entries into the ordered set of full descriptors.
    pub fn to_set(&self) -> ConfigurationSet {
        let mut set = ConfigurationSet::new();
        for entry in &self.configurations {
            set.push(ConfigurationDescriptor::new(
                entry.name.clone(),
                &self.baseline,
                &entry.build,
                entry.test.clone(),
            ));
        }
        set
    }
}

/// The ordered list of descriptors to verify. Insertion order is execution
/// order and is preserved under iteration; entries can only be appended, so
/// adding a configuration never reorders the existing ones.
///
/// 要验证的描述符的有序列表。插入顺序即执行顺序，并在迭代时保持；
/// 条目只能追加，因此新增配置不会改变已有配置的相对顺序。
#[derive(Debug, Clone, Default)]
pub struct ConfigurationSet {
    descriptors: Vec<ConfigurationDescriptor>,
}

impl ConfigurationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in four-entry matrix in declaration order.
    pub fn builtin() -> Self {
        MatrixFile::builtin().to_set()
    }

    /// Appends a descriptor at the end of the execution order.
    pub fn push(&mut self, descriptor: ConfigurationDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigurationDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConfigurationSet {
    type Item = &'a ConfigurationDescriptor;
    type IntoIter = std::slice::Iter<'a, ConfigurationDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Loads and parses a matrix file.
///
/// 加载并解析矩阵文件。
pub fn load_matrix_file(path: &Path) -> Result<MatrixFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| t!("config_read_failed_path", path = path.display()).to_string())?;
    let matrix: MatrixFile =
        toml::from_str(&contents).with_context(|| t!("config_parse_failed").to_string())?;
    Ok(matrix)
}
