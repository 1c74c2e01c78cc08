//! # Matrix Module Unit Tests / Matrix 模块单元测试
//!
//! Unit tests for descriptor construction, set ordering and matrix file
//! parsing.
//!
//! 针对描述符构造、集合顺序和矩阵文件解析的单元测试。

mod common;

use matrix_verify::matrix::{
    load_matrix_file, ConfigurationDescriptor, ConfigurationSet, MatrixFile, BASELINE_OPTIONS,
};
use std::fs;
use tempfile::tempdir;

fn baseline() -> Vec<String> {
    BASELINE_OPTIONS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod descriptor_tests {
    use super::*;

    #[test]
    fn test_baseline_comes_first() {
        let d = ConfigurationDescriptor::new(
            "ecc",
            &baseline(),
            &["-DFP_PRIME=255".to_string()],
            vec![],
        );

        assert_eq!(
            d.build_options,
            vec!["-DSEED=ZERO", "-DBENCH=0", "-DFP_PRIME=255"]
        );
    }

    #[test]
    fn test_extension_order_is_preserved() {
        let extension = vec![
            "-DA=1".to_string(),
            "-DB=2".to_string(),
            "-DA=3".to_string(),
        ];
        let d = ConfigurationDescriptor::new("dup", &baseline(), &extension, vec![]);

        // Options are opaque: no deduplication, later flags stay later.
        assert_eq!(&d.build_options[2..], &["-DA=1", "-DB=2", "-DA=3"]);
    }

    #[test]
    fn test_empty_extension_yields_exactly_the_baseline() {
        let d = ConfigurationDescriptor::new("base", &baseline(), &[], vec![]);
        assert_eq!(d.build_options, baseline());
    }
}

#[cfg(test)]
mod configuration_set_tests {
    use super::*;

    #[test]
    fn test_builtin_matrix_declaration_order() {
        let set = ConfigurationSet::builtin();

        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "baseline",
                "ecc-prime-projc",
                "ecc-edwards-projc",
                "ecc-edwards-extnd"
            ]
        );
    }

    #[test]
    fn test_builtin_matrix_baseline_prefix() {
        let set = ConfigurationSet::builtin();

        for d in &set {
            assert!(
                d.build_options.starts_with(&baseline()),
                "configuration '{}' does not start with the baseline options",
                d.name
            );
        }
    }

    #[test]
    fn test_builtin_matrix_filters() {
        let set = ConfigurationSet::builtin();
        let first = set.iter().next().unwrap();
        let last = set.iter().last().unwrap();

        assert_eq!(first.test_filters, vec!["-E", "test_bn|test_fpx"]);
        assert_eq!(
            last.test_filters,
            vec!["-E", "test_bn|test_fb|test_fpx|test_eb|test_ec"]
        );
        assert!(
            last.build_options
                .contains(&"-DED_METHD='EXTND;LWNAF_MIXED;LWNAF_MIXED;BASIC'".to_string())
        );
    }

    #[test]
    fn test_push_is_append_only() {
        let mut set = ConfigurationSet::builtin();
        let before: Vec<String> = set.iter().map(|d| d.name.clone()).collect();

        set.push(common::descriptor("extra", &["-DX=1"], &[]));

        let after: Vec<String> = set.iter().map(|d| d.name.clone()).collect();
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().map(String::as_str), Some("extra"));
    }

    #[test]
    fn test_empty_set() {
        let set = ConfigurationSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}

#[cfg(test)]
mod matrix_file_tests {
    use super::*;

    #[test]
    fn test_defaults_for_minimal_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("Matrix.toml");
        fs::write(
            &path,
            r#"
[[configurations]]
name = "only"
"#,
        )
        .unwrap();

        let file = load_matrix_file(&path).unwrap();

        assert_eq!(file.language, "en");
        assert_eq!(file.baseline, baseline());
        assert_eq!(file.tools.configure, "cmake");
        assert_eq!(file.tools.build, "make");
        assert_eq!(file.tools.test, "ctest");

        let set = file.to_set();
        assert_eq!(set.len(), 1);
        let d = set.iter().next().unwrap();
        assert_eq!(d.name, "only");
        // No extension, no filters: the descriptor is exactly the baseline.
        assert_eq!(d.build_options, baseline());
        assert!(d.test_filters.is_empty());
    }

    #[test]
    fn test_file_order_is_execution_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("Matrix.toml");
        fs::write(
            &path,
            r#"
[[configurations]]
name = "zeta"

[[configurations]]
name = "alpha"

[[configurations]]
name = "middle"
"#,
        )
        .unwrap();

        let set = load_matrix_file(&path).unwrap().to_set();
        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();

        // Declaration order, never sorted.
        assert_eq!(names, vec!["zeta", "alpha", "middle"]);
    }

    #[test]
    fn test_tools_and_baseline_override() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("Matrix.toml");
        fs::write(
            &path,
            r#"
language = "zh-CN"
baseline = ["-DCUSTOM=1"]

[tools]
configure = "cmake3"

[[configurations]]
name = "custom"
build = ["-DEXTRA=1"]
test = ["-E", "slow"]
"#,
        )
        .unwrap();

        let file = load_matrix_file(&path).unwrap();
        assert_eq!(file.language, "zh-CN");
        assert_eq!(file.tools.configure, "cmake3");
        // Unspecified tools keep their defaults.
        assert_eq!(file.tools.build, "make");

        let set = file.to_set();
        let d = set.iter().next().unwrap();
        assert_eq!(d.build_options, vec!["-DCUSTOM=1", "-DEXTRA=1"]);
        assert_eq!(d.test_filters, vec!["-E", "slow"]);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("Matrix.toml");
        fs::write(
            &path,
            r#"
[[configurations]
name = "broken"
"#,
        )
        .unwrap();

        assert!(load_matrix_file(&path).is_err());
    }

    #[test]
    fn test_entry_without_name_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("Matrix.toml");
        fs::write(
            &path,
            r#"
[[configurations]]
build = ["-DX=1"]
"#,
        )
        .unwrap();

        assert!(load_matrix_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let temp = tempdir().unwrap();
        assert!(load_matrix_file(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_builtin_serializes_to_a_loadable_file() {
        // The init command writes exactly this serialization; it must load
        // back into the same matrix.
        let temp = tempdir().unwrap();
        let path = temp.path().join("Matrix.toml");
        let serialized = toml::to_string_pretty(&MatrixFile::builtin()).unwrap();
        fs::write(&path, serialized).unwrap();

        let reloaded = load_matrix_file(&path).unwrap();
        let original = MatrixFile::builtin().to_set();
        let roundtrip = reloaded.to_set();

        assert_eq!(roundtrip.len(), original.len());
        for (a, b) in original.iter().zip(roundtrip.iter()) {
            assert_eq!(a, b);
        }
    }
}
