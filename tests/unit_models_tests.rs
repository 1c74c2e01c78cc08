//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Unit tests for the run outcome classification and the error types.
//!
//! 针对运行结果分类和错误类型的单元测试。

mod common;

use matrix_verify::infra::workspace::{WorkspaceAction, WorkspaceError};
use matrix_verify::models::{RunOutcome, StepError};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(test)]
mod run_outcome_tests {
    use super::*;

    #[test]
    fn test_success_is_not_a_failure() {
        let outcome = RunOutcome::Success {
            descriptor: common::descriptor("ok", &[], &[]),
            duration: Duration::from_secs(3),
        };

        assert!(!outcome.is_failure());
        assert!(!outcome.is_broken_build());
        assert_eq!(outcome.configuration_name(), "ok");
        assert_eq!(outcome.duration(), Duration::from_secs(3));
        assert!(outcome.output().is_none());
    }

    #[test]
    fn test_configure_failure_is_a_broken_build() {
        let outcome = RunOutcome::ConfigureFailed {
            descriptor: common::descriptor("bad", &["-DX=1"], &[]),
            output: "CMake Error".to_string(),
            duration: Duration::from_secs(1),
        };

        assert!(outcome.is_failure());
        assert!(outcome.is_broken_build());
        assert_eq!(outcome.output(), Some("CMake Error"));
    }

    #[test]
    fn test_build_failure_is_a_broken_build() {
        let outcome = RunOutcome::BuildFailed {
            descriptor: common::descriptor("bad", &[], &[]),
            output: "make: *** [all] Error 2".to_string(),
            duration: Duration::from_secs(2),
        };

        assert!(outcome.is_failure());
        assert!(outcome.is_broken_build());
    }

    #[test]
    fn test_tests_failed_is_a_failure_but_not_broken() {
        // A test failure is data about the product, not an unbuildable
        // configuration.
        let outcome = RunOutcome::TestsFailed {
            descriptor: common::descriptor("flaky", &[], &["-E", "slow"]),
            output: "50% tests passed".to_string(),
            duration: Duration::from_secs(9),
        };

        assert!(outcome.is_failure());
        assert!(!outcome.is_broken_build());
        assert_eq!(outcome.output(), Some("50% tests passed"));
    }

    #[test]
    fn test_outcome_keeps_its_descriptor() {
        let descriptor = common::descriptor("keeper", &["-DY=2"], &[]);
        let outcome = RunOutcome::Success {
            descriptor: descriptor.clone(),
            duration: Duration::ZERO,
        };

        assert_eq!(outcome.descriptor(), &descriptor);
    }
}

#[cfg(test)]
mod step_error_tests {
    use super::*;

    #[test]
    fn test_configure_error_maps_to_configure_failed() {
        let err = StepError::Configure {
            output: "boom".to_string(),
        };
        let outcome =
            err.into_outcome(common::descriptor("c", &[], &[]), Duration::from_secs(1));

        assert!(matches!(outcome, RunOutcome::ConfigureFailed { .. }));
        assert_eq!(outcome.output(), Some("boom"));
    }

    #[test]
    fn test_build_error_maps_to_build_failed() {
        let err = StepError::Build {
            output: "boom".to_string(),
        };
        let outcome = err.into_outcome(common::descriptor("b", &[], &[]), Duration::ZERO);

        assert!(matches!(outcome, RunOutcome::BuildFailed { .. }));
    }

    #[test]
    fn test_into_output_yields_the_captured_text() {
        let err = StepError::Build {
            output: "captured".to_string(),
        };
        assert_eq!(err.into_output(), "captured");
    }

    #[test]
    fn test_display_names_the_step() {
        let configure = StepError::Configure {
            output: String::new(),
        };
        let build = StepError::Build {
            output: String::new(),
        };

        assert!(configure.to_string().contains("configuration"));
        assert!(build.to_string().contains("build"));
    }
}

#[cfg(test)]
mod workspace_error_tests {
    use super::*;

    fn workspace_error(action: WorkspaceAction) -> WorkspaceError {
        WorkspaceError {
            action,
            path: PathBuf::from("/tmp/somewhere/build"),
            source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "already there"),
        }
    }

    #[test]
    fn test_display_mentions_action_and_path() {
        let err = workspace_error(WorkspaceAction::Create);
        let text = err.to_string();

        assert!(text.contains("create"));
        assert!(text.contains("/tmp/somewhere/build"));
    }

    #[test]
    fn test_display_for_removal() {
        let err = workspace_error(WorkspaceAction::Remove);
        assert!(err.to_string().contains("remove"));
    }

    #[test]
    fn test_source_is_preserved() {
        let err = workspace_error(WorkspaceAction::Create);
        let source = err.source().expect("workspace errors carry their cause");
        assert!(source.to_string().contains("already there"));
    }
}
