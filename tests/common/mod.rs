// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

use matrix_verify::matrix::{ConfigurationDescriptor, ToolSet, BASELINE_OPTIONS};

/// Creates a scratch area holding a fake source tree, the fake tool scripts
/// and the trace log they append to.
pub fn setup_test_environment() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir(temp_dir.path().join("source")).expect("Failed to create source directory");
    temp_dir
}

pub fn source_dir(env: &TempDir) -> PathBuf {
    env.path().join("source")
}

pub fn trace_path(env: &TempDir) -> PathBuf {
    env.path().join("trace.log")
}

/// Reads the invocation trace the fake tools produced, one line per call.
pub fn read_trace(env: &TempDir) -> Vec<String> {
    fs::read_to_string(trace_path(env))
        .unwrap_or_default()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Writes an executable shell script that appends `<step> <args>` to the
/// trace log and then runs `extra` (empty for a plain success tool).
#[cfg(unix)]
pub fn fake_tool(env: &TempDir, name: &str, step: &str, extra: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = env.path().join(name);
    let script = format!(
        "#!/bin/sh\necho \"{step} $*\" >> '{log}'\n{extra}\nexit 0\n",
        step = step,
        log = trace_path(env).display(),
        extra = extra,
    );
    fs::write(&path, script).expect("Failed to write fake tool script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
    path.to_string_lossy().into_owned()
}

/// A tool set whose three tools all succeed and record their invocations.
#[cfg(unix)]
pub fn recording_tools(env: &TempDir) -> ToolSet {
    ToolSet {
        configure: fake_tool(env, "fake-configure", "configure", ""),
        build: fake_tool(env, "fake-build", "build", ""),
        test: fake_tool(env, "fake-test", "test", ""),
    }
}

/// Builds a descriptor the way the matrix does: shared baseline first, then
/// the preset-specific extension.
pub fn descriptor(name: &str, extension: &[&str], filters: &[&str]) -> ConfigurationDescriptor {
    let baseline: Vec<String> = BASELINE_OPTIONS.iter().map(|s| s.to_string()).collect();
    let extension: Vec<String> = extension.iter().map(|s| s.to_string()).collect();
    ConfigurationDescriptor::new(
        name,
        &baseline,
        &extension,
        filters.iter().map(|s| s.to_string()).collect(),
    )
}

/// Writes a matrix file pointing at the given tools, with `entries` supplying
/// the raw `[[configurations]]` tables.
#[cfg(unix)]
pub fn write_matrix_file(env: &TempDir, tools: &ToolSet, entries: &str) -> PathBuf {
    let path = env.path().join("Matrix.toml");
    let content = format!(
        r#"language = "en"

[tools]
configure = "{configure}"
build = "{build}"
test = "{test}"

{entries}
"#,
        configure = tools.configure,
        build = tools.build,
        test = tools.test,
        entries = entries,
    );
    fs::write(&path, content).expect("Failed to write matrix file");
    path
}
