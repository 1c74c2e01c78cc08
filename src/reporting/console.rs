//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the final verification report: a per-configuration
//! summary table and, for every failed configuration, the captured tool
//! output. Reading this text is how failures are discovered; the process exit
//! code deliberately says nothing about them.
//!
//! 此模块打印最终验证报告：每个配置的摘要表格，
//! 以及每个失败配置所捕获的工具输出。
//! 失败只能通过阅读这些文本来发现；进程退出码刻意不反映它们。

use colored::*;

use crate::core::models::RunOutcome;
use crate::infra::t;

/// Prints a formatted summary of the matrix run to the console.
/// Displays a table with status, configuration name and duration,
/// using color coding to highlight the different outcomes.
///
/// 在控制台打印矩阵运行的格式化摘要。
/// 显示一个包含状态、配置名称和持续时间的表格，
/// 使用颜色编码突出显示不同的结果。
///
/// # Output Format / 输出格式
/// ```text
/// --- Verification Summary ---
///   - Verified          | baseline                                 |      12.3s
///   - Build Failed      | ecc-prime-projc                          |       4.1s
///   - Tests Failed      | ecc-edwards-projc                        |      10.8s
/// ```
pub fn print_summary(outcomes: &[RunOutcome], locale: &str) {
    println!("\n{}", t!("summary_banner", locale = locale).bold());

    for outcome in outcomes {
        let status_str = outcome.status_str(locale);
        let duration_str = format!("{:.2?}", outcome.duration());

        let status_colored = match outcome {
            RunOutcome::Success { .. } => status_str.green(),
            RunOutcome::TestsFailed { .. } => status_str.yellow(),
            _ => status_str.red(),
        };

        println!(
            "  - {:<18} | {:<40} | {:>10}",
            status_colored,
            outcome.configuration_name(),
            duration_str
        );
    }
}

/// Prints detailed information about every failed configuration: which step
/// broke, the full option list, and the captured tool output.
///
/// 打印每个失败配置的详细信息：哪个步骤出了问题、
/// 完整的选项列表，以及捕获的工具输出。
///
/// # Behavior / 行为
/// - Returns early if there are no failures
/// - Uses a different log header for configure, build and test output
/// - Includes separator lines for visual clarity
///
/// - 如果没有失败则提前返回
/// - configure、build 和测试输出使用不同的日志标题
/// - 包含分隔线以提高视觉清晰度
pub fn print_failure_details(failures: &[&RunOutcome], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("failure_details_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, outcome) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("report.header_failure", locale = locale).red(),
            outcome.configuration_name().cyan()
        );
        println!(
            "  {}",
            t!(
                "report.build_options",
                locale = locale,
                options = format!("{:?}", outcome.descriptor().build_options)
            )
        );

        let log_header = match outcome {
            RunOutcome::ConfigureFailed { .. } => t!("report.configure_log", locale = locale),
            RunOutcome::BuildFailed { .. } => t!("report.build_log", locale = locale),
            _ => t!("report.test_log", locale = locale),
        };

        if let Some(output) = outcome.output() {
            println!("\n--- {} ---\n", log_header.yellow());
            println!("{}", output);
        }
        println!("\n{}", "-".repeat(80));
    }
}
