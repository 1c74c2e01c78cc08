// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::{commands, infra::t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("matrix-verify")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("source-dir")
                        .long("source-dir")
                        .help(t!("arg_source_dir", locale = locale).to_string())
                        .value_name("SOURCE_DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Write the default matrix file without prompting; refuse to overwrite.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let jobs = run_matches.get_one::<usize>("jobs").copied();
            let config = run_matches.get_one::<PathBuf>("config").cloned();
            let source_dir = run_matches
                .get_one::<PathBuf>("source-dir")
                .unwrap() // Has default
                .clone();

            commands::run::execute(jobs, config, source_dir, &language).await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::run_init(&language, non_interactive)?;
        }
        _ => {
            // Invoked bare: verify the built-in matrix against the current
            // directory. This is the whole contract of the harness; the
            // subcommands and flags are conveniences layered on top.
            commands::run::execute(None, None, PathBuf::from("."), &language).await?;
        }
    }
    Ok(())
}
