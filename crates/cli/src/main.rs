use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use redress_core::{
    confirm_stdin, execute_plan, list_entries, load_config, load_config_from, plan_batch,
    plan_single, validate_template, ConfigError, RenamePlan, RunMode, RunResult,
};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "redress-cli")]
#[command(about = "テンプレートの連番マーカー '!' でファイル名を一括リネームします")]
struct Cli {
    #[arg(long, help = "実行モード。b (一括) または s (単一ファイル)")]
    mode: Option<String>,
    #[arg(long, help = "新しいファイル名テンプレート。例: filename!")]
    filename: Option<String>,
    #[arg(long, help = "単一モードでリネームする対象ファイル名")]
    targetfile: Option<String>,
    #[arg(long, help = "作業ディレクトリ。省略時はカレントディレクトリ")]
    dir: Option<PathBuf>,
    #[arg(long, help = "設定ファイルのパス。省略時はOS標準の設定ディレクトリ")]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = RunMode::parse(cli.mode.as_deref().ok_or(ConfigError::MissingMode)?)?;
    let working_dir = match cli.dir.clone() {
        Some(dir) => dir,
        None => env::current_dir().context("カレントディレクトリを取得できませんでした")?,
    };

    match mode {
        RunMode::Batch => cmd_batch(&cli, &working_dir),
        RunMode::Single => cmd_single(&cli, &working_dir),
    }
}

fn cmd_batch(cli: &Cli, working_dir: &Path) -> Result<()> {
    let template = cli
        .filename
        .as_deref()
        .ok_or(ConfigError::MissingFileName)?;
    validate_template(template)?;

    let prompt = format!(
        "{} 内のすべてのファイルをリネームします? Y or N",
        working_dir.display()
    );
    if !confirm_stdin(&prompt)? {
        bail!("リネームを中止しました");
    }

    let entries = list_entries(working_dir)?;
    let plan = plan_batch(&entries, template, &exclusion_names(cli.config.as_deref())?)?;
    let result = execute_plan(working_dir, &plan);
    report(cli.output, &plan, &result)
}

fn cmd_single(cli: &Cli, working_dir: &Path) -> Result<()> {
    let new_name = cli
        .filename
        .as_deref()
        .ok_or(ConfigError::MissingFileName)?;
    let target = cli
        .targetfile
        .as_deref()
        .ok_or(ConfigError::MissingTargetFile)?;

    let prompt = format!("{} を {} にリネームします? Y or N", target, new_name);
    if !confirm_stdin(&prompt)? {
        bail!("リネームを中止しました");
    }

    let entries = list_entries(working_dir)?;
    let plan = plan_single(&entries, target, new_name);
    if plan.items.is_empty() {
        eprintln!("対象ファイルが見つかりませんでした: {}", target);
    }

    let result = execute_plan(working_dir, &plan);
    report(cli.output, &plan, &result)
}

// 実行ファイル自身と設定で指定された名前は一括リネームの対象から外す
fn exclusion_names(config_path: Option<&Path>) -> Result<HashSet<String>> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    let mut names: HashSet<String> = config.exclude_names.into_iter().collect();

    if let Ok(exe) = env::current_exe() {
        if let Some(name) = exe.file_name() {
            names.insert(name.to_string_lossy().to_string());
        }
    }

    Ok(names)
}

fn report(output: OutputFormat, plan: &RenamePlan, result: &RunResult) -> Result<()> {
    for failure in &result.failures {
        eprintln!(
            "リネームに失敗しました: {} -> {}: {}",
            failure.source_name, failure.destination_name, failure.reason
        );
    }

    let completion = format!(
        "リネーム完了: {}件 (失敗 {}件)",
        result.renamed,
        result.failures.len()
    );

    match output {
        OutputFormat::Json => {
            let body = serde_json::json!({ "plan": plan, "result": result });
            println!("{}", serde_json::to_string_pretty(&body)?);
            println!("{completion}");
        }
        OutputFormat::Table => {
            for item in &plan.items {
                println!("{} -> {}", item.source_name, item.destination_name);
            }
            println!(
                "集計: listed={} dir_skip={} excluded_skip={} planned={}",
                plan.stats.listed,
                plan.stats.skipped_directories,
                plan.stats.skipped_excluded,
                plan.stats.planned
            );
            println!("{completion}");
        }
    }

    Ok(())
}
