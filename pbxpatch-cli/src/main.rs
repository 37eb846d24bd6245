mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Parser;
use config::{ConfigMerger, OnMissingAnchor};
use fs_err as fs;
use pbxpatch_catalog::{DEFAULT_PBXPROJ_PATH, blocks, widget_extension_ops};
use pbxpatch_edit::{PatchError, PatchOptions, PatchOutcome, patch_file};
use pbxpatch_types::ops::{SpliceKind, SpliceOp};
use pbxpatch_types::report::{PatchReport, ToolInfo};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "pbxpatch",
    version,
    about = "Registers the EhDownloadWidget app-extension target in project.pbxproj."
)]
struct Cli {
    /// Path to the project descriptor.
    #[arg(default_value = DEFAULT_PBXPROJ_PATH)]
    pbxproj: Utf8PathBuf,

    /// Compute the patch and artifacts without writing the descriptor.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// What to do when a step's anchor or old block is absent.
    #[arg(long, value_enum)]
    on_missing_anchor: Option<OnMissingAnchor>,

    /// Skip the backup copy normally written next to the descriptor.
    #[arg(long, default_value_t = false)]
    no_backup: bool,

    /// Override the backup file suffix.
    #[arg(long)]
    backup_suffix: Option<String>,

    /// Directory to write run artifacts (patch.diff, patch.json).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// List the catalog steps and exit without touching any file.
    #[arg(long, default_value_t = false)]
    list_steps: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match real_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn real_main(cli: Cli) -> Result<(), PatchError> {
    let ops = widget_extension_ops();

    if cli.list_steps {
        print_steps(&ops);
        return Ok(());
    }

    let file_config =
        config::load_or_default(Utf8Path::new(".")).context("load pbxpatch.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_args(
        cli.on_missing_anchor,
        cli.no_backup,
        cli.backup_suffix.clone(),
    );

    debug!(
        "merged config: on_missing_anchor={:?}, backup_enabled={}, backup_suffix={}",
        merged.on_missing_anchor, merged.backup_enabled, merged.backup_suffix
    );

    let opts = PatchOptions {
        dry_run: cli.dry_run,
        on_missing: merged.on_missing_anchor.into(),
        backup: merged.backup_enabled,
        backup_suffix: merged.backup_suffix,
    };

    let outcome = patch_file(&cli.pbxproj, &ops, &opts)?;

    if let Some(out_dir) = &cli.out_dir {
        write_artifacts(out_dir, &cli.pbxproj, &outcome).context("write artifacts")?;
        info!("wrote artifacts to {}", out_dir);
    }

    if cli.dry_run {
        println!(
            "dry-run: {} of {} steps match {}; nothing written",
            outcome.summary.matched, outcome.summary.steps_total, cli.pbxproj
        );
    } else if outcome.applied {
        println!(
            "\u{2705} Successfully added {} extension target to {}",
            blocks::TARGET_NAME,
            cli.pbxproj
        );
    }

    Ok(())
}

fn print_steps(ops: &[SpliceOp]) {
    println!("Catalog steps, in application order:\n");
    println!("  {:<28} {:<14} ANCHOR", "STEP", "KIND");
    println!("  {:<28} {:<14} ------", "----", "----");
    for op in ops {
        let (kind, anchor) = match &op.kind {
            SpliceKind::InsertBefore { anchor, .. } => ("insert-before", anchor.clone()),
            SpliceKind::ReplaceBlock { old, .. } => {
                ("replace-block", first_line(old))
            }
        };
        println!("  {:<28} {:<14} {}", op.step, kind, anchor);
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}

fn write_artifacts(
    out_dir: &Utf8Path,
    target: &Utf8Path,
    outcome: &PatchOutcome,
) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;

    fs::write(out_dir.join("patch.diff"), &outcome.diff)?;

    let mut report = PatchReport::new(tool_info(), target.as_str());
    report.run.ended_at = Some(Utc::now());
    report.applied = outcome.applied;
    report.results = outcome.results.clone();
    report.summary = outcome.summary.clone();
    report.change = outcome.change.clone();
    write_json(&out_dir.join("patch.json"), &report)?;

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "pbxpatch".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
