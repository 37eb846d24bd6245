//! Splice engine for anchored pbxproj edits.
//!
//! Responsibilities:
//! - Apply a catalog of splice operations to a document in memory, in
//!   order, with per-step match accounting.
//! - Write the result back all-or-nothing: in the default fail-fast mode
//!   a single missed anchor aborts the run before any byte is written.
//! - Generate a unified diff preview and a byte-level change record.

use anyhow::Context;
use camino::Utf8Path;
use chrono::Utc;
use diffy::PatchFormatter;
use fs_err as fs;
use pbxpatch_types::ops::{SpliceKind, SpliceOp, StepId};
use pbxpatch_types::report::{FileChange, PatchSummary, StepResult, StepStatus};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

mod error;

pub use error::{PatchError, PatchResult};

/// What to do when a step's anchor or old block is absent.
///
/// `Fail` is the hardened default: the file is written only when every
/// step matched. `Skip` replicates the historical partial-patch behavior
/// for callers that depend on it; misses are still reported and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingAnchor {
    #[default]
    Fail,
    Skip,
}

#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub dry_run: bool,
    pub on_missing: MissingAnchor,
    pub backup: bool,
    pub backup_suffix: String,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            on_missing: MissingAnchor::Fail,
            backup: true,
            backup_suffix: ".pbxpatch.bak".to_string(),
        }
    }
}

/// Everything a patch run produced, written or not.
#[derive(Debug)]
pub struct PatchOutcome {
    /// The patched document text (partial in `Skip` mode).
    pub document: String,
    pub results: Vec<StepResult>,
    pub summary: PatchSummary,
    /// True when the file on disk was rewritten.
    pub applied: bool,
    pub change: Option<FileChange>,
    /// Unified diff between the on-disk text and `document`.
    pub diff: String,
}

/// Apply `ops` to `document` sequentially, in memory.
///
/// A step whose lookup text is absent records `AnchorMissing` and leaves
/// the document unchanged; later steps still run against the current text.
pub fn apply_ops(document: &str, ops: &[SpliceOp]) -> (String, Vec<StepResult>) {
    let mut current = document.to_string();
    let mut results = Vec::with_capacity(ops.len());

    for op in ops {
        match splice(&current, op) {
            Some(next) => {
                debug!(step = %op.step, "anchor matched");
                current = next;
                results.push(StepResult {
                    step: op.step,
                    status: StepStatus::Matched,
                    needle: None,
                });
            }
            None => {
                warn!(step = %op.step, "anchor not found");
                results.push(StepResult {
                    step: op.step,
                    status: StepStatus::AnchorMissing,
                    needle: Some(op.needle().to_string()),
                });
            }
        }
    }

    (current, results)
}

/// One splice against the first occurrence of the op's lookup text.
fn splice(document: &str, op: &SpliceOp) -> Option<String> {
    match &op.kind {
        SpliceKind::InsertBefore { anchor, block } => {
            let at = document.find(anchor.as_str())?;
            let mut out = String::with_capacity(document.len() + block.len());
            out.push_str(&document[..at]);
            out.push_str(block);
            out.push_str(&document[at..]);
            Some(out)
        }
        SpliceKind::ReplaceBlock { old, new } => {
            let at = document.find(old.as_str())?;
            let mut out = String::with_capacity(document.len() + new.len() - old.len());
            out.push_str(&document[..at]);
            out.push_str(new);
            out.push_str(&document[at + old.len()..]);
            Some(out)
        }
    }
}

pub fn summarize(results: &[StepResult]) -> PatchSummary {
    let mut summary = PatchSummary {
        steps_total: results.len() as u64,
        ..PatchSummary::default()
    };
    for r in results {
        match r.status {
            StepStatus::Matched => summary.matched += 1,
            StepStatus::AnchorMissing => summary.missing += 1,
        }
    }
    summary
}

/// Patch the file at `path` with `ops`.
///
/// Reads the whole file, applies the catalog in memory, then writes back
/// according to `opts`. In `Fail` mode any miss returns
/// [`PatchError::AnchorMiss`] and the file is byte-for-byte untouched.
pub fn patch_file(
    path: &Utf8Path,
    ops: &[SpliceOp],
    opts: &PatchOptions,
) -> PatchResult<PatchOutcome> {
    let before = fs::read_to_string(path).with_context(|| format!("read {}", path))?;

    let (after, results) = apply_ops(&before, ops);
    let summary = summarize(&results);

    let missing: Vec<StepId> = results
        .iter()
        .filter(|r| r.status == StepStatus::AnchorMissing)
        .map(|r| r.step)
        .collect();

    if !missing.is_empty() && opts.on_missing == MissingAnchor::Fail {
        return Err(PatchError::AnchorMiss {
            message: miss_message(&results),
            missing,
        });
    }

    let diff = render_patch(path, &before, &after);
    let changed = before != after;

    let mut applied = false;
    let mut change = None;

    if !opts.dry_run && changed {
        if opts.backup {
            let backup_path = format!("{}{}", path, opts.backup_suffix);
            fs::write(&backup_path, &before)
                .with_context(|| format!("write backup {}", backup_path))?;
            debug!("backed up original to {}", backup_path);
        }

        fs::write(path, &after).with_context(|| format!("write {}", path))?;
        applied = true;

        change = Some(FileChange {
            path: path.to_string(),
            before_sha256: sha256_hex(before.as_bytes()),
            after_sha256: sha256_hex(after.as_bytes()),
            before_bytes: before.len() as u64,
            after_bytes: after.len() as u64,
            applied_at: Some(Utc::now()),
        });

        info!(
            "patched {} ({} steps matched, {} missing)",
            path, summary.matched, summary.missing
        );
    }

    Ok(PatchOutcome {
        document: after,
        results,
        summary,
        applied,
        change,
        diff,
    })
}

fn miss_message(results: &[StepResult]) -> String {
    let parts: Vec<String> = results
        .iter()
        .filter(|r| r.status == StepStatus::AnchorMissing)
        .map(|r| {
            let needle = r.needle.as_deref().unwrap_or("");
            format!("{} (looking for {:?})", r.step, needle_preview(needle))
        })
        .collect();
    parts.join("; ")
}

/// First line of a lookup text, shortened for log and error messages.
fn needle_preview(needle: &str) -> String {
    let first = needle.lines().next().unwrap_or("");
    if first.len() > 60 {
        format!("{}...", &first[..60])
    } else if needle.lines().count() > 1 {
        format!("{}...", first)
    } else {
        first.to_string()
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let formatter = PatchFormatter::new();
    let patch = diffy::create_patch(before, after);
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }

    out
}
