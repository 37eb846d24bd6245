use crate::ops::StepId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Whether a step found its anchor (or old block) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Matched,
    AnchorMissing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub step: StepId,
    pub status: StepStatus,

    /// The literal text the step searched for; set when the step missed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needle: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchSummary {
    pub steps_total: u64,
    pub matched: u64,
    pub missing: u64,
}

/// Byte-level record of the file the patcher rewrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub before_sha256: String,
    pub after_sha256: String,
    pub before_bytes: u64,
    pub after_bytes: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
}

/// The on-disk report artifact for one patch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,

    /// Path of the descriptor file the run targeted.
    pub target: String,

    /// True when the file on disk was rewritten (not a dry-run or abort).
    pub applied: bool,

    #[serde(default)]
    pub results: Vec<StepResult>,

    pub summary: PatchSummary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<FileChange>,
}

impl PatchReport {
    pub fn new(tool: ToolInfo, target: impl Into<String>) -> Self {
        Self {
            schema: crate::schema::PBXPATCH_REPORT_V1.to_string(),
            tool,
            run: RunInfo {
                started_at: Some(Utc::now()),
                ended_at: None,
            },
            target: target.into(),
            applied: false,
            results: vec![],
            summary: PatchSummary::default(),
            change: None,
        }
    }
}
