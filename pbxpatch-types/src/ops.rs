use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of one splice step, in catalog order.
///
/// Every step the patcher performs has an entry here; reports and
/// anchor-miss errors refer to steps by these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    BuildFileEmbed,
    ContainerItemProxy,
    EmbedCopyPhaseSection,
    ProductFileReference,
    SyncRootGroup,
    FrameworksPhase,
    ProductsGroupChild,
    MainGroupChild,
    NativeTarget,
    ProjectTargetList,
    ProjectTargetAttributes,
    AppTargetEmbed,
    ResourcesPhase,
    SourcesPhase,
    TargetDependency,
    BuildConfigDebug,
    BuildConfigRelease,
    ConfigList,
}

impl StepId {
    /// All steps, in the order the catalog applies them.
    pub const ALL: [StepId; 18] = [
        StepId::BuildFileEmbed,
        StepId::ContainerItemProxy,
        StepId::EmbedCopyPhaseSection,
        StepId::ProductFileReference,
        StepId::SyncRootGroup,
        StepId::FrameworksPhase,
        StepId::ProductsGroupChild,
        StepId::MainGroupChild,
        StepId::NativeTarget,
        StepId::ProjectTargetList,
        StepId::ProjectTargetAttributes,
        StepId::AppTargetEmbed,
        StepId::ResourcesPhase,
        StepId::SourcesPhase,
        StepId::TargetDependency,
        StepId::BuildConfigDebug,
        StepId::BuildConfigRelease,
        StepId::ConfigList,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::BuildFileEmbed => "build-file-embed",
            StepId::ContainerItemProxy => "container-item-proxy",
            StepId::EmbedCopyPhaseSection => "embed-copy-phase-section",
            StepId::ProductFileReference => "product-file-reference",
            StepId::SyncRootGroup => "sync-root-group",
            StepId::FrameworksPhase => "frameworks-phase",
            StepId::ProductsGroupChild => "products-group-child",
            StepId::MainGroupChild => "main-group-child",
            StepId::NativeTarget => "native-target",
            StepId::ProjectTargetList => "project-target-list",
            StepId::ProjectTargetAttributes => "project-target-attributes",
            StepId::AppTargetEmbed => "app-target-embed",
            StepId::ResourcesPhase => "resources-phase",
            StepId::SourcesPhase => "sources-phase",
            StepId::TargetDependency => "target-dependency",
            StepId::BuildConfigDebug => "build-config-debug",
            StepId::BuildConfigRelease => "build-config-release",
            StepId::ConfigList => "config-list",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One splice against the descriptor text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpliceKind {
    /// Splice `block` immediately before the first occurrence of `anchor`.
    InsertBefore { anchor: String, block: String },
    /// Substitute the first verbatim occurrence of `old` with `new`.
    ReplaceBlock { old: String, new: String },
}

/// A named splice operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpliceOp {
    pub step: StepId,
    #[serde(flatten)]
    pub kind: SpliceKind,
}

impl SpliceOp {
    pub fn insert_before(step: StepId, anchor: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            step,
            kind: SpliceKind::InsertBefore {
                anchor: anchor.into(),
                block: block.into(),
            },
        }
    }

    pub fn replace_block(step: StepId, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            step,
            kind: SpliceKind::ReplaceBlock {
                old: old.into(),
                new: new.into(),
            },
        }
    }

    /// The text this step looks up in the document (anchor or old block).
    pub fn needle(&self) -> &str {
        match &self.kind {
            SpliceKind::InsertBefore { anchor, .. } => anchor,
            SpliceKind::ReplaceBlock { old, .. } => old,
        }
    }

    /// Net growth of the document, in bytes, when this step matches.
    pub fn byte_delta(&self) -> i64 {
        match &self.kind {
            SpliceKind::InsertBefore { block, .. } => block.len() as i64,
            SpliceKind::ReplaceBlock { old, new } => new.len() as i64 - old.len() as i64,
        }
    }
}
