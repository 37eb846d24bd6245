//! Fixed catalog of splice operations that register the EhDownloadWidget
//! app-extension target (Live Activity / Dynamic Island support) in the
//! host project's `project.pbxproj`.
//!
//! Nothing here is configurable: identifiers, names, and block text are
//! constants, and the operation order is load-bearing (later blocks
//! reference ids whose records earlier steps insert).

pub mod anchors;
pub mod blocks;
pub mod ids;

use pbxpatch_types::ops::{SpliceOp, StepId};

/// Where the host project's descriptor lives, relative to the repo root.
pub const DEFAULT_PBXPROJ_PATH: &str = "ehviewer apple.xcodeproj/project.pbxproj";

/// The full splice sequence, in application order.
pub fn widget_extension_ops() -> Vec<SpliceOp> {
    vec![
        SpliceOp::insert_before(
            StepId::BuildFileEmbed,
            anchors::END_BUILD_FILE,
            blocks::build_file_entry(),
        ),
        SpliceOp::insert_before(
            StepId::ContainerItemProxy,
            anchors::END_CONTAINER_ITEM_PROXY,
            blocks::container_item_proxy(),
        ),
        // The host project has no PBXCopyFilesBuildPhase section at all, so
        // a whole new section goes in ahead of PBXFileReference.
        SpliceOp::insert_before(
            StepId::EmbedCopyPhaseSection,
            anchors::BEGIN_FILE_REFERENCE,
            blocks::embed_copy_phase_section(),
        ),
        SpliceOp::insert_before(
            StepId::ProductFileReference,
            anchors::END_FILE_REFERENCE,
            blocks::product_file_reference(),
        ),
        SpliceOp::insert_before(
            StepId::SyncRootGroup,
            anchors::END_SYNC_ROOT_GROUP,
            blocks::sync_root_group(),
        ),
        SpliceOp::insert_before(
            StepId::FrameworksPhase,
            anchors::END_FRAMEWORKS_PHASE,
            blocks::frameworks_phase(),
        ),
        SpliceOp::replace_block(
            StepId::ProductsGroupChild,
            blocks::products_group_old(),
            blocks::products_group_new(),
        ),
        SpliceOp::replace_block(
            StepId::MainGroupChild,
            blocks::main_group_old(),
            blocks::main_group_new(),
        ),
        SpliceOp::insert_before(
            StepId::NativeTarget,
            anchors::END_NATIVE_TARGET,
            blocks::native_target(),
        ),
        SpliceOp::replace_block(
            StepId::ProjectTargetList,
            blocks::project_targets_old(),
            blocks::project_targets_new(),
        ),
        SpliceOp::replace_block(
            StepId::ProjectTargetAttributes,
            blocks::target_attributes_old(),
            blocks::target_attributes_new(),
        ),
        SpliceOp::replace_block(
            StepId::AppTargetEmbed,
            blocks::app_target_old(),
            blocks::app_target_new(),
        ),
        SpliceOp::insert_before(
            StepId::ResourcesPhase,
            anchors::END_RESOURCES_PHASE,
            blocks::resources_phase(),
        ),
        SpliceOp::insert_before(
            StepId::SourcesPhase,
            anchors::END_SOURCES_PHASE,
            blocks::sources_phase(),
        ),
        SpliceOp::insert_before(
            StepId::TargetDependency,
            anchors::END_TARGET_DEPENDENCY,
            blocks::target_dependency(),
        ),
        // Debug goes in first; inserting Release at the same End marker
        // afterwards lands it directly after Debug.
        SpliceOp::insert_before(
            StepId::BuildConfigDebug,
            anchors::END_BUILD_CONFIGURATION,
            blocks::build_configuration_debug(),
        ),
        SpliceOp::insert_before(
            StepId::BuildConfigRelease,
            anchors::END_BUILD_CONFIGURATION,
            blocks::build_configuration_release(),
        ),
        SpliceOp::insert_before(
            StepId::ConfigList,
            anchors::END_CONFIGURATION_LIST,
            blocks::configuration_list(),
        ),
    ]
}
