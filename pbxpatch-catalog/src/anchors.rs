//! Section markers used as insertion points.
//!
//! Each marker is assumed to occur exactly once in a well-formed
//! project.pbxproj; the engine does not verify uniqueness.

pub const END_BUILD_FILE: &str = "/* End PBXBuildFile section */";
pub const END_CONTAINER_ITEM_PROXY: &str = "/* End PBXContainerItemProxy section */";
pub const BEGIN_FILE_REFERENCE: &str = "/* Begin PBXFileReference section */";
pub const END_FILE_REFERENCE: &str = "/* End PBXFileReference section */";
pub const END_SYNC_ROOT_GROUP: &str = "/* End PBXFileSystemSynchronizedRootGroup section */";
pub const END_FRAMEWORKS_PHASE: &str = "/* End PBXFrameworksBuildPhase section */";
pub const END_NATIVE_TARGET: &str = "/* End PBXNativeTarget section */";
pub const END_RESOURCES_PHASE: &str = "/* End PBXResourcesBuildPhase section */";
pub const END_SOURCES_PHASE: &str = "/* End PBXSourcesBuildPhase section */";
pub const END_TARGET_DEPENDENCY: &str = "/* End PBXTargetDependency section */";
pub const END_BUILD_CONFIGURATION: &str = "/* End XCBuildConfiguration section */";
pub const END_CONFIGURATION_LIST: &str = "/* End XCConfigurationList section */";
