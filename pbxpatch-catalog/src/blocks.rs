//! Pre-formatted record blocks for the widget-extension target.
//!
//! The consuming toolchain is format-sensitive: tab indentation, comment
//! annotations, and line terminators must come out byte-exact, so blocks
//! are literal templates rather than anything serialized from a model.

use crate::ids;

pub const TARGET_NAME: &str = "EhDownloadWidget";
pub const PRODUCT_FILE: &str = "EhDownloadWidget.appex";
pub const EMBED_PHASE_NAME: &str = "Embed Foundation Extensions";
pub const BUNDLE_ID: &str = "Stellatrix.ehviewer-apple.EhDownloadWidget";
pub const MARKETING_VERSION: &str = "1.2.0";
pub const DEPLOYMENT_TARGET: &str = "18.0";
pub const SWIFT_VERSION: &str = "5.0";
pub const DEVELOPMENT_TEAM: &str = "HWZEUNLCY6";
pub const CREATED_ON_TOOLS_VERSION: &str = "26.2";

/// PBXBuildFile entry embedding the `.appex` into the host app.
pub fn build_file_entry() -> String {
    format!(
        "\t\t{embed} /* {product} in {phase} */ = {{isa = PBXBuildFile; fileRef = {file_ref} /* {product} */; settings = {{ATTRIBUTES = (RemoveHeadersOnCopy, ); }}; }};\n",
        embed = ids::EMBED_FILE,
        product = PRODUCT_FILE,
        phase = EMBED_PHASE_NAME,
        file_ref = ids::PRODUCT_REF,
    )
}

pub fn container_item_proxy() -> String {
    format!(
        "\t\t{proxy} /* PBXContainerItemProxy */ = {{\n\
         \t\t\tisa = PBXContainerItemProxy;\n\
         \t\t\tcontainerPortal = {project} /* Project object */;\n\
         \t\t\tproxyType = 1;\n\
         \t\t\tremoteGlobalIDString = {target};\n\
         \t\t\tremoteInfo = {name};\n\
         \t\t}};\n",
        proxy = ids::PROXY,
        project = ids::PROJECT,
        target = ids::TARGET,
        name = TARGET_NAME,
    )
}

/// A whole new PBXCopyFilesBuildPhase section; the host project has none.
/// Ends with a blank line so the following Begin marker keeps its spacing.
pub fn embed_copy_phase_section() -> String {
    format!(
        "/* Begin PBXCopyFilesBuildPhase section */\n\
         \t\t{phase} /* {phase_name} */ = {{\n\
         \t\t\tisa = PBXCopyFilesBuildPhase;\n\
         \t\t\tbuildActionMask = 2147483647;\n\
         \t\t\tdstPath = \"\";\n\
         \t\t\tdstSubfolderSpec = 13;\n\
         \t\t\tfiles = (\n\
         \t\t\t\t{embed} /* {product} in {phase_name} */,\n\
         \t\t\t);\n\
         \t\t\tname = \"{phase_name}\";\n\
         \t\t\trunOnlyForDeploymentPostprocessing = 0;\n\
         \t\t}};\n\
         /* End PBXCopyFilesBuildPhase section */\n\
         \n",
        phase = ids::EMBED_PHASE,
        phase_name = EMBED_PHASE_NAME,
        embed = ids::EMBED_FILE,
        product = PRODUCT_FILE,
    )
}

pub fn product_file_reference() -> String {
    format!(
        "\t\t{file_ref} /* {product} */ = {{isa = PBXFileReference; explicitFileType = \"wrapper.app-extension\"; includeInIndex = 0; path = {product}; sourceTree = BUILT_PRODUCTS_DIR; }};\n",
        file_ref = ids::PRODUCT_REF,
        product = PRODUCT_FILE,
    )
}

pub fn sync_root_group() -> String {
    format!(
        "\t\t{group} /* {name} */ = {{\n\
         \t\t\tisa = PBXFileSystemSynchronizedRootGroup;\n\
         \t\t\texceptions = (\n\
         \t\t\t);\n\
         \t\t\tpath = {name};\n\
         \t\t\tsourceTree = \"<group>\";\n\
         \t\t}};\n",
        group = ids::SYNC_GROUP,
        name = TARGET_NAME,
    )
}

fn empty_build_phase(id: &str, isa: &str, label: &str) -> String {
    format!(
        "\t\t{id} /* {label} */ = {{\n\
         \t\t\tisa = {isa};\n\
         \t\t\tbuildActionMask = 2147483647;\n\
         \t\t\tfiles = (\n\
         \t\t\t);\n\
         \t\t\trunOnlyForDeploymentPostprocessing = 0;\n\
         \t\t}};\n",
    )
}

pub fn frameworks_phase() -> String {
    empty_build_phase(ids::FRAMEWORKS_PHASE, "PBXFrameworksBuildPhase", "Frameworks")
}

pub fn resources_phase() -> String {
    empty_build_phase(ids::RESOURCES_PHASE, "PBXResourcesBuildPhase", "Resources")
}

pub fn sources_phase() -> String {
    empty_build_phase(ids::SOURCES_PHASE, "PBXSourcesBuildPhase", "Sources")
}

/// Products group as it exists in the host project today.
pub fn products_group_old() -> String {
    format!(
        "\t\t{products} /* Products */ = {{\n\
         \t\t\tisa = PBXGroup;\n\
         \t\t\tchildren = (\n\
         \t\t\t\t{app} /* ehviewer apple.app */,\n\
         \t\t\t\t{tests} /* ehviewer appleTests.xctest */,\n\
         \t\t\t\t{uitests} /* ehviewer appleUITests.xctest */,\n\
         \t\t\t);",
        products = ids::PRODUCTS_GROUP,
        app = ids::APP_PRODUCT,
        tests = ids::TESTS_PRODUCT,
        uitests = ids::UITESTS_PRODUCT,
    )
}

/// Products group with the `.appex` reference appended.
pub fn products_group_new() -> String {
    format!(
        "\t\t{products} /* Products */ = {{\n\
         \t\t\tisa = PBXGroup;\n\
         \t\t\tchildren = (\n\
         \t\t\t\t{app} /* ehviewer apple.app */,\n\
         \t\t\t\t{tests} /* ehviewer appleTests.xctest */,\n\
         \t\t\t\t{uitests} /* ehviewer appleUITests.xctest */,\n\
         \t\t\t\t{product_ref} /* {product} */,\n\
         \t\t\t);",
        products = ids::PRODUCTS_GROUP,
        app = ids::APP_PRODUCT,
        tests = ids::TESTS_PRODUCT,
        uitests = ids::UITESTS_PRODUCT,
        product_ref = ids::PRODUCT_REF,
        product = PRODUCT_FILE,
    )
}

pub fn main_group_old() -> String {
    format!(
        "\t\t{main} = {{\n\
         \t\t\tisa = PBXGroup;\n\
         \t\t\tchildren = (\n\
         \t\t\t\t{app_group} /* ehviewer apple */,\n\
         \t\t\t\t{uitests_group} /* ehviewer appleUITests */,\n\
         \t\t\t\t{products} /* Products */,\n\
         \t\t\t);",
        main = ids::MAIN_GROUP,
        app_group = ids::APP_GROUP,
        uitests_group = ids::UITESTS_GROUP,
        products = ids::PRODUCTS_GROUP,
    )
}

/// Root group with the extension's synchronized source group woven in
/// after the app group line.
pub fn main_group_new() -> String {
    format!(
        "\t\t{main} = {{\n\
         \t\t\tisa = PBXGroup;\n\
         \t\t\tchildren = (\n\
         \t\t\t\t{app_group} /* ehviewer apple */,\n\
         \t\t\t\t{sync_group} /* {name} */,\n\
         \t\t\t\t{uitests_group} /* ehviewer appleUITests */,\n\
         \t\t\t\t{products} /* Products */,\n\
         \t\t\t);",
        main = ids::MAIN_GROUP,
        app_group = ids::APP_GROUP,
        sync_group = ids::SYNC_GROUP,
        name = TARGET_NAME,
        uitests_group = ids::UITESTS_GROUP,
        products = ids::PRODUCTS_GROUP,
    )
}

pub fn native_target() -> String {
    format!(
        "\t\t{target} /* {name} */ = {{\n\
         \t\t\tisa = PBXNativeTarget;\n\
         \t\t\tbuildConfigurationList = {cfg_list} /* Build configuration list for PBXNativeTarget \"{name}\" */;\n\
         \t\t\tbuildPhases = (\n\
         \t\t\t\t{sources} /* Sources */,\n\
         \t\t\t\t{frameworks} /* Frameworks */,\n\
         \t\t\t\t{resources} /* Resources */,\n\
         \t\t\t);\n\
         \t\t\tbuildRules = (\n\
         \t\t\t);\n\
         \t\t\tdependencies = (\n\
         \t\t\t);\n\
         \t\t\tfileSystemSynchronizedGroups = (\n\
         \t\t\t\t{sync_group} /* {name} */,\n\
         \t\t\t);\n\
         \t\t\tname = {name};\n\
         \t\t\tpackageProductDependencies = (\n\
         \t\t\t);\n\
         \t\t\tproductName = {name};\n\
         \t\t\tproductReference = {product_ref} /* {product} */;\n\
         \t\t\tproductType = \"com.apple.product-type.app-extension\";\n\
         \t\t}};\n",
        target = ids::TARGET,
        name = TARGET_NAME,
        cfg_list = ids::CFG_LIST,
        sources = ids::SOURCES_PHASE,
        frameworks = ids::FRAMEWORKS_PHASE,
        resources = ids::RESOURCES_PHASE,
        sync_group = ids::SYNC_GROUP,
        product_ref = ids::PRODUCT_REF,
        product = PRODUCT_FILE,
    )
}

pub fn project_targets_old() -> String {
    format!(
        "\t\t\ttargets = (\n\
         \t\t\t\t{app} /* ehviewer apple */,\n\
         \t\t\t\t{tests} /* ehviewer appleTests */,\n\
         \t\t\t\t{uitests} /* ehviewer appleUITests */,\n\
         \t\t\t);",
        app = ids::APP_TARGET,
        tests = ids::TESTS_TARGET,
        uitests = ids::UITESTS_TARGET,
    )
}

pub fn project_targets_new() -> String {
    format!(
        "\t\t\ttargets = (\n\
         \t\t\t\t{app} /* ehviewer apple */,\n\
         \t\t\t\t{tests} /* ehviewer appleTests */,\n\
         \t\t\t\t{uitests} /* ehviewer appleUITests */,\n\
         \t\t\t\t{target} /* {name} */,\n\
         \t\t\t);",
        app = ids::APP_TARGET,
        tests = ids::TESTS_TARGET,
        uitests = ids::UITESTS_TARGET,
        target = ids::TARGET,
        name = TARGET_NAME,
    )
}

pub fn target_attributes_old() -> String {
    format!(
        "\t\t\t\t\t{app} = {{\n\
         \t\t\t\t\t\tCreatedOnToolsVersion = {tools};\n\
         \t\t\t\t\t}};",
        app = ids::APP_TARGET,
        tools = CREATED_ON_TOOLS_VERSION,
    )
}

pub fn target_attributes_new() -> String {
    format!(
        "\t\t\t\t\t{app} = {{\n\
         \t\t\t\t\t\tCreatedOnToolsVersion = {tools};\n\
         \t\t\t\t\t}};\n\
         \t\t\t\t\t{target} = {{\n\
         \t\t\t\t\t\tCreatedOnToolsVersion = {tools};\n\
         \t\t\t\t\t}};",
        app = ids::APP_TARGET,
        tools = CREATED_ON_TOOLS_VERSION,
        target = ids::TARGET,
    )
}

/// Head of the host app's native-target record as it exists today.
pub fn app_target_old() -> String {
    format!(
        "\t\t{app} /* ehviewer apple */ = {{\n\
         \t\t\tisa = PBXNativeTarget;\n\
         \t\t\tbuildConfigurationList = {app_cfg_list} /* Build configuration list for PBXNativeTarget \"ehviewer apple\" */;\n\
         \t\t\tbuildPhases = (\n\
         \t\t\t\t{sources} /* Sources */,\n\
         \t\t\t\t{frameworks} /* Frameworks */,\n\
         \t\t\t\t{resources} /* Resources */,\n\
         \t\t\t);\n\
         \t\t\tbuildRules = (\n\
         \t\t\t);\n\
         \t\t\tdependencies = (\n\
         \t\t\t);",
        app = ids::APP_TARGET,
        app_cfg_list = ids::APP_CFG_LIST,
        sources = ids::APP_SOURCES_PHASE,
        frameworks = ids::APP_FRAMEWORKS_PHASE,
        resources = ids::APP_RESOURCES_PHASE,
    )
}

/// Same record head with the embed phase and target dependency added.
pub fn app_target_new() -> String {
    format!(
        "\t\t{app} /* ehviewer apple */ = {{\n\
         \t\t\tisa = PBXNativeTarget;\n\
         \t\t\tbuildConfigurationList = {app_cfg_list} /* Build configuration list for PBXNativeTarget \"ehviewer apple\" */;\n\
         \t\t\tbuildPhases = (\n\
         \t\t\t\t{sources} /* Sources */,\n\
         \t\t\t\t{frameworks} /* Frameworks */,\n\
         \t\t\t\t{resources} /* Resources */,\n\
         \t\t\t\t{embed_phase} /* {phase_name} */,\n\
         \t\t\t);\n\
         \t\t\tbuildRules = (\n\
         \t\t\t);\n\
         \t\t\tdependencies = (\n\
         \t\t\t\t{dependency} /* PBXTargetDependency */,\n\
         \t\t\t);",
        app = ids::APP_TARGET,
        app_cfg_list = ids::APP_CFG_LIST,
        sources = ids::APP_SOURCES_PHASE,
        frameworks = ids::APP_FRAMEWORKS_PHASE,
        resources = ids::APP_RESOURCES_PHASE,
        embed_phase = ids::EMBED_PHASE,
        phase_name = EMBED_PHASE_NAME,
        dependency = ids::DEPENDENCY,
    )
}

pub fn target_dependency() -> String {
    format!(
        "\t\t{dependency} /* PBXTargetDependency */ = {{\n\
         \t\t\tisa = PBXTargetDependency;\n\
         \t\t\ttarget = {target} /* {name} */;\n\
         \t\t\ttargetProxy = {proxy} /* PBXContainerItemProxy */;\n\
         \t\t}};\n",
        dependency = ids::DEPENDENCY,
        target = ids::TARGET,
        name = TARGET_NAME,
        proxy = ids::PROXY,
    )
}

/// Debug and Release carry identical build settings; only the name differs.
fn build_configuration(id: &str, config_name: &str) -> String {
    format!(
        "\t\t{id} /* {config_name} */ = {{\n\
         \t\t\tisa = XCBuildConfiguration;\n\
         \t\t\tbuildSettings = {{\n\
         \t\t\t\tASSTCALOG_COMPILER_GLOBAL_ACCENT_COLOR_NAME = AccentColor;\n\
         \t\t\t\tCODE_SIGN_STYLE = Automatic;\n\
         \t\t\t\tCURRENT_PROJECT_VERSION = 1;\n\
         \t\t\t\tDEVELOPMENT_TEAM = {team};\n\
         \t\t\t\tGENERATE_INFOPLIST_FILE = YES;\n\
         \t\t\t\tINFOPLIST_FILE = {name}/Info.plist;\n\
         \t\t\t\tINFOPLIST_KEY_CFBundleDisplayName = {name};\n\
         \t\t\t\tINFOPLIST_KEY_NSHumanReadableCopyright = \"\";\n\
         \t\t\t\tIPHONEOS_DEPLOYMENT_TARGET = {deployment};\n\
         \t\t\t\tLD_RUNPATH_SEARCH_PATHS = (\n\
         \t\t\t\t\t\"$(inherited)\",\n\
         \t\t\t\t\t\"@executable_path/Frameworks\",\n\
         \t\t\t\t\t\"@executable_path/../../Frameworks\",\n\
         \t\t\t\t);\n\
         \t\t\t\tMARKETING_VERSION = {marketing};\n\
         \t\t\t\tPRODUCT_BUNDLE_IDENTIFIER = \"{bundle}\";\n\
         \t\t\t\tPRODUCT_NAME = \"$(TARGET_NAME)\";\n\
         \t\t\t\tSDKROOT = iphoneos;\n\
         \t\t\t\tSKIP_INSTALL = YES;\n\
         \t\t\t\tSTRING_CATALOG_GENERATE_SYMBOLS = YES;\n\
         \t\t\t\tSUPPORTED_PLATFORMS = \"iphoneos iphonesimulator\";\n\
         \t\t\t\tSWIFT_APPROACHABLE_CONCURRENCY = YES;\n\
         \t\t\t\tSWIFT_EMIT_LOC_STRINGS = YES;\n\
         \t\t\t\tSWIFT_VERSION = {swift};\n\
         \t\t\t\tTARGETED_DEVICE_FAMILY = \"1,2\";\n\
         \t\t\t}};\n\
         \t\t\tname = {config_name};\n\
         \t\t}};\n",
        team = DEVELOPMENT_TEAM,
        name = TARGET_NAME,
        deployment = DEPLOYMENT_TARGET,
        marketing = MARKETING_VERSION,
        bundle = BUNDLE_ID,
        swift = SWIFT_VERSION,
    )
}

pub fn build_configuration_debug() -> String {
    build_configuration(ids::CFG_DEBUG, "Debug")
}

pub fn build_configuration_release() -> String {
    build_configuration(ids::CFG_RELEASE, "Release")
}

pub fn configuration_list() -> String {
    format!(
        "\t\t{cfg_list} /* Build configuration list for PBXNativeTarget \"{name}\" */ = {{\n\
         \t\t\tisa = XCConfigurationList;\n\
         \t\t\tbuildConfigurations = (\n\
         \t\t\t\t{debug} /* Debug */,\n\
         \t\t\t\t{release} /* Release */,\n\
         \t\t\t);\n\
         \t\t\tdefaultConfigurationIsVisible = 0;\n\
         \t\t\tdefaultConfigurationName = Release;\n\
         \t\t}};\n",
        cfg_list = ids::CFG_LIST,
        name = TARGET_NAME,
        debug = ids::CFG_DEBUG,
        release = ids::CFG_RELEASE,
    )
}
