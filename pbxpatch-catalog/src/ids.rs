//! The fixed identifier table.
//!
//! pbxproj object ids are opaque 24-character hex tokens. The fresh ids
//! below were picked once, by hand, to sit outside the host project's
//! `DC4A07xx` range; there is no generation logic. Host ids reference
//! records that already exist in the target file.

/// Fresh ids minted for the widget-extension records.
pub const TARGET: &str = "DC9A30012F40A10100AABB01";
pub const PRODUCT_REF: &str = "DC9A30022F40A10100AABB02";
pub const SYNC_GROUP: &str = "DC9A30032F40A10100AABB03";
pub const FRAMEWORKS_PHASE: &str = "DC9A30042F40A10100AABB04";
pub const SOURCES_PHASE: &str = "DC9A30052F40A10100AABB05";
pub const RESOURCES_PHASE: &str = "DC9A30062F40A10100AABB06";
pub const EMBED_PHASE: &str = "DC9A30072F40A10100AABB07";
pub const PROXY: &str = "DC9A30082F40A10100AABB08";
pub const DEPENDENCY: &str = "DC9A30092F40A10100AABB09";
pub const CFG_DEBUG: &str = "DC9A300A2F40A10100AABB0A";
pub const CFG_RELEASE: &str = "DC9A300B2F40A10100AABB0B";
pub const CFG_LIST: &str = "DC9A300C2F40A10100AABB0C";
pub const EMBED_FILE: &str = "DC9A300D2F40A10100AABB0D";

/// Pre-existing ids in the host project.
pub const PROJECT: &str = "DC4A07602F3DA21800717C38";
pub const APP_TARGET: &str = "DC4A07672F3DA21800717C38";
pub const PRODUCTS_GROUP: &str = "DC4A07692F3DA21800717C38";
pub const MAIN_GROUP: &str = "DC4A075F2F3DA21800717C38";
pub const APP_PRODUCT: &str = "DC4A07682F3DA21800717C38";
pub const TESTS_PRODUCT: &str = "DC4A07792F3DA21800717C38";
pub const UITESTS_PRODUCT: &str = "DC4A07832F3DA21800717C38";
pub const APP_GROUP: &str = "DC4A076A2F3DA21800717C38";
pub const UITESTS_GROUP: &str = "DC4A07862F3DA21800717C38";
pub const TESTS_TARGET: &str = "DC4A07782F3DA21800717C38";
pub const UITESTS_TARGET: &str = "DC4A07822F3DA21800717C38";
pub const APP_CFG_LIST: &str = "DC4A078C2F3DA21800717C38";
pub const APP_SOURCES_PHASE: &str = "DC4A07642F3DA21800717C38";
pub const APP_FRAMEWORKS_PHASE: &str = "DC4A07652F3DA21800717C38";
pub const APP_RESOURCES_PHASE: &str = "DC4A07662F3DA21800717C38";

/// Every fresh id, for collision checks.
pub const FRESH_IDS: [&str; 13] = [
    TARGET,
    PRODUCT_REF,
    SYNC_GROUP,
    FRAMEWORKS_PHASE,
    SOURCES_PHASE,
    RESOURCES_PHASE,
    EMBED_PHASE,
    PROXY,
    DEPENDENCY,
    CFG_DEBUG,
    CFG_RELEASE,
    CFG_LIST,
    EMBED_FILE,
];

/// Every host id the catalog references.
pub const HOST_IDS: [&str; 15] = [
    PROJECT,
    APP_TARGET,
    PRODUCTS_GROUP,
    MAIN_GROUP,
    APP_PRODUCT,
    TESTS_PRODUCT,
    UITESTS_PRODUCT,
    APP_GROUP,
    UITESTS_GROUP,
    TESTS_TARGET,
    UITESTS_TARGET,
    APP_CFG_LIST,
    APP_SOURCES_PHASE,
    APP_FRAMEWORKS_PHASE,
    APP_RESOURCES_PHASE,
];

/// True when `id` has the 24-character uppercase-hex shape pbxproj uses.
pub fn is_well_formed(id: &str) -> bool {
    id.len() == 24
        && id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}
