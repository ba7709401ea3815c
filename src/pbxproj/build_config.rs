//! `XCBuildConfiguration` extraction.

use crate::core::{BuildConfiguration, BuildSettings};
use crate::pbxproj::dict::PbxDict;
use crate::pbxproj::object::{objects_of_kind, PbxObject};

pub const BUILD_CONFIGURATION_ISA: &str = "XCBuildConfiguration";

/// Parse every build configuration in the file, in source order.
pub fn parse_build_configurations(text: &str) -> Vec<BuildConfiguration> {
    objects_of_kind(text, BUILD_CONFIGURATION_ISA)
        .filter_map(|obj| configuration_from_object(&obj))
        .collect()
}

/// Build a [`BuildConfiguration`] from a configuration record.
///
/// A record without a name is dropped; a missing or unreadable
/// `buildSettings` block yields empty settings.
pub fn configuration_from_object(obj: &PbxObject<'_>) -> Option<BuildConfiguration> {
    let Some(name) = obj.dict.str("name").map(str::trim).filter(|s| !s.is_empty()) else {
        tracing::debug!("build configuration {} has no name, skipping", obj.id);
        return None;
    };

    let build_settings = match obj.dict.dict_body("buildSettings") {
        Some(body) => parse_build_settings(body),
        None => {
            tracing::debug!("build configuration {} ({}) has no buildSettings", obj.id, name);
            BuildSettings::new()
        }
    };

    Some(BuildConfiguration {
        id: obj.id.to_string(),
        name: name.to_string(),
        build_settings,
    })
}

/// Tokenize the body of a `buildSettings = { ... }` block.
pub fn parse_build_settings(body: &str) -> BuildSettings {
    let mut settings = BuildSettings::new();
    for (key, value) in PbxDict::parse(body).into_entries() {
        settings.insert(key, value.to_setting_string());
    }
    settings
}
