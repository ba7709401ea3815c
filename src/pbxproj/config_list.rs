//! `XCConfigurationList` extraction.

use crate::core::ConfigurationList;
use crate::pbxproj::object::{object_id, objects_of_kind, PbxObject};

pub const CONFIGURATION_LIST_ISA: &str = "XCConfigurationList";

/// Parse every configuration list in the file, in source order.
pub fn parse_configuration_lists(text: &str) -> Vec<ConfigurationList> {
    objects_of_kind(text, CONFIGURATION_LIST_ISA)
        .map(|obj| list_from_object(&obj))
        .collect()
}

/// Build a [`ConfigurationList`] from a list record.
///
/// Array items that are not object ids are ignored; order is preserved.
pub fn list_from_object(obj: &PbxObject<'_>) -> ConfigurationList {
    let configuration_ids: Vec<String> = obj
        .dict
        .array("buildConfigurations")
        .unwrap_or_default()
        .iter()
        .filter_map(|item| object_id(item))
        .collect();

    if configuration_ids.is_empty() {
        tracing::debug!("configuration list {} references no configurations", obj.id);
    }

    ConfigurationList {
        id: obj.id.to_string(),
        configuration_ids,
        default_configuration_name: obj.dict.str("defaultConfigurationName").map(String::from),
    }
}
