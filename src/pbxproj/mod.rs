//! `project.pbxproj` parsing.
//!
//! Only the object shapes needed to locate artifacts are recovered:
//! native targets, build configurations, configuration lists and the
//! project root object. Anything that does not match is skipped.

pub mod block;
pub mod build_config;
pub mod config_list;
pub mod dict;
pub mod object;
pub mod targets;

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::core::{BuildConfiguration, ConfigurationList, Target};

pub use block::{extract_balanced_block, Block};
pub use build_config::{parse_build_configurations, parse_build_settings};
pub use config_list::parse_configuration_lists;
pub use targets::parse_native_targets;

pub const PROJECT_ISA: &str = "PBXProject";

/// The parts of one pbxproj object graph that resolution needs.
#[derive(Debug, Clone, Default)]
pub struct PbxprojDocument {
    /// Native targets with a product type, in source order
    pub targets: Vec<Target>,
    configurations: HashMap<String, BuildConfiguration>,
    configuration_lists: HashMap<String, ConfigurationList>,
    /// Configuration list of the `PBXProject` object
    pub project_configuration_list_id: Option<String>,
}

impl PbxprojDocument {
    /// Parse the whole file in a single pass over its objects.
    pub fn parse(text: &str) -> Self {
        let mut doc = PbxprojDocument::default();

        for obj in object::objects(text) {
            match obj.isa() {
                Some(targets::NATIVE_TARGET_ISA) => {
                    if let Some(target) = targets::target_from_object(&obj) {
                        doc.targets.push(target);
                    }
                }
                Some(build_config::BUILD_CONFIGURATION_ISA) => {
                    if let Some(config) = build_config::configuration_from_object(&obj) {
                        doc.configurations.insert(config.id.clone(), config);
                    }
                }
                Some(config_list::CONFIGURATION_LIST_ISA) => {
                    let list = config_list::list_from_object(&obj);
                    doc.configuration_lists.insert(list.id.clone(), list);
                }
                Some(PROJECT_ISA) => {
                    doc.project_configuration_list_id = obj
                        .dict
                        .str("buildConfigurationList")
                        .and_then(object::object_id);
                }
                _ => {}
            }
        }

        tracing::debug!(
            "parsed {} targets, {} configurations, {} configuration lists",
            doc.targets.len(),
            doc.configurations.len(),
            doc.configuration_lists.len()
        );
        doc
    }

    /// Read and parse a `project.pbxproj` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = crate::util::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Read and parse the `project.pbxproj` inside an `.xcodeproj` directory.
    ///
    /// A missing or unreadable file yields `None`.
    pub fn load_project(xcodeproj: &Path) -> Option<Self> {
        let path = xcodeproj.join("project.pbxproj");
        match Self::load(&path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("{:#}", e);
                None
            }
        }
    }

    pub fn configuration(&self, id: &str) -> Option<&BuildConfiguration> {
        self.configurations.get(id)
    }

    pub fn configuration_list(&self, id: &str) -> Option<&ConfigurationList> {
        self.configuration_lists.get(id)
    }

    /// The project-level configuration named `name`, if any.
    pub fn project_configuration(&self, name: &str) -> Option<&BuildConfiguration> {
        let list = self.configuration_list(self.project_configuration_list_id.as_deref()?)?;
        list.configuration_ids
            .iter()
            .filter_map(|id| self.configuration(id))
            .find(|c| c.name == name)
    }
}
