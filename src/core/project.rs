//! The resolved project record handed to downstream consumers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::artifacts::ResolvedArtifacts;
use crate::core::build_settings::BuildSettings;
use crate::core::product_type::ProductType;
use crate::core::target::Target;
use crate::core::workspace::WorkspaceProjectRef;

/// Everything known about the main app of one discovered project.
///
/// Absent fields mean "cannot verify", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProject {
    /// The `.xcodeproj` directory
    pub project_path: PathBuf,

    /// Directory containing the `.xcodeproj` (`SRCROOT`)
    pub project_dir: PathBuf,

    /// The workspace the project was selected from, if any
    pub workspace_path: Option<PathBuf>,

    pub main_target: Option<Target>,
    pub configuration_name: Option<String>,
    pub info_plist_path: Option<PathBuf>,
    pub entitlements_path: Option<PathBuf>,
    pub product_name: Option<String>,
    pub build_settings: BuildSettings,

    /// Every target of the project with a product type, in source order
    pub targets: Vec<Target>,

    /// Ranked workspace projects, when resolved through a workspace
    pub workspace_projects: Vec<WorkspaceProjectRef>,
}

impl ResolvedProject {
    /// An empty record for a project whose pbxproj yielded nothing.
    pub fn empty(project_path: &Path) -> Self {
        ResolvedProject {
            project_path: project_path.to_path_buf(),
            project_dir: project_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf(),
            workspace_path: None,
            main_target: None,
            configuration_name: None,
            info_plist_path: None,
            entitlements_path: None,
            product_name: None,
            build_settings: BuildSettings::new(),
            targets: Vec::new(),
            workspace_projects: Vec::new(),
        }
    }

    /// Fill in the fields derived from the main target's artifacts.
    pub fn with_artifacts(mut self, artifacts: ResolvedArtifacts) -> Self {
        self.configuration_name = artifacts.config_name;
        self.info_plist_path = artifacts.info_plist_path;
        self.entitlements_path = artifacts.entitlements_path;
        self.product_name = artifacts.product_name;
        self.build_settings = artifacts.build_settings;
        self.main_target = Some(artifacts.target);
        self
    }

    pub fn main_target_name(&self) -> Option<&str> {
        self.main_target.as_ref().map(|t| t.name.as_str())
    }

    pub fn main_product_type(&self) -> Option<&ProductType> {
        self.main_target.as_ref().map(|t| &t.product_type)
    }

    /// Look up a build setting of the chosen configuration.
    pub fn build_setting(&self, key: &str) -> Option<&str> {
        self.build_settings.get(key)
    }
}
