//! Artifacts resolved for one project's main target.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::build_settings::BuildSettings;
use crate::core::target::Target;

/// The terminal output of single-project resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArtifacts {
    /// The selected main target
    pub target: Target,

    /// Name of the chosen build configuration
    pub config_name: Option<String>,

    /// Absolute path of the target's Info.plist
    pub info_plist_path: Option<PathBuf>,

    /// Absolute path of the target's entitlements file
    pub entitlements_path: Option<PathBuf>,

    /// Expanded `PRODUCT_NAME`, falling back to the target's `productName`
    pub product_name: Option<String>,

    pub target_name: Option<String>,

    /// Settings of the chosen configuration, project-level defaults included
    pub build_settings: BuildSettings,
}

impl ResolvedArtifacts {
    /// A record carrying only the target; used when no configuration applies.
    pub fn target_only(target: &Target) -> Self {
        ResolvedArtifacts {
            target: target.clone(),
            config_name: None,
            info_plist_path: None,
            entitlements_path: None,
            product_name: None,
            target_name: Some(target.name.clone()),
            build_settings: BuildSettings::new(),
        }
    }
}
