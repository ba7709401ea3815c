//! Workspace project references.
//!
//! A `.xcworkspace` lists the projects it contains as `FileRef` entries.
//! Each entry becomes a [`WorkspaceProjectRef`], classified by path first
//! and enriched with its main target's product type later.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::product_type::ProductType;

/// The prefix of a workspace `location` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Group,
    Absolute,
    Container,
    #[serde(rename = "self")]
    SelfRef,
    Unknown,
}

impl LocationType {
    pub fn parse(s: &str) -> Self {
        match s {
            "group" => LocationType::Group,
            "absolute" => LocationType::Absolute,
            "container" => LocationType::Container,
            "self" => LocationType::SelfRef,
            _ => LocationType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Group => "group",
            LocationType::Absolute => "absolute",
            LocationType::Container => "container",
            LocationType::SelfRef => "self",
            LocationType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One project referenced by a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProjectRef {
    /// The `location` attribute as written
    pub raw_location: String,

    pub location_type: LocationType,

    /// Path part of the location (group prefixes applied)
    pub project_path: String,

    /// Absolute filesystem path, once resolved against the workspace
    pub absolute_path: Option<PathBuf>,

    /// CocoaPods-generated project
    pub is_pods: bool,

    /// A path segment names tests, examples, demos or samples
    pub is_test_or_example: bool,

    // Enrichment from the referenced project's main target.
    pub product_type: Option<ProductType>,
    pub product_type_priority: Option<u32>,
    pub is_application: Option<bool>,
    pub is_test_target: Option<bool>,
}

impl WorkspaceProjectRef {
    /// Whether enrichment marked this project as an application.
    pub fn enriched_application(&self) -> bool {
        self.is_application.unwrap_or(false)
    }

    /// Whether enrichment marked this project's main target as a test bundle.
    pub fn enriched_test_target(&self) -> bool {
        self.is_test_target.unwrap_or(false)
    }

    /// Priority score, zero when not enriched.
    pub fn priority(&self) -> u32 {
        self.product_type_priority.unwrap_or(0)
    }

    /// Record the main target's product type.
    pub fn enrich(&mut self, product_type: &ProductType) {
        self.product_type_priority = Some(product_type.priority());
        self.is_application = Some(product_type.is_application());
        self.is_test_target = Some(product_type.is_test());
        self.product_type = Some(product_type.clone());
    }
}
