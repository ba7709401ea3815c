//! Target definitions - what an Xcode project builds.
//!
//! A Target is one `PBXNativeTarget` record: an app, an extension, a
//! framework or a test bundle.

use serde::{Deserialize, Serialize};

use crate::core::product_type::ProductType;

/// A native target recovered from a pbxproj object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// 24-hex-char object identifier
    pub id: String,

    /// Target name (the object label, or the `name` key)
    pub name: String,

    /// Declared product type
    pub product_type: ProductType,

    /// Identifier of the target's `XCConfigurationList`
    pub build_configuration_list_id: Option<String>,

    /// Value of `productName`, if declared
    pub product_name: Option<String>,
}

impl Target {
    /// Create a new target.
    pub fn new(id: impl Into<String>, name: impl Into<String>, product_type: ProductType) -> Self {
        Target {
            id: id.into(),
            name: name.into(),
            product_type,
            build_configuration_list_id: None,
            product_name: None,
        }
    }

    /// Set the configuration list id.
    pub fn with_configuration_list(mut self, id: impl Into<String>) -> Self {
        self.build_configuration_list_id = Some(id.into());
        self
    }

    /// Set the product name.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Ranking priority of this target's product type.
    pub fn priority(&self) -> u32 {
        self.product_type.priority()
    }

    pub fn is_application(&self) -> bool {
        self.product_type.is_application()
    }

    pub fn is_test(&self) -> bool {
        self.product_type.is_test()
    }
}
