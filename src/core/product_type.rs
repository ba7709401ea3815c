//! Xcode product types and their ranking priority.
//!
//! The priority table here is the single ordering used both when picking
//! the main target of one project and when ranking the projects of a
//! workspace.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What a target produces, as declared by its `productType` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// `com.apple.product-type.application`
    Application,
    /// `com.apple.product-type.application.on-demand-install-capable` (App Clip)
    AppClip,
    /// `com.apple.product-type.application.watchapp`
    WatchApp,
    /// `com.apple.product-type.application.watchapp2`
    WatchApp2,
    /// `com.apple.product-type.application.watchapp2-container`
    WatchApp2Container,
    /// `com.apple.product-type.app-extension`
    AppExtension,
    /// `com.apple.product-type.extensionkit-extension`
    ExtensionKitExtension,
    /// `com.apple.product-type.watchkit-extension`
    WatchExtension,
    /// `com.apple.product-type.watchkit2-extension`
    Watch2Extension,
    /// `com.apple.product-type.tv-app-extension`
    TvExtension,
    /// `com.apple.product-type.framework`
    Framework,
    /// `com.apple.product-type.framework.static`
    StaticFramework,
    /// `com.apple.product-type.library.static`
    StaticLibrary,
    /// `com.apple.product-type.library.dynamic`
    DynamicLibrary,
    /// `com.apple.product-type.bundle`
    Bundle,
    /// `com.apple.product-type.xpc-service`
    XpcService,
    /// `com.apple.product-type.bundle.unit-test`
    UnitTest,
    /// `com.apple.product-type.bundle.ui-testing`
    UiTest,
    /// `com.apple.product-type.tool`
    Tool,
    /// Any tag not listed above, kept verbatim.
    Other(String),
}

const KNOWN: &[(&str, ProductType)] = &[
    ("com.apple.product-type.application", ProductType::Application),
    (
        "com.apple.product-type.application.on-demand-install-capable",
        ProductType::AppClip,
    ),
    ("com.apple.product-type.application.watchapp", ProductType::WatchApp),
    ("com.apple.product-type.application.watchapp2", ProductType::WatchApp2),
    (
        "com.apple.product-type.application.watchapp2-container",
        ProductType::WatchApp2Container,
    ),
    ("com.apple.product-type.app-extension", ProductType::AppExtension),
    (
        "com.apple.product-type.extensionkit-extension",
        ProductType::ExtensionKitExtension,
    ),
    ("com.apple.product-type.watchkit-extension", ProductType::WatchExtension),
    ("com.apple.product-type.watchkit2-extension", ProductType::Watch2Extension),
    ("com.apple.product-type.tv-app-extension", ProductType::TvExtension),
    ("com.apple.product-type.framework", ProductType::Framework),
    ("com.apple.product-type.framework.static", ProductType::StaticFramework),
    ("com.apple.product-type.library.static", ProductType::StaticLibrary),
    ("com.apple.product-type.library.dynamic", ProductType::DynamicLibrary),
    ("com.apple.product-type.bundle", ProductType::Bundle),
    ("com.apple.product-type.xpc-service", ProductType::XpcService),
    ("com.apple.product-type.bundle.unit-test", ProductType::UnitTest),
    ("com.apple.product-type.bundle.ui-testing", ProductType::UiTest),
    ("com.apple.product-type.tool", ProductType::Tool),
];

impl ProductType {
    /// Parse a `productType` tag. Unknown tags become [`ProductType::Other`].
    pub fn from_identifier(s: &str) -> Self {
        KNOWN
            .iter()
            .find(|(id, _)| *id == s)
            .map(|(_, ty)| ty.clone())
            .unwrap_or_else(|| ProductType::Other(s.to_string()))
    }

    /// The identifier as it appears in a pbxproj file.
    pub fn as_str(&self) -> &str {
        if let ProductType::Other(s) = self {
            return s;
        }
        KNOWN
            .iter()
            .find(|(_, ty)| ty == self)
            .map(|(id, _)| *id)
            .unwrap_or("")
    }

    /// Ranking priority; higher means "more likely the shipping app".
    pub fn priority(&self) -> u32 {
        match self {
            ProductType::Application => 100,
            ProductType::AppClip => 95,
            ProductType::WatchApp | ProductType::WatchApp2 | ProductType::WatchApp2Container => 50,
            ProductType::AppExtension | ProductType::ExtensionKitExtension => 30,
            ProductType::WatchExtension | ProductType::Watch2Extension | ProductType::TvExtension => {
                25
            }
            ProductType::Framework | ProductType::StaticFramework => 20,
            ProductType::StaticLibrary | ProductType::DynamicLibrary => 15,
            ProductType::Bundle | ProductType::XpcService => 10,
            ProductType::UnitTest | ProductType::UiTest => 5,
            ProductType::Tool | ProductType::Other(_) => 0,
        }
    }

    /// True only for a plain application target.
    pub fn is_application(&self) -> bool {
        matches!(self, ProductType::Application)
    }

    /// True for unit-test and UI-test bundles.
    pub fn is_test(&self) -> bool {
        matches!(self, ProductType::UnitTest | ProductType::UiTest)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for ProductType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ProductType::from_identifier(&s))
    }
}
