//! Build configurations and their settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordered build-setting mapping of one configuration.
///
/// SDK-conditional keys such as `CODE_SIGN_ENTITLEMENTS[sdk=iphoneos*]` are
/// stored verbatim and also register their base key, unless the base key
/// already holds a value. An unconditional assignment always owns the base
/// key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct BuildSettings {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

/// Split `KEY[sdk=iphoneos*]` into `("KEY", true)`.
pub fn base_key(key: &str) -> (&str, bool) {
    match key.find('[') {
        Some(pos) if key.ends_with(']') && pos > 0 => (key[..pos].trim_end(), true),
        _ => (key, false),
    }
}

impl BuildSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `key = value` assignment in source order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let (base, conditional) = base_key(&key);

        if conditional {
            let base = base.to_string();
            if !self.index.contains_key(&base) {
                self.set(base, value.clone());
            }
        }
        self.set(key, value);
    }

    fn set(&mut self, key: String, value: String) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Look up a key exactly as written (base or conditional).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate over entries in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Layer `self` over `base`: every key of `base` missing here is added.
    pub fn merged_over(&self, base: &BuildSettings) -> BuildSettings {
        let mut merged = base.clone();
        for (k, v) in &self.entries {
            merged.set(k.clone(), v.clone());
        }
        merged
    }
}

impl From<Vec<(String, String)>> for BuildSettings {
    fn from(entries: Vec<(String, String)>) -> Self {
        let mut settings = BuildSettings::new();
        for (k, v) in entries {
            settings.insert(k, v);
        }
        settings
    }
}

impl From<BuildSettings> for Vec<(String, String)> {
    fn from(settings: BuildSettings) -> Self {
        settings.entries
    }
}

/// A named `XCBuildConfiguration` (e.g. "Debug", "Release").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub id: String,
    pub name: String,
    pub build_settings: BuildSettings,
}

/// An `XCConfigurationList`: the configurations of one target or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationList {
    pub id: String,
    /// Configuration ids in source order
    pub configuration_ids: Vec<String>,
    /// `defaultConfigurationName`, if declared
    pub default_configuration_name: Option<String>,
}
