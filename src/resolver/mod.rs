//! Resolution of a project's main target and its artifacts.
//!
//! - [`target`]: ranks targets to find the shipping app
//! - [`variables`]: expands Xcode build variables in path settings
//! - [`settings`]: selects a configuration and resolves artifact paths

pub mod settings;
pub mod target;
pub mod variables;

pub use settings::{
    get_main_target_artifacts, get_target_build_settings, select_configuration,
    TargetBuildSettings,
};
pub use target::{compare_targets, get_main_app_target};
pub use variables::{normalize_xcode_path, ExpansionContext};
