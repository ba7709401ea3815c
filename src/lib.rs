//! xcresolve - Xcode project graph resolution
//!
//! This crate locates an iOS/macOS app's main target inside an Xcode
//! project or workspace and resolves the artifacts it ships with: the
//! selected build configuration, its Info.plist, its entitlements file and
//! its product name.

pub mod core;
pub mod ops;
pub mod pbxproj;
pub mod resolver;
pub mod util;
pub mod workspace;

/// Test utilities for xcresolve unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides builders for pbxproj and workspace fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{
    BuildConfiguration, BuildSettings, ConfigurationList, LocationType, ProductType,
    ResolvedArtifacts, ResolvedProject, Target, WorkspaceProjectRef,
};
pub use ops::{discover_project, resolve_project, DiscoveryError, ProjectLocation, ResolveOptions};
pub use pbxproj::{extract_balanced_block, PbxprojDocument};
pub use resolver::{get_main_app_target, get_main_target_artifacts, normalize_xcode_path};
pub use workspace::{get_workspace_projects, WorkspaceProjects};
