//! Core data structures for xcresolve.
//!
//! This module contains the project model recovered from Xcode files:
//! - Targets and their product types
//! - Build configurations, settings and configuration lists
//! - Workspace project references
//! - The resolved project record

pub mod artifacts;
pub mod build_settings;
pub mod product_type;
pub mod project;
pub mod target;
pub mod workspace;

pub use artifacts::ResolvedArtifacts;
pub use build_settings::{BuildConfiguration, BuildSettings, ConfigurationList};
pub use product_type::ProductType;
pub use project::ResolvedProject;
pub use target::Target;
pub use workspace::{LocationType, WorkspaceProjectRef};
