//! High-level operations.
//!
//! Discovery of the project to resolve and the end-to-end resolution that
//! produces a [`ResolvedProject`](crate::core::ResolvedProject).

pub mod discover;
pub mod errors;
pub mod resolve;

pub use discover::{discover_project, ProjectLocation};
pub use errors::DiscoveryError;
pub use resolve::{resolve_project, resolve_xcodeproj, ResolveOptions};
