//! Resolving a source tree into its main app and artifacts.

use std::path::Path;

use crate::core::ResolvedProject;
use crate::ops::discover::{discover_project, ProjectLocation};
use crate::ops::errors::DiscoveryError;
use crate::pbxproj::PbxprojDocument;
use crate::resolver::get_main_target_artifacts;
use crate::util::config::{ResolveConfig, DEFAULT_SEARCH_DEPTH};
use crate::util::fs::normalize_path;
use crate::workspace::get_workspace_projects;

/// Options for project resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Prefer the Release configuration over Debug
    pub prefer_release: bool,
    /// Tie-break name for target ranking; defaults to the project stem
    pub project_name_hint: Option<String>,
    /// Maximum directory depth searched for projects
    pub search_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            prefer_release: true,
            project_name_hint: None,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl ResolveOptions {
    pub fn from_config(config: &ResolveConfig) -> Self {
        ResolveOptions {
            prefer_release: config.prefer_release(),
            project_name_hint: config.project_name_hint.clone(),
            search_depth: config.search_depth(),
        }
    }
}

/// Discover and resolve the project under `root`.
///
/// Only discovery can fail; `Ok(None)` means no project (or no existing
/// workspace member) was found.
pub fn resolve_project(
    root: &Path,
    opts: &ResolveOptions,
) -> Result<Option<ResolvedProject>, DiscoveryError> {
    let Some(location) = discover_project(root, opts.search_depth)? else {
        return Ok(None);
    };

    let resolved = match location {
        ProjectLocation::Project(project) => Some(resolve_xcodeproj(&project, opts)),
        ProjectLocation::Workspace(workspace) => {
            let projects = get_workspace_projects(&workspace);
            match projects.best().and_then(|p| p.absolute_path.clone()) {
                Some(best) => {
                    tracing::info!("workspace selects {}", best.display());
                    let mut resolved = resolve_xcodeproj(&best, opts);
                    resolved.workspace_path = Some(projects.workspace_path);
                    resolved.workspace_projects = projects.all;
                    Some(resolved)
                }
                None => {
                    tracing::info!("{} references no existing projects", workspace.display());
                    None
                }
            }
        }
    };

    Ok(resolved)
}

/// Resolve one `.xcodeproj` directory. Never fails: an unreadable
/// `project.pbxproj` yields a record without a main target.
pub fn resolve_xcodeproj(project: &Path, opts: &ResolveOptions) -> ResolvedProject {
    let project = normalize_path(project);
    let record = ResolvedProject::empty(&project);
    let Some(doc) = PbxprojDocument::load_project(&project) else {
        return record;
    };

    let hint = opts
        .project_name_hint
        .as_deref()
        .or_else(|| project.file_stem().and_then(|s| s.to_str()));

    let artifacts =
        get_main_target_artifacts(&doc, &record.project_dir, hint, opts.prefer_release);
    let record = ResolvedProject {
        targets: doc.targets,
        ..record
    };

    match artifacts {
        Some(artifacts) => record.with_artifacts(artifacts),
        None => record,
    }
}
