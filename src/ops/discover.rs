//! Locating the Xcode project or workspace to resolve.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::ops::errors::DiscoveryError;
use crate::util::fs::{has_extension, is_hidden, normalize_path};
use crate::workspace::WORKSPACE_DATA;

/// Packaged inputs that are rejected instead of searched.
const ARCHIVE_EXTENSIONS: &[&str] = &["ipa", "xcarchive", "zip", "app"];

/// Directories never descended into while searching.
const SKIPPED_DIRS: &[&str] = &["Pods", "Carthage", "DerivedData", "build", "node_modules"];

const PBXPROJ: &str = "project.pbxproj";

/// The entry point found for a source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "camelCase")]
pub enum ProjectLocation {
    /// A `.xcworkspace` directory
    Workspace(PathBuf),
    /// A `.xcodeproj` directory
    Project(PathBuf),
}

impl ProjectLocation {
    pub fn path(&self) -> &Path {
        match self {
            ProjectLocation::Workspace(p) | ProjectLocation::Project(p) => p,
        }
    }
}

/// Find the project or workspace for `root`.
///
/// Returns `Ok(None)` when nothing resolvable exists under `root`.
pub fn discover_project(
    root: &Path,
    max_depth: usize,
) -> Result<Option<ProjectLocation>, DiscoveryError> {
    let metadata = std::fs::metadata(root).map_err(|source| DiscoveryError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;

    if let Some(kind) = ARCHIVE_EXTENSIONS
        .iter()
        .find(|ext| has_extension(root, ext))
    {
        return Err(DiscoveryError::UnsupportedInput {
            path: root.to_path_buf(),
            kind: kind.to_string(),
        });
    }

    let root = normalize_path(root);

    if metadata.is_file() {
        let location = match root.file_name().and_then(|n| n.to_str()) {
            Some(WORKSPACE_DATA) => root.parent().map(|p| ProjectLocation::Workspace(p.into())),
            Some(PBXPROJ) => root.parent().map(|p| ProjectLocation::Project(p.into())),
            _ => None,
        };
        if location.is_none() {
            tracing::info!("{} is not an Xcode project file", root.display());
        }
        return Ok(location);
    }

    if has_extension(&root, "xcworkspace") {
        return Ok(Some(ProjectLocation::Workspace(root)));
    }
    if has_extension(&root, "xcodeproj") {
        return Ok(Some(ProjectLocation::Project(root)));
    }

    let found = search(&root, max_depth);
    match &found {
        Some(location) => tracing::info!("discovered {}", location.path().display()),
        None => tracing::info!("no Xcode project under {}", root.display()),
    }
    Ok(found)
}

fn search(root: &Path, max_depth: usize) -> Option<ProjectLocation> {
    let mut workspaces: Vec<(usize, PathBuf)> = Vec::new();
    let mut projects: Vec<(usize, PathBuf)> = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| !is_skipped(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if has_extension(path, "xcworkspace") {
            workspaces.push((entry.depth(), path.to_path_buf()));
        } else if has_extension(path, "xcodeproj") {
            projects.push((entry.depth(), path.to_path_buf()));
        }
    }

    let pick = |mut found: Vec<(usize, PathBuf)>| {
        found.sort();
        found.into_iter().next().map(|(_, path)| path)
    };

    pick(workspaces)
        .map(ProjectLocation::Workspace)
        .or_else(|| pick(projects).map(ProjectLocation::Project))
}

/// Prune dependency/build directories, hidden directories and the
/// internals of bundles. A `.xcodeproj` is yielded but not descended into,
/// so its embedded `project.xcworkspace` is never a candidate.
fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }
    let path = entry.path();
    let name = entry.file_name().to_string_lossy();
    if SKIPPED_DIRS.iter().any(|dir| *dir == name) || is_hidden(path) {
        return true;
    }
    path.parent().is_some_and(|parent| {
        has_extension(parent, "xcodeproj") || has_extension(parent, "xcworkspace")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{PbxprojFixture, TempTree};

    fn app() -> PbxprojFixture {
        PbxprojFixture::new().app("App")
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tree = TempTree::new();
        let err = discover_project(&tree.path().join("nope"), 4).unwrap_err();
        assert!(matches!(err, DiscoveryError::RootNotFound { .. }));
    }

    #[test]
    fn test_archives_are_rejected() {
        let tree = TempTree::new();
        let ipa = tree.file("Build/App.ipa", "PK");
        let err = discover_project(&ipa, 4).unwrap_err();
        match err {
            DiscoveryError::UnsupportedInput { kind, .. } => assert_eq!(kind, "ipa"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_direct_paths() {
        let tree = TempTree::new();
        let project = tree.project("App", "App", &app());
        let ws = tree.workspace("App", &["group:App/App.xcodeproj"]);

        assert_eq!(
            discover_project(&project, 4).unwrap(),
            Some(ProjectLocation::Project(normalize_path(&project)))
        );
        assert_eq!(
            discover_project(&project.join(PBXPROJ), 4).unwrap(),
            Some(ProjectLocation::Project(normalize_path(&project)))
        );
        assert_eq!(
            discover_project(&ws.join(WORKSPACE_DATA), 4).unwrap(),
            Some(ProjectLocation::Workspace(normalize_path(&ws)))
        );
    }

    #[test]
    fn test_workspace_preferred_over_project() {
        let tree = TempTree::new();
        tree.project("App", "App", &app());
        let ws = tree.workspace("App", &["group:App/App.xcodeproj"]);

        let found = discover_project(tree.path(), 4).unwrap().unwrap();
        assert_eq!(found, ProjectLocation::Workspace(normalize_path(&ws)));
    }

    #[test]
    fn test_embedded_workspace_is_ignored() {
        let tree = TempTree::new();
        let project = tree.project("App", "App", &app());
        tree.file(
            "App/App.xcodeproj/project.xcworkspace/contents.xcworkspacedata",
            "<Workspace version = \"1.0\"></Workspace>",
        );

        let found = discover_project(tree.path(), 4).unwrap().unwrap();
        assert_eq!(found, ProjectLocation::Project(normalize_path(&project)));
    }

    #[test]
    fn test_shallowest_project_wins_and_pods_skipped() {
        let tree = TempTree::new();
        tree.project("Pods", "Pods", &app());
        tree.project("deep/nested", "Zeta", &app());
        let shallow = tree.project("ios", "Beta", &app());
        tree.project("ios2", "Alpha", &app());

        let found = discover_project(tree.path(), 4).unwrap().unwrap();
        assert_eq!(found, ProjectLocation::Project(normalize_path(&shallow)));
    }

    #[test]
    fn test_depth_limit_and_empty_tree() {
        let tree = TempTree::new();
        tree.project("a/b/c/d", "Deep", &app());
        assert_eq!(discover_project(tree.path(), 2).unwrap(), None);
        assert!(discover_project(tree.path(), 6).unwrap().is_some());

        let empty = TempTree::new();
        empty.file("README.md", "hi");
        assert_eq!(discover_project(empty.path(), 4).unwrap(), None);
    }
}
