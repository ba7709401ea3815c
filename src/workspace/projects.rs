//! Ranking the projects of a workspace.
//!
//! Each referenced project is resolved on disk, enriched by running the
//! single-project pipeline on it, then ordered by comparator stages applied
//! lexicographically.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::core::{LocationType, WorkspaceProjectRef};
use crate::pbxproj::PbxprojDocument;
use crate::resolver::get_main_app_target;
use crate::util::fs::normalize_path;
use crate::workspace::parser::{parse_workspace_file, WORKSPACE_DATA};

/// The ranked projects of one workspace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProjects {
    /// The `.xcworkspace` directory
    pub workspace_path: PathBuf,
    pub version: Option<String>,
    /// Every existing referenced project, best first
    pub all: Vec<WorkspaceProjectRef>,
    /// The projects that look like the app, best first
    pub main: Vec<WorkspaceProjectRef>,
}

impl WorkspaceProjects {
    /// The best main project, if any.
    pub fn best(&self) -> Option<&WorkspaceProjectRef> {
        self.main.first()
    }
}

/// Directory that workspace-relative locations are resolved against.
pub fn workspace_base_dir(workspace: &Path) -> PathBuf {
    workspace
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a reference to an absolute filesystem path.
pub fn resolve_ref_path(project: &WorkspaceProjectRef, base_dir: &Path) -> PathBuf {
    match project.location_type {
        LocationType::Absolute => PathBuf::from(&project.project_path),
        LocationType::Group
        | LocationType::Container
        | LocationType::SelfRef
        | LocationType::Unknown => base_dir.join(&project.project_path),
    }
}

/// Populate the product-type fields from the project's main target.
///
/// A project without a readable pbxproj or without targets stays
/// unenriched.
pub fn enrich_project_ref(project: &mut WorkspaceProjectRef) {
    let Some(path) = project.absolute_path.as_deref() else {
        return;
    };
    let Some(doc) = PbxprojDocument::load_project(path) else {
        return;
    };

    let hint = path.file_stem().and_then(|s| s.to_str());
    match get_main_app_target(&doc.targets, hint) {
        Some(target) => {
            tracing::debug!(
                "{}: main target `{}` ({})",
                project.project_path,
                target.name,
                target.product_type
            );
            project.enrich(&target.product_type);
        }
        None => tracing::debug!("{}: no targets with a product type", project.project_path),
    }
}

/// Stage 1: Pods projects last.
pub fn by_pods(a: &WorkspaceProjectRef, b: &WorkspaceProjectRef) -> Ordering {
    a.is_pods.cmp(&b.is_pods)
}

/// Stage 2: applications first.
pub fn by_application(a: &WorkspaceProjectRef, b: &WorkspaceProjectRef) -> Ordering {
    b.enriched_application().cmp(&a.enriched_application())
}

/// Stage 3: projects whose main target is a test bundle last.
pub fn by_test_target(a: &WorkspaceProjectRef, b: &WorkspaceProjectRef) -> Ordering {
    a.enriched_test_target().cmp(&b.enriched_test_target())
}

/// Stage 4: higher product-type priority first.
pub fn by_priority(a: &WorkspaceProjectRef, b: &WorkspaceProjectRef) -> Ordering {
    b.priority().cmp(&a.priority())
}

/// Stage 5: test/example paths last.
pub fn by_path_heuristic(a: &WorkspaceProjectRef, b: &WorkspaceProjectRef) -> Ordering {
    a.is_test_or_example.cmp(&b.is_test_or_example)
}

/// Full ranking order; `Less` means `a` ranks ahead of `b`.
pub fn compare_workspace_projects(a: &WorkspaceProjectRef, b: &WorkspaceProjectRef) -> Ordering {
    by_pods(a, b)
        .then_with(|| by_application(a, b))
        .then_with(|| by_test_target(a, b))
        .then_with(|| by_priority(a, b))
        .then_with(|| by_path_heuristic(a, b))
}

/// Filter ranked projects down to the ones that look like the app.
///
/// Falls back to every non-test project, then to everything, so a
/// non-empty input never yields an empty result.
pub fn select_main_projects(ranked: &[WorkspaceProjectRef]) -> Vec<WorkspaceProjectRef> {
    let main: Vec<_> = ranked
        .iter()
        .filter(|p| {
            p.enriched_application()
                || (!p.is_pods && !p.enriched_test_target() && !p.is_test_or_example)
        })
        .cloned()
        .collect();
    if !main.is_empty() {
        return main;
    }

    let non_test: Vec<_> = ranked
        .iter()
        .filter(|p| !p.enriched_test_target())
        .cloned()
        .collect();
    if !non_test.is_empty() {
        return non_test;
    }

    ranked.to_vec()
}

/// Resolve, enrich and rank every project of a workspace.
///
/// `workspace` is a `.xcworkspace` directory or its manifest file. An
/// unreadable manifest yields an empty result.
pub fn get_workspace_projects(workspace: &Path) -> WorkspaceProjects {
    let workspace = normalize_path(workspace);
    let workspace = workspace.as_path();
    let workspace_dir = if workspace.file_name().is_some_and(|n| n == WORKSPACE_DATA) {
        workspace.parent().unwrap_or(workspace)
    } else {
        workspace
    };

    let mut result = WorkspaceProjects {
        workspace_path: workspace_dir.to_path_buf(),
        ..Default::default()
    };

    let Some(doc) = parse_workspace_file(workspace) else {
        return result;
    };
    result.version = doc.version;

    let base_dir = workspace_base_dir(workspace_dir);
    let mut seen = HashSet::new();
    let resolved: Vec<WorkspaceProjectRef> = doc
        .projects
        .into_iter()
        .filter_map(|mut project| {
            let path = resolve_ref_path(&project, &base_dir);
            if !path.exists() {
                tracing::debug!("workspace reference {} does not exist", path.display());
                return None;
            }
            if !seen.insert(path.clone()) {
                tracing::debug!("duplicate workspace reference {}", path.display());
                return None;
            }
            project.absolute_path = Some(path);
            Some(project)
        })
        .collect();

    // Order-preserving, so ties below still follow declaration order.
    let mut ranked: Vec<WorkspaceProjectRef> = resolved
        .into_par_iter()
        .map(|mut project| {
            enrich_project_ref(&mut project);
            project
        })
        .collect();
    ranked.sort_by(compare_workspace_projects);

    result.main = select_main_projects(&ranked);
    result.all = ranked;

    tracing::info!(
        "workspace {}: {} projects, {} main",
        result.workspace_path.display(),
        result.all.len(),
        result.main.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProductType;
    use crate::test_support::{
        typical_app, workspace_data, PbxprojFixture, TempTree, FRAMEWORK, STATIC_LIBRARY,
        UNIT_TEST,
    };
    use crate::workspace::parser::parse_workspace;

    fn refs(locations: &[&str]) -> Vec<WorkspaceProjectRef> {
        parse_workspace(&workspace_data(locations)).projects
    }

    fn enriched(mut project: WorkspaceProjectRef, ty: ProductType) -> WorkspaceProjectRef {
        project.enrich(&ty);
        project
    }

    #[test]
    fn test_application_with_pods_returns_only_app() {
        let tree = TempTree::new();
        tree.project("App", "App", &typical_app("App"));
        tree.project(
            "Pods",
            "Pods",
            &PbxprojFixture::new().target("Pods-App", STATIC_LIBRARY),
        );
        let ws = tree.workspace("App", &["group:Pods/Pods.xcodeproj", "group:App/App.xcodeproj"]);

        let projects = get_workspace_projects(&ws);
        assert_eq!(projects.version.as_deref(), Some("1.0"));
        assert_eq!(projects.all.len(), 2);
        assert_eq!(projects.all[0].project_path, "App/App.xcodeproj");
        assert_eq!(projects.all[1].project_path, "Pods/Pods.xcodeproj");

        assert_eq!(projects.main.len(), 1);
        let best = projects.best().unwrap();
        assert_eq!(best.project_path, "App/App.xcodeproj");
        assert_eq!(best.is_application, Some(true));
        assert_eq!(best.product_type_priority, Some(100));
        assert_eq!(
            best.absolute_path.as_deref(),
            Some(normalize_path(&tree.path().join("App/App.xcodeproj")).as_path())
        );
    }

    #[test]
    fn test_missing_and_duplicate_references_are_dropped() {
        let tree = TempTree::new();
        tree.project("", "App", &typical_app("App"));
        let ws = tree.workspace(
            "App",
            &["group:App.xcodeproj", "container:App.xcodeproj", "group:Gone/Gone.xcodeproj"],
        );

        let projects = get_workspace_projects(&ws);
        assert_eq!(projects.all.len(), 1);
        assert_eq!(projects.all[0].location_type, LocationType::Group);
    }

    #[test]
    fn test_manifest_path_is_accepted() {
        let tree = TempTree::new();
        tree.project("", "App", &typical_app("App"));
        let ws = tree.workspace("App", &["group:App.xcodeproj"]);

        let projects = get_workspace_projects(&ws.join(WORKSPACE_DATA));
        assert_eq!(projects.workspace_path, normalize_path(&ws));
        assert_eq!(projects.main.len(), 1);
    }

    #[test]
    fn test_relative_workspace_path_resolves_absolute_members() {
        let tree = TempTree::new();
        tree.project("App", "App", &typical_app("App"));
        let ws = tree.workspace("App", &["group:App/App.xcodeproj"]);
        let cwd = std::env::current_dir().unwrap();
        let relative = crate::util::fs::relative_path(&cwd, &ws);

        let projects = get_workspace_projects(&relative);
        assert!(projects.workspace_path.is_absolute());
        let best = projects.best().unwrap();
        assert!(best.absolute_path.as_deref().unwrap().is_absolute());
        assert_eq!(best.is_application, Some(true));
    }

    #[test]
    fn test_unreadable_workspace_is_empty() {
        let tree = TempTree::new();
        let projects = get_workspace_projects(&tree.path().join("None.xcworkspace"));
        assert!(projects.all.is_empty());
        assert!(projects.best().is_none());
    }

    #[test]
    fn test_test_projects_rank_last() {
        let tree = TempTree::new();
        tree.project("", "Kit", &PbxprojFixture::new().target("Kit", FRAMEWORK));
        tree.project("", "KitTests", &PbxprojFixture::new().target("KitTests", UNIT_TEST));
        let ws = tree.workspace("Kit", &["group:KitTests.xcodeproj", "group:Kit.xcodeproj"]);

        let projects = get_workspace_projects(&ws);
        assert_eq!(projects.all[0].project_path, "Kit.xcodeproj");
        assert_eq!(projects.all[1].is_test_target, Some(true));
        assert_eq!(projects.main.len(), 1);
        assert_eq!(projects.main[0].project_path, "Kit.xcodeproj");
    }

    #[test]
    fn test_ranking_stages() {
        let mut all = refs(&[
            "group:Pods/Pods.xcodeproj",
            "group:Examples/Example.xcodeproj",
            "group:Lib/Lib.xcodeproj",
            "group:Tests/Tests.xcodeproj",
            "group:Shop/Shop.xcodeproj",
        ]);
        all[0] = enriched(all[0].clone(), ProductType::Application);
        all[2] = enriched(all[2].clone(), ProductType::Framework);
        all[3] = enriched(all[3].clone(), ProductType::UnitTest);
        all[4] = enriched(all[4].clone(), ProductType::Application);

        all.sort_by(compare_workspace_projects);
        let order: Vec<_> = all.iter().map(|p| p.project_path.as_str()).collect();
        assert_eq!(
            order,
            [
                "Shop/Shop.xcodeproj",
                "Lib/Lib.xcodeproj",
                "Examples/Example.xcodeproj",
                "Tests/Tests.xcodeproj",
                "Pods/Pods.xcodeproj",
            ]
        );
    }

    #[test]
    fn test_main_selection_fallbacks() {
        let examples = refs(&["group:Examples/A.xcodeproj", "group:Demo/B.xcodeproj"]);
        let main = select_main_projects(&examples);
        assert_eq!(main.len(), 2);

        let tests = vec![enriched(refs(&["group:T.xcodeproj"]).remove(0), ProductType::UnitTest)];
        let main = select_main_projects(&tests);
        assert_eq!(main.len(), 1);

        assert!(select_main_projects(&[]).is_empty());
    }

    #[test]
    fn test_pods_application_still_counts_as_main() {
        let pods_app = enriched(refs(&["group:Pods/Pods.xcodeproj"]).remove(0), ProductType::Application);
        let lib = refs(&["group:Lib/Lib.xcodeproj"]).remove(0);
        let main = select_main_projects(&[lib, pods_app]);
        assert_eq!(main.len(), 2);
    }

    #[test]
    fn test_resolve_ref_path() {
        let base = Path::new("/work");
        let all = refs(&["absolute:/abs/A.xcodeproj", "group:B.xcodeproj", "self:C.xcodeproj"]);
        assert_eq!(resolve_ref_path(&all[0], base), PathBuf::from("/abs/A.xcodeproj"));
        assert_eq!(resolve_ref_path(&all[1], base), PathBuf::from("/work/B.xcodeproj"));
        assert_eq!(resolve_ref_path(&all[2], base), PathBuf::from("/work/C.xcodeproj"));
    }
}
