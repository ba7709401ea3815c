//! `contents.xcworkspacedata` parsing and path classification.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::core::{LocationType, WorkspaceProjectRef};

/// File name of the workspace manifest inside a `.xcworkspace`.
pub const WORKSPACE_DATA: &str = "contents.xcworkspacedata";

const PROJECT_EXTENSION: &str = ".xcodeproj";

/// Path segments that mark a test or example project.
const TEST_OR_EXAMPLE_SEGMENTS: &[&str] = &[
    "test", "tests", "example", "examples", "demo", "demos", "sample", "samples",
];

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<\s*(/?)\s*(Workspace|Group|FileRef)\b((?:[^>"]|"[^"]*")*)>"#).unwrap()
});

static XML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_][\w.-]*)\s*=\s*"([^"]*)""#).unwrap());

/// A parsed workspace manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceDocument {
    /// The `version` attribute of the root element
    pub version: Option<String>,
    /// Project references, in declaration order
    pub projects: Vec<WorkspaceProjectRef>,
}

/// Find the manifest for a `.xcworkspace` directory or a manifest path.
pub fn locate_workspace_data(path: &Path) -> Option<PathBuf> {
    if path.file_name().is_some_and(|n| n == WORKSPACE_DATA) {
        return path.is_file().then(|| path.to_path_buf());
    }
    let candidate = path.join(WORKSPACE_DATA);
    candidate.is_file().then_some(candidate)
}

/// Read and parse a workspace manifest. Missing or unreadable files yield
/// `None`.
pub fn parse_workspace_file(path: &Path) -> Option<WorkspaceDocument> {
    let Some(data) = locate_workspace_data(path) else {
        tracing::debug!("no {} under {}", WORKSPACE_DATA, path.display());
        return None;
    };
    match std::fs::read_to_string(&data) {
        Ok(content) => Some(parse_workspace(&content)),
        Err(e) => {
            tracing::warn!("failed to read workspace: {}: {}", data.display(), e);
            None
        }
    }
}

/// Parse manifest text. Only references to `.xcodeproj` bundles are kept;
/// anything inside `<!-- -->` comments is ignored.
pub fn parse_workspace(content: &str) -> WorkspaceDocument {
    let mut doc = WorkspaceDocument::default();
    let mut groups: Vec<String> = Vec::new();
    let content = XML_COMMENT.replace_all(content, "");

    for caps in TAG.captures_iter(&content) {
        let closing = !caps[1].is_empty();
        let element = &caps[2];
        let attrs = caps[3].trim_end();
        let self_closing = attrs.ends_with('/');

        match (element, closing) {
            ("Workspace", false) => {
                doc.version = attribute(attrs, "version");
            }
            ("Group", false) if !self_closing => {
                let prefix = attribute(attrs, "location")
                    .map(|loc| group_prefix(&loc))
                    .unwrap_or_default();
                groups.push(prefix);
            }
            ("Group", true) => {
                groups.pop();
            }
            ("FileRef", false) => {
                let Some(location) = attribute(attrs, "location") else {
                    continue;
                };
                let project = project_ref(&location, &groups);
                if project.project_path.ends_with(PROJECT_EXTENSION) {
                    tracing::trace!("workspace references {}", project.project_path);
                    doc.projects.push(project);
                }
            }
            _ => {}
        }
    }

    doc
}

fn attribute(attrs: &str, name: &str) -> Option<String> {
    ATTRIBUTE
        .captures_iter(attrs)
        .find(|c| &c[1] == name)
        .map(|c| decode_entities(&c[2]))
}

fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Path contributed by an enclosing `<Group>` to nested group references.
fn group_prefix(location: &str) -> String {
    let (kind, path) = split_location(location);
    match kind {
        LocationType::Group | LocationType::Container | LocationType::Absolute => path,
        _ => String::new(),
    }
}

/// Split `type:path` at the first colon.
pub fn split_location(location: &str) -> (LocationType, String) {
    match location.split_once(':') {
        Some((kind, path)) => (LocationType::parse(kind), path.to_string()),
        None => (LocationType::Unknown, location.to_string()),
    }
}

fn project_ref(location: &str, groups: &[String]) -> WorkspaceProjectRef {
    let (location_type, path) = split_location(location);

    let project_path = if location_type == LocationType::Group {
        let mut parts: Vec<&str> = groups
            .iter()
            .map(|g| g.trim_end_matches('/'))
            .filter(|g| !g.is_empty())
            .collect();
        parts.push(&path);
        parts.join("/")
    } else {
        path
    };

    WorkspaceProjectRef {
        raw_location: location.to_string(),
        location_type,
        is_pods: is_pods_path(&project_path),
        is_test_or_example: is_test_or_example_path(&project_path),
        project_path,
        absolute_path: None,
        product_type: None,
        product_type_priority: None,
        is_application: None,
        is_test_target: None,
    }
}

/// A CocoaPods-generated project.
pub fn is_pods_path(path: &str) -> bool {
    path.starts_with("Pods/")
        || path.contains("/Pods/")
        || path.split('/').any(|segment| segment == "Pods.xcodeproj")
}

/// Whether any whole path segment names tests, examples, demos or samples.
///
/// Matching is per segment (with a trailing `.xcodeproj` ignored), never by
/// substring, so `ContestApp` or `LatestNews` do not count.
pub fn is_test_or_example_path(path: &str) -> bool {
    path.split('/')
        .map(|segment| {
            let segment = segment.to_lowercase();
            match segment.strip_suffix(PROJECT_EXTENSION) {
                Some(stem) => stem.to_string(),
                None => segment,
            }
        })
        .filter(|segment| !segment.is_empty())
        .any(|segment| {
            TEST_OR_EXAMPLE_SEGMENTS.contains(&segment.as_str())
                || segment.ends_with("test")
                || segment.ends_with("tests")
        })
}
