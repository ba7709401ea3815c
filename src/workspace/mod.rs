//! Xcode workspace support.
//!
//! - [`parser`]: reads `contents.xcworkspacedata` and classifies references
//! - [`projects`]: resolves, enriches and ranks the referenced projects

pub mod parser;
pub mod projects;

pub use parser::{
    is_pods_path, is_test_or_example_path, locate_workspace_data, parse_workspace,
    parse_workspace_file, split_location, WorkspaceDocument, WORKSPACE_DATA,
};
pub use projects::{
    compare_workspace_projects, get_workspace_projects, select_main_projects, WorkspaceProjects,
};
