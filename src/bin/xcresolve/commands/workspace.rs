//! `xcresolve workspace` command

use anyhow::{bail, Result};

use crate::cli::WorkspaceArgs;
use crate::commands::{display_opt, print_json};
use xcresolve::ops::{discover_project, ProjectLocation};
use xcresolve::workspace::get_workspace_projects;

pub fn execute(args: WorkspaceArgs) -> Result<()> {
    let workspace = match discover_project(&args.path, 0)? {
        Some(ProjectLocation::Workspace(path)) => path,
        _ => bail!("{} is not an Xcode workspace", args.path.display()),
    };

    let projects = get_workspace_projects(&workspace);

    if args.json {
        return print_json(&projects);
    }

    if projects.all.is_empty() {
        println!("no existing projects referenced");
        return Ok(());
    }

    for project in &projects.all {
        let is_main = projects
            .main
            .iter()
            .any(|m| m.absolute_path == project.absolute_path);
        let mut flags = Vec::new();
        if project.is_pods {
            flags.push("pods");
        }
        if project.is_test_or_example {
            flags.push("test-or-example");
        }
        if project.enriched_test_target() {
            flags.push("test-target");
        }
        let product = project
            .product_type
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{} {:<48} {:<40} {}",
            if is_main { "*" } else { " " },
            display_opt(project.absolute_path.as_ref()),
            product,
            flags.join(",")
        );
    }

    Ok(())
}
