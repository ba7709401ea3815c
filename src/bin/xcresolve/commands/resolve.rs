//! `xcresolve resolve` command

use anyhow::Result;

use crate::cli::ResolveArgs;
use crate::commands::{display, display_opt, load_options, print_json, warn_no_project};
use xcresolve::ops::resolve_project;

pub fn execute(args: ResolveArgs, color: bool) -> Result<()> {
    let mut opts = load_options(&args.path);
    if args.debug {
        opts.prefer_release = false;
    }
    if let Some(hint) = args.hint {
        opts.project_name_hint = Some(hint);
    }

    let resolved = resolve_project(&args.path, &opts)?;

    if args.json {
        return print_json(&resolved);
    }

    let Some(project) = resolved else {
        warn_no_project(&args.path, color);
        return Ok(());
    };

    if let Some(ref workspace) = project.workspace_path {
        println!("workspace:      {}", display(workspace));
    }
    println!("project:        {}", display(&project.project_path));
    match project.main_target {
        Some(ref target) => println!("main target:    {} ({})", target.name, target.product_type),
        None => println!("main target:    -"),
    }
    println!(
        "configuration:  {}",
        project.configuration_name.as_deref().unwrap_or("-")
    );
    println!(
        "product name:   {}",
        project.product_name.as_deref().unwrap_or("-")
    );
    println!("Info.plist:     {}", display_opt(project.info_plist_path.as_ref()));
    println!(
        "entitlements:   {}",
        display_opt(project.entitlements_path.as_ref())
    );

    Ok(())
}
