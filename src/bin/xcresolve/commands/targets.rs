//! `xcresolve targets` command

use anyhow::Result;

use crate::cli::TargetsArgs;
use crate::commands::{display, load_options, print_json, warn_no_project};
use xcresolve::ops::resolve_project;

pub fn execute(args: TargetsArgs, color: bool) -> Result<()> {
    let opts = load_options(&args.path);

    let Some(project) = resolve_project(&args.path, &opts)? else {
        if args.json {
            return print_json(&Vec::<xcresolve::Target>::new());
        }
        warn_no_project(&args.path, color);
        return Ok(());
    };

    if args.json {
        return print_json(&project.targets);
    }

    println!("{}", display(&project.project_path));
    let main = project.main_target.as_ref().map(|t| t.id.as_str());
    for target in &project.targets {
        let marker = if main == Some(target.id.as_str()) { "*" } else { " " };
        println!(
            "{} {:<32} {:<48} {:>3}",
            marker,
            target.name,
            target.product_type,
            target.priority()
        );
    }

    Ok(())
}
