//! Command implementations

pub mod resolve;
pub mod targets;
pub mod workspace;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use xcresolve::util::config::{global_config_path, load_config, project_config_path};
use xcresolve::util::diagnostic::{emit, suggestions, Diagnostic};
use xcresolve::util::fs::display_path;
use xcresolve::ResolveOptions;

/// Build resolution options from the global and project config files.
///
/// The project config is looked up next to `root`, or next to its parent
/// when `root` is not a plain directory.
pub fn load_options(root: &Path) -> ResolveOptions {
    let config_root = if root.is_dir() && root.extension().is_none() {
        root
    } else {
        root.parent().unwrap_or(root)
    };
    let config = load_config(
        global_config_path().as_deref(),
        &project_config_path(config_root),
    );
    ResolveOptions::from_config(&config.resolve)
}

/// Render `path` relative to the current directory when it lies below it.
pub fn display(path: &Path) -> String {
    match std::env::current_dir() {
        Ok(cwd) => display_path(&xcresolve::util::fs::normalize_path(&cwd), path),
        Err(_) => path.display().to_string(),
    }
}

pub fn display_opt(path: Option<&PathBuf>) -> String {
    path.map(|p| display(p)).unwrap_or_else(|| "-".to_string())
}

/// Report that nothing resolvable was found under `root`.
pub fn warn_no_project(root: &Path, color: bool) {
    let diag = Diagnostic::warning(format!("no Xcode project found in {}", root.display()))
        .with_suggestion(suggestions::POINT_AT_PROJECT);
    emit(&diag, color);
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
