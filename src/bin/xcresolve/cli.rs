//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// xcresolve - find an Xcode project's main app and its artifacts
#[derive(Parser)]
#[command(name = "xcresolve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the main target, configuration and artifact paths
    Resolve(ResolveArgs),

    /// List the targets of the discovered project
    Targets(TargetsArgs),

    /// Rank the projects referenced by a workspace
    Workspace(WorkspaceArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Project, workspace or directory to resolve
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Prefer the Debug configuration over Release
    #[arg(long)]
    pub debug: bool,

    /// Name used to break ties between equally ranked targets
    #[arg(long, value_name = "NAME", env = "XCRESOLVE_HINT")]
    pub hint: Option<String>,

    /// Print the resolved record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TargetsArgs {
    /// Project, workspace or directory to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print targets as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct WorkspaceArgs {
    /// The .xcworkspace to rank
    pub path: PathBuf,

    /// Print the ranking as JSON
    #[arg(long)]
    pub json: bool,
}
