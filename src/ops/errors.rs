//! Errors surfaced at the project-discovery boundary.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Discovery failed before any project could be parsed.
///
/// Everything past discovery degrades to absent fields instead.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum DiscoveryError {
    #[error("path not found: {}", path.display())]
    #[diagnostic(
        code(xcresolve::discover::not_found),
        help("Check that the path exists and is readable")
    )]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported input `{}`: {kind} archives are not Xcode projects", path.display())]
    #[diagnostic(
        code(xcresolve::discover::unsupported_input),
        help("Extract the archive and point xcresolve at the project or workspace inside")
    )]
    UnsupportedInput { path: PathBuf, kind: String },
}

impl DiscoveryError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DiscoveryError::RootNotFound { path, source } => {
                Diagnostic::error(format!("cannot read `{}`", path.display()))
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::CHECK_PATH)
            }
            DiscoveryError::UnsupportedInput { path, kind } => {
                Diagnostic::error(format!("`.{}` input is not supported", kind))
                    .with_location(path)
                    .with_context("only .xcworkspace and .xcodeproj sources can be resolved")
                    .with_suggestion(suggestions::EXTRACT_ARCHIVE)
            }
        }
    }
}
