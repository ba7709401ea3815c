//! Test utilities for xcresolve unit tests.
//!
//! Provides builders for pbxproj and workspace documents and helpers
//! that write them into temporary directories.
//!
//! # Example
//!
//! ```rust,ignore
//! use xcresolve::test_support::{PbxprojFixture, write_project};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     let text = PbxprojFixture::new()
//!         .app("MyApp")
//!         .config("Release", &[("INFOPLIST_FILE", "MyApp/Info.plist")])
//!         .render();
//!     let project = write_project(tmp.path(), "MyApp", &text);
//! }
//! ```

pub mod fixtures;

pub use fixtures::*;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding one or more fixture projects.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        TempTree {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a project at `<rel>/<name>.xcodeproj`.
    pub fn project(&self, rel: &str, name: &str, fixture: &PbxprojFixture) -> PathBuf {
        let dir = self.path().join(rel);
        write_project(&dir, name, &fixture.render())
    }

    /// Write a workspace at `<name>.xcworkspace` in the root.
    pub fn workspace(&self, name: &str, locations: &[&str]) -> PathBuf {
        write_workspace(self.path(), name, locations)
    }

    /// Write an arbitrary file, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}
