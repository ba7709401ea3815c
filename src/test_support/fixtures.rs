//! Test fixtures for common test scenarios.
//!
//! Generators for `project.pbxproj` and `contents.xcworkspacedata` text,
//! plus helpers that lay them out on disk the way Xcode does.

use std::fs;
use std::path::{Path, PathBuf};

pub const APPLICATION: &str = "com.apple.product-type.application";
pub const APP_EXTENSION: &str = "com.apple.product-type.app-extension";
pub const FRAMEWORK: &str = "com.apple.product-type.framework";
pub const STATIC_LIBRARY: &str = "com.apple.product-type.library.static";
pub const UNIT_TEST: &str = "com.apple.product-type.bundle.unit-test";
pub const UI_TEST: &str = "com.apple.product-type.bundle.ui-testing";

type Settings = Vec<(String, String)>;

#[derive(Debug, Clone)]
struct TargetFixture {
    name: String,
    product_type: String,
    configs: Vec<(String, Settings)>,
}

/// Builder for a `project.pbxproj` document.
#[derive(Debug, Clone, Default)]
pub struct PbxprojFixture {
    targets: Vec<TargetFixture>,
    project_configs: Vec<(String, Settings)>,
}

fn owned(settings: &[(&str, &str)]) -> Settings {
    settings
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl PbxprojFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target with the given product type.
    pub fn target(mut self, name: &str, product_type: &str) -> Self {
        self.targets.push(TargetFixture {
            name: name.to_string(),
            product_type: product_type.to_string(),
            configs: Vec::new(),
        });
        self
    }

    /// Add an application target.
    pub fn app(self, name: &str) -> Self {
        self.target(name, APPLICATION)
    }

    /// Add a build configuration to the most recently added target.
    pub fn config(mut self, name: &str, settings: &[(&str, &str)]) -> Self {
        if let Some(target) = self.targets.last_mut() {
            target.configs.push((name.to_string(), owned(settings)));
        }
        self
    }

    /// Add a project-level build configuration.
    pub fn project_config(mut self, name: &str, settings: &[(&str, &str)]) -> Self {
        self.project_configs.push((name.to_string(), owned(settings)));
        self
    }

    /// Render the document.
    pub fn render(&self) -> String {
        let mut ids = IdGen(0x1000);
        let project_id = ids.fresh();
        let project_list_id = ids.fresh();

        let mut targets = String::new();
        let mut configs = String::new();
        let mut lists = String::new();
        let mut target_refs = String::new();

        let project_config_ids: Vec<String> = self
            .project_configs
            .iter()
            .map(|(name, settings)| {
                let id = ids.fresh();
                configs.push_str(&render_config(&id, name, settings));
                id
            })
            .collect();
        lists.push_str(&render_list(
            &project_list_id,
            "PBXProject \"Fixture\"",
            &project_config_ids,
            &self.project_configs,
        ));

        for target in &self.targets {
            let target_id = ids.fresh();
            let list_id = ids.fresh();

            let config_ids: Vec<String> = target
                .configs
                .iter()
                .map(|(name, settings)| {
                    let id = ids.fresh();
                    configs.push_str(&render_config(&id, name, settings));
                    id
                })
                .collect();

            let label = format!("PBXNativeTarget \"{}\"", target.name);
            lists.push_str(&render_list(&list_id, &label, &config_ids, &target.configs));

            target_refs.push_str(&format!("\t\t\t\t{} /* {} */,\n", target_id, target.name));
            targets.push_str(&format!(
                "\t\t{id} /* {name} */ = {{\n\
                 \t\t\tisa = PBXNativeTarget;\n\
                 \t\t\tbuildConfigurationList = {list} /* Build configuration list for {label} */;\n\
                 \t\t\tbuildPhases = (\n\
                 \t\t\t);\n\
                 \t\t\tdependencies = (\n\
                 \t\t\t);\n\
                 \t\t\tname = {qname};\n\
                 \t\t\tproductName = {qname};\n\
                 \t\t\tproductType = \"{ptype}\";\n\
                 \t\t}};\n",
                id = target_id,
                name = target.name,
                list = list_id,
                label = label,
                qname = quote(&target.name),
                ptype = target.product_type,
            ));
        }

        format!(
            "// !$*UTF8*$!\n\
             {{\n\
             \tarchiveVersion = 1;\n\
             \tclasses = {{\n\
             \t}};\n\
             \tobjectVersion = 56;\n\
             \tobjects = {{\n\
             \n/* Begin PBXNativeTarget section */\n\
             {targets}\
             /* End PBXNativeTarget section */\n\
             \n/* Begin PBXProject section */\n\
             \t\t{project} /* Project object */ = {{\n\
             \t\t\tisa = PBXProject;\n\
             \t\t\tbuildConfigurationList = {plist} /* Build configuration list for PBXProject \"Fixture\" */;\n\
             \t\t\ttargets = (\n\
             {target_refs}\
             \t\t\t);\n\
             \t\t}};\n\
             /* End PBXProject section */\n\
             \n/* Begin XCBuildConfiguration section */\n\
             {configs}\
             /* End XCBuildConfiguration section */\n\
             \n/* Begin XCConfigurationList section */\n\
             {lists}\
             /* End XCConfigurationList section */\n\
             \t}};\n\
             \trootObject = {project} /* Project object */;\n\
             }}\n",
            targets = targets,
            project = project_id,
            plist = project_list_id,
            target_refs = target_refs,
            configs = configs,
            lists = lists,
        )
    }
}

struct IdGen(u64);

impl IdGen {
    fn fresh(&mut self) -> String {
        self.0 += 1;
        format!("{:024X}", self.0)
    }
}

fn render_config(id: &str, name: &str, settings: &Settings) -> String {
    let mut body = String::new();
    for (key, value) in settings {
        body.push_str(&format!("\t\t\t\t{} = {};\n", quote(key), quote(value)));
    }
    format!(
        "\t\t{id} /* {name} */ = {{\n\
         \t\t\tisa = XCBuildConfiguration;\n\
         \t\t\tbuildSettings = {{\n\
         {body}\
         \t\t\t}};\n\
         \t\t\tname = {qname};\n\
         \t\t}};\n",
        id = id,
        name = name,
        body = body,
        qname = quote(name),
    )
}

fn render_list(id: &str, label: &str, ids: &[String], configs: &[(String, Settings)]) -> String {
    let mut refs = String::new();
    for (config_id, (name, _)) in ids.iter().zip(configs) {
        refs.push_str(&format!("\t\t\t\t{} /* {} */,\n", config_id, name));
    }
    format!(
        "\t\t{id} /* Build configuration list for {label} */ = {{\n\
         \t\t\tisa = XCConfigurationList;\n\
         \t\t\tbuildConfigurations = (\n\
         {refs}\
         \t\t\t);\n\
         \t\t\tdefaultConfigurationIsVisible = 0;\n\
         \t\t\tdefaultConfigurationName = Release;\n\
         \t\t}};\n",
        id = id,
        label = label,
        refs = refs,
    )
}

/// Quote a string unless Xcode would leave it bare.
fn quote(s: &str) -> String {
    let bare = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/'));
    if bare {
        s.to_string()
    } else {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// Write `<dir>/<name>.xcodeproj/project.pbxproj` and return the
/// `.xcodeproj` path.
pub fn write_project(dir: &Path, name: &str, pbxproj: &str) -> PathBuf {
    let project = dir.join(format!("{}.xcodeproj", name));
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("project.pbxproj"), pbxproj).unwrap();
    project
}

/// Render a `contents.xcworkspacedata` document with one `FileRef` per
/// location.
pub fn workspace_data(locations: &[&str]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Workspace\n   version = \"1.0\">\n");
    for location in locations {
        out.push_str(&format!(
            "   <FileRef\n      location = \"{}\">\n   </FileRef>\n",
            location
        ));
    }
    out.push_str("</Workspace>\n");
    out
}

/// Write `<dir>/<name>.xcworkspace/contents.xcworkspacedata` and return the
/// `.xcworkspace` path.
pub fn write_workspace(dir: &Path, name: &str, locations: &[&str]) -> PathBuf {
    let workspace = dir.join(format!("{}.xcworkspace", name));
    fs::create_dir_all(&workspace).unwrap();
    fs::write(
        workspace.join("contents.xcworkspacedata"),
        workspace_data(locations),
    )
    .unwrap();
    workspace
}

/// A fixture resembling a typical iOS app project: an app, a share
/// extension, unit tests and UI tests.
pub fn typical_app(name: &str) -> PbxprojFixture {
    let info = format!("{}/Info.plist", name);
    let info_debug = format!("{}/Info-Debug.plist", name);
    let entitlements = format!("{name}/{name}.entitlements", name = name);
    let extension = format!("{}Extension", name);
    let tests = format!("{}Tests", name);
    let ui_tests = format!("{}UITests", name);

    PbxprojFixture::new()
        .app(name)
        .config(
            "Debug",
            &[
                ("INFOPLIST_FILE", info_debug.as_str()),
                ("CODE_SIGN_ENTITLEMENTS", entitlements.as_str()),
                ("PRODUCT_NAME", "$(TARGET_NAME)"),
            ],
        )
        .config(
            "Release",
            &[
                ("INFOPLIST_FILE", info.as_str()),
                ("CODE_SIGN_ENTITLEMENTS", entitlements.as_str()),
                ("PRODUCT_NAME", "$(TARGET_NAME)"),
            ],
        )
        .target(&extension, APP_EXTENSION)
        .config("Release", &[("INFOPLIST_FILE", "Extension/Info.plist")])
        .target(&tests, UNIT_TEST)
        .config("Release", &[("INFOPLIST_FILE", "Tests/Info.plist")])
        .target(&ui_tests, UI_TEST)
        .config("Release", &[("INFOPLIST_FILE", "UITests/Info.plist")])
}
