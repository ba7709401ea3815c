//! Build configuration selection and artifact path resolution.

use std::path::{Path, PathBuf};

use crate::core::{BuildConfiguration, BuildSettings, ConfigurationList, ResolvedArtifacts, Target};
use crate::pbxproj::PbxprojDocument;
use crate::resolver::target::get_main_app_target;
use crate::resolver::variables::{normalize_xcode_path, ExpansionContext};

pub const INFOPLIST_FILE: &str = "INFOPLIST_FILE";
pub const CODE_SIGN_ENTITLEMENTS: &str = "CODE_SIGN_ENTITLEMENTS";
pub const PRODUCT_NAME: &str = "PRODUCT_NAME";

/// Settings of the configuration chosen for one target.
#[derive(Debug, Clone)]
pub struct TargetBuildSettings<'a> {
    pub configuration: &'a BuildConfiguration,
    /// Target settings layered over the same-named project configuration
    pub settings: BuildSettings,
    pub info_plist: Option<String>,
    pub entitlements: Option<String>,
    pub product_name: Option<String>,
}

impl TargetBuildSettings<'_> {
    pub fn config_name(&self) -> &str {
        &self.configuration.name
    }
}

/// Pick a configuration from a list, scanning in list order.
///
/// With `prefer_release`, a configuration named "Release" is taken
/// immediately. A "Debug" configuration is kept if nothing is kept yet, or
/// always when Release is not preferred. Any other configuration is kept
/// only as the first fallback.
pub fn select_configuration<'a>(
    doc: &'a PbxprojDocument,
    list: &ConfigurationList,
    prefer_release: bool,
) -> Option<&'a BuildConfiguration> {
    let mut selected: Option<&BuildConfiguration> = None;

    for id in &list.configuration_ids {
        let Some(config) = doc.configuration(id) else {
            tracing::debug!("configuration {} referenced by list {} not found", id, list.id);
            continue;
        };

        if prefer_release && config.name.eq_ignore_ascii_case("release") {
            selected = Some(config);
            break;
        } else if config.name.eq_ignore_ascii_case("debug") {
            if selected.is_none() || !prefer_release {
                selected = Some(config);
            }
        } else if selected.is_none() {
            selected = Some(config);
        }
    }

    selected
}

/// Resolve the configuration and key artifact settings of a target.
///
/// Returns `None` when the target has no configuration list or the list
/// yields no configuration.
pub fn get_target_build_settings<'a>(
    doc: &'a PbxprojDocument,
    target: &Target,
    prefer_release: bool,
) -> Option<TargetBuildSettings<'a>> {
    let list_id = target.build_configuration_list_id.as_deref()?;
    let Some(list) = doc.configuration_list(list_id) else {
        tracing::debug!("configuration list {} of `{}` not found", list_id, target.name);
        return None;
    };
    let configuration = select_configuration(doc, list, prefer_release)?;

    let settings = match doc.project_configuration(&configuration.name) {
        Some(project) => configuration.build_settings.merged_over(&project.build_settings),
        None => configuration.build_settings.clone(),
    };

    tracing::debug!(
        "using configuration `{}` for target `{}`",
        configuration.name,
        target.name
    );

    Some(TargetBuildSettings {
        configuration,
        info_plist: non_empty(settings.get(INFOPLIST_FILE)),
        entitlements: non_empty(settings.get(CODE_SIGN_ENTITLEMENTS)),
        product_name: non_empty(settings.get(PRODUCT_NAME)),
        settings,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Join an expanded path onto the project directory.
fn resolve_path(project_dir: &Path, raw: &str, ctx: &ExpansionContext) -> Option<PathBuf> {
    let normalized = normalize_xcode_path(raw, ctx);
    if normalized.is_empty() {
        return None;
    }
    let path = Path::new(&normalized);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(project_dir.join(path))
    }
}

/// Resolve the main target of a project and its artifact paths.
///
/// `project_dir` is the directory containing the `.xcodeproj`. Returns
/// `None` only when the project has no targets; missing configuration data
/// yields a record with just the target populated.
pub fn get_main_target_artifacts(
    doc: &PbxprojDocument,
    project_dir: &Path,
    project_name_hint: Option<&str>,
    prefer_release: bool,
) -> Option<ResolvedArtifacts> {
    let target = get_main_app_target(&doc.targets, project_name_hint)?;
    tracing::info!("main target: {} ({})", target.name, target.product_type);

    let Some(selected) = get_target_build_settings(doc, target, prefer_release) else {
        return Some(ResolvedArtifacts::target_only(target));
    };

    let target_ctx = ExpansionContext::new().with_target_name(&target.name);
    let product_name = selected
        .product_name
        .as_deref()
        .map(|p| normalize_xcode_path(p, &target_ctx))
        .filter(|p| !p.is_empty())
        .or_else(|| target.product_name.clone());

    let mut ctx = target_ctx;
    ctx.product_name = product_name.clone();

    let info_plist_path = selected
        .info_plist
        .as_deref()
        .and_then(|p| resolve_path(project_dir, p, &ctx));
    let entitlements_path = selected
        .entitlements
        .as_deref()
        .and_then(|p| resolve_path(project_dir, p, &ctx));

    Some(ResolvedArtifacts {
        target: target.clone(),
        config_name: Some(selected.config_name().to_string()),
        info_plist_path,
        entitlements_path,
        product_name,
        target_name: Some(target.name.clone()),
        build_settings: selected.settings,
    })
}
