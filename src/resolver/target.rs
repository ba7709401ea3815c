//! Main-target selection.
//!
//! Candidates are ordered by a list of independent comparator stages
//! applied lexicographically. Each stage is a pure function of two targets,
//! so the policy can be checked one stage at a time.

use std::cmp::Ordering;

use crate::core::Target;

/// Lowercase and keep only ASCII alphanumerics.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whether `name` and `hint` match after normalization, in either
/// direction of containment.
pub fn matches_hint(name: &str, hint: &str) -> bool {
    let name = normalize_name(name);
    let hint = normalize_name(hint);
    if name.is_empty() || hint.is_empty() {
        return false;
    }
    hint.contains(&name) || name.contains(&hint)
}

/// Stage 1: higher product-type priority first.
pub fn by_product_priority(a: &Target, b: &Target) -> Ordering {
    b.priority().cmp(&a.priority())
}

/// Stage 2: a target matching the project-name hint first.
pub fn by_name_hint(a: &Target, b: &Target, hint: Option<&str>) -> Ordering {
    match hint {
        Some(hint) => {
            let a_match = matches_hint(&a.name, hint);
            let b_match = matches_hint(&b.name, hint);
            b_match.cmp(&a_match)
        }
        None => Ordering::Equal,
    }
}

/// Stage 3: shorter name first.
pub fn by_name_length(a: &Target, b: &Target) -> Ordering {
    a.name.chars().count().cmp(&b.name.chars().count())
}

/// Full ranking order; `Less` means `a` is the better main-target candidate.
pub fn compare_targets(a: &Target, b: &Target, hint: Option<&str>) -> Ordering {
    by_product_priority(a, b)
        .then_with(|| by_name_hint(a, b, hint))
        .then_with(|| by_name_length(a, b))
}

/// Pick the target most likely to be the shipping app.
///
/// Complete ties keep input order. Returns `None` for an empty slice.
pub fn get_main_app_target<'a>(
    targets: &'a [Target],
    project_name_hint: Option<&str>,
) -> Option<&'a Target> {
    let hint = project_name_hint.filter(|h| !normalize_name(h).is_empty());
    targets.iter().min_by(|a, b| compare_targets(a, b, hint))
}
