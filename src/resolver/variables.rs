//! Xcode build-variable expansion for artifact paths.

/// Hard ceiling on substitution passes.
pub const MAX_EXPANSION_PASSES: usize = 10;

const ROOT_PREFIXES: &[&str] = &[
    "$(SRCROOT)/",
    "${SRCROOT}/",
    "$(PROJECT_DIR)/",
    "${PROJECT_DIR}/",
];

const INHERITED: &[&str] = &["$(inherited)", "${inherited}"];

/// Values available for substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionContext {
    pub target_name: Option<String>,
    pub product_name: Option<String>,
}

impl ExpansionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = Some(name.into());
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }
}

/// Expand a path-valued build setting into a project-relative path.
///
/// Strips surrounding quotes (nested or padded layers included), then
/// substitutes until a pass changes
/// nothing or [`MAX_EXPANSION_PASSES`] is reached. Unresolvable variables
/// are left in place; the result is always a best-effort string.
pub fn normalize_xcode_path(raw: &str, ctx: &ExpansionContext) -> String {
    let unquoted = strip_quotes(raw);
    let was_absolute = unquoted.starts_with('/');

    let mut path = unquoted.to_string();
    let mut converged = false;
    for _ in 0..MAX_EXPANSION_PASSES {
        let next = expand_once(&path, ctx);
        if next == path {
            converged = true;
            break;
        }
        path = next;
    }
    if !converged {
        tracing::debug!(
            "expansion of `{}` did not converge after {} passes",
            raw,
            MAX_EXPANSION_PASSES
        );
    }

    while path.contains("//") {
        path = path.replace("//", "/");
    }

    let path = path.trim();
    if was_absolute {
        path.to_string()
    } else {
        path.trim_start_matches('/').to_string()
    }
}

fn strip_quotes(mut s: &str) -> &str {
    loop {
        s = s.trim();
        let quoted = ['"', '\'']
            .into_iter()
            .any(|q| s.len() >= 2 && s.starts_with(q) && s.ends_with(q));
        if !quoted {
            return s;
        }
        s = &s[1..s.len() - 1];
    }
}

fn substitute(s: String, name: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => s
            .replace(&format!("$({})", name), value)
            .replace(&format!("${{{}}}", name), value),
        None => s,
    }
}

fn expand_once(path: &str, ctx: &ExpansionContext) -> String {
    let mut s = path.to_string();
    for prefix in ROOT_PREFIXES {
        s = s.replace(prefix, "");
    }
    s = substitute(s, "TARGET_NAME", ctx.target_name.as_deref());
    s = substitute(s, "PRODUCT_NAME", ctx.product_name.as_deref());
    for inherited in INHERITED {
        s = s.replace(inherited, "");
    }
    s
}
