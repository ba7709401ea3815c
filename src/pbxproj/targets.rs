//! `PBXNativeTarget` extraction.

use crate::core::{ProductType, Target};
use crate::pbxproj::object::{object_id, objects_of_kind, PbxObject};

pub const NATIVE_TARGET_ISA: &str = "PBXNativeTarget";

/// Parse every native target that declares a product type, in source order.
pub fn parse_native_targets(text: &str) -> Vec<Target> {
    objects_of_kind(text, NATIVE_TARGET_ISA)
        .filter_map(|obj| target_from_object(&obj))
        .collect()
}

/// Build a [`Target`] from a native-target record.
///
/// Returns `None` when the record has no usable `productType` or no name.
pub fn target_from_object(obj: &PbxObject<'_>) -> Option<Target> {
    let product_type = match obj.dict.str("productType").map(str::trim) {
        Some(pt) if !pt.is_empty() => ProductType::from_identifier(pt),
        _ => {
            tracing::debug!("target {} has no productType, skipping", obj.id);
            return None;
        }
    };

    let name = obj
        .comment
        .or_else(|| obj.dict.str("name"))
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let Some(name) = name else {
        tracing::debug!("target {} has no name, skipping", obj.id);
        return None;
    };

    let mut target = Target::new(obj.id, name, product_type);

    match obj.dict.str("buildConfigurationList").and_then(object_id) {
        Some(list_id) => target = target.with_configuration_list(list_id),
        None => tracing::debug!("target `{}` has no buildConfigurationList", name),
    }

    if let Some(product_name) = obj.dict.str("productName").filter(|s| !s.is_empty()) {
        target = target.with_product_name(product_name);
    }

    tracing::trace!("found target `{}` ({})", target.name, target.product_type);
    Some(target)
}
