//! Sample device configuration envelope.

use crate::error::{DocgenError, Result};

use super::registry::TypeRegistry;
use super::sample::{SampleGenerator, SampleValue};

/// Suffix identifying configuration classes
pub const CONFIG_SUFFIX: &str = "Config";

pub const SAMPLE_KEY: &str = "GeneratedKey";
pub const SAMPLE_UID: i64 = 1;
pub const SAMPLE_NAME: &str = "GeneratedName";
pub const SAMPLE_GROUP: &str = "Group";

/// Picks the configuration class with the most properties.
///
/// Only classes ending in `Config` qualify. Ties go to the class discovered first.
pub fn select_config_class(registry: &TypeRegistry) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;

    for (name, class) in registry.iter() {
        if !name.ends_with(CONFIG_SUFFIX) {
            continue;
        }
        let better = match best {
            Some((_, count)) => class.len() > count,
            None => true,
        };
        if better {
            best = Some((name, class.len()));
        }
    }

    best.map(|(name, _)| name)
}

/// Resolves the class to sample: `requested` when it names a config class in
/// the registry, otherwise the one picked by [`select_config_class`].
pub fn resolve_config_class(registry: &TypeRegistry, requested: Option<&str>) -> Result<String> {
    match requested {
        Some(name) if name.ends_with(CONFIG_SUFFIX) && registry.contains(name) => Ok(name.to_string()),
        Some(name) => Err(DocgenError::ClassNotFound(name.to_string())),
        None => select_config_class(registry)
            .map(str::to_string)
            .ok_or_else(|| DocgenError::ClassNotFound(format!("*{}", CONFIG_SUFFIX))),
    }
}

/// Device type for a config class: its name without the `Config` suffix,
/// or the first supported type when that name is not supported.
pub fn device_type_for(class_name: &str, supported_types: &[String]) -> String {
    let derived = class_name.strip_suffix(CONFIG_SUFFIX).unwrap_or(class_name);

    if supported_types.iter().any(|t| t == derived) {
        return derived.to_string();
    }
    supported_types
        .first()
        .cloned()
        .unwrap_or_else(|| derived.to_string())
}

/// Wraps the sample of `class_name` in a device configuration envelope
pub fn synthesize(class_name: &str, registry: &TypeRegistry, supported_types: &[String]) -> SampleValue {
    let properties = SampleGenerator::new(registry).generate(class_name);

    SampleValue::Object(vec![
        ("key".to_string(), SampleValue::text(SAMPLE_KEY)),
        ("uid".to_string(), SampleValue::Integer(SAMPLE_UID)),
        ("name".to_string(), SampleValue::text(SAMPLE_NAME)),
        (
            "type".to_string(),
            SampleValue::Text(device_type_for(class_name, supported_types)),
        ),
        ("group".to_string(), SampleValue::text(SAMPLE_GROUP)),
        ("properties".to_string(), properties),
    ])
}
