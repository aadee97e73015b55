use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_NAMES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"TypeNames\s*=\s*new\s+List\s*<\s*string\s*>\s*(?:\(\s*\))?\s*\{([^}]*)\}")
        .expect("valid type names pattern")
});

static MINIMUM_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"MinimumEssentialsFrameworkVersion\s*=\s*"([^"]+)""#)
        .expect("valid minimum version pattern")
});

/// Device type names a plugin factory registers
pub fn extract_supported_types(text: &str) -> Vec<String> {
    let Some(caps) = TYPE_NAMES.captures(text) else {
        return Vec::new();
    };

    caps.get(1)
        .map(|m| m.as_str())
        .unwrap_or("")
        .split(',')
        .map(|t| t.trim().trim_matches('"').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Minimum framework version a plugin declares, if any
pub fn extract_minimum_version(text: &str) -> Option<String> {
    MINIMUM_VERSION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
