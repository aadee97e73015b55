use once_cell::sync::Lazy;
use regex::Regex;

static PUBLIC_METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public\s+\w+\s+\w+\s*\([^)]*\)").expect("valid public method pattern")
});

/// Signatures of the form `public <return> <name>(<params>)`, whitespace collapsed
pub fn extract_public_methods(text: &str) -> Vec<String> {
    PUBLIC_METHOD
        .find_iter(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}
