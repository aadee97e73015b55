use once_cell::sync::Lazy;
use regex::Regex;

static INHERITANCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class\s+\w+(?:\s*<[^>]*>)?\s*:\s*([^{]+)").expect("valid inheritance pattern")
});

/// Base types that only mark the plugin factory and are not documented
const IGNORED_BASE_PREFIX: &str = "EssentialsPluginDeviceFactory";

/// Splits the first `class Name : A, B, C` clause of a file into
/// `(interfaces, base_classes)`.
///
/// Interface names follow the `IName` convention. Everything else is a base class.
pub fn extract_inheritance(text: &str) -> (Vec<String>, Vec<String>) {
    let Some(caps) = INHERITANCE.captures(text) else {
        return (Vec::new(), Vec::new());
    };

    let clause = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let clause = strip_constraints(clause);

    let mut interfaces = Vec::new();
    let mut base_classes = Vec::new();

    for item in split_top_level(clause) {
        if item.is_empty() {
            continue;
        }
        if is_interface_name(&item) {
            interfaces.push(item);
        } else if !item.starts_with(IGNORED_BASE_PREFIX) {
            base_classes.push(item);
        }
    }

    (interfaces, base_classes)
}

fn is_interface_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Drops a trailing `where T : ...` clause
fn strip_constraints(clause: &str) -> &str {
    static WHERE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwhere\b").expect("valid where pattern"));
    match WHERE.find(clause) {
        Some(m) => &clause[..m.start()],
        None => clause,
    }
}

/// Splits on commas that are not inside generic brackets
fn split_top_level(clause: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for c in clause.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(normalize(&current));
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    items.push(normalize(&current));

    items
}

fn normalize(item: &str) -> String {
    item.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interfaces_and_bases() {
        let src = r#"
public class PanasonicDisplay : TwoWayDisplayBase, IBasicVolumeWithFeedback, ICommunicationMonitor,
    IBridgeAdvanced
{
}
"#;
        let (interfaces, bases) = extract_inheritance(src);
        assert_eq!(
            interfaces,
            vec!["IBasicVolumeWithFeedback", "ICommunicationMonitor", "IBridgeAdvanced"]
        );
        assert_eq!(bases, vec!["TwoWayDisplayBase"]);
    }

    #[test]
    fn test_factory_base_is_dropped() {
        let src = "public class Factory : EssentialsPluginDeviceFactory<PanasonicDisplay> { }";
        let (interfaces, bases) = extract_inheritance(src);
        assert!(interfaces.is_empty());
        assert!(bases.is_empty());
    }

    #[test]
    fn test_generic_arguments_not_split() {
        let src = "class Store<T> : Repository<string, T>, IDisposable where T : new() { }";
        let (interfaces, bases) = extract_inheritance(src);
        assert_eq!(interfaces, vec!["IDisposable"]);
        assert_eq!(bases, vec!["Repository<string, T>"]);
    }

    #[test]
    fn test_names_starting_with_i_are_not_all_interfaces() {
        let (interfaces, bases) = extract_inheritance("class A : IpDevice, Integration, IOnline { }");
        assert_eq!(interfaces, vec!["IOnline"]);
        assert_eq!(bases, vec!["IpDevice", "Integration"]);
    }

    #[test]
    fn test_only_first_class_is_read() {
        let src = "class A : IFirst { } class B : ISecond { }";
        let (interfaces, _) = extract_inheritance(src);
        assert_eq!(interfaces, vec!["IFirst"]);
    }

    #[test]
    fn test_no_inheritance() {
        let (interfaces, bases) = extract_inheritance("public class Plain { }");
        assert!(interfaces.is_empty());
        assert!(bases.is_empty());
    }
}
