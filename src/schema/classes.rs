use super::braces::match_braces;
use super::lexer::Tokens;

/// Modifiers that may precede the `class` keyword
const CLASS_MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "sealed", "abstract", "partial",
    "new", "unsafe", "readonly",
];

/// A class declaration and the text between its braces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBody<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// Extracts every class declaration with a body from `text`.
///
/// Nested classes are reported as independent entries alongside their
/// enclosing class.
pub fn extract_classes(text: &str) -> Vec<ClassBody<'_>> {
    let tokens = Tokens::new(text);
    let mut classes = Vec::new();

    for i in 0..tokens.len() {
        if !tokens.is_keyword(i, "class") || !tokens.is_ident(i + 1) {
            continue;
        }
        if !in_declaration_position(&tokens, i) {
            continue;
        }

        let Some(open) = find_body_open(&tokens, i + 2) else {
            continue;
        };
        let Some(offset) = tokens.end_offset(open) else {
            continue;
        };

        let span = match_braces(text, offset);
        classes.push(ClassBody {
            name: tokens.text(i + 1),
            body: span.body,
        });
    }

    classes
}

/// Class names declared in `text`, in source order
pub fn class_names(text: &str) -> Vec<&str> {
    extract_classes(text).into_iter().map(|c| c.name).collect()
}

fn in_declaration_position(tokens: &Tokens<'_>, i: usize) -> bool {
    if i == 0 {
        return true;
    }
    let prev = i - 1;
    tokens.is_punct(prev, ';')
        || tokens.is_punct(prev, '{')
        || tokens.is_punct(prev, '}')
        || tokens.is_punct(prev, ']')
        || (tokens.is_ident(prev) && CLASS_MODIFIERS.contains(&tokens.text(prev)))
}

/// Skips an inheritance, generic or constraint clause up to the body's `{`
fn find_body_open(tokens: &Tokens<'_>, from: usize) -> Option<usize> {
    (from..tokens.len())
        .take_while(|&j| !tokens.is_punct(j, ';'))
        .find(|&j| tokens.is_punct(j, '{'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_class() {
        let src = r#"
namespace Demo
{
    public class WidgetConfig
    {
        public string Name { get; set; }
    }
}
"#;
        let classes = extract_classes(src);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "WidgetConfig");
        assert!(classes[0].body.contains("public string Name { get; set; }"));
    }

    #[test]
    fn test_attributes_and_inheritance() {
        let src = r#"
[Serializable]
[Description("x")]
internal sealed class Device : EssentialsBridgeableDevice, IOnline, ICommunicationMonitor
{
    void Poll() { if (x) { y(); } }
}
"#;
        let classes = extract_classes(src);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Device");
        assert!(classes[0].body.trim().ends_with("}"));
        assert!(classes[0].body.contains("y();"));
    }

    #[test]
    fn test_generic_class_with_constraint() {
        let src = "public class Holder<T> : Base where T : class, new() { public T Item { get; set; } }";
        let classes = extract_classes(src);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Holder");
        assert_eq!(classes[0].body.trim(), "public T Item { get; set; }");
    }

    #[test]
    fn test_nested_classes_are_flattened() {
        let src = "public class Outer { public class Inner { public int A { get; set; } } }";
        let names = class_names(src);
        assert_eq!(names, vec!["Outer", "Inner"]);
    }

    #[test]
    fn test_comments_and_strings_ignored() {
        let src = r#"
// public class Commented { }
var s = "class Quoted { }";
public class Real { }
"#;
        assert_eq!(class_names(src), vec!["Real"]);
    }

    #[test]
    fn test_class_after_conditional_block() {
        let src = "#if SERIES4\nusing X;\n#endif\nclass WidgetConfig { public int A { get; set; } }";
        let classes = extract_classes(src);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "WidgetConfig");
    }

    #[test]
    fn test_bodyless_declaration_skipped() {
        assert!(extract_classes("public partial class Declared;").is_empty());
    }

    #[test]
    fn test_truncated_class_body() {
        let src = "public class Broken { public int A { get; set; }";
        let classes = extract_classes(src);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].body, " public int A { get; set; }");
    }
}
