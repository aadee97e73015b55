//! Documentation pipeline: sources -> metadata -> Markdown sections -> output.

use serde::Serialize;

use crate::config::{DocgenConfig, OutputMode};
use crate::docs::{
    patch_readme, render_config_block, render_join_tables, render_list, render_stdout_section,
    Section,
};
use crate::error::Result;
use crate::extract::{
    extract_inheritance, extract_minimum_version, extract_public_methods, extract_supported_types,
    find_joinmap_classes, parse_join_map, JoinEntry,
};
use crate::scanner::{FileWalker, SourceSet};
use crate::schema::{select_config_class, synthesize, SampleValue, TypeRegistry};

pub const INTERFACES_TITLE: &str = "Interfaces Implemented";
pub const BASE_CLASSES_TITLE: &str = "Base Classes";
pub const SUPPORTED_TYPES_TITLE: &str = "Supported Types";
pub const MINIMUM_VERSIONS_TITLE: &str = "Minimum Essentials Framework Versions";
pub const PUBLIC_METHODS_TITLE: &str = "Public Methods";
pub const JOIN_MAPS_TITLE: &str = "Join Maps";
pub const CONFIG_EXAMPLE_TITLE: &str = "Config Example";

/// Everything extracted from a plugin's sources
#[derive(Debug, Clone, Default, Serialize)]
pub struct PluginMetadata {
    pub interfaces: Vec<String>,
    pub base_classes: Vec<String>,
    pub supported_types: Vec<String>,
    pub minimum_versions: Vec<String>,
    pub public_methods: Vec<String>,
    pub joins: Vec<JoinEntry>,
    pub config_class: Option<String>,
    pub sample_config: Option<SampleValue>,
}

impl PluginMetadata {
    /// Runs every extractor over the source set
    pub fn analyze(sources: &SourceSet, registry: &TypeRegistry) -> Self {
        let mut metadata = PluginMetadata::default();

        for file in sources.iter() {
            let text = file.content.as_str();
            let (interfaces, base_classes) = extract_inheritance(text);

            extend_unique(&mut metadata.interfaces, interfaces);
            extend_unique(&mut metadata.base_classes, base_classes);
            extend_unique(&mut metadata.supported_types, extract_supported_types(text));
            extend_unique(&mut metadata.minimum_versions, extract_minimum_version(text));
            extend_unique(&mut metadata.public_methods, extract_public_methods(text));
        }

        metadata.joins = collect_joins(sources, registry);

        match select_config_class(registry) {
            Some(name) => {
                tracing::debug!("Using {} as the config example", name);
                metadata.sample_config = Some(synthesize(name, registry, &metadata.supported_types));
                metadata.config_class = Some(name.to_string());
            }
            None => tracing::info!("No config class found; config example omitted"),
        }

        metadata
    }

    /// Rendered sections in output order
    pub fn sections(&self) -> Result<Vec<Section>> {
        let mut sections = vec![
            Section::new(INTERFACES_TITLE, render_list(&self.interfaces)),
            Section::new(BASE_CLASSES_TITLE, render_list(&self.base_classes)),
            Section::new(SUPPORTED_TYPES_TITLE, render_list(&self.supported_types)),
            Section::new(MINIMUM_VERSIONS_TITLE, render_list(&self.minimum_versions)),
            Section::new(PUBLIC_METHODS_TITLE, render_list(&self.public_methods)),
            Section::new(JOIN_MAPS_TITLE, render_join_tables(&self.joins)),
        ];

        if let Some(sample) = &self.sample_config {
            sections.push(Section::new(CONFIG_EXAMPLE_TITLE, render_config_block(sample)?));
        }

        Ok(sections)
    }
}

/// Joins of every `*JoinMap` class, read from the file named after the class.
///
/// A join map whose file cannot be found contributes no joins.
pub fn collect_joins(sources: &SourceSet, registry: &TypeRegistry) -> Vec<JoinEntry> {
    let mut joins = Vec::new();

    for class in find_joinmap_classes(registry.class_names()) {
        match sources.find_by_stem(class) {
            Some(file) => {
                let parsed = parse_join_map(&file.content);
                tracing::debug!("{} joins in {}", parsed.len(), file.path.display());
                joins.extend(parsed);
            }
            None => tracing::warn!("No source file found for join map {}", class),
        }
    }

    joins
}

/// Reads sources and the type registry for a config
pub fn load(config: &DocgenConfig) -> Result<(SourceSet, TypeRegistry)> {
    let walker = FileWalker::new(config.extension.as_str());
    let sources = SourceSet::load(config.root(), &walker)?;
    let registry = TypeRegistry::from_sources(&sources);
    Ok((sources, registry))
}

/// Concatenated stdout rendering of all sections
pub fn render_stdout(sections: &[Section]) -> String {
    sections.iter().map(render_stdout_section).collect()
}

/// Runs the whole pipeline.
///
/// Returns the Markdown to print in stdout mode, or `None` once a README was patched.
pub fn run(config: &DocgenConfig) -> Result<Option<String>> {
    let (sources, registry) = load(config)?;
    let metadata = PluginMetadata::analyze(&sources, &registry);
    let sections = metadata.sections()?;

    tracing::info!(
        "Extracted {} interfaces, {} joins, {} classes",
        metadata.interfaces.len(),
        metadata.joins.len(),
        registry.len()
    );

    match &config.output {
        OutputMode::Stdout => Ok(Some(render_stdout(&sections))),
        OutputMode::Readme(path) => {
            patch_readme(path, &sections)?;
            Ok(None)
        }
    }
}

fn extend_unique(target: &mut Vec<String>, items: impl IntoIterator<Item = String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::SourceFile;

    fn sources(files: &[(&str, &str)]) -> SourceSet {
        SourceSet::new(
            files
                .iter()
                .map(|(path, content)| SourceFile::new(*path, *content))
                .collect(),
        )
    }

    fn analyze(set: &SourceSet) -> PluginMetadata {
        let registry = TypeRegistry::from_sources(set);
        PluginMetadata::analyze(set, &registry)
    }

    #[test]
    fn test_lists_are_deduplicated_in_order() {
        let set = sources(&[
            ("A.cs", "public class A : Base, IOnline, IWarm { }"),
            ("B.cs", "public class B : Base, IOnline, ICold { }"),
        ]);
        let metadata = analyze(&set);

        assert_eq!(metadata.interfaces, vec!["IOnline", "IWarm", "ICold"]);
        assert_eq!(metadata.base_classes, vec!["Base"]);
    }

    #[test]
    fn test_missing_join_map_file_is_not_fatal() {
        let set = sources(&[(
            "src/Bridge.cs",
            "public class DisplayJoinMap : JoinMapBaseAdvanced { }",
        )]);
        let metadata = analyze(&set);

        assert!(metadata.joins.is_empty());
        let sections = metadata.sections().unwrap();
        let joins = sections.iter().find(|s| s.title == JOIN_MAPS_TITLE).unwrap();
        assert_eq!(joins.body, render_join_tables(&[]));
    }

    #[test]
    fn test_join_map_read_from_companion_file() {
        let join_map = r#"
public class DisplayJoinMap : JoinMapBaseAdvanced
{
    public JoinDataComplete Power = new JoinDataComplete(new JoinData { JoinNumber = 3, JoinSpan = 1 },
        new JoinMetadata { Description = "Power", JoinType = eJoinType.Digital });
}
"#;
        let set = sources(&[("src/Bridge/DisplayJoinMap.cs", join_map)]);
        let metadata = analyze(&set);

        assert_eq!(metadata.joins.len(), 1);
        assert_eq!(metadata.joins[0].join_number, 3);
    }

    #[test]
    fn test_config_section_omitted_without_config_class() {
        let set = sources(&[("A.cs", "public class Device { public int A { get; set; } }")]);
        let metadata = analyze(&set);
        let sections = metadata.sections().unwrap();

        assert!(metadata.sample_config.is_none());
        assert_eq!(sections.len(), 6);
        assert!(sections.iter().all(|s| s.title != CONFIG_EXAMPLE_TITLE));
    }

    #[test]
    fn test_config_section_uses_supported_types() {
        let set = sources(&[
            (
                "Factory.cs",
                r#"public class Factory { public Factory() { TypeNames = new List<string>() { "gizmo" }; } }"#,
            ),
            ("WidgetConfig.cs", "public class WidgetConfig { public int Level { get; set; } }"),
        ]);
        let metadata = analyze(&set);

        assert_eq!(metadata.config_class.as_deref(), Some("WidgetConfig"));
        let sample = metadata.sample_config.as_ref().unwrap();
        assert_eq!(sample.get("type"), Some(&SampleValue::text("gizmo")));

        let sections = metadata.sections().unwrap();
        let config = sections.last().unwrap();
        assert_eq!(config.title, CONFIG_EXAMPLE_TITLE);
        assert!(config.body.starts_with("```json\n"));
    }

    #[test]
    fn test_render_stdout_order() {
        let metadata = PluginMetadata::default();
        let out = render_stdout(&metadata.sections().unwrap());

        let interfaces = out.find("### Interfaces Implemented:").unwrap();
        let joins = out.find("### Join Maps:").unwrap();
        assert!(interfaces < joins);
    }
}
