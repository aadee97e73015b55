use indexmap::IndexMap;
use serde::Serialize;

use crate::scanner::SourceSet;

use super::classes::extract_classes;
use super::properties::{extract_properties, PropertyDescriptor};

/// Ordered property list of one class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    pub properties: Vec<PropertyDescriptor>,
}

impl ClassDescriptor {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Class name to property list, in first-discovery order.
///
/// When a class name is declared more than once the later declaration's
/// properties win, but the entry keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    classes: IndexMap<String, ClassDescriptor>,
}

impl TypeRegistry {
    /// Builds the registry from every file of a source set
    pub fn from_sources(sources: &SourceSet) -> Self {
        Self::from_texts(sources.texts())
    }

    /// Builds the registry from raw source texts, in order
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::default();
        for text in texts {
            registry.register_text(text);
        }
        tracing::debug!("Type registry holds {} classes", registry.len());
        registry
    }

    fn register_text(&mut self, text: &str) {
        for class in extract_classes(text) {
            let descriptor = ClassDescriptor {
                properties: extract_properties(class.body),
            };
            if let Some(previous) = self.classes.insert(class.name.to_string(), descriptor) {
                tracing::debug!(
                    "Class {} declared again; replacing {} properties",
                    class.name,
                    previous.len()
                );
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassDescriptor)> {
        self.classes.iter().map(|(name, class)| (name.as_str(), class))
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}
