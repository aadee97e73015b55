//! Class and property schema extraction.
//!
//! Recognizes a narrow subset of C#-style declarations (classes and
//! auto-properties) over a small token stream, collects them into a
//! [`TypeRegistry`], and synthesizes sample configuration values from it.
//!
//! ```text
//! source text -> lexer -> classes (brace matching) -> properties
//!             -> TypeRegistry -> SampleGenerator -> config envelope
//! ```

pub mod braces;
pub mod classes;
pub mod config;
pub mod lexer;
pub mod properties;
pub mod registry;
pub mod sample;
pub mod types;

pub use braces::{match_braces, BraceSpan};
pub use classes::{class_names, extract_classes, ClassBody};
pub use config::{
    device_type_for, resolve_config_class, select_config_class, synthesize, CONFIG_SUFFIX,
};
pub use properties::{extract_properties, PropertyDescriptor};
pub use registry::{ClassDescriptor, TypeRegistry};
pub use sample::{SampleGenerator, SampleValue};
pub use types::TypeExpr;
