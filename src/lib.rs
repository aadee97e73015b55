pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod generator;
pub mod scanner;
pub mod schema;

pub use config::{DocgenConfig, OutputMode};
pub use docs::{patch_readme, update_section, Section};
pub use error::{DocgenError, Result};
pub use extract::JoinEntry;
pub use generator::PluginMetadata;
pub use scanner::{FileWalker, SourceFile, SourceSet};
pub use schema::{
    ClassDescriptor, PropertyDescriptor, SampleGenerator, SampleValue, TypeExpr, TypeRegistry,
};
