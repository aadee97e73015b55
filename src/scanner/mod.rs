//! Source gathering: walk the tree and read every source file up front.

pub mod sources;
pub mod walker;

pub use sources::{SourceFile, SourceSet};
pub use walker::{FileWalker, SOURCE_EXTENSION};
