//! Stateless pattern extractors for plugin metadata.
//!
//! Each extractor looks at a single file's text and returns whatever it
//! recognizes. A file that does not match simply yields nothing.

pub mod device;
pub mod inheritance;
pub mod joins;
pub mod methods;

pub use device::{extract_minimum_version, extract_supported_types};
pub use inheritance::extract_inheritance;
pub use joins::{find_joinmap_classes, parse_join_map, JoinEntry, JOIN_MAP_SUFFIX};
pub use methods::extract_public_methods;
