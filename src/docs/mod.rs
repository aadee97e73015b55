//! Documentation output
//!
//! Renders extracted metadata as Markdown sections and writes them either to
//! standard output or into a README between section markers.

pub mod markdown;
pub mod readme;

pub use markdown::{
    render_config_block, render_join_tables, render_list, render_stdout_section, Section,
};
pub use readme::{patch_readme, update_section};
