use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use epi_docgen::config::DocgenConfig;
use epi_docgen::error::Result;
use epi_docgen::generator::{self, PluginMetadata};
use epi_docgen::schema::{resolve_config_class, synthesize};

#[derive(Parser)]
#[command(name = "epi-docgen")]
#[command(about = "Generate Markdown documentation for Essentials plugin sources")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Print documentation for the current directory
    epi-docgen generate

    # Patch README.md in the plugin root
    epi-docgen generate ./PDT.PanasonicDisplay.EPI --readme

    # Patch a specific file
    epi-docgen generate ./src --readme docs/PLUGIN.md

    # Print the sample configuration for a specific class
    epi-docgen sample --class PanasonicDisplayConfig

    # List discovered classes
    epi-docgen classes --format json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source file extension to scan
    #[arg(long, global = true, default_value = "cs")]
    pub extension: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate documentation sections
    Generate {
        /// Plugin source root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Patch a README instead of printing (defaults to README.md in the root)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        readme: Option<Option<PathBuf>>,

        /// Output format for stdout: markdown, json
        #[arg(long, default_value = "markdown")]
        format: String,
    },

    /// Print a sample device configuration
    Sample {
        /// Plugin source root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Config class to sample (defaults to the one with the most properties)
        #[arg(long)]
        class: Option<String>,
    },

    /// List classes and their auto-property counts
    Classes {
        /// Plugin source root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

pub fn generate(path: &Path, extension: &str, readme: Option<Option<PathBuf>>, format: &str) -> Result<()> {
    let mut config = DocgenConfig::new(path).with_extension(extension);
    if let Some(readme) = readme {
        config = config.with_readme(readme);
    }

    if format == "json" {
        let (sources, registry) = generator::load(&config)?;
        let metadata = PluginMetadata::analyze(&sources, &registry);
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    match generator::run(&config)? {
        Some(markdown) => print!("{}", markdown),
        None => {
            if let epi_docgen::config::OutputMode::Readme(path) = &config.output {
                eprintln!("Updated {}", path.display());
            }
        }
    }

    Ok(())
}

pub fn sample(path: &Path, extension: &str, class: Option<String>) -> Result<()> {
    let config = DocgenConfig::new(path).with_extension(extension);
    let (sources, registry) = generator::load(&config)?;

    let class_name = resolve_config_class(&registry, class.as_deref())?;

    let metadata = PluginMetadata::analyze(&sources, &registry);
    let envelope = synthesize(&class_name, &registry, &metadata.supported_types);
    println!("{}", envelope.to_json_pretty()?);

    Ok(())
}

pub fn classes(path: &Path, extension: &str, format: &str) -> Result<()> {
    let config = DocgenConfig::new(path).with_extension(extension);
    let (_, registry) = generator::load(&config)?;

    if format == "json" {
        let summary: Vec<_> = registry
            .iter()
            .map(|(name, class)| {
                serde_json::json!({
                    "name": name,
                    "properties": class.properties,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No classes found.");
        return Ok(());
    }

    println!("Found {} classes:\n", registry.len());
    for (name, class) in registry.iter() {
        println!("{} ({} properties)", name, class.len());
        for property in &class.properties {
            if property.serialized_name == property.field_name {
                println!("  {}: {}", property.field_name, property.declared_type);
            } else {
                println!(
                    "  {} [{}]: {}",
                    property.field_name, property.serialized_name, property.declared_type
                );
            }
        }
    }

    Ok(())
}
