//! Print page section flags

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use site_content::{ContentConfig, SiteFeatures};

use crate::utils::{self, OutputFormat};

/// Print page section flags
#[derive(Parser)]
pub struct Features {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl Features {
    pub fn execute(self, config: &ContentConfig) -> Result<()> {
        let features = SiteFeatures::load_or_default(config.features_file.as_deref())
            .context("Failed to load feature flags")?;

        match self.format {
            OutputFormat::Json => utils::print_json(&features)?,
            OutputFormat::Table => {
                let source = config
                    .features_file
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "built-in defaults".to_string());
                println!("{} {}", style("Source:").bold().cyan(), source);
                println!();

                for (section, enabled) in features.sections() {
                    let marker = if enabled {
                        style("on ").green()
                    } else {
                        style("off").red()
                    };
                    println!("  {} {}", marker, section);
                }
            }
        }

        Ok(())
    }
}
