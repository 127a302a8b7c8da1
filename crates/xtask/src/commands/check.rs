//! Validate all content
//!
//! Loads every collection the way the site does at startup, then looks for
//! relative assets that are referenced but missing on disk.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use site_content::{
    Collection, ContentConfig, ContentEntry, INNOVATION, InnovationArea, MissingAsset, SERVICES,
    ServiceCategory, SiteFeatures,
};

use crate::utils;

/// Load every collection and report content problems
#[derive(Parser)]
pub struct Check {
    /// Treat missing assets as errors
    #[arg(long)]
    strict: bool,
}

/// Outcome of checking one collection.
struct Report {
    name: &'static str,
    entries: usize,
    missing: Vec<MissingAsset>,
}

impl Check {
    pub fn execute(self, config: &ContentConfig) -> Result<()> {
        println!("{}", style("Checking site content").yellow().bold());
        println!();

        let results = [
            check_collection::<ServiceCategory>(&SERVICES, config),
            check_collection::<InnovationArea>(&INNOVATION, config),
        ];

        let mut failures = 0;
        let mut missing_assets = 0;

        for result in results {
            match result {
                Ok(report) => {
                    println!(
                        "{} {} ({} entries)",
                        style("✓").green(),
                        style(report.name).bold(),
                        report.entries
                    );
                    for missing in &report.missing {
                        println!(
                            "  {} {}: {} (expected at {})",
                            style("!").yellow(),
                            missing.entry_id,
                            missing.public_path,
                            style(missing.file.display()).dim()
                        );
                    }
                    missing_assets += report.missing.len();
                }
                Err(e) => {
                    failures += 1;
                    println!("{} {:#}", style("✗").red().bold(), e);
                }
            }
        }

        match SiteFeatures::load_or_default(config.features_file.as_deref()) {
            Ok(features) => println!(
                "{} {} ({} sections enabled)",
                style("✓").green(),
                style("features").bold(),
                features.enabled_sections().len()
            ),
            Err(e) => {
                failures += 1;
                println!("{} {}", style("✗").red().bold(), e);
            }
        }

        println!();

        if failures > 0 {
            bail!("{} content check(s) failed", failures);
        }
        if self.strict && missing_assets > 0 {
            bail!("{} referenced asset(s) missing", missing_assets);
        }

        println!("{}", style("✓ Content is valid").green().bold());
        Ok(())
    }
}

fn check_collection<T: ContentEntry>(
    collection: &Collection,
    config: &ContentConfig,
) -> Result<Report> {
    let (loader, catalog) = utils::load::<T>(collection, config)?;

    Ok(Report {
        name: collection.name,
        entries: catalog.len(),
        missing: loader.missing_assets(&catalog),
    })
}
