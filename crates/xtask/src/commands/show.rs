//! Show a single content entry

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use site_content::{ContentConfig, ContentEntry, InnovationArea, ServiceCategory};

use crate::utils::{self, CollectionArg, OutputFormat};

/// Show a single entry by id or slug
#[derive(Parser)]
pub struct Show {
    /// Collection the entry belongs to
    #[arg(value_enum, value_name = "COLLECTION")]
    collection: CollectionArg,

    /// Entry id (directory name), or slug with --slug
    #[arg(value_name = "KEY")]
    key: String,

    /// Look the entry up by slug instead of id
    #[arg(long)]
    slug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

impl Show {
    pub fn execute(self, config: &ContentConfig) -> Result<()> {
        match self.collection {
            CollectionArg::Services => self.run::<ServiceCategory>(config),
            CollectionArg::Innovation => self.run::<InnovationArea>(config),
        }
    }

    fn run<T: ContentEntry>(&self, config: &ContentConfig) -> Result<()> {
        let collection = self.collection.collection();
        let (_, catalog) = utils::load::<T>(&collection, config)?;

        let found = if self.slug {
            catalog.get_by_slug(&self.key)
        } else {
            catalog.get_by_id(&self.key)
        };

        let Some(entry) = found else {
            let by = if self.slug { "slug" } else { "id" };
            bail!(
                "No {} entry with {} '{}' in {}",
                collection.name,
                by,
                self.key,
                catalog.root().display()
            );
        };

        match self.format {
            OutputFormat::Json => utils::print_json(entry)?,
            OutputFormat::Table => print_summary(entry),
        }

        Ok(())
    }
}

fn print_summary<T: ContentEntry>(entry: &T) {
    println!("{} {}", style("Id:").bold().cyan(), entry.id());
    println!("{} {}", style("Slug:").bold().cyan(), entry.slug());
    println!("{} {}", style("Title:").bold().cyan(), entry.title());
    if let Some(order) = entry.order() {
        println!("{} {}", style("Order:").bold().cyan(), order);
    }

    let assets = entry.asset_paths();
    if !assets.is_empty() {
        println!();
        println!("{}", style("Assets:").bold().yellow());
        for asset in assets {
            println!("  {} {}", style("→").cyan(), asset);
        }
    }
}
