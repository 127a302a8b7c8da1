//! List the entries of a collection
//!
//! Loads the collection exactly as the site does and prints it in display order.

use anyhow::Result;
use clap::Parser;
use console::style;
use site_content::{ContentCatalog, ContentConfig, ContentEntry, InnovationArea, ServiceCategory};

use crate::utils::{self, CollectionArg, OutputFormat};

/// List the entries of a collection
#[derive(Parser)]
pub struct List {
    /// Collection to list
    #[arg(value_enum, value_name = "COLLECTION")]
    collection: CollectionArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl List {
    pub fn execute(self, config: &ContentConfig) -> Result<()> {
        match self.collection {
            CollectionArg::Services => self.run::<ServiceCategory>(config),
            CollectionArg::Innovation => self.run::<InnovationArea>(config),
        }
    }

    fn run<T: ContentEntry>(&self, config: &ContentConfig) -> Result<()> {
        let collection = self.collection.collection();
        let (_, catalog) = utils::load::<T>(&collection, config)?;

        match self.format {
            OutputFormat::Table => print_table(collection.name, &catalog),
            OutputFormat::Json => utils::print_json(catalog.entries())?,
        }

        Ok(())
    }
}

fn print_table<T: ContentEntry>(name: &str, catalog: &ContentCatalog<T>) {
    println!(
        "{} {} ({})",
        style("Collection:").bold().cyan(),
        name,
        style(catalog.root().display()).dim()
    );
    println!("{} {}", style("Entries:").bold().cyan(), catalog.len());
    println!();

    if catalog.is_empty() {
        println!("{}", style("No entries").dim());
        return;
    }

    println!(
        "{:>5}  {:<28} {:<34} {}",
        style("Order").bold(),
        style("Id").bold(),
        style("Slug").bold(),
        style("Title").bold()
    );
    for entry in catalog {
        let order = entry
            .order()
            .map(|order| order.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<28} {:<34} {}",
            order,
            style(entry.id()).cyan(),
            entry.slug(),
            entry.title()
        );
    }
}
