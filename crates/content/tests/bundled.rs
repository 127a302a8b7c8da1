//! Loads the content shipped in this repository.

use std::path::Path;
use std::sync::Arc;

use site_content::{
    ContentConfig, ContentDirectoryLoader, ContentEntry, INNOVATION, InnovationArea, SERVICES,
    ServiceCategory, SiteFeatures, innovation_by_id, innovations, service_by_id, service_by_slug,
    services,
};

fn config() -> ContentConfig {
    ContentConfig::with_search_root(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_bundled_services_load() {
    let loader = ContentDirectoryLoader::<ServiceCategory>::discover(&SERVICES, &config()).unwrap();
    let catalog = loader.load_all().unwrap();

    let ids: Vec<&str> = catalog.iter().map(|s| s.id()).collect();
    assert_eq!(
        ids,
        vec![
            "energy-efficiency",
            "green-finance",
            "innovative-building",
            "plant-engineering",
            "renewable-energy",
            "research-development",
        ]
    );

    let finance = catalog.get_by_slug("sustainability-green-finance").unwrap();
    assert_eq!(finance.id, "green-finance");
    assert_eq!(finance.sub_services.len(), 5);

    let research = catalog.get_by_id("research-development").unwrap();
    let links = research.links.as_ref().unwrap();
    assert_eq!(links[0].external, Some(true));

    assert!(loader.missing_assets(&catalog).is_empty());
}

#[test]
fn test_bundled_innovation_collection_loads() {
    let loader =
        ContentDirectoryLoader::<InnovationArea>::discover(&INNOVATION, &config()).unwrap();
    let catalog = loader.load_all().unwrap();

    let orders: Vec<i64> = catalog.iter().map(|a| a.order).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
}

#[test]
fn test_bundled_features_match_defaults() {
    let path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../packages/content/data/features.toml");
    assert_eq!(SiteFeatures::load(&path).unwrap(), SiteFeatures::default());
}

// The process-wide accessors search upward from the test's working directory,
// the crate root, which reaches the repository's bundled data.
#[test]
fn test_process_wide_services_cached() {
    let first = services().unwrap();
    let second = services().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 6);

    let finance = service_by_slug("sustainability-green-finance").unwrap().unwrap();
    assert_eq!(finance.id, "green-finance");
    assert_eq!(service_by_id("green-finance").unwrap(), Some(finance));
    assert!(service_by_id("sustainability-green-finance").unwrap().is_none());
}

#[test]
fn test_process_wide_innovation_lookup_misses() {
    assert!(Arc::ptr_eq(&innovations().unwrap(), &innovations().unwrap()));
    assert_eq!(innovation_by_id("nope").unwrap(), None);
}
