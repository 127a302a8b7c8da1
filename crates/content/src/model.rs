//! Typed content records.
//!
//! JSON files use camelCase keys (`shortDescription`, `mp4Mobile`); the
//! structs below mirror them field for field. Descriptive fields are opaque to
//! the loader, only `id`, `slug`, `order` and the asset fields carry meaning.
//! Those are required; descriptive fields default when absent, and keys the
//! structs do not know are kept in `extra` and written back on serialization.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// A record produced by [`crate::ContentDirectoryLoader`].
pub trait ContentEntry: Serialize + DeserializeOwned + Clone {
    /// Identifier, always equal to the entry's directory name.
    fn id(&self) -> &str;

    /// Slug used for external links.
    fn slug(&self) -> &str;

    /// Human readable title.
    fn title(&self) -> &str;

    /// Manual display order. `None` for kinds ordered by directory name.
    fn order(&self) -> Option<i64> {
        None
    }

    /// Every asset field value of the entry, after path rewriting.
    fn asset_paths(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Sub-item shown under a service or innovation area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubService {
    pub label: String,
    /// Reserved for dedicated sub-pages.
    pub slug: String,
}

/// Innovation areas use the same label/slug pair as services.
pub type InnovationSubItem = SubService;

/// Related page, demo or external resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// e.g. "Live Demo", "Interactive Model"
    pub label: String,
    /// Internal route or external URL.
    pub href: String,
    /// Opens in a new tab when true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// e.g. "120+"
    pub metric: String,
    /// e.g. "projects completed"
    pub metric_label: String,
    /// e.g. "40% avg. energy reduction"
    pub secondary: String,
}

/// Background video block. Every member is an asset field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSources {
    pub webm: String,
    pub mp4: String,
    pub mp4_mobile: String,
    pub poster: String,
    /// Data URI for blur-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl VideoSources {
    fn asset_paths(&self) -> impl Iterator<Item = &str> {
        [&self.webm, &self.mp4, &self.mp4_mobile, &self.poster]
            .into_iter()
            .map(String::as_str)
            .chain(self.placeholder.as_deref())
    }
}

/// One service category, loaded from `services/{id}/*.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    /// German subtitle.
    #[serde(default)]
    pub title_de: String,
    /// Name of the icon component.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub sub_services: Vec<SubService>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub related_project_slugs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    pub video: VideoSources,
    /// Authored keys without a field above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentEntry for ServiceCategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn asset_paths(&self) -> Vec<&str> {
        self.video.asset_paths().collect()
    }
}

/// Supplementary image or animated GIF shown inside an innovation slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnovationImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Animated GIFs are rendered eagerly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

/// One innovation area, loaded from `innovation/{id}/*.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnovationArea {
    pub id: String,
    pub slug: String,
    /// Manual display order (1-based).
    pub order: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub sub_items: Vec<InnovationSubItem>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    pub video: VideoSources,
    #[serde(default)]
    pub images: Vec<InnovationImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentEntry for InnovationArea {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn order(&self) -> Option<i64> {
        Some(self.order)
    }

    fn asset_paths(&self) -> Vec<&str> {
        self.video
            .asset_paths()
            .chain(self.images.iter().map(|image| image.src.as_str()))
            .collect()
    }
}

/// Untyped entry: the parsed JSON object, passed through as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenericEntry(pub Map<String, Value>);

impl GenericEntry {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

impl ContentEntry for GenericEntry {
    fn id(&self) -> &str {
        self.str_field("id")
    }

    fn slug(&self) -> &str {
        self.str_field("slug")
    }

    fn title(&self) -> &str {
        self.str_field("title")
    }

    fn order(&self) -> Option<i64> {
        self.0.get("order").and_then(order_value)
    }

    fn asset_paths(&self) -> Vec<&str> {
        let video = self
            .0
            .get("video")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|video| video.values())
            .filter_map(Value::as_str);

        let images = self
            .0
            .get("images")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|image| image.get("src").and_then(Value::as_str));

        video.chain(images).collect()
    }
}

/// Reads an `order` value. Floats count when they have no fractional part
/// (`2.0`); anything else is treated as absent.
pub(crate) fn order_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|order| order.fract() == 0.0 && order.abs() < i64::MAX as f64)
            .map(|order| order as i64)
    })
}
