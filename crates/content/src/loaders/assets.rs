//! Asset path rewriting.
//!
//! Authors reference media next to the JSON file (`"./bg.webm"`). The web
//! server exposes each entry directory under a public base, so those paths are
//! rewritten to `{public_base}/{entry_id}/bg.webm`. Absolute paths pass through.
//!
//! Only two places hold asset paths:
//! - every string member of the `video` object
//! - the `src` member of each item in the `images` array

use serde_json::{Map, Value};

/// Prefix marking an author-relative asset path.
pub const RELATIVE_MARKER: &str = "./";

/// Rewrites relative asset paths of a parsed entry in place.
pub fn resolve_asset_paths(record: &mut Map<String, Value>, public_base: &str, entry_id: &str) {
    if let Some(Value::Object(video)) = record.get_mut("video") {
        for value in video.values_mut() {
            resolve_value(value, public_base, entry_id);
        }
    }

    if let Some(Value::Array(images)) = record.get_mut("images") {
        for image in images {
            if let Some(src) = image.get_mut("src") {
                resolve_value(src, public_base, entry_id);
            }
        }
    }
}

fn resolve_value(value: &mut Value, public_base: &str, entry_id: &str) {
    if let Value::String(path) = value
        && let Some(rest) = path.strip_prefix(RELATIVE_MARKER)
    {
        let resolved = public_path(public_base, entry_id, rest);
        *path = resolved;
    }
}

fn public_path(public_base: &str, entry_id: &str, rest: &str) -> String {
    format!("{}/{}/{}", public_base.trim_end_matches('/'), entry_id, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "/content/innovation";

    fn resolve(value: Value) -> Value {
        let Value::Object(mut record) = value else {
            panic!("fixture must be an object");
        };
        resolve_asset_paths(&mut record, BASE, "urban-ai");
        Value::Object(record)
    }

    #[test]
    fn test_rewrites_video_members() {
        let resolved = resolve(json!({
            "video": {
                "webm": "./bg.webm",
                "mp4": "/video/hero-bg.mp4",
                "poster": "./img/poster.jpg"
            }
        }));

        assert_eq!(resolved["video"]["webm"], "/content/innovation/urban-ai/bg.webm");
        assert_eq!(resolved["video"]["mp4"], "/video/hero-bg.mp4");
        assert_eq!(
            resolved["video"]["poster"],
            "/content/innovation/urban-ai/img/poster.jpg"
        );
    }

    #[test]
    fn test_rewrites_image_sources_only() {
        let resolved = resolve(json!({
            "images": [
                { "src": "./diagram.gif", "alt": "./not-an-asset", "animated": true },
                { "src": "/shared/photo.jpg", "alt": "photo" },
                { "alt": "missing src" }
            ]
        }));

        assert_eq!(resolved["images"][0]["src"], "/content/innovation/urban-ai/diagram.gif");
        assert_eq!(resolved["images"][0]["alt"], "./not-an-asset");
        assert_eq!(resolved["images"][1]["src"], "/shared/photo.jpg");
        assert!(resolved["images"][2].get("src").is_none());
    }

    #[test]
    fn test_leaves_other_fields_untouched() {
        let source = json!({
            "title": "./looks-relative",
            "links": [{ "label": "Doc", "href": "./doc.pdf" }],
            "video": "./not-an-object.mp4",
            "images": { "src": "./not-an-array.png" }
        });

        assert_eq!(resolve(source.clone()), source);
    }

    #[test]
    fn test_non_string_video_members_untouched() {
        let resolved = resolve(json!({ "video": { "loop": true, "webm": "./a.webm" } }));
        assert_eq!(resolved["video"]["loop"], true);
        assert_eq!(resolved["video"]["webm"], "/content/innovation/urban-ai/a.webm");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let mut record = Map::new();
        record.insert("video".into(), json!({ "mp4": "./v.mp4" }));
        resolve_asset_paths(&mut record, "/content/services/", "plant-engineering");
        assert_eq!(record["video"]["mp4"], "/content/services/plant-engineering/v.mp4");
    }
}
