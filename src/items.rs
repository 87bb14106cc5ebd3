//! Gallery item collection.
//!
//! The presenter walks its container in document order and hands over one
//! [`ImageDescriptor`] per `<img>`. This module turns those into immutable
//! [`GalleryItem`]s, one per descriptor and in the same order, so a displayed
//! index always maps back to the same image in the source markup.
//!
//! ## Resolution
//!
//! Each field is resolved independently; the first non-empty source wins:
//!
//! ```text
//! full_size_url: data-fullsize → src
//! alt_text:      alt → ""
//! title_text:    title → ""
//! caption:       (captions enabled) selected element × caption source → ""
//! ```
//!
//! The caption element is either the image itself or its container
//! (`captions.selector`), read as a plain attribute, a `data-*` value, or the
//! element's text (`captions.source`), keyed by `captions.data_key`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{CaptionConfig, CaptionSelector, CaptionSource};

/// Attributes and text content of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text: String,
}

impl ElementDescriptor {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// A `data-*` value: `data("fullsize")` reads `data-fullsize`.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{key}"))
    }
}

/// One image as found in the source container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub image: ElementDescriptor,
    /// The image's parent element.
    #[serde(default)]
    pub container: ElementDescriptor,
}

impl ImageDescriptor {
    pub fn new(src: impl Into<String>) -> Self {
        Self::default().with_attr("src", src)
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.image.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.image.text = text.into();
        self
    }

    pub fn with_container_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.container.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_container_text(mut self, text: impl Into<String>) -> Self {
        self.container.text = text.into();
        self
    }
}

/// An image in the gallery. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Thumbnail source.
    pub source_url: String,
    /// Image shown in the single view.
    pub full_size_url: String,
    pub alt_text: String,
    pub title_text: String,
    /// Empty when captions are disabled or none was found.
    pub caption: String,
}

/// Parse the descriptor list a presenter sends as a JSON array.
pub fn descriptors_from_json(json: &str) -> serde_json::Result<Vec<ImageDescriptor>> {
    serde_json::from_str(json)
}

/// First non-empty value among `sources`.
fn first_non_empty(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| opt.filter(|s| !s.trim().is_empty()).map(String::from))
        .next()
}

/// Read the caption for one descriptor. Empty when captions are disabled.
pub fn resolve_caption(descriptor: &ImageDescriptor, captions: &CaptionConfig) -> String {
    if !captions.enabled {
        return String::new();
    }
    let element = match captions.selector {
        CaptionSelector::Image => &descriptor.image,
        CaptionSelector::Container => &descriptor.container,
    };
    let raw = match captions.source {
        CaptionSource::Attr => element.attr(&captions.data_key),
        CaptionSource::Data => element.data(&captions.data_key),
        CaptionSource::Text => Some(element.text.as_str()),
    };
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Collect gallery items in document order.
pub fn collect_items(descriptors: &[ImageDescriptor], captions: &CaptionConfig) -> Vec<GalleryItem> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let image = &descriptor.image;
            let source_url = image.attr("src").unwrap_or_default().to_string();
            if source_url.is_empty() {
                tracing::debug!(index, "image without src attribute");
            }
            GalleryItem {
                full_size_url: first_non_empty(&[image.data("fullsize"), Some(source_url.as_str())])
                    .unwrap_or_default(),
                alt_text: image.attr("alt").unwrap_or_default().to_string(),
                title_text: image.attr("title").unwrap_or_default().to_string(),
                caption: resolve_caption(descriptor, captions),
                source_url,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captions(selector: CaptionSelector, source: CaptionSource, key: &str) -> CaptionConfig {
        CaptionConfig {
            selector,
            source,
            data_key: key.to_string(),
            ..CaptionConfig::default()
        }
    }

    // =========================================================================
    // URL and text fields
    // =========================================================================

    #[test]
    fn full_size_prefers_data_fullsize() {
        let descriptor = ImageDescriptor::new("thumb.jpg").with_attr("data-fullsize", "full.jpg");
        let items = collect_items(&[descriptor], &CaptionConfig::default());
        assert_eq!(items[0].source_url, "thumb.jpg");
        assert_eq!(items[0].full_size_url, "full.jpg");
    }

    #[test]
    fn full_size_falls_back_to_src() {
        let items = collect_items(&[ImageDescriptor::new("a.jpg")], &CaptionConfig::default());
        assert_eq!(items[0].full_size_url, "a.jpg");

        let blank = ImageDescriptor::new("b.jpg").with_attr("data-fullsize", "  ");
        let items = collect_items(&[blank], &CaptionConfig::default());
        assert_eq!(items[0].full_size_url, "b.jpg");
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        let items = collect_items(&[ImageDescriptor::default()], &CaptionConfig::default());
        assert_eq!(items[0].source_url, "");
        assert_eq!(items[0].alt_text, "");
        assert_eq!(items[0].title_text, "");
        assert_eq!(items[0].caption, "");
    }

    #[test]
    fn document_order_is_preserved() {
        let descriptors: Vec<_> = (0..5)
            .map(|i| ImageDescriptor::new(format!("{i}.jpg")))
            .collect();
        let items = collect_items(&descriptors, &CaptionConfig::default());
        let sources: Vec<&str> = items.iter().map(|i| i.source_url.as_str()).collect();
        assert_eq!(sources, vec!["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
    }

    // =========================================================================
    // Captions
    // =========================================================================

    #[test]
    fn default_caption_reads_alt() {
        let descriptor = ImageDescriptor::new("a.jpg").with_attr("alt", "Harbor at dusk");
        let items = collect_items(&[descriptor], &CaptionConfig::default());
        assert_eq!(items[0].caption, "Harbor at dusk");
        assert_eq!(items[0].alt_text, "Harbor at dusk");
    }

    #[test]
    fn caption_from_title_attribute() {
        let descriptor = ImageDescriptor::new("a.jpg")
            .with_attr("alt", "alt text")
            .with_attr("title", "Title text");
        let config = captions(CaptionSelector::Image, CaptionSource::Attr, "title");
        assert_eq!(resolve_caption(&descriptor, &config), "Title text");
    }

    #[test]
    fn caption_from_data_value() {
        let descriptor = ImageDescriptor::new("a.jpg").with_attr("data-caption", "From data");
        let config = captions(CaptionSelector::Image, CaptionSource::Data, "caption");
        assert_eq!(resolve_caption(&descriptor, &config), "From data");
    }

    #[test]
    fn caption_from_container_text() {
        let descriptor = ImageDescriptor::new("a.jpg").with_container_text("\n  Figure 1  \n");
        let config = captions(CaptionSelector::Container, CaptionSource::Text, "alt");
        assert_eq!(resolve_caption(&descriptor, &config), "Figure 1");
    }

    #[test]
    fn caption_from_container_attribute() {
        let descriptor = ImageDescriptor::new("a.jpg")
            .with_attr("alt", "image alt")
            .with_container_attr("alt", "container alt");
        let config = captions(CaptionSelector::Container, CaptionSource::Attr, "alt");
        assert_eq!(resolve_caption(&descriptor, &config), "container alt");
    }

    #[test]
    fn disabled_captions_are_empty() {
        let descriptor = ImageDescriptor::new("a.jpg").with_attr("alt", "ignored");
        let config = CaptionConfig {
            enabled: false,
            ..CaptionConfig::default()
        };
        assert_eq!(resolve_caption(&descriptor, &config), "");
    }

    #[test]
    fn descriptor_list_from_json_keeps_order() {
        let json = r#"[
            {"image": {"attributes": {"src": "a.jpg", "data-fullsize": "a-full.jpg"}}},
            {"image": {"attributes": {"src": "b.jpg"}}, "container": {"text": "Second"}}
        ]"#;
        let descriptors = descriptors_from_json(json).unwrap();
        let items = collect_items(&descriptors, &CaptionConfig::default());
        assert_eq!(items[0].full_size_url, "a-full.jpg");
        assert_eq!(items[1].source_url, "b.jpg");
        assert_eq!(descriptors[1].container.text, "Second");
    }

    #[test]
    fn malformed_descriptor_json_is_error() {
        assert!(descriptors_from_json(r#"[{"image": 3}]"#).is_err());
    }

    #[test]
    fn descriptor_deserializes_from_json() {
        let json = r#"{"image": {"attributes": {"src": "x.jpg", "alt": "X"}}}"#;
        let descriptor: ImageDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.image.attr("src"), Some("x.jpg"));
        assert_eq!(descriptor.container, ElementDescriptor::default());
    }
}
