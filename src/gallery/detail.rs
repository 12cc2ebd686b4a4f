//! Image detail view and visual filters
//!
//! The selected image and the cosmetic filter applied to each image. Filters
//! are stored per reference so picking one for the enlarged image changes
//! only that image and its thumbnail.

use std::collections::HashMap;

/// Cosmetic effect applied when rendering an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFilter {
    #[default]
    None,
    Grayscale,
    Sepia,
    Invert,
    Blur,
    Saturate,
    HueRotate,
}

impl ImageFilter {
    pub const ALL: [ImageFilter; 7] = [
        ImageFilter::None,
        ImageFilter::Grayscale,
        ImageFilter::Sepia,
        ImageFilter::Invert,
        ImageFilter::Blur,
        ImageFilter::Saturate,
        ImageFilter::HueRotate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImageFilter::None => "Original",
            ImageFilter::Grayscale => "Grayscale",
            ImageFilter::Sepia => "Sepia",
            ImageFilter::Invert => "Invert",
            ImageFilter::Blur => "Blur",
            ImageFilter::Saturate => "Saturate",
            ImageFilter::HueRotate => "Hue rotate",
        }
    }

    /// Stylesheet class implementing the effect (empty for none)
    pub fn css_class(self) -> &'static str {
        match self {
            ImageFilter::None => "",
            ImageFilter::Grayscale => "filter-grayscale",
            ImageFilter::Sepia => "filter-sepia",
            ImageFilter::Invert => "filter-invert",
            ImageFilter::Blur => "filter-blur",
            ImageFilter::Saturate => "filter-saturate",
            ImageFilter::HueRotate => "filter-hue-rotate",
        }
    }

    /// Inverse of [`css_class`](Self::css_class), used by the filter picker
    pub fn from_css_class(class: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|filter| filter.css_class() == class)
            .unwrap_or_default()
    }
}

/// Filter chosen for each image reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBook {
    filters: HashMap<String, ImageFilter>,
}

impl FilterBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, reference: &str) -> ImageFilter {
        self.filters.get(reference).copied().unwrap_or_default()
    }

    /// Set the filter for one image; `ImageFilter::None` clears it
    pub fn apply(&mut self, reference: &str, filter: ImageFilter) {
        if filter == ImageFilter::None {
            self.filters.remove(reference);
        } else {
            self.filters.insert(reference.to_string(), filter);
        }
    }

    pub fn class_for(&self, reference: &str) -> &'static str {
        self.get(reference).css_class()
    }
}

/// The enlarged view: which image is selected and whether the modal shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDetail {
    selected: Option<String>,
    open: bool,
}

impl ImageDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an image and show it enlarged
    pub fn open(&mut self, reference: &str) {
        self.selected = Some(reference.to_string());
        self.open = true;
    }

    /// Hide the modal. The selection stays so the download control keeps
    /// pointing at the last viewed image.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open && self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Reference to save, if any image has been selected
    pub fn download_target(&self) -> Option<&str> {
        self.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_applies_to_one_image_only() {
        let mut book = FilterBook::new();
        book.apply("a.png", ImageFilter::Sepia);

        assert_eq!(book.get("a.png"), ImageFilter::Sepia);
        assert_eq!(book.get("b.png"), ImageFilter::None);
        assert_eq!(book.class_for("a.png"), "filter-sepia");
        assert_eq!(book.class_for("b.png"), "");
    }

    #[test]
    fn test_filter_can_be_changed_and_cleared() {
        let mut book = FilterBook::new();
        book.apply("a.png", ImageFilter::Blur);
        book.apply("b.png", ImageFilter::Invert);
        book.apply("a.png", ImageFilter::Grayscale);
        assert_eq!(book.get("a.png"), ImageFilter::Grayscale);

        book.apply("a.png", ImageFilter::None);
        assert_eq!(book.get("a.png"), ImageFilter::None);
        assert_eq!(book.get("b.png"), ImageFilter::Invert);
    }

    #[test]
    fn test_css_class_round_trip() {
        for filter in ImageFilter::ALL {
            assert_eq!(ImageFilter::from_css_class(filter.css_class()), filter);
        }
        assert_eq!(ImageFilter::from_css_class("unknown"), ImageFilter::None);
    }

    #[test]
    fn test_detail_selection() {
        let mut detail = ImageDetail::new();
        assert!(!detail.is_open());
        assert_eq!(detail.download_target(), None);

        detail.open("cat.png");
        assert!(detail.is_open());
        assert_eq!(detail.selected(), Some("cat.png"));

        detail.close();
        assert!(!detail.is_open());
        assert_eq!(detail.download_target(), Some("cat.png"));

        detail.open("dog.png");
        assert_eq!(detail.download_target(), Some("dog.png"));
    }
}
