//! Client-side gallery
//!
//! Free-text filtering and fixed-size pagination over an in-memory image
//! list. Nothing is cached: every call recomputes from the list it is given.

pub mod detail;

use crate::types::image::{GeneratedImage, StoredImage};

/// Images per gallery page
pub const PAGE_SIZE: usize = 9;

/// Something the gallery can search by identifier
pub trait GalleryItem {
    fn search_key(&self) -> &str;
}

impl GalleryItem for GeneratedImage {
    fn search_key(&self) -> &str {
        self.reference()
    }
}

impl GalleryItem for StoredImage {
    fn search_key(&self) -> &str {
        &self.key
    }
}

impl GalleryItem for String {
    fn search_key(&self) -> &str {
        self
    }
}

impl<T: GalleryItem + ?Sized> GalleryItem for &T {
    fn search_key(&self) -> &str {
        (**self).search_key()
    }
}

/// Items whose identifier contains `query`, ignoring case
pub fn filter_items<'a, T: GalleryItem>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.search_key().to_lowercase().contains(&needle))
        .collect()
}

/// `items[(page-1)*size .. page*size]`, clipped to the list; a page past the
/// end is an empty slice
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Number of page buttons for `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// What a gallery renders for one list
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPage<'a, T> {
    pub items: Vec<&'a T>,
    pub filtered_count: usize,
    pub page_count: usize,
    pub current_page: usize,
}

impl<T> GalleryPage<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers for the pagination buttons, starting at 1
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.page_count
    }
}

/// Query and page state of one gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    query: String,
    current_page: usize,
    page_size: usize,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search text. The current page is left alone, so a narrower
    /// query can leave the gallery on an empty page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Jump to a page (1-based). No upper bound is enforced.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn view<'a, T: GalleryItem>(&self, items: &'a [T]) -> GalleryPage<'a, T> {
        let filtered = filter_items(items, &self.query);
        let page_items = page_slice(&filtered, self.current_page, self.page_size).to_vec();
        GalleryPage {
            items: page_items,
            filtered_count: filtered.len(),
            page_count: page_count(filtered.len(), self.page_size),
            current_page: self.current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(count: usize) -> Vec<StoredImage> {
        (0..count)
            .map(|i| StoredImage {
                key: format!("image-{}.png", i),
                uploaded: "2024-06-10T06:13:20.000Z".to_string(),
            })
            .collect()
    }

    fn keys<'a>(items: &[&'a StoredImage]) -> Vec<&'a str> {
        items.iter().map(|image| image.key.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items: Vec<String> = ["Sunset.png", "sunrise.PNG", "forest.jpg"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let filtered = filter_items(&items, "SUN");
        assert_eq!(filtered, vec!["Sunset.png", "sunrise.PNG"]);

        let filtered = filter_items(&items, ".png");
        assert_eq!(filtered, vec!["Sunset.png", "sunrise.PNG"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = stored(4);
        assert_eq!(filter_items(&items, "").len(), 4);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items: Vec<String> = ["alpha", "Alphabet", "beta", "ALP"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let once = filter_items(&items, "alp");
        let twice = filter_items(&once, "alp");
        let once: Vec<&str> = once.iter().map(|s| s.as_str()).collect();
        let twice: Vec<&str> = twice.iter().map(|s| s.as_str()).collect();
        assert_eq!(once, vec!["alpha", "Alphabet", "ALP"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(page_slice(&items, 1, 9), &items[0..9]);
        assert_eq!(page_slice(&items, 3, 9), &items[18..20]);
        assert!(page_slice(&items, 4, 9).is_empty());
        assert!(page_slice(&items, 100, 9).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 9), 0);
        assert_eq!(page_count(9, 9), 1);
        assert_eq!(page_count(10, 9), 2);
        assert_eq!(page_count(18, 9), 2);
        assert_eq!(page_count(19, 9), 3);
    }

    #[test]
    fn test_ten_images_two_pages() {
        let images = stored(10);
        let mut gallery = Gallery::new();

        let page = gallery.view(&images);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.page_numbers().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.items[0].key, "image-0.png");
        assert_eq!(page.items[8].key, "image-8.png");

        gallery.set_page(2);
        let page = gallery.view(&images);
        assert_eq!(keys(&page.items), vec!["image-9.png"]);
    }

    #[test]
    fn test_narrow_query_leaves_empty_page() {
        let images = stored(20);
        let mut gallery = Gallery::new();
        gallery.set_page(3);
        assert_eq!(gallery.view(&images).items.len(), 2);

        // "image-1" matches image-1 and image-10..19: 11 items, 2 pages
        gallery.set_query("image-1");
        let page = gallery.view(&images);
        assert_eq!(page.filtered_count, 11);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.current_page, 3);
        assert!(page.is_empty());

        gallery.set_page(1);
        assert_eq!(gallery.view(&images).items.len(), 9);
    }

    #[test]
    fn test_page_zero_is_treated_as_first_page() {
        let mut gallery = Gallery::new();
        gallery.set_page(0);
        assert_eq!(gallery.current_page(), 1);
    }

    #[test]
    fn test_generated_images_search_by_reference() {
        let images = vec![
            GeneratedImage::new("https://cdn.example/cat.png"),
            GeneratedImage::new("https://cdn.example/dog.png"),
        ];
        let mut gallery = Gallery::new();
        gallery.set_query("CAT");
        let page = gallery.view(&images);
        assert_eq!(page.items, vec![&images[0]]);
    }

    #[test]
    fn test_empty_list() {
        let images: Vec<StoredImage> = Vec::new();
        let page = Gallery::new().view(&images);
        assert!(page.is_empty());
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page_numbers().count(), 0);
    }
}
