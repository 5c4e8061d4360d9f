//! Persistent category badge colors
//!
//! Each category gets one color token from [`CATEGORY_COLORS`] the first
//! time it is seen. The first token not already in use is chosen; once
//! every token is taken, one is picked at random. The full map is written
//! to the store after every new assignment under [`CATEGORY_COLORS_KEY`].
//!
//! If that write fails the assignment still holds for this process, but a
//! later run may assign the category a different token.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::seq::IndexedRandom;

use crate::error::CatalogError;
use crate::storage::{KeyValueStore, CATEGORY_COLORS_KEY};

/// Badge color tokens, in assignment order
pub const CATEGORY_COLORS: [&str; 18] = [
    "border-pink-500 text-pink-600 dark:text-pink-400 bg-pink-500/5",
    "border-purple-500 text-purple-600 dark:text-purple-400 bg-purple-500/5",
    "border-blue-500 text-blue-600 dark:text-blue-400 bg-blue-500/5",
    "border-indigo-500 text-indigo-600 dark:text-indigo-400 bg-indigo-500/5",
    "border-violet-500 text-violet-600 dark:text-violet-400 bg-violet-500/5",
    "border-rose-500 text-rose-600 dark:text-rose-400 bg-rose-500/5",
    "border-amber-500 text-amber-600 dark:text-amber-400 bg-amber-500/5",
    "border-yellow-500 text-yellow-600 dark:text-yellow-400 bg-yellow-500/5",
    "border-lime-500 text-lime-600 dark:text-lime-400 bg-lime-500/5",
    "border-green-500 text-green-600 dark:text-green-400 bg-green-500/5",
    "border-emerald-500 text-emerald-600 dark:text-emerald-400 bg-emerald-500/5",
    "border-teal-500 text-teal-600 dark:text-teal-400 bg-teal-500/5",
    "border-cyan-500 text-cyan-600 dark:text-cyan-400 bg-cyan-500/5",
    "border-sky-500 text-sky-600 dark:text-sky-400 bg-sky-500/5",
    "border-orange-500 text-orange-600 dark:text-orange-400 bg-orange-500/5",
    "border-red-500 text-red-600 dark:text-red-400 bg-red-500/5",
    "border-fuchsia-500 text-fuchsia-600 dark:text-fuchsia-400 bg-fuchsia-500/5",
    "border-slate-500 text-slate-600 dark:text-slate-400 bg-slate-500/5",
];

/// Token used when the palette is empty
pub const DEFAULT_CATEGORY_COLOR: &str = "border-gray-500 text-gray-600 dark:text-gray-400";

/// Category name to color token assignments
///
/// Clones share one map, so every handle handed out by the application
/// context sees the same assignments.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use catalog_admin::catalog::{CategoryColors, CATEGORY_COLORS};
/// use catalog_admin::storage::MemoryStore;
///
/// let colors = CategoryColors::new(Arc::new(MemoryStore::new()));
/// let first = colors.get_color("beauty");
/// assert_eq!(first, CATEGORY_COLORS[0]);
/// assert_eq!(colors.get_color("beauty"), first);
/// assert_eq!(colors.clone().get_color("laptops"), CATEGORY_COLORS[1]);
/// ```
#[derive(Debug, Clone)]
pub struct CategoryColors {
    store: Arc<dyn KeyValueStore>,
    palette: &'static [&'static str],
    colors: Arc<Mutex<BTreeMap<String, String>>>,
}

impl CategoryColors {
    /// Load existing assignments from `store` and use the default palette
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_palette(store, &CATEGORY_COLORS)
    }

    /// Load existing assignments from `store` and draw new ones from `palette`
    pub fn with_palette(store: Arc<dyn KeyValueStore>, palette: &'static [&'static str]) -> Self {
        let colors = load_colors(store.as_ref());
        Self {
            store,
            palette,
            colors: Arc::new(Mutex::new(colors)),
        }
    }

    /// Snapshot of the current assignments
    pub fn assignments(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    /// Color token for `category`, assigning and persisting one if needed
    pub fn get_color(&self, category: &str) -> String {
        let mut colors = self.lock();
        if let Some(color) = colors.get(category) {
            return color.clone();
        }

        let color = self.next_color(&colors).to_string();
        tracing::debug!(category = %category, color = %color, "Assigned category color");

        colors.insert(category.to_string(), color.clone());
        self.save(&colors);
        color
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.colors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_color(&self, colors: &BTreeMap<String, String>) -> &'static str {
        let unused = self
            .palette
            .iter()
            .find(|candidate| !colors.values().any(|used| used == *candidate));

        match unused {
            Some(color) => *color,
            None => self
                .palette
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(DEFAULT_CATEGORY_COLOR),
        }
    }

    fn save(&self, colors: &BTreeMap<String, String>) {
        let result = serde_json::to_string(colors)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.store.set(CATEGORY_COLORS_KEY, &json));

        if let Err(e) = result {
            tracing::error!("Failed to save category colors: {}", e);
        }
    }

    /// Display form of a category slug: `"mens-watches"` becomes
    /// `"Mens Watches"`
    pub fn format_name(category: &str) -> String {
        category
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn load_colors(store: &dyn KeyValueStore) -> BTreeMap<String, String> {
    let stored = match store.get(CATEGORY_COLORS_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!("Failed to read category colors: {}", e);
            return BTreeMap::new();
        }
    };

    serde_json::from_str(&stored).unwrap_or_else(|e| {
        let err = CatalogError::Persistence(format!("corrupt category colors: {}", e));
        tracing::warn!("{}", err);
        BTreeMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashSet;

    static TWO_COLORS: [&str; 2] = ["red", "blue"];
    static NO_COLORS: [&str; 0] = [];

    fn colors_with_store() -> (CategoryColors, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let colors = CategoryColors::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        (colors, store)
    }

    #[test]
    fn test_get_color_is_idempotent_and_from_palette() {
        let (colors, _store) = colors_with_store();
        let color = colors.get_color("smartphones");
        assert!(CATEGORY_COLORS.contains(&color.as_str()));
        assert_eq!(colors.get_color("smartphones"), color);
    }

    #[test]
    fn test_distinct_categories_get_distinct_colors_until_palette_exhausted() {
        let (colors, _store) = colors_with_store();
        let assigned: Vec<String> = (0..CATEGORY_COLORS.len())
            .map(|i| colors.get_color(&format!("category-{}", i)))
            .collect();

        let unique: HashSet<&String> = assigned.iter().collect();
        assert_eq!(unique.len(), CATEGORY_COLORS.len());
        for (i, color) in assigned.iter().enumerate() {
            assert_eq!(color, CATEGORY_COLORS[i]);
        }
    }

    #[test]
    fn test_exhausted_palette_still_returns_palette_color() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let colors = CategoryColors::with_palette(store, &TWO_COLORS);
        colors.get_color("a");
        colors.get_color("b");

        let third = colors.get_color("c");
        assert!(TWO_COLORS.contains(&third.as_str()));
        assert_eq!(colors.get_color("c"), third);
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let colors = CategoryColors::with_palette(store, &NO_COLORS);
        assert_eq!(colors.get_color("beauty"), DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_assignment_is_persisted_and_reloaded() {
        let (colors, store) = colors_with_store();
        colors.get_color("beauty");
        colors.get_color("laptops");

        let reloaded = CategoryColors::new(store);
        assert_eq!(reloaded.assignments(), colors.assignments());
    }

    #[test]
    fn test_existing_assignments_are_skipped_when_picking() {
        let stored = serde_json::json!({"beauty": CATEGORY_COLORS[0]}).to_string();
        let store = Arc::new(MemoryStore::with_entries([(CATEGORY_COLORS_KEY, stored)]));
        let colors = CategoryColors::new(store);

        assert_eq!(colors.get_color("beauty"), CATEGORY_COLORS[0]);
        assert_eq!(colors.get_color("laptops"), CATEGORY_COLORS[1]);
    }

    #[test]
    fn test_corrupt_blob_starts_empty() {
        let store = Arc::new(MemoryStore::with_entries([(CATEGORY_COLORS_KEY, "not json")]));
        let colors = CategoryColors::new(store);
        assert!(colors.assignments().is_empty());
        assert_eq!(colors.get_color("beauty"), CATEGORY_COLORS[0]);
    }

    #[test]
    fn test_failed_save_keeps_in_memory_assignment() {
        let (colors, store) = colors_with_store();
        store.set_fail_writes(true);

        let color = colors.get_color("beauty");

        assert_eq!(colors.get_color("beauty"), color);
        assert!(!store.contains(CATEGORY_COLORS_KEY));
    }

    #[test]
    fn test_clones_share_assignments() {
        let (colors, store) = colors_with_store();
        let other = colors.clone();

        let beauty = colors.get_color("beauty");
        let laptops = other.get_color("laptops");

        assert_ne!(beauty, laptops);
        assert_eq!(other.get_color("beauty"), beauty);

        let reloaded = CategoryColors::new(store);
        assert_eq!(reloaded.assignments().len(), 2);
    }

    #[test]
    fn test_failed_save_is_still_visible_to_clones() {
        let (colors, store) = colors_with_store();
        store.set_fail_writes(true);

        let color = colors.get_color("beauty");

        assert_eq!(colors.clone().get_color("beauty"), color);
    }

    #[test]
    fn test_format_name() {
        assert_eq!(CategoryColors::format_name("mens-watches"), "Mens Watches");
        assert_eq!(CategoryColors::format_name("tv"), "Tv");
        assert_eq!(CategoryColors::format_name(""), "");
        assert_eq!(
            CategoryColors::format_name("home-decoration"),
            "Home Decoration"
        );
    }
}
