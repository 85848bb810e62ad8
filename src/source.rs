//! Source resolution: descriptor + store → ordered item set.
//!
//! A [`SourceDescriptor`] names a collection and says which of its items a
//! section shows. [`resolve`] applies the rules in a fixed order:
//!
//! 1. Unknown collection key → empty set.
//! 2. `category` filter (roadmap only), exact match.
//! 3. Explicit id list → keep matching items in **collection** order;
//!    `count` and `fetch_all` are ignored.
//! 4. `fetch_all` → the whole (filtered) collection.
//! 5. Otherwise the first `count` items, or fewer if the collection is short.
//!
//! Resolution is pure. The result is rebuilt whenever the descriptor or the
//! store changes, never patched in place.

use crate::content::{ContentItem, ContentStore, ContentType};
use crate::layout::DisplayMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which items of a collection a source selects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawSelection", into = "RawSelection")]
pub enum Selection {
    /// Every item, subject to `count` / `fetch_all`.
    #[default]
    All,
    /// Only these ids. May be empty, which selects nothing.
    Ids(Vec<String>),
}

/// Persisted shape: the keyword `"all"` or an array of ids. Any other keyword
/// reads as `"all"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSelection {
    Keyword(String),
    Ids(Vec<String>),
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        match raw {
            RawSelection::Keyword(k) => {
                if k != "all" {
                    tracing::debug!(selection = %k, "unknown selection keyword, using all");
                }
                Selection::All
            }
            RawSelection::Ids(ids) => Selection::Ids(ids),
        }
    }
}

impl From<Selection> for RawSelection {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => RawSelection::Keyword("all".to_string()),
            Selection::Ids(ids) => RawSelection::Ids(ids),
        }
    }
}

/// Persisted description of one content source within a section.
///
/// Partially specified descriptors are normal: every field except `type`
/// has a default, and `count` falls back to a per-type default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDescriptor {
    /// Collection key. Kept as a string so unknown keys degrade instead of
    /// failing the whole config.
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Requested card style. Absent or unregistered → type default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_style: Option<String>,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default)]
    pub fetch_all: bool,
    /// Column override. Any integer is accepted; dispatch clamps it to 1-4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_columns: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SourceDescriptor {
    /// Descriptor for `source_type` with every other field defaulted.
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            display_mode: DisplayMode::default(),
            card_style: None,
            selection: Selection::All,
            count: None,
            fetch_all: false,
            grid_columns: None,
            category: None,
        }
    }

    /// Parsed collection, `None` when the key is unknown.
    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::parse(&self.source_type)
    }

    /// `count`, or the per-type default when omitted.
    pub fn effective_count(&self) -> usize {
        self.count
            .or_else(|| self.content_type().map(default_count))
            .unwrap_or(0)
    }
}

/// Number of items shown when a descriptor omits `count`.
pub fn default_count(kind: ContentType) -> usize {
    match kind {
        ContentType::News => 3,
        ContentType::Classes => 10,
        ContentType::Features => 6,
        ContentType::Media => 8,
        ContentType::Weapons => 8,
        ContentType::Devices => 8,
        ContentType::Maps => 4,
        ContentType::Faq => 10,
        ContentType::GameModes => 8,
        ContentType::Roadmap => 4,
    }
}

/// Ordered items selected by one descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedSet {
    /// Source collection; `None` when the descriptor named an unknown type.
    pub kind: Option<ContentType>,
    pub items: Vec<ContentItem>,
}

impl ResolvedSet {
    pub fn empty(kind: Option<ContentType>) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id()).collect()
    }
}

impl<'a> IntoIterator for &'a ResolvedSet {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Resolve a descriptor against a store.
pub fn resolve(descriptor: &SourceDescriptor, store: &dyn ContentStore) -> ResolvedSet {
    let Some(kind) = descriptor.content_type() else {
        tracing::debug!(
            source_type = %descriptor.source_type,
            "unknown source type, resolving to empty set"
        );
        return ResolvedSet::empty(None);
    };

    let mut items = store.collection(kind);

    if kind == ContentType::Roadmap {
        if let Some(category) = &descriptor.category {
            items.retain(|item| item.category() == Some(category.as_str()));
        }
    }

    let items = match &descriptor.selection {
        Selection::Ids(ids) => {
            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            items.retain(|item| wanted.contains(item.id()));
            items
        }
        Selection::All if descriptor.fetch_all => items,
        Selection::All => {
            items.truncate(descriptor.effective_count());
            items
        }
    };

    ResolvedSet {
        kind: Some(kind),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn descriptor(kind: &str) -> SourceDescriptor {
        SourceDescriptor::new(kind)
    }

    #[test]
    fn unknown_type_resolves_empty() {
        let store = sample_catalog();
        let set = resolve(&descriptor("vehicles"), &store);
        assert!(set.is_empty());
        assert_eq!(set.kind, None);
    }

    #[test]
    fn default_count_applied_when_omitted() {
        let store = catalog_with_news(10);
        let set = resolve(&descriptor("news"), &store);
        assert_eq!(set.ids(), vec!["n1", "n2", "n3"]);
    }

    #[test]
    fn default_counts_per_type() {
        assert_eq!(default_count(ContentType::News), 3);
        assert_eq!(default_count(ContentType::Classes), 10);
        assert_eq!(default_count(ContentType::Features), 6);
        assert_eq!(default_count(ContentType::Media), 8);
        assert_eq!(default_count(ContentType::Weapons), 8);
        assert_eq!(default_count(ContentType::Devices), 8);
        assert_eq!(default_count(ContentType::Maps), 4);
        assert_eq!(default_count(ContentType::Faq), 10);
        assert_eq!(default_count(ContentType::GameModes), 8);
        assert_eq!(default_count(ContentType::Roadmap), 4);
    }

    #[test]
    fn count_takes_front_of_collection() {
        let store = catalog_with_news(6);
        for count in 0..=8 {
            let mut d = descriptor("news");
            d.count = Some(count);
            let set = resolve(&d, &store);
            assert_eq!(set.len(), count.min(6), "count={count}");
            let expected: Vec<String> = (1..=count.min(6)).map(|n| format!("n{n}")).collect();
            assert_eq!(set.ids(), expected);
        }
    }

    #[test]
    fn short_collection_is_not_padded() {
        let store = catalog_with_news(2);
        let mut d = descriptor("news");
        d.count = Some(5);
        assert_eq!(resolve(&d, &store).len(), 2);
    }

    #[test]
    fn fetch_all_ignores_count() {
        let store = catalog_with_news(9);
        let mut d = descriptor("news");
        d.count = Some(2);
        d.fetch_all = true;
        assert_eq!(resolve(&d, &store).len(), 9);
    }

    #[test]
    fn explicit_ids_keep_collection_order() {
        let store = catalog_with_news(6);
        let mut d = descriptor("news");
        d.selection = Selection::Ids(vec!["n5".into(), "n2".into(), "n4".into()]);
        assert_eq!(resolve(&d, &store).ids(), vec!["n2", "n4", "n5"]);
    }

    #[test]
    fn explicit_ids_ignore_count_and_fetch_all() {
        let store = catalog_with_news(6);
        let mut d = descriptor("news");
        d.count = Some(1);
        d.fetch_all = false;
        d.selection = Selection::Ids(vec!["n1".into(), "n2".into(), "n3".into()]);
        assert_eq!(resolve(&d, &store).len(), 3);
    }

    #[test]
    fn explicit_ids_skip_missing() {
        let store = catalog_with_news(3);
        let mut d = descriptor("news");
        d.selection = Selection::Ids(vec!["n3".into(), "gone".into()]);
        assert_eq!(resolve(&d, &store).ids(), vec!["n3"]);
    }

    #[test]
    fn empty_id_list_selects_nothing() {
        let store = catalog_with_news(3);
        let mut d = descriptor("news");
        d.selection = Selection::Ids(vec![]);
        assert!(resolve(&d, &store).is_empty());
    }

    #[test]
    fn category_filter_applies_before_count() {
        let store = sample_catalog();
        let mut d = descriptor("roadmap");
        d.category = Some("q2".to_string());
        d.count = Some(1);
        let set = resolve(&d, &store);
        assert_eq!(set.ids(), vec!["r2"]);
    }

    #[test]
    fn category_filter_applies_before_ids() {
        let store = sample_catalog();
        let mut d = descriptor("roadmap");
        d.category = Some("q1".to_string());
        d.selection = Selection::Ids(vec!["r1".into(), "r2".into()]);
        assert_eq!(resolve(&d, &store).ids(), vec!["r1"]);
    }

    #[test]
    fn category_ignored_for_other_types() {
        let store = catalog_with_news(3);
        let mut d = descriptor("news");
        d.category = Some("q1".to_string());
        assert_eq!(resolve(&d, &store).len(), 3);
    }

    #[test]
    fn resolve_does_not_mutate_store() {
        let store = catalog_with_news(5);
        let mut d = descriptor("news");
        d.count = Some(2);
        let _ = resolve(&d, &store);
        assert_eq!(store.news.len(), 5);
    }

    #[test]
    fn selection_parses_keyword_and_list() {
        let d: SourceDescriptor = toml::from_str(
            r#"
type = "maps"
selection = "all"
"#,
        )
        .unwrap();
        assert_eq!(d.selection, Selection::All);

        let d: SourceDescriptor = toml::from_str(
            r#"
type = "maps"
selection = ["m2", "m1"]
"#,
        )
        .unwrap();
        assert_eq!(d.selection, Selection::Ids(vec!["m2".into(), "m1".into()]));
    }

    #[test]
    fn unknown_selection_keyword_reads_as_all() {
        let d: SourceDescriptor = toml::from_str(
            r#"
type = "maps"
selection = "some"
"#,
        )
        .unwrap();
        assert_eq!(d.selection, Selection::All);
    }

    #[test]
    fn grid_columns_accepts_any_integer() {
        let d: SourceDescriptor = toml::from_str(
            r#"
type = "maps"
grid_columns = -1
"#,
        )
        .unwrap();
        assert_eq!(d.grid_columns, Some(-1));
    }

    #[test]
    fn minimal_descriptor_uses_defaults() {
        let d: SourceDescriptor = toml::from_str(r#"type = "faq""#).unwrap();
        assert_eq!(d.display_mode, DisplayMode::Grid);
        assert_eq!(d.card_style, None);
        assert_eq!(d.selection, Selection::All);
        assert!(!d.fetch_all);
        assert_eq!(d.effective_count(), 10);
    }

    #[test]
    fn unknown_type_has_zero_effective_count() {
        assert_eq!(descriptor("vehicles").effective_count(), 0);
    }
}
