//! Query model and the filter/sort evaluator.
//!
//! A [`Query`] is an immutable value owned by the view; every user action
//! produces a new `Query` through the `with_*`/`toggled_*` helpers rather
//! than mutating shared state. [`evaluate`] is a pure function over
//! `(catalog, query)`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogItem, ResourceType, Tag};

/// Result ordering for the browse screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    NewestFirst,
    OldestFirst,
    TitleAscending,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::NewestFirst => "Newest First",
            SortMode::OldestFirst => "Oldest First",
            SortMode::TitleAscending => "Title A-Z",
        }
    }

    /// Stable value for the sort `<select>` options
    pub fn as_key(&self) -> &'static str {
        match self {
            SortMode::NewestFirst => "newest",
            SortMode::OldestFirst => "oldest",
            SortMode::TitleAscending => "title",
        }
    }

    pub fn from_key(key: &str) -> Option<SortMode> {
        match key {
            "newest" => Some(SortMode::NewestFirst),
            "oldest" => Some(SortMode::OldestFirst),
            "title" => Some(SortMode::TitleAscending),
            _ => None,
        }
    }

    pub fn variants() -> &'static [SortMode] {
        &[
            SortMode::NewestFirst,
            SortMode::OldestFirst,
            SortMode::TitleAscending,
        ]
    }
}

/// The user's current filter and sort selection.
///
/// `Default` is the neutral query: empty search, all years, no type or tag
/// restriction, newest first. Empty `active_types`/`active_tags` sets mean
/// "match all", never "match none".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    pub search_text: String,
    pub year: Option<i32>,
    pub sort: SortMode,
    pub active_types: BTreeSet<ResourceType>,
    pub active_tags: BTreeSet<Tag>,
}

impl Query {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets the year filter from raw `<select>` input. Empty or non-numeric
    /// input means "all years" rather than an error.
    pub fn with_year_input(mut self, raw: &str) -> Self {
        self.year = raw.trim().parse().ok();
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn toggled_type(mut self, resource_type: ResourceType) -> Self {
        if !self.active_types.remove(&resource_type) {
            self.active_types.insert(resource_type);
        }
        self
    }

    pub fn toggled_tag(mut self, tag: Tag) -> Self {
        if !self.active_tags.remove(&tag) {
            self.active_tags.insert(tag);
        }
        self
    }
}

/// Applies the query to the catalog and returns the matching items in order.
///
/// Filters are independent conjunctions applied in a fixed order (text, year,
/// type, tag), followed by a stable sort, so items sharing a sort key keep
/// their catalog relative order. The input is never mutated; an empty result
/// is a normal state, not an error.
pub fn evaluate(catalog: &[CatalogItem], query: &Query) -> Vec<CatalogItem> {
    let needle = query.search_text.to_lowercase();

    let mut results: Vec<CatalogItem> = catalog
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .filter(|item| query.year.map_or(true, |year| item.year == year))
        .filter(|item| {
            query.active_types.is_empty() || query.active_types.contains(&item.resource_type)
        })
        .filter(|item| {
            query.active_tags.is_empty()
                || item.tags.iter().any(|tag| query.active_tags.contains(tag))
        })
        .cloned()
        .collect();

    match query.sort {
        SortMode::NewestFirst => results.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::OldestFirst => results.sort_by(|a, b| a.year.cmp(&b.year)),
        SortMode::TitleAscending => {
            results.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    debug!(count = results.len(), sort = query.sort.as_key(), "evaluated catalog query");

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn titles(results: &[CatalogItem]) -> Vec<&str> {
        results.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_default_query_returns_full_catalog_newest_first() {
        let catalog = builtin_catalog();
        let results = evaluate(&catalog, &Query::default());

        assert_eq!(results.len(), catalog.len());
        // 2024 items in catalog order, then 2023 items in catalog order
        assert_eq!(
            titles(&results),
            vec![
                "AI/ML Integration Guide",
                "Docker MCP Architecture",
                "Enterprise Docker Deployment",
                "Container Security Deep Dive",
                "Security Best Practices",
                "Machine Learning Pipelines",
            ]
        );
    }

    #[test]
    fn test_text_search_matches_title_or_description() {
        let catalog = builtin_catalog();
        let query = Query::default().with_search("Security");
        let results = evaluate(&catalog, &query);

        for item in &results {
            let needle = "security";
            assert!(
                item.title.to_lowercase().contains(needle)
                    || item.description.to_lowercase().contains(needle)
            );
        }
        // "Security Best Practices" by title; the other two via descriptions
        // mentioning security; "AI/ML Integration Guide" excluded.
        assert!(titles(&results).contains(&"Security Best Practices"));
        assert!(!titles(&results).contains(&"AI/ML Integration Guide"));
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let catalog = builtin_catalog();
        let results = evaluate(&catalog, &Query::default().with_search("docker"));

        let found = titles(&results);
        assert!(found.contains(&"Docker MCP Architecture"));
        assert!(found.contains(&"Enterprise Docker Deployment"));
    }

    #[test]
    fn test_year_filter_exact_match() {
        let catalog = builtin_catalog();
        let results = evaluate(&catalog, &Query::default().with_year_input("2023"));

        assert_eq!(
            titles(&results),
            vec!["Security Best Practices", "Machine Learning Pipelines"]
        );
    }

    #[test]
    fn test_malformed_year_input_means_all_years() {
        let catalog = builtin_catalog();
        let query = Query::default().with_year_input("not-a-year");
        assert_eq!(query.year, None);
        assert_eq!(evaluate(&catalog, &query).len(), catalog.len());

        let cleared = Query::default().with_year_input("2024").with_year_input("");
        assert_eq!(cleared.year, None);
    }

    #[test]
    fn test_type_filter_restricts_to_selected_types() {
        let catalog = builtin_catalog();
        let query = Query::default().toggled_type(ResourceType::Infographic);
        let results = evaluate(&catalog, &query);

        assert!(results
            .iter()
            .all(|item| item.resource_type == ResourceType::Infographic));
        assert!(titles(&results).contains(&"Docker MCP Architecture"));
    }

    #[test]
    fn test_tag_filter_uses_or_semantics() {
        let catalog = builtin_catalog();
        let query = Query::default().toggled_tag(Tag::AiMl);
        let results = evaluate(&catalog, &query);

        assert_eq!(
            titles(&results),
            vec!["AI/ML Integration Guide", "Machine Learning Pipelines"]
        );

        // Adding a second tag widens the tag dimension: any matching tag
        // qualifies an item.
        let query = query.toggled_tag(Tag::Security);
        let results = evaluate(&catalog, &query);
        assert!(titles(&results).contains(&"Security Best Practices"));
        assert!(titles(&results).contains(&"AI/ML Integration Guide"));
    }

    #[test]
    fn test_empty_filter_sets_match_all() {
        let catalog = builtin_catalog();
        let query = Query {
            active_types: BTreeSet::new(),
            active_tags: BTreeSet::new(),
            ..Query::default()
        };
        assert_eq!(evaluate(&catalog, &query).len(), catalog.len());
    }

    #[test]
    fn test_filters_only_narrow() {
        let catalog = builtin_catalog();
        let base = Query::default().with_search("docker");
        let base_count = evaluate(&catalog, &base).len();

        let narrowed = base.clone().toggled_type(ResourceType::WhitePaper);
        assert!(evaluate(&catalog, &narrowed).len() <= base_count);

        let narrowed = base.clone().toggled_tag(Tag::Enterprise);
        assert!(evaluate(&catalog, &narrowed).len() <= base_count);

        let narrowed = base.with_year_input("2023");
        assert!(evaluate(&catalog, &narrowed).len() <= base_count);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let catalog = builtin_catalog();
        let query = Query::default()
            .with_search("container")
            .toggled_tag(Tag::Security)
            .with_sort(SortMode::TitleAscending);

        assert_eq!(evaluate(&catalog, &query), evaluate(&catalog, &query));
    }

    #[test]
    fn test_evaluate_does_not_mutate_catalog() {
        let catalog = builtin_catalog();
        let before = catalog.clone();
        let _ = evaluate(&catalog, &Query::default().with_sort(SortMode::TitleAscending));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_sort_oldest_first() {
        let catalog = builtin_catalog();
        let results = evaluate(&catalog, &Query::default().with_sort(SortMode::OldestFirst));

        let years: Vec<i32> = results.iter().map(|item| item.year).collect();
        assert_eq!(years, vec![2023, 2023, 2024, 2024, 2024, 2024]);
        // Ties keep catalog order
        assert_eq!(results[0].title, "Security Best Practices");
        assert_eq!(results[1].title, "Machine Learning Pipelines");
    }

    #[test]
    fn test_sort_title_ascending() {
        let catalog = builtin_catalog();
        let results = evaluate(
            &catalog,
            &Query::default().with_sort(SortMode::TitleAscending),
        );

        assert_eq!(
            titles(&results),
            vec![
                "AI/ML Integration Guide",
                "Container Security Deep Dive",
                "Docker MCP Architecture",
                "Enterprise Docker Deployment",
                "Machine Learning Pipelines",
                "Security Best Practices",
            ]
        );
    }

    #[test]
    fn test_switching_sort_back_restores_default_order() {
        let catalog = builtin_catalog();
        let default_order = evaluate(&catalog, &Query::default());

        let round_trip = Query::default()
            .with_sort(SortMode::TitleAscending)
            .with_sort(SortMode::NewestFirst);
        assert_eq!(evaluate(&catalog, &round_trip), default_order);
    }

    #[test]
    fn test_zero_matches_is_a_normal_state() {
        let catalog = builtin_catalog();
        let results = evaluate(&catalog, &Query::default().with_search("kubernetes"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_reset_restores_every_default() {
        let catalog = builtin_catalog();
        let dirty = Query::default()
            .with_search("docker")
            .with_year_input("2023")
            .with_sort(SortMode::TitleAscending)
            .toggled_type(ResourceType::Video)
            .toggled_tag(Tag::Security);

        let reset = Query::default();
        assert_eq!(reset.search_text, "");
        assert_eq!(reset.year, None);
        assert_eq!(reset.sort, SortMode::NewestFirst);
        assert!(reset.active_types.is_empty());
        assert!(reset.active_tags.is_empty());
        assert_ne!(dirty, reset);
        assert_eq!(evaluate(&catalog, &reset).len(), catalog.len());
    }

    #[test]
    fn test_toggles_are_involutions() {
        let query = Query::default()
            .toggled_type(ResourceType::Video)
            .toggled_type(ResourceType::Video)
            .toggled_tag(Tag::Enterprise)
            .toggled_tag(Tag::Enterprise);
        assert_eq!(query, Query::default());
    }

    #[test]
    fn test_sort_mode_key_round_trip() {
        for mode in SortMode::variants() {
            assert_eq!(SortMode::from_key(mode.as_key()), Some(*mode));
        }
        assert_eq!(SortMode::from_key("relevance"), None);
    }
}
