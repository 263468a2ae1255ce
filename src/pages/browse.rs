//! Browse page component

use dioxus::prelude::*;

use crate::catalog::{builtin_catalog, catalog_years};
use crate::components::{FilterPanel, ResourceCard};
use crate::query::{evaluate, Query, SortMode};

/// The one screen of the application: a filter sidebar next to the
/// filtered, sorted catalog rendered as cards.
///
/// The `Query` signal is the only mutable state; the visible result list is
/// derived from `(catalog, query)` through a memo, so identical queries are
/// not re-evaluated.
#[component]
pub fn Browse() -> Element {
    let catalog = use_signal(builtin_catalog);
    let mut query = use_signal(Query::default);

    let results = use_memo(move || evaluate(catalog.read().as_slice(), &query.read()));
    let years = use_memo(move || catalog_years(catalog.read().as_slice()));

    let count = results().len();

    rsx! {
        div {
            class: "resources-browser",

            FilterPanel { query, years: years() }

            div {
                class: "main-content",

                div {
                    class: "content-header",
                    h1 { "Resources" }
                    div {
                        class: "sort-controls",
                        label { r#for: "sort", "Sort by:" }
                        select {
                            id: "sort",
                            value: "{query().sort.as_key()}",
                            onchange: move |e| {
                                let sort = SortMode::from_key(&e.value()).unwrap_or_default();
                                let next = query.peek().clone().with_sort(sort);
                                query.set(next);
                            },
                            for mode in SortMode::variants() {
                                option {
                                    key: "{mode.as_key()}",
                                    value: "{mode.as_key()}",
                                    "{mode.label()}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "results-count",
                    "{count} result"
                    if count != 1 { "s" }
                }

                div {
                    class: "resources-grid",
                    for item in results() {
                        ResourceCard { key: "{item.id}", item: item.clone() }
                    }
                }

                // Empty state
                if count == 0 {
                    div {
                        class: "no-results",
                        p { "No resources found matching your filters." }
                        button {
                            onclick: move |_| query.set(Query::default()),
                            "Reset Filters"
                        }
                    }
                }
            }
        }
    }
}
