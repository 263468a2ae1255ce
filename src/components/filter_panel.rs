//! Sidebar filter panel component

use dioxus::prelude::*;

use crate::catalog::{ResourceType, Tag};
use crate::query::Query;

/// Props for FilterPanel
#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    /// The single query signal owned by the browse page
    pub query: Signal<Query>,
    /// Distinct catalog years for the date dropdown, newest first
    pub years: Vec<i32>,
}

/// Sidebar with search box, year dropdown, type/tag checkbox groups, and a
/// reset button. Every control patches the shared query signal with a fresh
/// `Query` value.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let mut query = props.query;

    let selected_year = query()
        .year
        .map(|year| year.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "sidebar",
            h2 { "Filters" }

            // Search
            div {
                class: "filter-section",
                label { r#for: "search", "Search" }
                input {
                    id: "search",
                    r#type: "text",
                    placeholder: "Search resources...",
                    value: "{query().search_text}",
                    oninput: move |e| {
                        let next = query.peek().clone().with_search(e.value());
                        query.set(next);
                    },
                }
            }

            // Date Filter
            div {
                class: "filter-section",
                label { r#for: "year", "Date" }
                select {
                    id: "year",
                    value: "{selected_year}",
                    onchange: move |e| {
                        let next = query.peek().clone().with_year_input(&e.value());
                        query.set(next);
                    },
                    option { value: "", "All Years" }
                    for year in props.years.iter() {
                        option { key: "{year}", value: "{year}", "{year}" }
                    }
                }
            }

            // Type Filters
            div {
                class: "filter-section",
                label { "Type" }
                div {
                    class: "checkbox-group",
                    for resource_type in ResourceType::variants() {
                        {
                            let resource_type = *resource_type;
                            rsx! {
                                label {
                                    key: "{resource_type:?}",
                                    input {
                                        r#type: "checkbox",
                                        checked: query().active_types.contains(&resource_type),
                                        onchange: move |_| {
                                            let next = query.peek().clone().toggled_type(resource_type);
                                            query.set(next);
                                        },
                                    }
                                    "{resource_type.plural_label()}"
                                }
                            }
                        }
                    }
                }
            }

            // Tag Filters
            div {
                class: "filter-section",
                label { "Tags" }
                div {
                    class: "checkbox-group",
                    for tag in Tag::variants() {
                        {
                            let tag = *tag;
                            rsx! {
                                label {
                                    key: "{tag:?}",
                                    input {
                                        r#type: "checkbox",
                                        checked: query().active_tags.contains(&tag),
                                        onchange: move |_| {
                                            let next = query.peek().clone().toggled_tag(tag);
                                            query.set(next);
                                        },
                                    }
                                    "{tag.label()}"
                                }
                            }
                        }
                    }
                }
            }

            // Reset Button
            button {
                class: "reset-button",
                onclick: move |_| query.set(Query::default()),
                "Reset All Filters"
            }
        }
    }
}
