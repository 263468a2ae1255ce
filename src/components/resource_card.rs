//! Resource card component

use dioxus::prelude::*;

use crate::catalog::CatalogItem;

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub item: CatalogItem,
}

/// Card displaying a single catalog item
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let item = &props.item;

    rsx! {
        div {
            class: "resource-card",

            // Header: type badge + year
            div {
                class: "card-header",
                span {
                    class: "type-badge {item.resource_type.badge_class()}",
                    "{item.resource_type.label()}"
                }
                span { class: "year", "{item.year}" }
            }

            h3 { "{item.title}" }
            p { "{item.description}" }

            div {
                class: "card-tags",
                for tag in item.tags.iter() {
                    span { key: "{tag:?}", class: "tag", "{tag.label()}" }
                }
            }

            a {
                href: "{item.link}",
                class: "action-link",
                "{item.resource_type.action_label()} \u{2192}"
            }
        }
    }
}
