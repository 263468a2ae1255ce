//! Catalog data model and the built-in resource table.
//!
//! The catalog is a fixed, in-memory table defined once at startup; items are
//! never mutated or removed.

use serde::{Deserialize, Serialize};

/// Kind of resource in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    WhitePaper,
    Infographic,
    Video,
}

impl ResourceType {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::WhitePaper => "White Paper",
            ResourceType::Infographic => "Infographic",
            ResourceType::Video => "Video",
        }
    }

    /// Display label for the type checkbox group
    pub fn plural_label(&self) -> &'static str {
        match self {
            ResourceType::WhitePaper => "White Papers",
            ResourceType::Infographic => "Infographics",
            ResourceType::Video => "Videos",
        }
    }

    /// Call-to-action text shown on a card for this type
    pub fn action_label(&self) -> &'static str {
        match self {
            ResourceType::Video => "Watch now",
            ResourceType::WhitePaper => "Read now",
            ResourceType::Infographic => "View now",
        }
    }

    /// CSS class for the card's type badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ResourceType::WhitePaper => "white-paper",
            ResourceType::Infographic => "infographic",
            ResourceType::Video => "video",
        }
    }

    pub fn variants() -> &'static [ResourceType] {
        &[
            ResourceType::Infographic,
            ResourceType::Video,
            ResourceType::WhitePaper,
        ]
    }
}

/// Fixed tag vocabulary for catalog items
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    AiMl,
    DockerMcp,
    Enterprise,
    Security,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::AiMl => "AI/ML",
            Tag::DockerMcp => "Docker MCP",
            Tag::Enterprise => "Enterprise",
            Tag::Security => "Security",
        }
    }

    pub fn variants() -> &'static [Tag] {
        &[Tag::AiMl, Tag::DockerMcp, Tag::Enterprise, Tag::Security]
    }
}

/// A single browsable resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub resource_type: ResourceType,
    pub tags: Vec<Tag>,
    pub year: i32,
    pub link: String,
}

/// The built-in catalog table
pub fn builtin_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            title: "AI/ML Integration Guide".into(),
            description:
                "Comprehensive guide to integrating AI and ML capabilities into your applications."
                    .into(),
            resource_type: ResourceType::WhitePaper,
            tags: vec![Tag::AiMl, Tag::Enterprise],
            year: 2024,
            link: "#".into(),
        },
        CatalogItem {
            id: 2,
            title: "Docker MCP Architecture".into(),
            description:
                "Understanding the Docker Model Context Protocol architecture and implementation."
                    .into(),
            resource_type: ResourceType::Infographic,
            tags: vec![Tag::DockerMcp, Tag::Enterprise],
            year: 2024,
            link: "#".into(),
        },
        CatalogItem {
            id: 3,
            title: "Security Best Practices".into(),
            description: "Essential security practices for container-based applications.".into(),
            resource_type: ResourceType::Video,
            tags: vec![Tag::Security, Tag::Enterprise],
            year: 2023,
            link: "#".into(),
        },
        CatalogItem {
            id: 4,
            title: "Enterprise Docker Deployment".into(),
            description: "Strategies for deploying Docker at enterprise scale.".into(),
            resource_type: ResourceType::WhitePaper,
            tags: vec![Tag::DockerMcp, Tag::Enterprise, Tag::Security],
            year: 2024,
            link: "#".into(),
        },
        CatalogItem {
            id: 5,
            title: "Machine Learning Pipelines".into(),
            description: "Building efficient ML pipelines with containerization.".into(),
            resource_type: ResourceType::Infographic,
            tags: vec![Tag::AiMl],
            year: 2023,
            link: "#".into(),
        },
        CatalogItem {
            id: 6,
            title: "Container Security Deep Dive".into(),
            description: "Advanced container security techniques and tools.".into(),
            resource_type: ResourceType::Video,
            tags: vec![Tag::Security, Tag::DockerMcp],
            year: 2024,
            link: "#".into(),
        },
    ]
}

/// Distinct years present in the catalog, newest first, for the year dropdown
pub fn catalog_years(catalog: &[CatalogItem]) -> Vec<i32> {
    let mut years: Vec<i32> = catalog.iter().map(|item| item.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
