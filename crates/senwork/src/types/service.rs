//! Hireable services

use serde::{Deserialize, Serialize};
use std::fmt;

/// A service offered for hire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    /// Identifier
    pub id: String,
    /// Service name
    pub name: String,
    /// One-line summary
    pub short_desc: String,
    /// Full description
    pub full_desc: String,
    /// Service category
    pub category: ServiceCategory,
    /// Feature bullet points, in display order
    #[serde(deserialize_with = "super::null_as_default")]
    pub features: Vec<String>,
    /// What the client receives, in display order
    #[serde(deserialize_with = "super::null_as_default")]
    pub deliverables: Vec<String>,
    /// Human-readable price range
    pub price_range: String,
    /// Human-readable delivery estimate
    pub delivery_time: String,
    /// Technologies used, in display order
    #[serde(deserialize_with = "super::null_as_default")]
    pub tech_stack: Vec<String>,
    /// Highlighted on the landing page
    pub featured: bool,
    /// Marked as popular
    pub popular: bool,
}

/// Category of a [`Service`].
///
/// Unknown categories from the server decode as [`ServiceCategory::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// Go development
    Golang,
    /// LLM agents
    AiAgent,
    /// Cloud-native development
    CloudNative,
    /// Mobile apps
    App,
    /// Web development
    Web,
    /// Anything else
    #[default]
    #[serde(other)]
    Other,
}

impl ServiceCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Golang,
        Self::AiAgent,
        Self::CloudNative,
        Self::App,
        Self::Web,
        Self::Other,
    ];

    /// Wire name, as sent by the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Golang => "golang",
            Self::AiAgent => "ai-agent",
            Self::CloudNative => "cloud-native",
            Self::App => "app",
            Self::Web => "web",
            Self::Other => "other",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Golang => "Go 开发",
            Self::AiAgent => "AI Agent 开发",
            Self::CloudNative => "云原生开发",
            Self::App => "App 开发",
            Self::Web => "Web 开发",
            Self::Other => "其他服务",
        }
    }

    /// Accent colour as a `#rrggbb` hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Golang => "#00ADD8",
            Self::AiAgent => "#FF6B6B",
            Self::CloudNative => "#4ECDC4",
            Self::App => "#9B59B6",
            Self::Web => "#4ADE80",
            Self::Other => "#64748B",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_wire_names_round_trip() {
        for category in ServiceCategory::ALL {
            let value = serde_json::to_value(category).unwrap();
            assert_eq!(value, json!(category.as_str()));
            assert_eq!(
                serde_json::from_value::<ServiceCategory>(value).unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_unknown_category_is_other() {
        let category: ServiceCategory = serde_json::from_value(json!("blockchain")).unwrap();
        assert_eq!(category, ServiceCategory::Other);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(ServiceCategory::AiAgent.label(), "AI Agent 开发");
        assert_eq!(ServiceCategory::Golang.color(), "#00ADD8");
        assert!(
            ServiceCategory::ALL
                .iter()
                .all(|c| c.color().len() == 7 && c.color().starts_with('#'))
        );
    }

    #[test]
    fn test_service_decodes() {
        let service: Service = serde_json::from_value(json!({
            "id": "7",
            "name": "AI Agent 开发",
            "shortDesc": "大模型应用与智能体开发",
            "category": "ai-agent",
            "features": ["LLM 集成", "RAG 知识库"],
            "priceRange": "5000-50000 元",
            "featured": true
        }))
        .unwrap();

        assert_eq!(service.category, ServiceCategory::AiAgent);
        assert_eq!(service.features.len(), 2);
        assert_eq!(service.price_range, "5000-50000 元");
        assert!(service.deliverables.is_empty());
        assert!(!service.popular);
    }

    #[test]
    fn test_null_lists_decode_empty() {
        let service: Service = serde_json::from_value(json!({
            "id": "3",
            "category": "web",
            "features": null,
            "deliverables": null,
            "techStack": ["React"]
        }))
        .unwrap();

        assert!(service.features.is_empty());
        assert!(service.deliverables.is_empty());
        assert_eq!(service.tech_stack, vec!["React"]);
    }
}
