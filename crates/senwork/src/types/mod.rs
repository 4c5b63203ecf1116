//! Wire types for the portfolio API
//!
//! Every record mirrors the JSON the backend sends, with camelCase field
//! names. Records decode leniently: a missing field takes its `Default`, so a
//! payload that passes the shallow guards in [`crate::guards`] also decodes.

// Re-export commonly used types from submodules
pub use contact::*;
pub use envelope::*;
pub use profile::*;
pub use service::*;

// Submodules
pub mod contact;
pub mod envelope;
pub mod profile;
pub mod service;

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the type's default.
///
/// The backend sends `null` for an empty list.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_about_info_decodes_camel_case() {
        let about: AboutInfo = serde_json::from_value(json!({
            "name": "Sen",
            "title": "Golang 工程师",
            "bio": "描述",
            "location": "中国",
            "email": "test@example.com",
            "avatar": "url",
            "socialLinks": {
                "github": "https://github.com/sen",
                "linkedin": "https://linkedin.com/in/sen",
                "twitter": "https://twitter.com/sen"
            }
        }))
        .unwrap();

        assert_eq!(about.name, "Sen");
        assert_eq!(about.social_links.github, "https://github.com/sen");
    }

    #[test]
    fn test_partial_records_take_defaults() {
        let project: Project = serde_json::from_value(json!({
            "id": "1",
            "name": "项目名称",
            "description": "描述",
            "techStack": ["Go", "Gin"]
        }))
        .unwrap();

        assert_eq!(project.tech_stack, vec!["Go", "Gin"]);
        assert!(project.demo_url.is_empty());
        assert!(!project.featured);
    }
}
