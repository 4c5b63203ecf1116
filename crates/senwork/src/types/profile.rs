//! Profile records: biography, skills, work history, projects

use serde::{Deserialize, Serialize};

/// The profile singleton served by `/about`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutInfo {
    /// Display name
    pub name: String,
    /// Job title
    pub title: String,
    /// Free-form biography
    pub bio: String,
    /// Location
    pub location: String,
    /// Contact email
    pub email: String,
    /// Avatar image URL
    pub avatar: String,
    /// Social profile links
    pub social_links: SocialLinks,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// GitHub profile URL
    pub github: String,
    /// LinkedIn profile URL
    pub linkedin: String,
    /// Twitter profile URL
    pub twitter: String,
}

/// A skill with a proficiency score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Grouping such as `Backend` or `Database`
    pub category: String,
    /// Proficiency in `0..=100`
    pub proficiency: u8,
    /// Icon identifier
    pub icon: String,
}

/// A position held at a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    /// Identifier
    pub id: String,
    /// Employer
    pub company: String,
    /// Role held
    pub position: String,
    /// Start date as sent by the server (e.g. `2023-01`)
    pub start_date: String,
    /// End date; meaningless when `current` is set
    pub end_date: String,
    /// Still in this position
    pub current: bool,
    /// Free-form description
    pub description: String,
    /// Technologies used, in display order
    #[serde(deserialize_with = "super::null_as_default")]
    pub tech_stack: Vec<String>,
}

/// A showcased project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// Identifier
    pub id: String,
    /// Project name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Cover image URL
    pub image: String,
    /// Live demo URL
    pub demo_url: String,
    /// Source repository URL
    pub repo_url: String,
    /// Technologies used, in display order
    #[serde(deserialize_with = "super::null_as_default")]
    pub tech_stack: Vec<String>,
    /// Highlighted on the landing page
    pub featured: bool,
    /// Creation timestamp as sent by the server
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experience_wire_names() {
        let experience = Experience {
            id: "1".to_string(),
            company: "公司名".to_string(),
            position: "职位".to_string(),
            start_date: "2023-01".to_string(),
            current: true,
            tech_stack: vec!["Go".to_string()],
            ..Default::default()
        };

        let value = serde_json::to_value(&experience).unwrap();
        assert_eq!(value["startDate"], "2023-01");
        assert_eq!(value["endDate"], "");
        assert_eq!(value["techStack"], json!(["Go"]));
        assert!(value.get("start_date").is_none());
    }

    #[test]
    fn test_null_tech_stack_decodes_empty() {
        let experience: Experience = serde_json::from_value(json!({
            "id": "1",
            "company": "公司名",
            "techStack": null
        }))
        .unwrap();
        assert!(experience.tech_stack.is_empty());

        let project: Project =
            serde_json::from_value(json!({"id": "p1", "techStack": null})).unwrap();
        assert!(project.tech_stack.is_empty());
        assert_eq!(project.id, "p1");

        // A missing key still defaults
        let project: Project = serde_json::from_value(json!({"id": "p2"})).unwrap();
        assert!(project.tech_stack.is_empty());
    }

    #[test]
    fn test_skill_rejects_out_of_range_proficiency_type() {
        let result: Result<Skill, _> =
            serde_json::from_value(json!({"name": "Go", "proficiency": 300}));
        assert!(result.is_err());
    }
}
