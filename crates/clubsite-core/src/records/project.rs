//! Research projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

super::labelled_enum! {
    /// Lifecycle state of a project.
    pub enum ProjectStatus ("project status") {
        Active => "active",
        Completed => "completed",
        Planned => "planned",
    }
}

/// A funded research project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub funding_agency: String,
    /// Technology tags in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Team member names in display order.
    #[serde(default)]
    pub team: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Completion percentage. Values above 100 parse and are reported by validation.
    pub progress: u32,
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project() {
        let json = r#"{
            "id": 11,
            "title": "Campus AR Guide",
            "description": "Wayfinding with AR headsets",
            "status": "active",
            "fundingAgency": "DST",
            "technologies": ["Unity", "ARCore"],
            "team": ["Asha Rao", "Kiran"],
            "startDate": "2024-01-01",
            "endDate": "2025-06-30",
            "progress": 45,
            "featured": false
        }"#;

        let project: Project = serde_json::from_str(json).expect("parse");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.funding_agency, "DST");
        assert_eq!(project.technologies, vec!["Unity", "ARCore"]);
        assert_eq!(project.progress, 45);
        assert!(project.start_date < project.end_date);
    }

    #[test]
    fn test_status_spelling() {
        assert_eq!(ProjectStatus::Planned.to_string(), "planned");
        let json = serde_json::to_string(&ProjectStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");
    }
}
