//! People: faculty, research fellows, students and alumni.

use serde::{Deserialize, Serialize};

super::labelled_enum! {
    /// Role of a person in the club or lab.
    pub enum PersonType ("person type") {
        Faculty => "faculty",
        Jrf => "jrf",
        Student => "student",
        Alumni => "alumni",
    }
}

/// A member of the club or lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: PersonType,
    /// Class or year tag, e.g. "2024".
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(default)]
    pub research_areas: Vec<String>,
    #[serde(default)]
    pub bio: String,
    /// Academic title, e.g. "Assistant Professor".
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}
