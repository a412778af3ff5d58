//! Fixture loading and validation.
//!
//! The catalog holds the four record collections. It is loaded once, in full, and
//! never mutated afterwards.

use std::{collections::HashSet, fmt, path::Path};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::{
    config::DataConfig,
    error::{CoreError, Result},
    records::{NewsArticle, Person, Project, Publication, RecordKind},
};

/// All listing collections of the site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub news: Vec<NewsArticle>,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub people: Vec<Person>,
}

/// A problem found in otherwise parseable fixture data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Collection the offending record belongs to.
    pub kind: RecordKind,
    /// Record id, if the issue concerns a single record.
    pub id: Option<u32>,
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: RecordKind, id: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} #{id}: {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl Catalog {
    /// Load every collection from the configured data directory.
    ///
    /// A missing file leaves its collection empty; a malformed file is an error.
    pub fn load(data: &DataConfig) -> Result<Self> {
        info!(dir = %data.dir.display(), "loading fixtures");

        let catalog = Self {
            news: load_collection(&data.path_for(RecordKind::News), RecordKind::News)?,
            publications: load_collection(
                &data.path_for(RecordKind::Publications),
                RecordKind::Publications,
            )?,
            projects: load_collection(&data.path_for(RecordKind::Projects), RecordKind::Projects)?,
            people: load_collection(&data.path_for(RecordKind::People), RecordKind::People)?,
        };

        Ok(catalog)
    }

    /// Parse every collection from in-memory fixture text.
    pub fn from_json(news: &str, publications: &str, projects: &str, people: &str) -> Result<Self> {
        Ok(Self {
            news: parse_collection(news, RecordKind::News, Path::new("news.json"))?,
            publications: parse_collection(
                publications,
                RecordKind::Publications,
                Path::new("publications.json"),
            )?,
            projects: parse_collection(projects, RecordKind::Projects, Path::new("projects.json"))?,
            people: parse_collection(people, RecordKind::People, Path::new("people.json"))?,
        })
    }

    /// Number of records of a kind.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::News => self.news.len(),
            RecordKind::Publications => self.publications.len(),
            RecordKind::Projects => self.projects.len(),
            RecordKind::People => self.people.len(),
        }
    }

    /// Check the data for problems the schema cannot express.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        check_unique_ids(RecordKind::News, self.news.iter().map(|r| r.id), &mut issues);
        check_unique_ids(
            RecordKind::Publications,
            self.publications.iter().map(|r| r.id),
            &mut issues,
        );
        check_unique_ids(RecordKind::Projects, self.projects.iter().map(|r| r.id), &mut issues);
        check_unique_ids(RecordKind::People, self.people.iter().map(|r| r.id), &mut issues);

        for article in &self.news {
            if article.title.trim().is_empty() {
                issues.push(ValidationIssue::new(RecordKind::News, Some(article.id), "empty title"));
            }
        }

        for publication in &self.publications {
            if publication.title.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    RecordKind::Publications,
                    Some(publication.id),
                    "empty title",
                ));
            }
        }

        for project in &self.projects {
            if project.title.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    RecordKind::Projects,
                    Some(project.id),
                    "empty title",
                ));
            }
            if project.progress > 100 {
                issues.push(ValidationIssue::new(
                    RecordKind::Projects,
                    Some(project.id),
                    format!("progress {} is above 100", project.progress),
                ));
            }
            if project.end_date < project.start_date {
                issues.push(ValidationIssue::new(
                    RecordKind::Projects,
                    Some(project.id),
                    format!(
                        "end date {} is before start date {}",
                        project.end_date, project.start_date
                    ),
                ));
            }
        }

        for person in &self.people {
            if person.name.trim().is_empty() {
                issues.push(ValidationIssue::new(RecordKind::People, Some(person.id), "empty name"));
            }
            if !person.email.contains('@') {
                issues.push(ValidationIssue::new(
                    RecordKind::People,
                    Some(person.id),
                    format!("invalid email `{}`", person.email),
                ));
            }
        }

        issues
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path, kind: RecordKind) -> Result<Vec<T>> {
    if !path.exists() {
        warn!(path = %path.display(), %kind, "fixture file not found, listing will be empty");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let records = parse_collection(&content, kind, path)?;
    info!(path = %path.display(), %kind, count = records.len(), "loaded fixture");
    Ok(records)
}

/// Parse the records array out of a fixture document.
///
/// Sibling keys such as precomputed dropdown lists are ignored.
fn parse_collection<T: DeserializeOwned>(json: &str, kind: RecordKind, path: &Path) -> Result<Vec<T>> {
    let mut document: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CoreError::fixture(path, format!("invalid JSON: {e}")))?;

    let records = document
        .get_mut(kind.plural())
        .map(serde_json::Value::take)
        .ok_or_else(|| CoreError::fixture(path, format!("missing `{}` array", kind.plural())))?;

    serde_json::from_value(records)
        .map_err(|e| CoreError::fixture(path, format!("invalid {kind} record: {e}")))
}

fn check_unique_ids(
    kind: RecordKind,
    ids: impl Iterator<Item = u32>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(ValidationIssue::new(kind, Some(id), "duplicate id"));
        }
    }
}
