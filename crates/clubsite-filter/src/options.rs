//! Dropdown options derived from the records.
//!
//! Surfaces prepend the "all" entry themselves; these lists only hold concrete values
//! that actually occur in the collection.

use std::collections::BTreeSet;

use chrono::Datelike;
use clubsite_core::{
    NewsArticle, NewsCategory, Person, PersonType, Project, ProjectStatus, Publication,
    PublicationType,
};

/// Options for the news selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsOptions {
    /// In declaration order.
    pub categories: Vec<NewsCategory>,
    /// Newest first.
    pub years: Vec<i32>,
}

/// Options for the publication selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationOptions {
    /// Newest first.
    pub years: Vec<i32>,
    /// In declaration order.
    pub kinds: Vec<PublicationType>,
}

/// Options for the project selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOptions {
    /// In declaration order.
    pub statuses: Vec<ProjectStatus>,
    /// Sorted by name.
    pub agencies: Vec<String>,
    /// Sorted by name.
    pub technologies: Vec<String>,
}

/// Options for the people selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleOptions {
    /// In declaration order.
    pub kinds: Vec<PersonType>,
    /// Newest first.
    pub years: Vec<String>,
}

impl NewsOptions {
    pub fn from_records(news: &[NewsArticle]) -> Self {
        Self {
            categories: ascending(news.iter().map(|a| a.category)),
            years: descending(news.iter().map(|a| a.date.year())),
        }
    }
}

impl PublicationOptions {
    pub fn from_records(publications: &[Publication]) -> Self {
        Self {
            years: descending(publications.iter().map(|p| p.year)),
            kinds: ascending(publications.iter().map(|p| p.kind)),
        }
    }
}

impl ProjectOptions {
    pub fn from_records(projects: &[Project]) -> Self {
        Self {
            statuses: ascending(projects.iter().map(|p| p.status)),
            agencies: ascending(projects.iter().map(|p| p.funding_agency.clone())),
            technologies: ascending(projects.iter().flat_map(|p| p.technologies.iter().cloned())),
        }
    }
}

impl PeopleOptions {
    pub fn from_records(people: &[Person]) -> Self {
        Self {
            kinds: ascending(people.iter().map(|p| p.kind)),
            years: descending(people.iter().filter_map(|p| p.year.clone())),
        }
    }
}

// Enumerations order by declaration, strings lexically.
fn ascending<T: Ord>(values: impl Iterator<Item = T>) -> Vec<T> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

fn descending<T: Ord>(values: impl Iterator<Item = T>) -> Vec<T> {
    values.collect::<BTreeSet<_>>().into_iter().rev().collect()
}
