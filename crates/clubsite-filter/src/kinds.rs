//! Listing implementations for the four record kinds.

use std::iter;

use chrono::Datelike;
use clubsite_core::{
    NewsArticle, NewsCategory, Person, PersonType, Project, ProjectStatus, Publication,
    PublicationType, RecordKind,
};

use crate::{listing::Listing, selector::Selector};

/// Selectors on the news page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFacets {
    pub category: Selector<NewsCategory>,
    /// Matches the year of the article date.
    pub year: Selector<i32>,
}

/// Selectors on the publications page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationFacets {
    pub year: Selector<i32>,
    pub kind: Selector<PublicationType>,
}

/// Selectors on the projects page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFacets {
    pub status: Selector<ProjectStatus>,
    pub agency: Selector<String>,
    /// Matches when the project lists this technology.
    pub technology: Selector<String>,
}

/// Selectors on the people page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFacets {
    pub kind: Selector<PersonType>,
    /// A person without a year tag only matches "all".
    pub year: Selector<String>,
}

impl Listing for NewsArticle {
    type Facets = NewsFacets;
    const KIND: RecordKind = RecordKind::News;

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
            self.author.as_str(),
        ]
        .into_iter()
    }

    fn matches_facets(&self, facets: &NewsFacets) -> bool {
        facets.category.matches(&self.category) && facets.year.matches(&self.date.year())
    }

    fn featured(&self) -> Option<bool> {
        Some(self.featured)
    }
}

impl Listing for Publication {
    type Facets = PublicationFacets;
    const KIND: RecordKind = RecordKind::Publications;

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        iter::once(self.title.as_str())
            .chain(self.authors.iter().map(String::as_str))
            .chain(iter::once(self.journal.as_str()))
    }

    fn matches_facets(&self, facets: &PublicationFacets) -> bool {
        facets.year.matches(&self.year) && facets.kind.matches(&self.kind)
    }
}

impl Listing for Project {
    type Facets = ProjectFacets;
    const KIND: RecordKind = RecordKind::Projects;

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.technologies.iter().map(String::as_str))
            .chain(self.team.iter().map(String::as_str))
    }

    fn matches_facets(&self, facets: &ProjectFacets) -> bool {
        facets.status.matches(&self.status)
            && facets.agency.matches(&self.funding_agency)
            && facets.technology.contained_in(&self.technologies)
    }

    fn featured(&self) -> Option<bool> {
        Some(self.featured)
    }
}

impl Listing for Person {
    type Facets = PersonFacets;
    const KIND: RecordKind = RecordKind::People;

    // The academic title is optional, so the name leads.
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.email.as_str()]
            .into_iter()
            .chain(self.title.as_deref())
            .chain(self.research_areas.iter().map(String::as_str))
    }

    fn matches_facets(&self, facets: &PersonFacets) -> bool {
        facets.kind.matches(&self.kind) && facets.year.matches_opt(self.year.as_ref())
    }
}
