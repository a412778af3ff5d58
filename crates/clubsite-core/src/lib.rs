//! Clubsite Core Library
//!
//! Record types, fixture loading and configuration for the club website's listing pages.

pub mod catalog;
pub mod config;
pub mod error;
pub mod records;

pub use catalog::{Catalog, ValidationIssue};
pub use config::Config;
pub use error::{CoreError, Result, UnknownVariant};
pub use records::{
    NewsArticle, NewsCategory, Person, PersonType, Project, ProjectStatus, Publication,
    PublicationType, RecordKind,
};
