//! Clubsite UI Components
//!
//! Leptos components for the filterable listing pages.
//!
//! # Components
//!
//! ## Controls
//! - [`SearchBox`] - Free-text query input (Escape clears it)
//! - [`SelectFilter`] - Dropdown for one facet selector, led by an "All …" option
//! - [`FeaturedToggle`] - "Featured Only" switch
//! - [`ResultCount`] - "3 publications found"
//! - [`EmptyNotice`] - The "No … found" state
//!
//! ## Listings
//! - [`NewsListing`], [`PublicationsListing`], [`ProjectsListing`], [`PeopleListing`]
//!
//! Each listing owns its criteria as signals, created on mount and dropped on
//! navigation, and derives the visible records with [`clubsite_filter::filter`].
//!
//! # Example
//!
//! ```ignore
//! use clubsite_core::Catalog;
//! use clubsite_ui::PeopleListing;
//! use leptos::prelude::*;
//!
//! #[component]
//! fn People(catalog: Catalog) -> impl IntoView {
//!     view! { <PeopleListing people=catalog.people /> }
//! }
//! ```

pub mod controls;
pub mod format;
pub mod news;
pub mod people;
pub mod projects;
pub mod publications;

pub use controls::{EmptyNotice, FeaturedToggle, ResultCount, SearchBox, SelectFilter};
pub use news::NewsListing;
pub use people::PeopleListing;
pub use projects::ProjectsListing;
pub use publications::PublicationsListing;
