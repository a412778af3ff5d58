//! Clubsite Listing Filter
//!
//! Computes the visible subset of a listing page from a fixed record collection and
//! the page's current criteria.
//!
//! # Features
//!
//! - **One combinator for every listing**: [`filter`] works for any [`Listing`]
//! - **Sentinel selectors**: [`Selector::All`] imposes no constraint
//! - **Empty state contract**: [`Filtered::empty_state`] tells surfaces when to show "No … found"
//! - **Facet options**: dropdown values derived from the records themselves
//!
//! # Example
//!
//! ```
//! use clubsite_core::{Person, PersonType};
//! use clubsite_filter::{Criteria, PersonFacets, Selector, filter};
//!
//! let people: Vec<Person> = Vec::new();
//! let criteria = Criteria::<PersonFacets>::default()
//!     .with_query("vr")
//!     .with_facets(PersonFacets {
//!         kind: Selector::Only(PersonType::Student),
//!         ..PersonFacets::default()
//!     });
//!
//! let visible = filter(&people, &criteria);
//! assert!(visible.empty_state().is_some());
//! ```

pub mod kinds;
pub mod listing;
pub mod options;
pub mod selector;

pub use kinds::{NewsFacets, PersonFacets, ProjectFacets, PublicationFacets};
pub use listing::{Criteria, EmptyState, Filtered, Listing, count_line, filter};
pub use options::{NewsOptions, PeopleOptions, ProjectOptions, PublicationOptions};
pub use selector::{Selector, SelectorError};
