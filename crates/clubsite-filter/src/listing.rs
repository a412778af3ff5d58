//! The generic listing filter.
//!
//! Every listing page runs the same predicate: a record is visible when the free-text
//! query matches one of its searchable fields, every facet selector matches, and the
//! featured toggle is either off or satisfied. Record kinds plug in through
//! [`Listing`].

use clubsite_core::RecordKind;

/// Hint shown under every empty-state heading.
pub const EMPTY_HINT: &str = "Try adjusting your search or filter criteria";

/// A record kind that can be shown on a filterable listing page.
pub trait Listing {
    /// The kind's categorical selectors. `Default` must select everything.
    type Facets: Default + Clone + PartialEq;

    /// Which listing this is; drives empty-state and count wording.
    const KIND: RecordKind;

    /// Fields the free-text query is matched against. Title always comes first.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// Whether every selector in `facets` accepts this record.
    fn matches_facets(&self, facets: &Self::Facets) -> bool;

    /// Featured flag, or `None` for kinds without a featured concept.
    fn featured(&self) -> Option<bool> {
        None
    }
}

/// Page-scoped filter inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria<F> {
    /// Free-text query; empty matches everything.
    pub query: String,
    /// Categorical selectors.
    pub facets: F,
    /// Only show featured records.
    pub featured_only: bool,
}

impl<F> Criteria<F> {
    /// Replace the query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Replace the facet selectors.
    pub fn with_facets(mut self, facets: F) -> Self {
        self.facets = facets;
        self
    }

    /// Set the featured toggle.
    pub fn with_featured_only(mut self, featured_only: bool) -> Self {
        self.featured_only = featured_only;
        self
    }

    /// Check a single record.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Listing<Facets = F>,
    {
        record_matches(record, &self.query.to_lowercase(), self)
    }
}

/// The "no results" state a surface must render instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// e.g. "No people found".
    pub heading: String,
    pub hint: &'static str,
}

impl EmptyState {
    /// Empty state for a listing kind.
    pub fn for_kind(kind: RecordKind) -> Self {
        Self {
            heading: format!("No {} found", kind.plural()),
            hint: EMPTY_HINT,
        }
    }
}

/// Count line for `count` records of a kind, e.g. "3 publications found".
pub fn count_line(kind: RecordKind, count: usize) -> String {
    format!("{count} {} found", kind.noun_for(count))
}

/// The visible subset of a listing, in original collection order.
#[derive(Debug)]
pub struct Filtered<'a, R> {
    kind: RecordKind,
    records: Vec<&'a R>,
}

impl<R> Clone for Filtered<'_, R> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            records: self.records.clone(),
        }
    }
}

impl<'a, R> Filtered<'a, R> {
    /// Matching records.
    pub fn records(&self) -> &[&'a R] {
        &self.records
    }

    /// Iterate over matching records.
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.records.iter().copied()
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `Some` exactly when nothing matched.
    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then(|| EmptyState::for_kind(self.kind))
    }

    /// Count line, e.g. "1 publication found".
    pub fn summary(&self) -> String {
        count_line(self.kind, self.len())
    }

    /// Take the matching references.
    pub fn into_records(self) -> Vec<&'a R> {
        self.records
    }
}

impl<R: Clone> Filtered<'_, R> {
    /// Owned copies of the matching records.
    pub fn to_owned_records(&self) -> Vec<R> {
        self.records.iter().map(|r| (*r).clone()).collect()
    }
}

/// Compute the visible subset of `records` under `criteria`.
///
/// Pure: the collection is only borrowed and order is preserved.
pub fn filter<'a, R: Listing>(records: &'a [R], criteria: &Criteria<R::Facets>) -> Filtered<'a, R> {
    let needle = criteria.query.to_lowercase();

    Filtered {
        kind: R::KIND,
        records: records
            .iter()
            .filter(|record| record_matches(*record, &needle, criteria))
            .collect(),
    }
}

fn record_matches<R: Listing>(record: &R, needle: &str, criteria: &Criteria<R::Facets>) -> bool {
    matches_query(record, needle)
        && record.matches_facets(&criteria.facets)
        && (!criteria.featured_only || record.featured().unwrap_or(true))
}

/// `needle` must already be lowercased.
fn matches_query<R: Listing>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .any(|field| field.to_lowercase().contains(needle))
}
