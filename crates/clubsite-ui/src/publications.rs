//! Publications listing page.

use clubsite_core::{Publication, RecordKind};
use clubsite_filter::{
    Criteria, PublicationFacets, PublicationOptions, count_line, filter, selector::ALL,
};
use leptos::prelude::*;

use crate::{
    controls::{EmptyNotice, ResultCount, SearchBox, SelectFilter, keyed, option_pairs},
    format::{citation, publication_badge_class},
};

/// Searchable list of publications with year and type selectors.
#[component]
pub fn PublicationsListing(
    /// Every publication, in display order.
    publications: Vec<Publication>,
) -> impl IntoView {
    let options = PublicationOptions::from_records(&publications);
    let publications = StoredValue::new(publications);

    let query = RwSignal::new(String::new());
    let year = RwSignal::new(ALL.to_string());
    let kind = RwSignal::new(ALL.to_string());

    let criteria = Memo::new(move |_| Criteria {
        query: query.get(),
        facets: PublicationFacets {
            year: year.get().parse().unwrap_or_default(),
            kind: kind.get().parse().unwrap_or_default(),
        },
        featured_only: false,
    });

    let visible = Memo::new(move |_| {
        publications.with_value(|all| filter(all, &criteria.get()).to_owned_records())
    });

    let summary = Signal::derive(move || {
        count_line(RecordKind::Publications, visible.with(Vec::len))
    });

    view! {
      <section class="clubsite-listing clubsite-publications">
        <header class="clubsite-listing-header">
          <h1>"Publications"</h1>
          <p>"Peer-reviewed work from our members"</p>
        </header>

        <div class="clubsite-filters">
          <SearchBox
            placeholder="Search by title, author, or journal..."
            query=query
          />
          <SelectFilter all_label="All Years" options=option_pairs(&options.years) selected=year />
          <SelectFilter all_label="All Types" options=option_pairs(&options.kinds) selected=kind />
        </div>

        <ResultCount summary=summary />

        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <EmptyNotice kind=RecordKind::Publications /> }
        >
          <ol class="clubsite-publication-list">
            <For
              each=move || keyed(visible.get(), |publication| publication.id)
              key=|(key, _)| *key
              children=move |(_, publication)| view! { <PublicationEntry publication=publication /> }
            />
          </ol>
        </Show>
      </section>
    }
}

#[component]
fn PublicationEntry(publication: Publication) -> impl IntoView {
    let badge = format!(
        "clubsite-badge {}",
        publication_badge_class(publication.kind)
    );
    let venue = citation(&publication);
    let issn = publication.issn.clone();

    view! {
      <li class="clubsite-publication">
        <div class="clubsite-publication-body">
          <h3 class="clubsite-card-title">{publication.title.clone()}</h3>
          <p class="clubsite-publication-authors">{publication.authors.join(", ")}</p>
          <p class="clubsite-publication-venue">{venue}</p>
          {issn.map(|issn| view! { <p class="clubsite-publication-issn">"ISSN: " {issn}</p> })}
        </div>
        <div class="clubsite-publication-aside">
          <span class=badge>{publication.kind.to_string()}</span>
          <span class="clubsite-publication-year">{publication.year}</span>
        </div>
      </li>
    }
}
