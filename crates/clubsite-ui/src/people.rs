//! People listing page.

use clubsite_core::{Person, RecordKind};
use clubsite_filter::{Criteria, PeopleOptions, PersonFacets, filter, selector::ALL};
use leptos::prelude::*;

use crate::{
    controls::{EmptyNotice, SearchBox, SelectFilter, keyed, option_pairs},
    format::role_label,
};

/// Directory of faculty, fellows, students and alumni.
#[component]
pub fn PeopleListing(
    /// Every person, in display order.
    people: Vec<Person>,
) -> impl IntoView {
    let options = PeopleOptions::from_records(&people);
    let people = StoredValue::new(people);

    let query = RwSignal::new(String::new());
    let kind = RwSignal::new(ALL.to_string());
    let year = RwSignal::new(ALL.to_string());

    let criteria = Memo::new(move |_| Criteria {
        query: query.get(),
        facets: PersonFacets {
            kind: kind.get().parse().unwrap_or_default(),
            year: year.get().parse().unwrap_or_default(),
        },
        featured_only: false,
    });

    let visible = Memo::new(move |_| {
        people.with_value(|all| filter(all, &criteria.get()).to_owned_records())
    });

    let kind_options = options
        .kinds
        .iter()
        .map(|k| (k.to_string(), role_label(*k)))
        .collect::<Vec<_>>();

    view! {
      <section class="clubsite-listing clubsite-people">
        <header class="clubsite-listing-header">
          <h1>"People"</h1>
          <p>"Faculty, research fellows, students and alumni"</p>
        </header>

        <div class="clubsite-filters">
          <SearchBox placeholder="Search by name, email, or research area..." query=query />
          <SelectFilter all_label="All Roles" options=kind_options selected=kind />
          <SelectFilter all_label="All Years" options=option_pairs(&options.years) selected=year />
        </div>

        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <EmptyNotice kind=RecordKind::People /> }
        >
          <div class="clubsite-grid">
            <For
              each=move || keyed(visible.get(), |person| person.id)
              key=|(key, _)| *key
              children=move |(_, person)| view! { <PersonCard person=person /> }
            />
          </div>
        </Show>
      </section>
    }
}

#[component]
fn PersonCard(person: Person) -> impl IntoView {
    let mailto = format!("mailto:{}", person.email);
    let role = match &person.year {
        Some(year) => format!("{} · {year}", role_label(person.kind)),
        None => role_label(person.kind),
    };

    view! {
      <article class="clubsite-card clubsite-person">
        {person
          .image
          .clone()
          .map(|src| view! { <img class="clubsite-avatar" src=src alt=person.name.clone() /> })}
        <div class="clubsite-card-body">
          <h3 class="clubsite-card-title">{person.name.clone()}</h3>
          {person.title.clone().map(|title| view! { <p class="clubsite-person-title">{title}</p> })}
          <p class="clubsite-person-role">{role}</p>
          <a class="clubsite-card-link" href=mailto>{person.email.clone()}</a>
          <p class="clubsite-card-excerpt">{person.bio.clone()}</p>
          <ul class="clubsite-chips">
            {person
              .research_areas
              .iter()
              .map(|area| view! { <li class="clubsite-chip">{area.clone()}</li> })
              .collect_view()}
          </ul>
        </div>
      </article>
    }
}
