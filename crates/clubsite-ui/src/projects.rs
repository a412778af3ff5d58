//! Projects listing page.

use clubsite_core::{Project, RecordKind};
use clubsite_filter::{Criteria, ProjectFacets, ProjectOptions, filter, selector::ALL};
use leptos::prelude::*;

use crate::{
    controls::{EmptyNotice, FeaturedToggle, SearchBox, SelectFilter, keyed, option_pairs},
    format::{capitalize, format_month_year, progress_class, status_badge_class, tech_preview},
};

/// Searchable grid of research projects.
#[component]
pub fn ProjectsListing(
    /// Every project, in display order.
    projects: Vec<Project>,
) -> impl IntoView {
    let options = ProjectOptions::from_records(&projects);
    let projects = StoredValue::new(projects);

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(ALL.to_string());
    let agency = RwSignal::new(ALL.to_string());
    let technology = RwSignal::new(ALL.to_string());
    let featured_only = RwSignal::new(false);

    let criteria = Memo::new(move |_| Criteria {
        query: query.get(),
        facets: ProjectFacets {
            status: status.get().parse().unwrap_or_default(),
            agency: agency.get().parse().unwrap_or_default(),
            technology: technology.get().parse().unwrap_or_default(),
        },
        featured_only: featured_only.get(),
    });

    let visible = Memo::new(move |_| {
        projects.with_value(|all| filter(all, &criteria.get()).to_owned_records())
    });

    let status_options = options
        .statuses
        .iter()
        .map(|s| (s.to_string(), capitalize(s.as_str())))
        .collect::<Vec<_>>();

    view! {
      <section class="clubsite-listing clubsite-projects">
        <header class="clubsite-listing-header">
          <h1>"Research Projects"</h1>
          <p>"Explore our cutting-edge research initiatives in HCI"</p>
        </header>

        <div class="clubsite-filters">
          <SearchBox
            placeholder="Search by title, description, technologies, or team members..."
            query=query
          />
          <SelectFilter all_label="All Status" options=status_options selected=status />
          <SelectFilter
            all_label="All Funding Agencies"
            options=option_pairs(&options.agencies)
            selected=agency
          />
          <SelectFilter
            all_label="All Technologies"
            options=option_pairs(&options.technologies)
            selected=technology
          />
          <FeaturedToggle enabled=featured_only />
        </div>

        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <EmptyNotice kind=RecordKind::Projects /> }
        >
          <div class="clubsite-grid">
            <For
              each=move || keyed(visible.get(), |project| project.id)
              key=|(key, _)| *key
              children=move |(_, project)| view! { <ProjectCard project=project /> }
            />
          </div>
        </Show>
      </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let badge = format!("clubsite-badge {}", status_badge_class(project.status));
    let bar = format!("clubsite-progress-bar {}", progress_class(project.progress));
    let width = format!("width: {}%", project.progress.min(100));
    let period = format!(
        "{} - {}",
        format_month_year(project.start_date),
        format_month_year(project.end_date)
    );
    let (shown, hidden) = tech_preview(&project.technologies);
    let chips = shown.to_vec();

    view! {
      <article class="clubsite-card" class:featured=project.featured>
        <header class="clubsite-card-header">
          <h3 class="clubsite-card-title">{project.title.clone()}</h3>
          <span class=badge>{capitalize(project.status.as_str())}</span>
          {project
            .featured
            .then(|| view! { <span class="clubsite-featured-badge">"Featured"</span> })}
        </header>

        <div class="clubsite-progress">
          <div class="clubsite-progress-label">
            <span>"Progress"</span>
            <span>{project.progress} "%"</span>
          </div>
          <div class="clubsite-progress-track">
            <div class=bar style=width></div>
          </div>
        </div>

        <p class="clubsite-card-excerpt">{project.description.clone()}</p>

        <div class="clubsite-card-meta">
          <span>{period}</span>
          <span>{project.team.len()} " members"</span>
          <span>{project.funding_agency.clone()}</span>
        </div>

        <ul class="clubsite-chips">
          {chips
            .into_iter()
            .map(|tech| view! { <li class="clubsite-chip">{tech}</li> })
            .collect_view()}
          {(hidden > 0)
            .then(|| view! { <li class="clubsite-chip clubsite-chip-more">"+" {hidden}</li> })}
        </ul>
      </article>
    }
}
