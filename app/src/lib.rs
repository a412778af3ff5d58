//! Browser app shell.
//!
//! Routes to the four listing pages. Fixtures are embedded at compile time, so the
//! catalog is parsed once on startup and shared through context.

use std::sync::Arc;

use clubsite_core::{Catalog, Result};
use clubsite_ui::{NewsListing, PeopleListing, ProjectsListing, PublicationsListing};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

const SITE_TITLE: &str = "Global Game Jam @ Campus";

/// Parse the fixtures bundled into the binary.
pub fn embedded_catalog() -> Result<Catalog> {
    Catalog::from_json(
        include_str!("../../data/news.json"),
        include_str!("../../data/publications.json"),
        include_str!("../../data/projects.json"),
        include_str!("../../data/people.json"),
    )
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = match embedded_catalog() {
        Ok(catalog) => {
            log::debug!(
                "catalog ready: {} news, {} publications, {} projects, {} people",
                catalog.news.len(),
                catalog.publications.len(),
                catalog.projects.len(),
                catalog.people.len()
            );
            catalog
        }
        Err(err) => {
            log::error!("failed to parse embedded fixtures: {err}");
            return view! {
              <Title text=SITE_TITLE />
              <main class="clubsite-error">
                <h1>"Site data could not be loaded"</h1>
                <p>{err.to_string()}</p>
              </main>
            }
            .into_any();
        }
    };
    provide_context(Arc::new(catalog));

    view! {
      <Title text=SITE_TITLE />
      <Router>
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=|| view! { <Redirect path="/news" /> } />
            <Route path=StaticSegment("news") view=NewsPage />
            <Route path=StaticSegment("publications") view=PublicationsPage />
            <Route path=StaticSegment("projects") view=ProjectsPage />
            <Route path=StaticSegment("people") view=PeoplePage />
          </Routes>
        </main>
      </Router>
    }
    .into_any()
}

fn catalog() -> Arc<Catalog> {
    use_context::<Arc<Catalog>>().unwrap_or_default()
}

#[component]
fn NewsPage() -> impl IntoView {
    view! { <NewsListing news=catalog().news.clone() /> }
}

#[component]
fn PublicationsPage() -> impl IntoView {
    view! { <PublicationsListing publications=catalog().publications.clone() /> }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    view! { <ProjectsListing projects=catalog().projects.clone() /> }
}

#[component]
fn PeoplePage() -> impl IntoView {
    view! { <PeopleListing people=catalog().people.clone() /> }
}

#[cfg(test)]
mod tests {
    use clubsite_core::RecordKind;

    use super::*;

    #[test]
    fn test_embedded_fixtures_parse() {
        let catalog = embedded_catalog().expect("embedded fixtures");
        for kind in RecordKind::ALL {
            assert!(catalog.count(kind) > 0, "no {kind} in embedded fixtures");
        }
    }

    #[test]
    fn test_embedded_fixtures_are_valid() {
        let catalog = embedded_catalog().expect("embedded fixtures");
        let issues = catalog.validate();
        assert!(issues.is_empty(), "issues: {issues:?}");
    }
}
