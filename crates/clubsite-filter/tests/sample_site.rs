//! End-to-end tests over the sample site shipped in the repository root.

use std::path::Path;

use clubsite_core::{Catalog, Config, PersonType, ProjectStatus, RecordKind};
use clubsite_filter::{
    Criteria, NewsOptions, PersonFacets, ProjectFacets, ProjectOptions, Selector, filter,
};

fn sample_catalog() -> Option<Catalog> {
    let root = Path::new("../..");
    let config_path = root.join("clubsite.toml");
    if !config_path.exists() {
        // Skip if running from different working directory
        return None;
    }

    let mut config = Config::load(&config_path).expect("Config should load");
    config.data.dir = root.join(&config.data.dir);
    Some(Catalog::load(&config.data).expect("Fixtures should load"))
}

#[test]
fn test_sample_site_fixtures_validate() {
    let Some(catalog) = sample_catalog() else {
        return;
    };

    for kind in RecordKind::ALL {
        assert!(catalog.count(kind) > 0, "sample site has no {kind}");
    }
    let issues = catalog.validate();
    assert!(issues.is_empty(), "issues: {issues:?}");
}

#[test]
fn test_sample_site_faculty_with_ar() {
    let Some(catalog) = sample_catalog() else {
        return;
    };

    let criteria = Criteria::default()
        .with_query("ar")
        .with_facets(PersonFacets {
            kind: Selector::Only(PersonType::Faculty),
            ..PersonFacets::default()
        });
    let visible = filter(&catalog.people, &criteria);

    assert!(!visible.is_empty());
    assert!(visible.iter().all(|p| p.kind == PersonType::Faculty));
}

#[test]
fn test_sample_site_featured_active_projects() {
    let Some(catalog) = sample_catalog() else {
        return;
    };

    let criteria = Criteria::default()
        .with_facets(ProjectFacets {
            status: Selector::Only(ProjectStatus::Active),
            ..ProjectFacets::default()
        })
        .with_featured_only(true);
    let visible = filter(&catalog.projects, &criteria);

    assert!(visible.len() <= catalog.projects.len());
    assert!(visible
        .iter()
        .all(|p| p.featured && p.status == ProjectStatus::Active));
}

#[test]
fn test_sample_site_options_cover_records() {
    let Some(catalog) = sample_catalog() else {
        return;
    };

    let news = NewsOptions::from_records(&catalog.news);
    assert!(catalog.news.iter().all(|a| news.categories.contains(&a.category)));
    assert!(news.years.windows(2).all(|w| w[0] > w[1]));

    let projects = ProjectOptions::from_records(&catalog.projects);
    for project in &catalog.projects {
        assert!(projects.agencies.contains(&project.funding_agency));
        for tech in &project.technologies {
            assert!(projects.technologies.contains(tech));
        }
    }
}
