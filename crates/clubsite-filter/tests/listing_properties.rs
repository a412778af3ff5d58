//! Behavioural properties of the listing filter across record kinds.

use chrono::NaiveDate;
use clubsite_core::{NewsArticle, NewsCategory, Person, PersonType, Project, ProjectStatus};
use clubsite_filter::{
    Criteria, NewsFacets, PersonFacets, ProjectFacets, Selector, filter,
};

fn people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Asha Rao".to_string(),
            email: "asha@example.edu".to_string(),
            kind: PersonType::Faculty,
            year: None,
            research_areas: vec!["HCI".to_string(), "AR".to_string()],
            bio: String::new(),
            title: None,
            image: None,
        },
        Person {
            id: 2,
            name: "Kiran".to_string(),
            email: "kiran@example.edu".to_string(),
            kind: PersonType::Student,
            year: Some("2025".to_string()),
            research_areas: vec!["VR".to_string()],
            bio: String::new(),
            title: None,
            image: None,
        },
    ]
}

fn news() -> Vec<NewsArticle> {
    let article = |id: u32, title: &str, category, year: i32, featured: bool| NewsArticle {
        id,
        title: title.to_string(),
        excerpt: "Updates from the club".to_string(),
        content: "Read about the jam".to_string(),
        category,
        date: NaiveDate::from_ymd_opt(year, 2, 1).expect("date"),
        image: String::new(),
        featured,
        author: "Press Team".to_string(),
        link: String::new(),
    };

    vec![
        article(1, "Global Game Jam 2026 announced", NewsCategory::Events, 2025, true),
        article(2, "Student team wins award", NewsCategory::Awards, 2024, false),
        article(3, "New industry partner", NewsCategory::Partnerships, 2025, false),
        article(4, "Playfest recap", NewsCategory::Events, 2024, true),
    ]
}

fn projects() -> Vec<Project> {
    let project = |id: u32, status, techs: &[&str], featured: bool| Project {
        id,
        title: format!("Prototype {id}"),
        description: "Interactive installation".to_string(),
        status,
        funding_agency: "DST".to_string(),
        technologies: techs.iter().map(|t| t.to_string()).collect(),
        team: vec!["Asha Rao".to_string()],
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        end_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("date"),
        progress: 40,
        featured,
    };

    vec![
        project(1, ProjectStatus::Active, &["Unity"], true),
        project(2, ProjectStatus::Completed, &["Godot"], false),
        project(3, ProjectStatus::Active, &["Unity", "OpenXR"], false),
    ]
}

#[test]
fn test_people_example_type_faculty() {
    let people = people();
    let criteria = Criteria::default().with_facets(PersonFacets {
        kind: Selector::Only(PersonType::Faculty),
        ..PersonFacets::default()
    });

    let visible = filter(&people, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible.records()[0].name, "Asha Rao");
}

#[test]
fn test_people_example_query_vr() {
    let people = people();
    let visible = filter(&people, &Criteria::default().with_query("vr"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible.records()[0].name, "Kiran");
}

#[test]
fn test_people_example_alumni_is_empty() {
    let people = people();
    let criteria = Criteria::default().with_facets(PersonFacets {
        kind: Selector::Only(PersonType::Alumni),
        ..PersonFacets::default()
    });

    let visible = filter(&people, &criteria);
    assert!(visible.is_empty());
    let empty = visible.empty_state().expect("empty state");
    assert_eq!(empty.heading, "No people found");
}

#[test]
fn test_people_missing_year_only_matches_all() {
    let people = people();
    let criteria = Criteria::default().with_facets(PersonFacets {
        year: Selector::Only("2025".to_string()),
        ..PersonFacets::default()
    });
    let names: Vec<_> = filter(&people, &criteria).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Kiran"]);

    assert_eq!(filter(&people, &Criteria::default()).len(), 2);
}

#[test]
fn test_neutral_criteria_return_full_collection_in_order() {
    let news = news();
    let visible = filter(&news, &Criteria::default());
    let ids: Vec<u32> = visible.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let projects = projects();
    assert_eq!(
        filter(&projects, &Criteria::default()).to_owned_records(),
        projects
    );
}

#[test]
fn test_query_absent_everywhere_gives_empty_result() {
    let news = news();
    let visible = filter(&news, &Criteria::default().with_query("speedrun"));
    assert!(visible.is_empty());
    assert_eq!(
        visible.empty_state().map(|e| e.heading),
        Some("No news found".to_string())
    );
}

#[test]
fn test_filter_is_idempotent() {
    let news = news();
    let criteria = Criteria::default()
        .with_query("jam")
        .with_facets(NewsFacets {
            category: Selector::Only(NewsCategory::Events),
            ..NewsFacets::default()
        });

    let once = filter(&news, &criteria).to_owned_records();
    let twice = filter(&once, &criteria).to_owned_records();
    assert_eq!(once, twice);
    assert_eq!(filter(&news, &criteria).to_owned_records(), once);
}

#[test]
fn test_narrowing_never_grows_result() {
    let news = news();
    let steps = [
        Criteria::default(),
        Criteria::default().with_query("e"),
        Criteria::default().with_query("e").with_facets(NewsFacets {
            year: Selector::Only(2025),
            ..NewsFacets::default()
        }),
        Criteria::default()
            .with_query("e")
            .with_facets(NewsFacets {
                year: Selector::Only(2025),
                ..NewsFacets::default()
            })
            .with_featured_only(true),
    ];

    let sizes: Vec<usize> = steps.iter().map(|c| filter(&news, c).len()).collect();
    assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "sizes {sizes:?}");

    let projects = projects();
    let unfeatured = Criteria::default().with_facets(ProjectFacets {
        technology: Selector::Only("Unity".to_string()),
        ..ProjectFacets::default()
    });
    let featured = unfeatured.clone().with_featured_only(true);
    assert!(filter(&projects, &featured).len() <= filter(&projects, &unfeatured).len());
}

#[test]
fn test_query_case_variants_agree() {
    let projects = projects();
    let lower = filter(&projects, &Criteria::default().with_query("unity")).to_owned_records();
    let upper = filter(&projects, &Criteria::default().with_query("UNITY")).to_owned_records();
    let mixed = filter(&projects, &Criteria::default().with_query("uNiTy")).to_owned_records();

    assert_eq!(lower.len(), 2);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_featured_only_never_removes_people() {
    let people = people();
    let visible = filter(&people, &Criteria::default().with_featured_only(true));
    assert_eq!(visible.len(), people.len());
}

#[test]
fn test_selectors_parse_from_dropdown_values() {
    let projects = projects();
    let facets = ProjectFacets {
        status: "active".parse().expect("status"),
        agency: "all".parse().expect("agency"),
        technology: "OpenXR".parse().expect("technology"),
    };

    let visible = filter(&projects, &Criteria::default().with_facets(facets));
    let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3]);
}
