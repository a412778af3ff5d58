//! Listing filter properties over generated collections and criteria.

use std::fmt::Debug;

use chrono::NaiveDate;
use clubsite_core::{Person, PersonType, Project, ProjectStatus};
use clubsite_filter::{Criteria, PersonFacets, ProjectFacets, Selector, filter};
use proptest::{prelude::*, sample::select};

const WORDS: &[&str] = &[
    "Unity", "godot", "VR", "Haptic", "audio", "Jam", "Rao", "Kiran", "OpenXR", "rehab",
];
const AGENCIES: &[&str] = &["DST", "ICMR", "Meta Reality Labs"];
const YEARS: &[&str] = &["2023", "2024", "2025"];

fn word() -> impl Strategy<Value = String> {
    select(WORDS).prop_map(str::to_string)
}

fn words(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), len)
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), word(), "[a-zA-Z ]{1,4}"]
}

fn selector<T: Clone + Debug>(value: impl Strategy<Value = T>) -> impl Strategy<Value = Selector<T>> {
    prop_oneof![Just(Selector::All), value.prop_map(Selector::Only)]
}

fn project() -> impl Strategy<Value = Project> {
    (
        0u32..20,
        words(1..4),
        words(0..6),
        select(ProjectStatus::ALL),
        select(AGENCIES),
        words(0..4),
        words(0..3),
        0u32..=100,
        any::<bool>(),
    )
        .prop_map(
            |(id, title, description, status, agency, technologies, team, progress, featured)| {
                Project {
                    id,
                    title: title.join(" "),
                    description: description.join(" "),
                    status,
                    funding_agency: agency.to_string(),
                    technologies,
                    team,
                    start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
                    end_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("date"),
                    progress,
                    featured,
                }
            },
        )
}

fn person() -> impl Strategy<Value = Person> {
    (
        0u32..20,
        words(1..3),
        select(PersonType::ALL),
        proptest::option::of(select(YEARS)),
        words(0..4),
        proptest::option::of(word()),
    )
        .prop_map(|(id, name, kind, year, research_areas, title)| Person {
            id,
            email: format!("{}@example.edu", name.join(".").to_lowercase()),
            name: name.join(" "),
            kind,
            year: year.map(str::to_string),
            research_areas,
            bio: String::new(),
            title,
            image: None,
        })
}

fn project_criteria() -> impl Strategy<Value = Criteria<ProjectFacets>> {
    (
        query(),
        selector(select(ProjectStatus::ALL)),
        selector(select(AGENCIES).prop_map(str::to_string)),
        selector(word()),
        any::<bool>(),
    )
        .prop_map(|(query, status, agency, technology, featured_only)| Criteria {
            query,
            facets: ProjectFacets {
                status,
                agency,
                technology,
            },
            featured_only,
        })
}

fn person_criteria() -> impl Strategy<Value = Criteria<PersonFacets>> {
    (
        query(),
        selector(select(PersonType::ALL)),
        selector(select(YEARS).prop_map(str::to_string)),
    )
        .prop_map(|(query, kind, year)| Criteria {
            query,
            facets: PersonFacets { kind, year },
            featured_only: false,
        })
}

proptest! {
    #[test]
    fn neutral_criteria_keep_everything_in_order(
        projects in prop::collection::vec(project(), 0..12),
        people in prop::collection::vec(person(), 0..12),
    ) {
        prop_assert_eq!(filter(&projects, &Criteria::default()).to_owned_records(), projects);
        prop_assert_eq!(filter(&people, &Criteria::default()).to_owned_records(), people);
    }

    #[test]
    fn result_is_an_ordered_subsequence(
        projects in prop::collection::vec(project(), 0..12),
        criteria in project_criteria(),
    ) {
        let visible = filter(&projects, &criteria);
        let expected: Vec<_> = projects.iter().filter(|p| criteria.matches(*p)).collect();
        prop_assert_eq!(visible.records(), expected.as_slice());
        prop_assert_eq!(visible.is_empty(), visible.empty_state().is_some());
    }

    #[test]
    fn filtering_is_idempotent(
        projects in prop::collection::vec(project(), 0..12),
        criteria in project_criteria(),
    ) {
        let once = filter(&projects, &criteria).to_owned_records();
        let twice = filter(&once, &criteria).to_owned_records();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_people_is_idempotent(
        people in prop::collection::vec(person(), 0..12),
        criteria in person_criteria(),
    ) {
        let once = filter(&people, &criteria).to_owned_records();
        let twice = filter(&once, &criteria).to_owned_records();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn narrowing_never_grows_the_result(
        projects in prop::collection::vec(project(), 0..12),
        criteria in project_criteria(),
        status in select(ProjectStatus::ALL),
        technology in word(),
        suffix in "[a-z]{0,2}",
    ) {
        let base = filter(&projects, &criteria);

        let mut narrowed = criteria.clone().with_featured_only(true);
        narrowed.query.push_str(&suffix);
        if narrowed.facets.status.is_all() {
            narrowed.facets.status = Selector::Only(status);
        }
        if narrowed.facets.technology.is_all() {
            narrowed.facets.technology = Selector::Only(technology);
        }

        let fewer = filter(&projects, &narrowed);
        prop_assert!(fewer.len() <= base.len());
        prop_assert!(fewer.iter().all(|p| criteria.matches(p)));
    }

    #[test]
    fn query_case_does_not_matter(
        projects in prop::collection::vec(project(), 0..12),
        people in prop::collection::vec(person(), 0..12),
        query in query(),
    ) {
        let as_given = Criteria::<ProjectFacets>::default().with_query(query.clone());
        let upper = Criteria::<ProjectFacets>::default().with_query(query.to_uppercase());
        let lower = Criteria::<ProjectFacets>::default().with_query(query.to_lowercase());
        let expected = filter(&projects, &as_given).to_owned_records();
        prop_assert_eq!(&filter(&projects, &upper).to_owned_records(), &expected);
        prop_assert_eq!(&filter(&projects, &lower).to_owned_records(), &expected);

        let upper = Criteria::<PersonFacets>::default().with_query(query.to_uppercase());
        let lower = Criteria::<PersonFacets>::default().with_query(query.to_lowercase());
        prop_assert_eq!(
            filter(&people, &upper).to_owned_records(),
            filter(&people, &lower).to_owned_records()
        );
    }

    #[test]
    fn absent_query_empties_the_listing(
        projects in prop::collection::vec(project(), 0..12),
    ) {
        let visible = filter(&projects, &Criteria::default().with_query("#zz#"));
        prop_assert!(visible.is_empty());
        prop_assert_eq!(
            visible.empty_state().map(|e| e.heading),
            Some("No projects found".to_string())
        );
    }

    #[test]
    fn featured_only_never_removes_people(
        people in prop::collection::vec(person(), 0..12),
        criteria in person_criteria(),
    ) {
        let without = filter(&people, &criteria).to_owned_records();
        let with = filter(&people, &criteria.clone().with_featured_only(true)).to_owned_records();
        prop_assert_eq!(without, with);
    }
}
