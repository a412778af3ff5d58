//! Search command - run a listing filter from the terminal

use std::{fmt, path::Path, str::FromStr};

use clubsite_core::{Catalog, NewsArticle, Person, Project, Publication, RecordKind};
use clubsite_filter::{
    Criteria, Filtered, Listing, NewsFacets, PersonFacets, ProjectFacets, PublicationFacets,
    Selector, SelectorError, filter,
};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use serde::Serialize;

use super::data_config;

/// Filter criteria given on the command line.
#[derive(Debug, Default, clap::Args)]
pub struct SearchArgs {
    /// Free-text query, matched case-insensitively
    #[arg(short, long, default_value = "")]
    pub query: String,
    /// News category
    #[arg(long)]
    pub category: Option<String>,
    /// Year (news, publications, people)
    #[arg(long)]
    pub year: Option<String>,
    /// Publication or person type
    #[arg(long = "type")]
    pub type_filter: Option<String>,
    /// Project status
    #[arg(long)]
    pub status: Option<String>,
    /// Project funding agency
    #[arg(long)]
    pub agency: Option<String>,
    /// Technology used by a project
    #[arg(long)]
    pub technology: Option<String>,
    /// Only featured news or projects
    #[arg(long)]
    pub featured: bool,
    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Selector flags that were given, by flag name.
    fn selector_flags(&self) -> Vec<&'static str> {
        [
            ("category", &self.category),
            ("year", &self.year),
            ("type", &self.type_filter),
            ("status", &self.status),
            ("agency", &self.agency),
            ("technology", &self.technology),
        ]
        .into_iter()
        .filter_map(|(flag, value)| value.as_ref().map(|_| flag))
        .collect()
    }
}

/// Selector flags each listing understands.
fn accepted_flags(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::News => &["category", "year"],
        RecordKind::Publications => &["year", "type"],
        RecordKind::Projects => &["status", "agency", "technology"],
        RecordKind::People => &["type", "year"],
    }
}

/// Run the search command.
pub fn run(config_path: &Path, kind: RecordKind, args: &SearchArgs) -> Result<()> {
    tracing::info!(?config_path, %kind, query = %args.query, "Searching");

    let data = data_config(config_path)?;
    let catalog = Catalog::load(&data).wrap_err("Failed to load fixtures")?;

    let output = match kind {
        RecordKind::News => render(
            &filter(&catalog.news, &news_criteria(args)?),
            args.json,
            news_line,
        )?,
        RecordKind::Publications => render(
            &filter(&catalog.publications, &publication_criteria(args)?),
            args.json,
            publication_line,
        )?,
        RecordKind::Projects => render(
            &filter(&catalog.projects, &project_criteria(args)?),
            args.json,
            project_line,
        )?,
        RecordKind::People => render(
            &filter(&catalog.people, &person_criteria(args)?),
            args.json,
            person_line,
        )?,
    };

    println!("{output}");
    Ok(())
}

fn ensure_applicable(kind: RecordKind, args: &SearchArgs) -> Result<()> {
    let accepted = accepted_flags(kind);
    for flag in args.selector_flags() {
        if !accepted.contains(&flag) {
            bail!(
                "--{flag} does not apply to {kind}; accepted selectors: {}",
                accepted
                    .iter()
                    .map(|f| format!("--{f}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
    Ok(())
}

fn selector<T>(flag: &str, value: Option<&str>) -> Result<Selector<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        None => Ok(Selector::All),
        Some(value) => value
            .parse()
            .map_err(|e: SelectorError| eyre!("--{flag}: {e}")),
    }
}

fn base_criteria<F>(args: &SearchArgs, facets: F) -> Criteria<F> {
    Criteria {
        query: args.query.clone(),
        facets,
        featured_only: args.featured,
    }
}

fn news_criteria(args: &SearchArgs) -> Result<Criteria<NewsFacets>> {
    ensure_applicable(RecordKind::News, args)?;
    let facets = NewsFacets {
        category: selector("category", args.category.as_deref())?,
        year: selector("year", args.year.as_deref())?,
    };
    Ok(base_criteria(args, facets))
}

fn publication_criteria(args: &SearchArgs) -> Result<Criteria<PublicationFacets>> {
    ensure_applicable(RecordKind::Publications, args)?;
    let facets = PublicationFacets {
        year: selector("year", args.year.as_deref())?,
        kind: selector("type", args.type_filter.as_deref())?,
    };
    Ok(base_criteria(args, facets))
}

fn project_criteria(args: &SearchArgs) -> Result<Criteria<ProjectFacets>> {
    ensure_applicable(RecordKind::Projects, args)?;
    let facets = ProjectFacets {
        status: selector("status", args.status.as_deref())?,
        agency: selector("agency", args.agency.as_deref())?,
        technology: selector("technology", args.technology.as_deref())?,
    };
    Ok(base_criteria(args, facets))
}

fn person_criteria(args: &SearchArgs) -> Result<Criteria<PersonFacets>> {
    ensure_applicable(RecordKind::People, args)?;
    let facets = PersonFacets {
        kind: selector("type", args.type_filter.as_deref())?,
        year: selector("year", args.year.as_deref())?,
    };
    Ok(base_criteria(args, facets))
}

/// Matches as text lines followed by the count, or the empty state.
fn render<R>(visible: &Filtered<'_, R>, json: bool, line: fn(&R) -> String) -> Result<String>
where
    R: Listing + Serialize,
{
    if json {
        return serde_json::to_string_pretty(visible.records())
            .wrap_err("Failed to serialize matches");
    }

    if let Some(empty) = visible.empty_state() {
        return Ok(format!("{}\n{}", empty.heading, empty.hint));
    }

    let mut out = visible.iter().map(line).collect::<Vec<_>>().join("\n");
    out.push_str("\n\n");
    out.push_str(&visible.summary());
    Ok(out)
}

fn news_line(article: &NewsArticle) -> String {
    let star = if article.featured { " ★" } else { "" };
    format!(
        "{}  [{}] {}{star}",
        article.date, article.category, article.title
    )
}

fn publication_line(publication: &Publication) -> String {
    format!(
        "{}  [{}] {} ({})",
        publication.year,
        publication.kind,
        publication.title,
        publication.authors.join(", ")
    )
}

fn project_line(project: &Project) -> String {
    let star = if project.featured { " ★" } else { "" };
    format!(
        "[{}] {} ({}%, {}){star}",
        project.status, project.title, project.progress, project.funding_agency
    )
}

fn person_line(person: &Person) -> String {
    let year = person
        .year
        .as_deref()
        .map(|y| format!(" {y}"))
        .unwrap_or_default();
    format!("[{}{year}] {} <{}>", person.kind, person.name, person.email)
}
