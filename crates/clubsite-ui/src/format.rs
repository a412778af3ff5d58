//! Presentation helpers shared by the listing cards.

use chrono::NaiveDate;
use clubsite_core::{NewsCategory, PersonType, ProjectStatus, Publication, PublicationType};

/// Technology chips shown on a project card before collapsing into "+N".
pub const TECH_PREVIEW_LIMIT: usize = 3;

/// Badge class for a news category.
pub fn category_badge_class(category: NewsCategory) -> &'static str {
    match category {
        NewsCategory::Awards => "clubsite-badge-yellow",
        NewsCategory::Partnerships => "clubsite-badge-blue",
        NewsCategory::ResearchImpact => "clubsite-badge-green",
        NewsCategory::Publications => "clubsite-badge-purple",
        NewsCategory::Events => "clubsite-badge-orange",
        NewsCategory::ProductLaunch => "clubsite-badge-emerald",
        NewsCategory::Innovation => "clubsite-badge-pink",
    }
}

/// Badge class for a publication type.
pub fn publication_badge_class(kind: PublicationType) -> &'static str {
    match kind {
        PublicationType::Journal => "clubsite-badge-emerald",
        PublicationType::Conference => "clubsite-badge-blue",
        PublicationType::BookChapter => "clubsite-badge-purple",
    }
}

/// Badge class for a project status.
pub fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "clubsite-badge-green",
        ProjectStatus::Completed => "clubsite-badge-blue",
        ProjectStatus::Planned => "clubsite-badge-yellow",
    }
}

/// Progress bar colour class.
pub fn progress_class(progress: u32) -> &'static str {
    if progress >= 80 {
        "clubsite-progress-high"
    } else if progress >= 50 {
        "clubsite-progress-mid"
    } else {
        "clubsite-progress-low"
    }
}

/// "March 5, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Mar 2024".
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Uppercase the first letter: "active" becomes "Active".
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Role label on the people page: "Faculty", "JRF".
pub fn role_label(kind: PersonType) -> String {
    match kind {
        PersonType::Jrf => "JRF".to_string(),
        other => capitalize(other.as_str()),
    }
}

/// Venue line of a publication: "IEEE TVCG, 29(4), 112-130".
///
/// Issue and pages are only shown alongside a volume.
pub fn citation(publication: &Publication) -> String {
    let mut line = publication.journal.clone();

    if let Some(volume) = publication.volume {
        line.push_str(&format!(", {volume}"));
        if let Some(issue) = publication.issue {
            line.push_str(&format!("({issue})"));
        }
        if let Some(pages) = &publication.pages {
            line.push_str(&format!(", {pages}"));
        }
    }

    line
}

/// The chips to render and how many were left out.
pub fn tech_preview(technologies: &[String]) -> (&[String], usize) {
    let shown = technologies.len().min(TECH_PREVIEW_LIMIT);
    (&technologies[..shown], technologies.len() - shown)
}
