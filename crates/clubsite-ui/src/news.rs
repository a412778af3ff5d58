//! News listing page.

use clubsite_core::{NewsArticle, RecordKind};
use clubsite_filter::{Criteria, NewsFacets, NewsOptions, filter, selector::ALL};
use leptos::prelude::*;

use crate::{
    controls::{EmptyNotice, FeaturedToggle, SearchBox, SelectFilter, keyed, option_pairs},
    format::{category_badge_class, format_long_date},
};

/// Searchable, filterable grid of news articles.
#[component]
pub fn NewsListing(
    /// Every article, in display order.
    news: Vec<NewsArticle>,
) -> impl IntoView {
    let options = NewsOptions::from_records(&news);
    let news = StoredValue::new(news);

    let query = RwSignal::new(String::new());
    let category = RwSignal::new(ALL.to_string());
    let year = RwSignal::new(ALL.to_string());
    let featured_only = RwSignal::new(false);

    let criteria = Memo::new(move |_| Criteria {
        query: query.get(),
        facets: NewsFacets {
            category: category.get().parse().unwrap_or_default(),
            year: year.get().parse().unwrap_or_default(),
        },
        featured_only: featured_only.get(),
    });

    let visible = Memo::new(move |_| {
        news.with_value(|news| filter(news, &criteria.get()).to_owned_records())
    });

    view! {
      <section class="clubsite-listing clubsite-news">
        <header class="clubsite-listing-header">
          <h1>"News & Updates"</h1>
          <p>
            "Stay updated with the latest research breakthroughs, awards, and developments from our lab"
          </p>
        </header>

        <div class="clubsite-filters">
          <SearchBox placeholder="Search news articles..." query=query />
          <SelectFilter
            all_label="All Categories"
            options=option_pairs(&options.categories)
            selected=category
          />
          <SelectFilter all_label="All Years" options=option_pairs(&options.years) selected=year />
          <FeaturedToggle enabled=featured_only />
        </div>

        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <EmptyNotice kind=RecordKind::News /> }
        >
          <div class="clubsite-grid">
            <For
              each=move || keyed(visible.get(), |article| article.id)
              key=|(key, _)| *key
              children=move |(_, article)| view! { <NewsCard article=article /> }
            />
          </div>
        </Show>
      </section>
    }
}

#[component]
fn NewsCard(article: NewsArticle) -> impl IntoView {
    let badge = format!(
        "clubsite-badge {}",
        category_badge_class(article.category)
    );

    view! {
      <article class="clubsite-card" class:featured=article.featured>
        <div class="clubsite-card-media">
          <img src=article.image.clone() alt=article.title.clone() loading="lazy" />
          {article
            .featured
            .then(|| view! { <span class="clubsite-featured-badge">"Featured"</span> })}
          <span class=badge>{article.category.to_string()}</span>
        </div>
        <div class="clubsite-card-body">
          <h3 class="clubsite-card-title">{article.title.clone()}</h3>
          <p class="clubsite-card-excerpt">{article.excerpt.clone()}</p>
          <div class="clubsite-card-meta">
            <time datetime=article.date.to_string()>{format_long_date(article.date)}</time>
            <span>"By " {article.author.clone()}</span>
          </div>
          <a
            class="clubsite-card-link"
            href=article.link.clone()
            target="_blank"
            rel="noopener noreferrer"
          >
            "Read more →"
          </a>
        </div>
      </article>
    }
}
