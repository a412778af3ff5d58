//! Filter controls shared by every listing page.

use clubsite_core::RecordKind;
use clubsite_filter::{EmptyState, selector::ALL};
use leptos::prelude::*;

/// Free-text query input.
///
/// Every keystroke updates `query`; Escape clears it.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input.
    #[prop(into, default = "Search...".to_string())]
    placeholder: String,
    /// Signal to track the current query.
    query: RwSignal<String>,
) -> impl IntoView {
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            query.set(String::new());
        }
    };

    view! {
      <div class="clubsite-search-box">
        <input
          type="text"
          class="clubsite-search-input"
          placeholder=placeholder
          prop:value=move || query.get()
          on:input=move |ev| {
            query.set(event_target_value(&ev));
          }
          on:keydown=on_keydown
        />
      </div>
    }
}

/// Dropdown bound to one facet selector.
///
/// The first option carries the "all" sentinel; the rest are `(value, label)` pairs.
#[component]
pub fn SelectFilter(
    /// Label of the sentinel option, e.g. "All Categories".
    #[prop(into)]
    all_label: String,
    /// Concrete options as `(value, label)`.
    options: Vec<(String, String)>,
    /// Currently selected value, `"all"` when unconstrained.
    selected: RwSignal<String>,
) -> impl IntoView {
    view! {
      <select
        class="clubsite-select"
        prop:value=move || selected.get()
        on:change=move |ev| selected.set(event_target_value(&ev))
      >
        <option value=ALL>{all_label}</option>
        {options
          .into_iter()
          .map(|(value, label)| view! { <option value=value>{label}</option> })
          .collect_view()}
      </select>
    }
}

/// "Featured Only" toggle.
#[component]
pub fn FeaturedToggle(
    /// Whether only featured records are shown.
    enabled: RwSignal<bool>,
) -> impl IntoView {
    view! {
      <button
        type="button"
        class="clubsite-featured-toggle"
        class:active=move || enabled.get()
        aria-pressed=move || enabled.get().to_string()
        on:click=move |_| enabled.update(|on| *on = !*on)
      >
        "Featured Only"
      </button>
    }
}

/// Count line such as "3 publications found".
#[component]
pub fn ResultCount(
    /// Pre-rendered summary.
    summary: Signal<String>,
) -> impl IntoView {
    view! { <p class="clubsite-result-count">{move || summary.get()}</p> }
}

/// The "No … found" state shown instead of an empty list.
#[component]
pub fn EmptyNotice(
    /// Which listing came up empty.
    kind: RecordKind,
) -> impl IntoView {
    let EmptyState { heading, hint } = EmptyState::for_kind(kind);

    view! {
      <div class="clubsite-empty" role="status">
        <h3 class="clubsite-empty-heading">{heading}</h3>
        <p class="clubsite-empty-hint">{hint}</p>
      </div>
    }
}

/// Turn displayable values into `(value, label)` option pairs.
pub fn option_pairs<T: ToString>(values: &[T]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| {
            let value = v.to_string();
            (value.clone(), value)
        })
        .collect()
}

/// Pair each visible record with its `<For>` key.
///
/// The key is `(position, id)`, so records sharing an id still render as separate cards.
pub fn keyed<R>(records: Vec<R>, id: impl Fn(&R) -> u32) -> Vec<((usize, u32), R)> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| ((position, id(&record)), record))
        .collect()
}

#[cfg(test)]
mod tests {
    use clubsite_core::ProjectStatus;

    use super::*;

    #[test]
    fn test_option_pairs_use_display_spelling() {
        let pairs = option_pairs(&[ProjectStatus::Active, ProjectStatus::Planned]);
        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "active".to_string()),
                ("planned".to_string(), "planned".to_string()),
            ]
        );
    }

    #[test]
    fn test_option_pairs_parse_back_into_selectors() {
        use clubsite_filter::Selector;

        for (value, _) in option_pairs(&[2025, 2024]) {
            let selector: Selector<i32> = value.parse().expect("parse");
            assert!(!selector.is_all());
        }
        let all: Selector<i32> = ALL.parse().expect("parse");
        assert!(all.is_all());
    }

    #[test]
    fn test_keyed_keeps_duplicate_ids_apart() {
        let records = vec![(7, "first"), (7, "second"), (3, "third")];
        let rows = keyed(records, |r| r.0);

        let keys: Vec<_> = rows.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec![(0, 7), (1, 7), (2, 3)]);

        let labels: Vec<_> = rows.iter().map(|(_, r)| r.1).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }
}
