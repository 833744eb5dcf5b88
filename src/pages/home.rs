//! Home page - therapist search and browse
//!
//! Owns the two startup fetches and every piece of filter state. Keyword
//! filtering is deliberately non-live: the field text is only picked up when
//! a filter run is triggered (search button, Enter, any select or checkbox
//! change), with one exception - clearing the field re-runs immediately.

use dioxus::prelude::*;

use crate::api::{default_client, SEARCH_PAGE_SIZE};
use crate::components::{TherapistCard, TherapistCardSkeleton, TherapistDetail};
use crate::filter::{apply_filters, FilterSelection};
use crate::storage::use_favorites;
use crate::types::FilterOptions;

/// Home page - the whole directory UI lives here
#[component]
pub fn Home() -> Element {
    let favorites = use_favorites();

    // Both fetches start concurrently; only the listing gates the grid. A
    // missing vocabulary just leaves the selects without options.
    let therapists = use_resource(move || async move {
        let result = default_client().search_therapists(SEARCH_PAGE_SIZE).await;
        if let Err(err) = &result {
            tracing::error!("failed to load therapists: {err}");
        }
        result
    });
    let filter_options = use_resource(move || async move {
        match default_client().filter_options().await {
            Ok(options) => options,
            Err(err) => {
                tracing::error!("failed to load filter options: {err}");
                FilterOptions::default()
            }
        }
    });

    let mut search_input = use_signal(String::new);
    let mut search_trigger = use_signal(|| 0u32);
    let mut selected_area = use_signal(String::new);
    let mut selected_age = use_signal(String::new);
    let mut selected_cup_size = use_signal(String::new);
    let mut selected_play_content = use_signal(String::new);
    let mut selected_appearance = use_signal(String::new);
    let mut favorites_only = use_signal(|| false);
    let mut selected = use_signal(|| None::<i64>);
    let mut current_page = use_signal(|| 1usize);

    // Derive the filtered list. The search field is only peeked: typing
    // alone never re-filters, but whatever is in the field participates
    // whenever any other control (or the explicit trigger) causes a run.
    let filtered = use_memo(move || {
        let _ = search_trigger();

        let list = match &*therapists.read() {
            Some(Ok(list)) => list.clone(),
            _ => Vec::new(),
        };

        let selection = FilterSelection {
            keyword: search_input.peek().trim().to_string(),
            area: select_value(selected_area()),
            age_group: select_value(selected_age()),
            cup_size: select_value(selected_cup_size()),
            play_content: select_value(selected_play_content()),
            appearance: select_value(selected_appearance()),
            favorites_only: favorites_only(),
        };

        // Favorite edits only re-filter while the favorites-only box is on.
        let favorite_ids = if selection.favorites_only {
            favorites.ids.read().clone()
        } else {
            favorites.ids.peek().clone()
        };

        apply_filters(&list, &selection, &favorite_ids)
    });

    // Each filter run resets the page index. Nothing reads it back; the grid
    // always renders the entire filtered list.
    use_effect(move || {
        let _ = filtered.read();
        current_page.set(1);
    });

    let options = match &*filter_options.read() {
        Some(options) => options.clone(),
        None => FilterOptions::default(),
    };

    rsx! {
        div {
            class: "app",

            header {
                class: "site-header",
                h1 { class: "site-title", "セラピスト検索" }
                button {
                    class: "favorites-shortcut",
                    onclick: move |_| favorites_only.set(!favorites_only()),
                    "お気に入り"
                }
            }

            section {
                class: "search-panel",
                form {
                    class: "search-form",
                    onsubmit: move |_| search_trigger.set(search_trigger() + 1),
                    input {
                        r#type: "text",
                        class: "search-input",
                        value: "{search_input}",
                        placeholder: "セラピスト名・店舗名で検索",
                        oninput: move |e| {
                            let value = e.value();
                            let cleared = value.trim().is_empty();
                            search_input.set(value);
                            // Emptying the field resets the results without
                            // the explicit trigger.
                            if cleared {
                                search_trigger.set(search_trigger() + 1);
                            }
                        },
                    }
                    button { r#type: "submit", class: "search-btn", "検索" }
                }

                div {
                    class: "filter-row",
                    FilterSelect {
                        value: selected_area(),
                        placeholder: "全てのエリア",
                        options: options.areas.clone(),
                        on_change: move |value| selected_area.set(value),
                    }
                    FilterSelect {
                        value: selected_age(),
                        placeholder: "全ての年齢層",
                        options: options.age_groups.clone(),
                        on_change: move |value| selected_age.set(value),
                    }
                    FilterSelect {
                        value: selected_cup_size(),
                        placeholder: "全てのカップ",
                        options: options.cup_sizes.clone(),
                        on_change: move |value| selected_cup_size.set(value),
                    }
                    FilterSelect {
                        value: selected_play_content(),
                        placeholder: "全てのプレイ内容",
                        options: options.play_contents.clone(),
                        on_change: move |value| selected_play_content.set(value),
                    }
                    FilterSelect {
                        value: selected_appearance(),
                        placeholder: "全ての容姿",
                        options: options.appearances.clone(),
                        on_change: move |value| selected_appearance.set(value),
                    }
                    label {
                        class: "favorites-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: favorites_only(),
                            onchange: move |e| favorites_only.set(e.checked()),
                        }
                        "お気に入りのみ表示"
                    }
                }
            }

            main {
                class: "content",
                match &*therapists.read() {
                    None => rsx! {
                        div {
                            class: "therapist-grid",
                            for i in 0..6 {
                                TherapistCardSkeleton { key: "{i}" }
                            }
                        }
                    },
                    Some(Err(_)) => rsx! {
                        div {
                            class: "load-error",
                            "セラピストデータの読み込みに失敗しました。"
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        if filtered().is_empty() {
                            div {
                                class: "no-results",
                                "該当するセラピストが見つかりませんでした"
                            }
                        } else {
                            p {
                                class: "results-count",
                                span { class: "results-count-number", "{filtered().len()}" }
                                "人のセラピストが見つかりました"
                            }
                            div {
                                class: "therapist-grid",
                                for therapist in filtered() {
                                    TherapistCard {
                                        key: "{therapist.id}",
                                        therapist: therapist.clone(),
                                        on_select: move |id| selected.set(Some(id)),
                                    }
                                }
                            }
                        }

                        // The modal looks the id up in the full list, so a
                        // selection survives filter changes while open.
                        if let Some(id) = selected() {
                            if let Some(therapist) = list.iter().find(|t| t.id == id) {
                                TherapistDetail {
                                    therapist: therapist.clone(),
                                    on_close: move |_| selected.set(None),
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FilterSelectProps {
    value: String,
    placeholder: &'static str,
    options: Vec<String>,
    on_change: EventHandler<String>,
}

/// One categorical filter select; the empty value means "show all"
#[component]
fn FilterSelect(props: FilterSelectProps) -> Element {
    rsx! {
        select {
            class: "filter-select",
            value: "{props.value}",
            onchange: move |e| props.on_change.call(e.value()),
            option { value: "", "{props.placeholder}" }
            for option_value in props.options.iter() {
                option { key: "{option_value}", value: "{option_value}", "{option_value}" }
            }
        }
    }
}

fn select_value(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
