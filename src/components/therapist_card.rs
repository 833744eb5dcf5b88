//! Therapist card component

use dioxus::prelude::*;

use crate::types::Therapist;

/// Props for TherapistCard
#[derive(Props, Clone, PartialEq)]
pub struct TherapistCardProps {
    pub therapist: Therapist,
    /// Fired with the therapist id when the card itself is clicked.
    pub on_select: EventHandler<i64>,
}

/// Card showing one therapist in the results grid
#[component]
pub fn TherapistCard(props: TherapistCardProps) -> Element {
    let therapist = &props.therapist;

    rsx! {
        div {
            class: "therapist-card",
            onclick: move |_| props.on_select.call(props.therapist.id),

            div {
                class: "therapist-header",
                div {
                    h3 { class: "therapist-name", "{therapist.display_name()}" }
                    div { class: "therapist-shop", "{therapist.shop_name}" }
                    div { class: "therapist-area", "{therapist.shop_area}" }
                }
                div { class: "age-badge", "{therapist.age_group}" }
            }

            div {
                class: "therapist-tags",
                span { class: "tag tag-cup-size", "{therapist.cup_size}" }
                span { class: "tag tag-appearance", "{therapist.appearance}" }
            }

            div {
                class: "therapist-actions",
                div { class: "play-content-badge", "{therapist.tolerance}" }
                if let Some(url) = therapist.shop_link() {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "shop-url-btn",
                        // The link must not open the detail modal as well.
                        onclick: move |e| e.stop_propagation(),
                        "店舗ページ"
                    }
                }
            }
        }
    }
}

/// Skeleton loader shown while the listing is fetched
#[component]
pub fn TherapistCardSkeleton() -> Element {
    rsx! {
        div {
            class: "therapist-card skeleton-card",
            div {
                class: "therapist-header",
                div {
                    div { class: "skeleton-line skeleton-name" }
                    div { class: "skeleton-line skeleton-shop" }
                    div { class: "skeleton-line skeleton-area" }
                }
                div { class: "skeleton-badge" }
            }
            div {
                class: "therapist-tags",
                div { class: "skeleton-tag" }
                div { class: "skeleton-tag" }
            }
            div {
                class: "therapist-actions",
                div { class: "skeleton-line skeleton-action" }
            }
        }
    }
}
