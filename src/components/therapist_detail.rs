//! Therapist detail modal

use dioxus::prelude::*;

use crate::storage::use_favorites;
use crate::types::Therapist;

/// Props for TherapistDetail
#[derive(Props, Clone, PartialEq)]
pub struct TherapistDetailProps {
    pub therapist: Therapist,
    pub on_close: EventHandler<()>,
}

/// Modal with the full profile of one therapist
#[component]
pub fn TherapistDetail(props: TherapistDetailProps) -> Element {
    let favorites = use_favorites();
    let therapist = &props.therapist;
    let is_favorite = favorites.is_favorite(therapist.id);

    rsx! {
        div {
            class: "modal-scrim",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "modal-panel",
                // Clicks inside the panel must not reach the scrim.
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{therapist.display_name()}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| props.on_close.call(()),
                        "\u{00d7}"
                    }
                }

                div {
                    class: "modal-body",
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "名前" }
                        span { class: "detail-value", "{therapist.detail_name()}" }
                    }
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "年齢層" }
                        span { class: "detail-value", "{therapist.age_group}" }
                    }
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "店舗名" }
                        span { class: "detail-value", "{therapist.shop_name}" }
                    }
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "エリア" }
                        span { class: "detail-value", "{therapist.shop_area}" }
                    }
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "容姿・カップ" }
                        div {
                            class: "detail-tags",
                            span { class: "tag tag-cup-size", "{therapist.cup_size}" }
                            span { class: "tag tag-appearance", "{therapist.appearance}" }
                        }
                    }
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "プレイ内容" }
                        div {
                            class: "detail-tags",
                            span { class: "tag tag-play-content", "{therapist.tolerance}" }
                        }
                    }
                    div {
                        class: "detail-section",
                        span { class: "detail-label", "レビュー" }
                        p { class: "review-text", "{therapist.review_text()}" }
                    }
                }

                div {
                    class: "modal-footer",
                    button {
                        class: if is_favorite { "favorite-toggle is-favorite" } else { "favorite-toggle" },
                        onclick: move |_| favorites.toggle(props.therapist.id),
                        if is_favorite { "お気に入りから削除" } else { "お気に入りに追加" }
                    }
                    if let Some(url) = therapist.shop_link() {
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "shop-link-btn",
                            "店舗ページ"
                        }
                    }
                }
            }
        }
    }
}
