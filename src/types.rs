//! Type definitions for the directory API responses
//!
//! Field names mirror the JSON keys of the backend verbatim, so no serde
//! renaming is needed anywhere.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a profile carries no review text.
pub const NO_REVIEW_PLACEHOLDER: &str = "レビューなし";

/// A single therapist profile as returned by the search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Therapist {
    pub id: i64,
    /// Raw display name. May end in an age-range annotation such as
    /// `" (20代)"` that the display helpers strip.
    pub name: String,
    /// Raw age value ("20代" style text); the UI only ever shows `age_group`.
    #[serde(default)]
    pub age: Option<String>,
    pub age_group: String,
    pub shop_name: String,
    pub shop_area: String,
    pub cup_size: String,
    pub tolerance: String,
    pub appearance: String,
    #[serde(default)]
    pub review_excerpt: Option<String>,
    #[serde(default)]
    pub shop_url: Option<String>,
}

impl Therapist {
    /// Name shown on cards and in the modal header.
    pub fn display_name(&self) -> &str {
        strip_age_range_suffix(&self.name)
    }

    /// Name shown in the modal body, with the trailing `" (N)さん"`
    /// annotation removed as well.
    pub fn detail_name(&self) -> &str {
        strip_honorific_suffix(strip_age_range_suffix(&self.name))
    }

    /// Review text, substituting the fixed placeholder when the feed has
    /// none. An empty string counts as absent.
    pub fn review_text(&self) -> &str {
        match self.review_excerpt.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_REVIEW_PLACEHOLDER,
        }
    }

    /// Shop page URL, if the feed supplied a non-empty one.
    pub fn shop_link(&self) -> Option<&str> {
        self.shop_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Filter vocabulary for the select controls. Every field is optional on the
/// wire; a missing field simply yields zero options for that control.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub cup_sizes: Vec<String>,
    #[serde(default)]
    pub play_contents: Vec<String>,
    #[serde(default)]
    pub appearances: Vec<String>,
}

/// Envelope of the search endpoint. A payload without a `therapists` array
/// is a decode error, which the caller treats as a fatal load failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub therapists: Vec<Therapist>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination block the backend sends alongside the listing. The frontend
/// requests one oversized page and renders everything, so this is carried
/// but never drives any slicing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Age-range annotations the feed appends to names.
const AGE_RANGE_SUFFIXES: [&str; 3] = [" (10代)", " (20代)", " (30代)"];

/// Removes a trailing age-range annotation of the exact form `" (10代)"`,
/// `" (20代)"` or `" (30代)"`. Any other shape, including other decades and
/// mid-string annotations, is left intact.
pub fn strip_age_range_suffix(name: &str) -> &str {
    for suffix in AGE_RANGE_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            return stripped;
        }
    }
    name
}

/// Removes a trailing `" (N)さん"` annotation (N is one or more digits).
/// Independent of [`strip_age_range_suffix`]; both rules can apply to the
/// same name, age range first.
pub fn strip_honorific_suffix(name: &str) -> &str {
    let Some(rest) = name.strip_suffix("さん") else {
        return name;
    };
    let Some(rest) = rest.strip_suffix(')') else {
        return name;
    };
    let with_digits = rest.len();
    let rest = rest.trim_end_matches(|c: char| c.is_ascii_digit());
    if rest.len() == with_digits {
        return name;
    }
    match rest.strip_suffix(" (") {
        Some(stripped) => stripped,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn therapist(name: &str) -> Therapist {
        Therapist {
            id: 1,
            name: name.to_string(),
            age: Some("20代".to_string()),
            age_group: "20代".to_string(),
            shop_name: "アロマ東京".to_string(),
            shop_area: "東京".to_string(),
            cup_size: "D".to_string(),
            tolerance: "ノーマル".to_string(),
            appearance: "清楚".to_string(),
            review_excerpt: None,
            shop_url: None,
        }
    }

    #[test]
    fn strips_age_range_suffix_then_honorific() {
        let stripped = strip_age_range_suffix("一ノ瀬 葵 (21)さん (20代)");
        assert_eq!(stripped, "一ノ瀬 葵 (21)さん");
        assert_eq!(strip_honorific_suffix(stripped), "一ノ瀬 葵");
    }

    #[test]
    fn age_range_suffix_only_matches_the_known_decades() {
        assert_eq!(strip_age_range_suffix("葵 (40代)"), "葵 (40代)");
        assert_eq!(strip_age_range_suffix("葵 (10代)"), "葵");
        assert_eq!(strip_age_range_suffix("葵 (30代)"), "葵");
        assert_eq!(strip_age_range_suffix("葵"), "葵");
    }

    #[test]
    fn age_range_suffix_ignores_mid_string_annotations() {
        assert_eq!(strip_age_range_suffix("葵 (20代) 指名多数"), "葵 (20代) 指名多数");
    }

    #[test]
    fn honorific_suffix_requires_the_full_pattern() {
        assert_eq!(strip_honorific_suffix("葵 (21)さん"), "葵");
        assert_eq!(strip_honorific_suffix("葵 (123)さん"), "葵");
        assert_eq!(strip_honorific_suffix("葵さん"), "葵さん");
        assert_eq!(strip_honorific_suffix("葵 ()さん"), "葵 ()さん");
        assert_eq!(strip_honorific_suffix("葵 (21)"), "葵 (21)");
    }

    #[test]
    fn display_and_detail_names_apply_the_rules_in_order() {
        let t = therapist("一ノ瀬 葵 (21)さん (20代)");
        assert_eq!(t.display_name(), "一ノ瀬 葵 (21)さん");
        assert_eq!(t.detail_name(), "一ノ瀬 葵");
    }

    #[test]
    fn review_text_falls_back_to_the_placeholder() {
        let mut t = therapist("葵");
        assert_eq!(t.review_text(), NO_REVIEW_PLACEHOLDER);

        t.review_excerpt = Some(String::new());
        assert_eq!(t.review_text(), NO_REVIEW_PLACEHOLDER);

        t.review_excerpt = Some("とても丁寧でした".to_string());
        assert_eq!(t.review_text(), "とても丁寧でした");
    }

    #[test]
    fn shop_link_hides_missing_and_empty_urls() {
        let mut t = therapist("葵");
        assert_eq!(t.shop_link(), None);

        t.shop_url = Some(String::new());
        assert_eq!(t.shop_link(), None);

        t.shop_url = Some("https://example.com/shop".to_string());
        assert_eq!(t.shop_link(), Some("https://example.com/shop"));
    }

    #[test]
    fn therapist_decodes_with_null_optionals() {
        let raw = serde_json::json!({
            "id": 7,
            "name": "一ノ瀬 葵 (21)さん (20代)",
            "age": null,
            "age_group": "20代",
            "shop_name": "アロマ東京",
            "shop_area": "東京",
            "cup_size": "D",
            "tolerance": "ノーマル",
            "appearance": "清楚",
            "review_excerpt": "",
            "shop_url": null
        });
        let t: Therapist = serde_json::from_value(raw).expect("should decode");
        assert_eq!(t.id, 7);
        assert_eq!(t.age, None);
        assert_eq!(t.shop_link(), None);
        assert_eq!(t.review_text(), NO_REVIEW_PLACEHOLDER);
    }

    #[test]
    fn filter_options_defaults_missing_fields() {
        let raw = serde_json::json!({ "areas": ["東京", "大阪"] });
        let options: FilterOptions = serde_json::from_value(raw).expect("should decode");
        assert_eq!(options.areas, vec!["東京", "大阪"]);
        assert!(options.age_groups.is_empty());
        assert!(options.appearances.is_empty());
    }
}
