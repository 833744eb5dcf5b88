//! Pure filtering over the loaded therapist list.
//!
//! The whole pipeline is synchronous and preserves list order, so the grid
//! always shows matches in the order the backend returned them.

use crate::types::Therapist;

/// Cards per page in the paginated layout this page once had. The grid
/// renders the entire filtered list, so nothing ever slices by this.
pub const CARD_PAGE_SIZE: usize = 20;

/// Snapshot of the search and filter controls at the moment a filter run is
/// triggered.
///
/// The keyword is stored trimmed; an empty keyword means the keyword
/// predicate is inactive. `None` on a categorical field means "show all".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    pub keyword: String,
    pub area: Option<String>,
    pub age_group: Option<String>,
    pub cup_size: Option<String>,
    pub play_content: Option<String>,
    pub appearance: Option<String>,
    pub favorites_only: bool,
}

/// Applies every active predicate as a logical AND.
///
/// The keyword matches case-sensitively as a substring of the name or the
/// shop name; each categorical filter is an exact match when set; the
/// favorites predicate keeps only members of `favorites`.
pub fn apply_filters(
    therapists: &[Therapist],
    selection: &FilterSelection,
    favorites: &[i64],
) -> Vec<Therapist> {
    therapists
        .iter()
        .filter(|t| {
            selection.keyword.is_empty()
                || t.name.contains(&selection.keyword)
                || t.shop_name.contains(&selection.keyword)
        })
        .filter(|t| matches_category(selection.area.as_deref(), &t.shop_area))
        .filter(|t| matches_category(selection.age_group.as_deref(), &t.age_group))
        .filter(|t| matches_category(selection.cup_size.as_deref(), &t.cup_size))
        .filter(|t| matches_category(selection.play_content.as_deref(), &t.tolerance))
        .filter(|t| matches_category(selection.appearance.as_deref(), &t.appearance))
        .filter(|t| !selection.favorites_only || favorites.contains(&t.id))
        .cloned()
        .collect()
}

fn matches_category(selected: Option<&str>, value: &str) -> bool {
    match selected {
        Some(selected) => selected == value,
        None => true,
    }
}
