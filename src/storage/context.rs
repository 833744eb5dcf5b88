//! Favorites context provider
//!
//! Loads the persisted set once at mount and writes every change straight
//! back through to storage, so the signal and the stored entry cannot
//! diverge within a session.

use dioxus::prelude::*;

use super::favorites;

/// Favorites state shared with the entire app.
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    /// Ids of the favorited therapists, in insertion order.
    pub ids: Signal<Vec<i64>>,
}

impl FavoritesContext {
    /// Whether the given therapist is currently favorited.
    pub fn is_favorite(&self, id: i64) -> bool {
        self.ids.read().contains(&id)
    }

    /// Toggles membership and persists the result.
    pub fn toggle(&self, id: i64) {
        let next = favorites::toggle_id(self.ids.peek().clone(), id);
        favorites::save(&next);
        let mut ids = self.ids;
        ids.set(next);
    }
}

/// Favorites provider component that wraps the app
#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    let ids = use_signal(favorites::load);

    use_context_provider(|| FavoritesContext { ids });

    children
}

/// Hook to access the favorites context
pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>()
}
