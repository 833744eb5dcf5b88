//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::storage::FavoritesProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Favorites context provider wraps the entire app
        FavoritesProvider {
            Router::<Route> {}
        }
    }
}
