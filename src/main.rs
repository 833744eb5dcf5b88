//! SeraNavi - therapist directory web frontend
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

use seranavi_web::app::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(App);
}
