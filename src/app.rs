//! Root application component

use dioxus::prelude::*;

use crate::pages::Browse;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        Browse {}
    }
}
