use dioxus::prelude::*;

use crate::{Navbar, Route};

/// Frame shared by every page: navbar on top, footer below.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "main", Outlet::<Route> {} }
        footer {
            class: "footer",
            p { "© Char 칵. Better portraits through feedback." }
        }
    }
}
