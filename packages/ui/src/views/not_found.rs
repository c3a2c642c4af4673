use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "no route matched");
    rsx! {
        div {
            class: "page center",
            h1 { "Page not found" }
            p { class: "muted", "There is nothing at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to home" }
        }
    }
}
