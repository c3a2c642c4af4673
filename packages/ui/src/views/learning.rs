//! Gallery of learning materials, laid out as scattered polaroids.

use dioxus::prelude::*;

use crate::polaroid::{rotation, y_offset};
use crate::session::{use_api, use_error_reporter};
use crate::Route;

#[component]
pub fn Learning() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let materials = use_resource(move || {
        let api = api.clone();
        async move {
            api.get_learning_materials()
                .await
                .inspect_err(|e| reporter.report("load learning materials", e))
        }
    });

    let gallery = match &*materials.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) if list.is_empty() => {
            rsx! { p { class: "muted", "No learning materials have been published yet." } }
        }
        Some(Ok(list)) => {
            let cards: Vec<_> = list
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    let style = format!(
                        "transform: rotate({}deg) translateY({}px)",
                        rotation(i),
                        y_offset(i)
                    );
                    (m.id, m.title.clone(), m.thumbnail_url.clone(), style)
                })
                .collect();
            rsx! {
                div {
                    class: "polaroid-wall",
                    for (id, title, thumbnail, style) in cards {
                        Link {
                            key: "{id}",
                            class: "polaroid",
                            to: Route::LearningMaterialDetail { id },
                            div {
                                style,
                                class: "polaroid-frame",
                                if let Some(src) = thumbnail {
                                    img { src, alt: "{title}" }
                                } else {
                                    div { class: "polaroid-blank" }
                                }
                                p { class: "polaroid-caption", "{title}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Learning" }
                span { class: "muted", "Pick a concept to study how it is shot." }
            }
            {gallery}
        }
    }
}
