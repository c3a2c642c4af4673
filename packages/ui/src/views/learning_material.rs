//! One learning material: image carousel plus four info boxes.

use api::LearningMaterial;
use dioxus::prelude::*;

use crate::carousel::cycle;
use crate::components::{Button, ButtonVariant, ImageLightbox};
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

#[component]
pub fn LearningMaterialDetail(id: i64) -> Element {
    rsx! {
        RequireLogin { message: "Please log in to open learning materials.", MaterialView { id } }
    }
}

#[component]
fn MaterialView(id: i64) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let material = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move {
            api.get_learning_material(id)
                .await
                .inspect_err(|e| reporter.report("load learning material", e))
        }
    }));

    let body = match &*material.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(m)) => rsx! { MaterialBody { material: m.clone() } },
    };

    rsx! {
        div {
            class: "page",
            Link { class: "back-link", to: Route::Learning {}, "← Learning" }
            {body}
        }
    }
}

#[component]
fn MaterialBody(material: LearningMaterial) -> Element {
    let mut image = use_signal(|| 0usize);
    let mut section = use_signal(|| 0usize);
    let mut enlarged = use_signal(|| false);

    let images: Vec<String> = material.images.iter().map(|i| i.file_url.clone()).collect();
    let image_count = images.len();
    let sections = material.info_sections();
    let section_count = sections.len();

    let current_image = images.get(image().min(image_count.saturating_sub(1))).cloned();
    let image_number = image() + 1;
    let (heading, text) = sections
        .get(section())
        .cloned()
        .unwrap_or_default();
    let section_number = section() + 1;

    rsx! {
        h1 { "{material.title}" }
        div {
            class: "material-layout",
            div {
                class: "carousel",
                if let Some(src) = current_image.clone() {
                    img {
                        class: "carousel-image",
                        src,
                        alt: "{material.title}",
                        onclick: move |_| enlarged.set(true),
                    }
                } else {
                    div { class: "polaroid-blank" }
                }
                if image_count > 1 {
                    div {
                        class: "carousel-controls",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| image.set(cycle(image(), image_count, -1)),
                            "‹"
                        }
                        span { "{image_number} / {image_count}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| image.set(cycle(image(), image_count, 1)),
                            "›"
                        }
                    }
                }
            }
            div {
                class: "info-box card",
                h2 { "{heading}" }
                p { class: "info-text", "{text}" }
                div {
                    class: "carousel-controls",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| section.set(cycle(section(), section_count, -1)),
                        "Previous"
                    }
                    span { "{section_number} / {section_count}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| section.set(cycle(section(), section_count, 1)),
                        "Next"
                    }
                }
            }
        }
        if enlarged() {
            if let Some(src) = current_image {
                ImageLightbox { src, on_close: move |_| enlarged.set(false) }
            }
        }
    }
}
