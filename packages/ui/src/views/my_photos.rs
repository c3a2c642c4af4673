use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ImageLightbox};
use crate::format::short_date;
use crate::pagination::Paginator;
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

pub const PHOTOS_PER_PAGE: u32 = 9;

#[component]
pub fn MyPhotos() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to see your photos.", PhotoGallery {} }
    }
}

#[component]
fn PhotoGallery() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let mut page = use_signal(|| 1usize);
    let mut enlarged = use_signal(|| None::<String>);

    let photos = use_resource(move || {
        let api = api.clone();
        let index = page().saturating_sub(1) as u32;
        async move {
            api.get_uploaded_images(index, PHOTOS_PER_PAGE)
                .await
                .inspect_err(|e| reporter.report("load my photos", e))
        }
    });

    let body = match &*photos.read() {
        None => rsx! { p { class: "muted", "Loading photos..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(result)) => {
            let pager = Paginator::new(result.total_elements as usize, PHOTOS_PER_PAGE as usize)
                .at(page());
            rsx! {
                if result.content.is_empty() {
                    p {
                        class: "muted",
                        "You have not uploaded any photos yet. "
                        Link { to: Route::PhotoUpload {}, "Upload one now" }
                    }
                } else {
                    div {
                        class: "photo-grid grid-3",
                        for evaluation in result.content.iter() {
                            figure {
                                key: "{evaluation.id}",
                                class: "photo-tile",
                                onclick: {
                                    let url = evaluation.evaluation_image.file_url.clone();
                                    move |_| enlarged.set(Some(url.clone()))
                                },
                                img { src: "{evaluation.evaluation_image.file_url}", alt: "Uploaded photo" }
                                figcaption { "{short_date(&evaluation.created_at)} · {evaluation.status_label()}" }
                            }
                        }
                    }
                }
                div {
                    class: "pagination",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !pager.has_prev(),
                        onclick: move |_| {
                            let mut p = pager;
                            p.prev();
                            page.set(p.current());
                        },
                        "Previous"
                    }
                    span { "{pager.current()} / {pager.total_pages()}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !pager.has_next(),
                        onclick: move |_| {
                            let mut p = pager;
                            p.next();
                            page.set(p.current());
                        },
                        "Next"
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
                h1 { "My photos" }
                Link { class: "btn btn-outline", to: Route::PhotoFeedback {}, "See feedback" }
            }
            {body}
            if let Some(src) = enlarged() {
                ImageLightbox { src, on_close: move |_| enlarged.set(None) }
            }
        }
    }
}
