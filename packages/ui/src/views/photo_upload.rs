//! Daily photo submission for evaluation.

use api::{ImageEvaluation, Upload};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, ImageLightbox};
use crate::files::{only_images, read_uploads, remove_at, within_limit};
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

/// Photos a user may submit per day.
pub const DAILY_UPLOAD_LIMIT: usize = 5;

#[component]
pub fn PhotoUpload() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to upload photos.", PhotoUploadPanel {} }
    }
}

#[component]
fn PhotoUploadPanel() -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut uploaded = use_signal(Vec::<ImageEvaluation>::new);
    let mut selected = use_signal(Vec::<Upload>::new);
    let mut uploading = use_signal(|| false);
    let mut enlarged = use_signal(|| None::<String>);

    let today_api = api.clone();
    let _ = use_resource(move || {
        let api = today_api.clone();
        async move {
            match api.get_today_image_evaluations().await {
                Ok(list) => uploaded.set(list),
                Err(e) => reporter.report("load today's uploads", &e),
            }
        }
    });

    let on_pick = move |evt: FormEvent| async move {
        let (images, dropped) = only_images(read_uploads(&evt).await);
        if dropped > 0 {
            toast.info(format!("{dropped} non-image file(s) were skipped."));
        }
        let used = uploaded.read().len() + selected.read().len();
        let (kept, cut) = within_limit(used, DAILY_UPLOAD_LIMIT, images);
        if cut > 0 {
            toast.info(format!(
                "You can upload {DAILY_UPLOAD_LIMIT} photos per day; {cut} photo(s) were left out."
            ));
        }
        selected.write().extend(kept);
    };

    let on_upload = move |_| {
        let api = api.clone();
        async move {
            let files = selected();
            if files.is_empty() {
                toast.info("Please choose at least one photo.");
                return;
            }
            uploading.set(true);
            match api.create_image_evaluations(files).await {
                Ok(created) => {
                    let count = created.len();
                    uploaded.write().extend(created);
                    selected.set(Vec::new());
                    toast.success(format!("{count} photo(s) sent for evaluation."));
                }
                Err(e) => reporter.report("upload photos", &e),
            }
            uploading.set(false);
        }
    };

    let remaining = DAILY_UPLOAD_LIMIT.saturating_sub(uploaded.read().len() + selected.read().len());
    let today_count = uploaded.read().len();
    let previews: Vec<(usize, String, String)> = selected
        .read()
        .iter()
        .enumerate()
        .map(|(i, u)| (i, u.file_name.clone(), u.data_url()))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Photo upload" }
                Link { class: "btn btn-outline", to: Route::MyPhotos {}, "My photos" }
            }
            p { class: "muted", "Uploaded today: {today_count} / {DAILY_UPLOAD_LIMIT}. You can add {remaining} more." }

            section {
                class: "card",
                h2 { "Today's uploads" }
                if uploaded.read().is_empty() {
                    p { class: "muted", "Nothing uploaded today yet." }
                } else {
                    div {
                        class: "photo-grid",
                        for evaluation in uploaded() {
                            figure {
                                key: "{evaluation.id}",
                                class: "photo-tile",
                                onclick: {
                                    let url = evaluation.evaluation_image.file_url.clone();
                                    move |_| enlarged.set(Some(url.clone()))
                                },
                                img { src: "{evaluation.evaluation_image.file_url}", alt: "{evaluation.evaluation_image.file_name}" }
                                figcaption { class: "badge", "{evaluation.status_label()}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { "New photos" }
                div {
                    class: "actions",
                    label {
                        class: if remaining == 0 { "btn btn-outline disabled" } else { "btn btn-outline" },
                        "Choose photos"
                        input {
                            r#type: "file",
                            accept: "image/*",
                            multiple: true,
                            class: "hidden",
                            disabled: remaining == 0,
                            onchange: on_pick,
                        }
                    }
                    Button {
                        disabled: uploading() || previews.is_empty(),
                        onclick: on_upload,
                        if uploading() { "Uploading..." } else { "Upload" }
                    }
                }
                div {
                    class: "photo-grid",
                    for (index, name, data_url) in previews {
                        figure {
                            key: "{index}-{name}",
                            class: "photo-tile",
                            img {
                                src: "{data_url}",
                                alt: "{name}",
                                onclick: {
                                    let url = data_url.clone();
                                    move |_| enlarged.set(Some(url.clone()))
                                },
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                class: "tile-remove",
                                onclick: move |_| {
                                    remove_at(&mut selected.write(), index);
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }

            if let Some(src) = enlarged() {
                ImageLightbox { src, on_close: move |_| enlarged.set(None) }
            }
        }
    }
}
