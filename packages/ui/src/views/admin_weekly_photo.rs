//! Admin page for opening the weekly photo contest.

use api::validation::{PhotoRankForm, ValidationErrors, RANK_PHOTOS_MAX};
use api::{PhotoRank, Upload};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label};
use crate::files::{only_images, read_uploads, remove_at, within_limit};
use crate::format::{today, week_range};
use crate::session::{use_api, use_error_reporter, RequireAdmin};

#[component]
pub fn AdminWeeklyPhoto() -> Element {
    rsx! {
        RequireAdmin { WeeklyPhotoAdmin {} }
    }
}

fn this_week() -> (String, String) {
    let (start, end) = week_range(today());
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

#[component]
fn WeeklyPhotoAdmin() -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut photos = use_signal(Vec::<Upload>::new);
    let mut dates = use_signal(this_week);
    let mut errors = use_signal(ValidationErrors::default);
    let mut saving = use_signal(|| false);

    let ranks_api = api.clone();
    let mut ranks = use_resource(move || {
        let api = ranks_api.clone();
        async move {
            api.get_photo_ranks()
                .await
                .inspect_err(|e| reporter.report("load current contest", e))
        }
    });

    let on_pick = move |evt: FormEvent| async move {
        let (images, dropped) = only_images(read_uploads(&evt).await);
        if dropped > 0 {
            toast.info(format!("{dropped} non-image file(s) were skipped."));
        }
        let (kept, cut) = within_limit(photos.read().len(), RANK_PHOTOS_MAX, images);
        if cut > 0 {
            toast.info(format!(
                "A contest holds at most {RANK_PHOTOS_MAX} photos; {cut} photo(s) were left out."
            ));
        }
        photos.write().extend(kept);
    };

    let on_save = move |_| {
        let api = api.clone();
        async move {
            let (start_date, end_date) = dates();
            let form = PhotoRankForm {
                start_date,
                end_date,
                photo_count: photos.read().len(),
            };
            let req = match form.validate() {
                Ok(req) => req,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(ValidationErrors::default());
            saving.set(true);
            match api.create_photo_rank(&req, photos()).await {
                Ok(()) => {
                    tracing::info!(start = %req.start_date, end = %req.end_date, "weekly contest created");
                    photos.set(Vec::new());
                    toast.success("The weekly contest is set up.");
                    ranks.restart();
                }
                Err(e) => reporter.report("create weekly contest", &e),
            }
            saving.set(false);
        }
    };

    let current = match &*ranks.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) if list.is_empty() => {
            rsx! { p { class: "muted", "No contest is running right now." } }
        }
        Some(Ok(list)) => rsx! { CurrentRanks { ranks: list.clone() } },
    };

    let (start_date, end_date) = dates();
    let err = |field: &str| errors.read().get(field).map(str::to_string);
    let count = photos.read().len();
    let previews: Vec<(usize, String, String)> = photos
        .read()
        .iter()
        .enumerate()
        .map(|(i, u)| (i, u.file_name.clone(), u.data_url()))
        .collect();

    rsx! {
        div {
            class: "page",
            h1 { "Weekly photo" }

            section {
                class: "card",
                h2 { "Current contest" }
                {current}
            }

            section {
                class: "card",
                h2 { "New contest" }
                div {
                    class: "field-row",
                    div {
                        class: "field",
                        Label { html_for: "start-date", "Start" }
                        Input {
                            id: "start-date",
                            input_type: "date",
                            value: start_date,
                            invalid: err("start_date").is_some(),
                            oninput: move |evt: FormEvent| dates.write().0 = evt.value(),
                        }
                        if let Some(msg) = err("start_date") {
                            p { class: "field-error", "{msg}" }
                        }
                    }
                    div {
                        class: "field",
                        Label { html_for: "end-date", "End" }
                        Input {
                            id: "end-date",
                            input_type: "date",
                            value: end_date,
                            invalid: err("end_date").is_some(),
                            oninput: move |evt: FormEvent| dates.write().1 = evt.value(),
                        }
                        if let Some(msg) = err("end_date") {
                            p { class: "field-error", "{msg}" }
                        }
                    }
                }

                div {
                    class: "field",
                    span { class: "label", "Photos ({count} / {RANK_PHOTOS_MAX})" }
                    label {
                        class: if count >= RANK_PHOTOS_MAX { "btn btn-outline disabled" } else { "btn btn-outline" },
                        "Add photos"
                        input {
                            r#type: "file",
                            accept: "image/*",
                            multiple: true,
                            class: "hidden",
                            disabled: count >= RANK_PHOTOS_MAX,
                            onchange: on_pick,
                        }
                    }
                    if let Some(msg) = err("photos") {
                        p { class: "field-error", "{msg}" }
                    }
                    div {
                        class: "photo-grid grid-4",
                        for (index, name, src) in previews {
                            figure {
                                key: "{index}-{name}",
                                class: "photo-tile",
                                img { src, alt: "{name}" }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    class: "tile-remove",
                                    onclick: move |_| {
                                        remove_at(&mut photos.write(), index);
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "actions",
                    Button {
                        disabled: saving(),
                        onclick: on_save,
                        if saving() { "Saving..." } else { "Start contest" }
                    }
                }
            }
        }
    }
}

#[component]
fn CurrentRanks(ranks: Vec<PhotoRank>) -> Element {
    let mut sorted = ranks;
    sorted.sort_by(|a, b| b.selected_count.cmp(&a.selected_count));
    let period = sorted
        .first()
        .map(|r| format!("{} ~ {}", r.start_date, r.end_date))
        .unwrap_or_default();

    rsx! {
        p { class: "muted", "{period}" }
        div {
            class: "photo-grid grid-4",
            for rank in sorted {
                figure {
                    key: "{rank.id}",
                    class: "photo-tile",
                    img { src: "{rank.file_url}", alt: "Contest photo" }
                    figcaption { "Picked {rank.selection_ratio()}" }
                }
            }
        }
    }
}
