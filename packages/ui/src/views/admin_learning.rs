//! Admin page for learning materials: publish, delete and restore.
//!
//! The backend has no listing of deleted materials, so the ones removed during this
//! visit are kept in a local list from which they can be restored.

use api::validation::{LearningMaterialForm, ValidationErrors};
use api::{LearningMaterialSummary, Upload};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, Textarea};
use crate::files::{only_images, read_uploads, remove_at};
use crate::session::{use_api, use_error_reporter, RequireAdmin};
use crate::Route;

#[component]
pub fn AdminLearningMaterial() -> Element {
    rsx! {
        RequireAdmin { LearningAdmin {} }
    }
}

#[component]
fn LearningAdmin() -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut published = use_signal(Vec::<LearningMaterialSummary>::new);
    let mut deleted = use_signal(Vec::<LearningMaterialSummary>::new);

    let list_api = api.clone();
    let mut listing = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.get_learning_materials().await {
                Ok(list) => published.set(list),
                Err(e) => reporter.report("load learning materials", &e),
            }
        }
    });

    let delete_api = api.clone();
    let delete = move |id: i64| {
        let api = delete_api.clone();
        async move {
            match api.delete_learning_material(id).await {
                Ok(()) => {
                    let removed = {
                        let mut list = published.write();
                        list.iter()
                            .position(|m| m.id == id)
                            .map(|i| list.remove(i))
                    };
                    if let Some(material) = removed {
                        deleted.write().push(material);
                    }
                    toast.success("Material deleted. You can restore it below.");
                }
                Err(e) => reporter.report("delete learning material", &e),
            }
        }
    };

    let restore = move |id: i64| {
        let api = api.clone();
        async move {
            match api.restore_learning_material(id).await {
                Ok(()) => {
                    deleted.write().retain(|m| m.id != id);
                    listing.restart();
                    toast.success("Material restored.");
                }
                Err(e) => reporter.report("restore learning material", &e),
            }
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Learning materials" }
                Link { class: "btn btn-outline", to: Route::Learning {}, "View gallery" }
            }

            MaterialForm { on_created: move |_| listing.restart() }

            section {
                class: "card",
                h2 { "Published" }
                if published.read().is_empty() {
                    p { class: "muted", "Nothing published yet." }
                }
                ul {
                    class: "admin-list",
                    for material in published() {
                        li {
                            key: "{material.id}",
                            if let Some(src) = material.thumbnail_url.clone() {
                                img { class: "thumb", src, alt: "" }
                            }
                            Link { to: Route::LearningMaterialDetail { id: material.id }, "{material.title}" }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let delete = delete.clone();
                                    move |_| {
                                        spawn(delete(material.id));
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            if !deleted.read().is_empty() {
                section {
                    class: "card",
                    h2 { "Deleted" }
                    ul {
                        class: "admin-list",
                        for material in deleted() {
                            li {
                                key: "{material.id}",
                                span { class: "muted", "{material.title}" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let restore = restore.clone();
                                        move |_| {
                                            spawn(restore(material.id));
                                        }
                                    },
                                    "Restore"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MaterialForm(on_created: EventHandler<i64>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut form = use_signal(LearningMaterialForm::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut images = use_signal(Vec::<Upload>::new);
    let mut saving = use_signal(|| false);

    let on_pick = move |evt: FormEvent| async move {
        let (picked, dropped) = only_images(read_uploads(&evt).await);
        if dropped > 0 {
            toast.info(format!("{dropped} non-image file(s) were skipped."));
        }
        images.write().extend(picked);
    };

    let on_save = move |_| {
        let api = api.clone();
        async move {
            let req = match form.read().validate() {
                Ok(req) => req,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            if images.read().is_empty() {
                toast.info("Please add at least one photo.");
                return;
            }
            errors.set(ValidationErrors::default());
            saving.set(true);
            match api.create_learning_material(&req, images()).await {
                Ok(id) => {
                    tracing::info!(id, "learning material published");
                    form.set(LearningMaterialForm::default());
                    images.set(Vec::new());
                    toast.success("Learning material published.");
                    on_created.call(id);
                }
                Err(e) => reporter.report("create learning material", &e),
            }
            saving.set(false);
        }
    };

    let current = form();
    let title_error = errors.read().get("title").map(str::to_string);
    let previews: Vec<(usize, String)> = images
        .read()
        .iter()
        .enumerate()
        .map(|(i, u)| (i, u.data_url()))
        .collect();

    rsx! {
        section {
            class: "card",
            h2 { "New material" }
            div {
                class: "field",
                Label { html_for: "lm-title", "Title" }
                Input {
                    id: "lm-title",
                    value: current.title.clone(),
                    invalid: title_error.is_some(),
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                if let Some(msg) = title_error {
                    p { class: "field-error", "{msg}" }
                }
            }
            div {
                class: "field",
                span { class: "label", "Photos" }
                label {
                    class: "btn btn-outline",
                    "Add photos"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        class: "hidden",
                        onchange: on_pick,
                    }
                }
                div {
                    class: "photo-grid",
                    for (index, src) in previews {
                        figure {
                            key: "{index}",
                            class: "photo-tile",
                            img { src, alt: "Material photo {index}" }
                            Button {
                                variant: ButtonVariant::Danger,
                                class: "tile-remove",
                                onclick: move |_| {
                                    remove_at(&mut images.write(), index);
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }
            div {
                class: "field",
                Label { html_for: "lm-reference", "When to use this" }
                Textarea {
                    id: "lm-reference",
                    value: current.reference_info.clone(),
                    rows: 3,
                    oninput: move |evt: FormEvent| form.write().reference_info = evt.value(),
                }
            }
            div {
                class: "field",
                Label { html_for: "lm-keywords", "Key words" }
                Textarea {
                    id: "lm-keywords",
                    value: current.key_word.clone(),
                    rows: 2,
                    oninput: move |evt: FormEvent| form.write().key_word = evt.value(),
                }
            }
            div {
                class: "field",
                Label { html_for: "lm-manner", "How to take it well" }
                Textarea {
                    id: "lm-manner",
                    value: current.pretty_manner.clone(),
                    rows: 3,
                    oninput: move |evt: FormEvent| form.write().pretty_manner = evt.value(),
                }
            }
            div {
                class: "field",
                Label { html_for: "lm-tips", "Extra tips" }
                Textarea {
                    id: "lm-tips",
                    value: current.tips.clone(),
                    rows: 3,
                    oninput: move |evt: FormEvent| form.write().tips = evt.value(),
                }
            }
            div {
                class: "actions",
                Button {
                    disabled: saving(),
                    onclick: on_save,
                    if saving() { "Publishing..." } else { "Publish" }
                }
            }
        }
    }
}
