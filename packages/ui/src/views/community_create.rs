//! New community post: title, content, attachments and hashtags.

use api::validation::{PostForm, ValidationErrors};
use api::{Hashtag, Upload};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, Textarea};
use crate::files::{read_uploads, remove_at};
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

const MAX_SUGGESTIONS: usize = 5;

#[component]
pub fn CommunityCreate() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to write a post.", PostEditor {} }
    }
}

/// Add `name` to `tags` unless it is already there.
pub fn push_tag(tags: &mut Vec<String>, name: String) -> bool {
    if tags.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
        false
    } else {
        tags.push(name);
        true
    }
}

/// The stored spelling of `name` among `found`, compared without case.
pub fn existing_tag(found: &[Hashtag], name: &str) -> Option<String> {
    found
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.name.clone())
}

#[component]
fn PostEditor() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut form = use_signal(PostForm::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut attachments = use_signal(Vec::<Upload>::new);
    let mut tag_input = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let search_api = api.clone();
    let suggestions = use_resource(move || {
        let api = search_api.clone();
        let keyword = Hashtag::normalize(&tag_input()).unwrap_or_default();
        async move {
            if keyword.is_empty() {
                return Vec::new();
            }
            match api.search_hashtags(&keyword).await {
                Ok(mut found) => {
                    found.truncate(MAX_SUGGESTIONS);
                    found
                }
                Err(e) => {
                    tracing::warn!("hashtag search failed: {e}");
                    Vec::new()
                }
            }
        }
    });

    let tag_api = api.clone();
    let add_tag = move |raw: String| {
        let api = tag_api.clone();
        async move {
            let Some(name) = Hashtag::normalize(&raw) else {
                return;
            };
            let found = match api.search_hashtags(&name).await {
                Ok(found) => found,
                Err(e) => {
                    reporter.report("search hashtags", &e);
                    return;
                }
            };
            let name = match existing_tag(&found, &name) {
                Some(stored) => stored,
                None => match api.create_hashtag(&name).await {
                    Ok(created) => {
                        tracing::debug!(hashtag = %created.name, "created hashtag");
                        created.name
                    }
                    Err(e) => {
                        reporter.report("create hashtag", &e);
                        return;
                    }
                },
            };
            if !push_tag(&mut form.write().hashtags, name) {
                toast.info("That hashtag is already added.");
            }
            tag_input.set(String::new());
        }
    };

    let on_pick = move |evt: FormEvent| async move {
        let picked = read_uploads(&evt).await;
        attachments.write().extend(picked);
    };

    let on_submit = move |_| {
        let api = api.clone();
        async move {
            let req = match form.read().validate() {
                Ok(req) => req,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(ValidationErrors::default());
            submitting.set(true);
            match api.create_post(&req, attachments()).await {
                Ok(id) => {
                    toast.success("Your post is up.");
                    nav.replace(Route::CommunityPost { id });
                }
                Err(e) => {
                    reporter.report("create post", &e);
                    submitting.set(false);
                }
            }
        }
    };

    let current = form();
    let err = |field: &str| errors.read().get(field).map(str::to_string);
    let previews: Vec<(usize, String, Option<String>)> = attachments
        .read()
        .iter()
        .enumerate()
        .map(|(i, u)| (i, u.file_name.clone(), u.is_image().then(|| u.data_url())))
        .collect();
    let suggested: Vec<String> = match &*suggestions.read() {
        Some(list) => list.iter().map(|h| h.name.clone()).collect(),
        None => Vec::new(),
    };

    rsx! {
        div {
            class: "page narrow",
            h1 { "New post" }

            div {
                class: "field",
                Label { html_for: "title", "Title" }
                Input {
                    id: "title",
                    value: current.title.clone(),
                    invalid: err("title").is_some(),
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                if let Some(msg) = err("title") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div {
                class: "field",
                Label { html_for: "content", "Content" }
                Textarea {
                    id: "content",
                    value: current.content.clone(),
                    rows: 12,
                    oninput: move |evt: FormEvent| form.write().content = evt.value(),
                }
                if let Some(msg) = err("content") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div {
                class: "field",
                Label { html_for: "hashtag", "Hashtags" }
                div {
                    class: "tag-list",
                    for (i, tag) in current.hashtags.iter().cloned().enumerate() {
                        span {
                            key: "{tag}",
                            class: "tag",
                            "#{tag}"
                            button {
                                class: "tag-remove",
                                aria_label: "Remove hashtag",
                                onclick: move |_| {
                                    remove_at(&mut form.write().hashtags, i);
                                },
                                "×"
                            }
                        }
                    }
                }
                div {
                    class: "input-with-action",
                    Input {
                        id: "hashtag",
                        value: tag_input(),
                        placeholder: "#golden_hour",
                        oninput: move |evt: FormEvent| tag_input.set(evt.value()),
                        onkeydown: {
                            let add_tag = add_tag.clone();
                            move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    spawn(add_tag(tag_input()));
                                }
                            }
                        },
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let add_tag = add_tag.clone();
                            move |_| {
                                spawn(add_tag(tag_input()));
                            }
                        },
                        "Add"
                    }
                }
                if !suggested.is_empty() {
                    ul {
                        class: "suggestions",
                        for name in suggested {
                            li {
                                key: "{name}",
                                onclick: {
                                    let add_tag = add_tag.clone();
                                    let name = name.clone();
                                    move |_| {
                                        spawn(add_tag(name.clone()));
                                    }
                                },
                                "#{name}"
                            }
                        }
                    }
                }
            }

            div {
                class: "field",
                span { class: "label", "Attachments" }
                label {
                    class: "btn btn-outline",
                    "Add files"
                    input {
                        r#type: "file",
                        multiple: true,
                        class: "hidden",
                        onchange: on_pick,
                    }
                }
                div {
                    class: "photo-grid",
                    for (index, name, preview) in previews {
                        figure {
                            key: "{index}-{name}",
                            class: "photo-tile",
                            if let Some(src) = preview {
                                img { src, alt: "{name}" }
                            } else {
                                div { class: "file-chip", "📄 {name}" }
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                class: "tile-remove",
                                onclick: move |_| {
                                    remove_at(&mut attachments.write(), index);
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }

            div {
                class: "actions",
                Link { class: "btn btn-secondary", to: Route::CommunityList {}, "Cancel" }
                Button {
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Posting..." } else { "Post" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{existing_tag, push_tag};
    use api::Hashtag;

    fn tags(names: &[&str]) -> Vec<Hashtag> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Hashtag { id: i as i64 + 1, name: n.to_string() })
            .collect()
    }

    #[test]
    fn test_push_tag_skips_duplicates() {
        let mut tags = vec!["portrait".to_string()];
        assert!(push_tag(&mut tags, "golden_hour".to_string()));
        assert!(!push_tag(&mut tags, "Portrait".to_string()));
        assert_eq!(tags, vec!["portrait", "golden_hour"]);
    }

    #[test]
    fn test_existing_tag_past_suggestion_cutoff() {
        let found = tags(&["a", "b", "c", "d", "e", "f", "sunset"]);
        assert_eq!(existing_tag(&found, "sunset"), Some("sunset".to_string()));
    }

    #[test]
    fn test_existing_tag_ignores_case() {
        let found = tags(&["GoldenHour"]);
        assert_eq!(existing_tag(&found, "goldenhour"), Some("GoldenHour".to_string()));
    }

    #[test]
    fn test_existing_tag_missing() {
        assert_eq!(existing_tag(&[], "street"), None);
        assert_eq!(existing_tag(&tags(&["streets"]), "street"), None);
    }
}
