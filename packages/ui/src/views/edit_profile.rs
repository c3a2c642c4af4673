//! Profile editing: nickname, profile image and password.

use api::validation::{still_current, NICKNAME_MAX, PASSWORD_MAX, PASSWORD_MIN};
use api::{PasswordUpdateRequest, Upload};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label};
use crate::files::{only_images, read_uploads};
use crate::navbar::DEFAULT_PROFILE_IMAGE;
use crate::session::{update_session, use_api, use_error_reporter, use_session, RequireLogin};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum ImageChange {
    Keep,
    Replace(Upload),
    Default,
}

#[component]
pub fn EditProfile() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to edit your profile.", EditProfileForm {} }
    }
}

#[component]
fn EditProfileForm() -> Element {
    let state = use_session();
    let api = use_api();
    let nav = use_navigator();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let original_nickname = state.read().session.nickname.clone().unwrap_or_default();
    let current_image = state
        .read()
        .session
        .profile_image_url
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());

    let mut nickname = use_signal(|| original_nickname.clone());
    let mut nickname_checked = use_signal(|| false);
    let mut nickname_note = use_signal(|| None::<(bool, String)>);
    let mut image = use_signal(|| ImageChange::Keep);
    let mut saving = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_error = use_signal(|| None::<String>);

    let nickname_changed = {
        let original = original_nickname.clone();
        move || nickname().trim() != original.trim()
    };

    let check_api = api.clone();
    let check_nickname = move |_| {
        let api = check_api.clone();
        async move {
            let name = nickname().trim().to_string();
            if name.is_empty() || name.chars().count() > NICKNAME_MAX {
                nickname_note.set(Some((
                    false,
                    format!("Nickname must be 1 to {NICKNAME_MAX} characters."),
                )));
                return;
            }
            let reply = api.check_nickname_duplicate(&name).await;
            if !still_current(&nickname(), &name) {
                return;
            }
            match reply {
                Ok(taken) => {
                    nickname_checked.set(!taken);
                    let text = if taken {
                        "This nickname is already taken."
                    } else {
                        "This nickname is available."
                    };
                    nickname_note.set(Some((!taken, text.to_string())));
                }
                Err(e) => reporter.report("nickname duplicate check", &e),
            }
        }
    };

    let on_pick = move |evt: FormEvent| async move {
        let (mut images, dropped) = only_images(read_uploads(&evt).await);
        if dropped > 0 {
            toast.info("Only image files can be used as a profile image.");
        }
        if let Some(upload) = images.pop() {
            image.set(ImageChange::Replace(upload));
        }
    };

    let apply_api = api.clone();
    let changed = nickname_changed.clone();
    let on_apply = move |_| {
        let api = apply_api.clone();
        let nickname_changed = changed();
        async move {
            if nickname_changed && !nickname_checked() {
                toast.error("Please check whether the new nickname is available.");
                return;
            }
            saving.set(true);
            let new_nickname = nickname().trim().to_string();

            if nickname_changed {
                if let Err(e) = api.update_nickname(&new_nickname).await {
                    reporter.report("update nickname", &e);
                    saving.set(false);
                    return;
                }
            }

            let image_result = match image() {
                ImageChange::Keep => Ok(()),
                ImageChange::Replace(upload) => api.update_profile_image(upload).await,
                ImageChange::Default => api.set_default_profile_image().await,
            };
            if let Err(e) = image_result {
                reporter.report("update profile image", &e);
                saving.set(false);
                return;
            }

            let image_url = match api.get_profile_image_url().await {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!("could not refresh profile image url: {e}");
                    None
                }
            };
            update_session(state, |s| {
                s.nickname = Some(new_nickname);
                if image_url.is_some() {
                    s.profile_image_url = image_url;
                }
            })
            .await;
            toast.success("Your profile has been updated.");
            nav.push(Route::UserProfile {});
        }
    };

    let on_change_password = move |_| {
        let api = api.clone();
        async move {
            let new = new_password();
            let len = new.chars().count();
            if current_password().is_empty() {
                password_error.set(Some("Please enter your current password.".to_string()));
                return;
            }
            if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
                password_error.set(Some(format!(
                    "Password must be {PASSWORD_MIN} to {PASSWORD_MAX} characters."
                )));
                return;
            }
            if new != confirm_password() {
                password_error.set(Some("Passwords do not match.".to_string()));
                return;
            }
            password_error.set(None);
            let req = PasswordUpdateRequest {
                current_password: current_password(),
                new_password: new,
            };
            match api.update_password(&req).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    toast.success("Your password has been changed.");
                }
                Err(e) => reporter.report("update password", &e),
            }
        }
    };

    let preview = match image() {
        ImageChange::Keep => current_image,
        ImageChange::Replace(upload) => upload.data_url(),
        ImageChange::Default => DEFAULT_PROFILE_IMAGE.to_string(),
    };
    let needs_check = nickname_changed();

    rsx! {
        div {
            class: "page-narrow",
            div {
                class: "card",
                h1 { "Edit profile" }

                div {
                    class: "profile-image-editor",
                    img { class: "avatar avatar-lg", src: "{preview}", alt: "Profile preview" }
                    div {
                        class: "actions",
                        label {
                            class: "btn btn-outline",
                            "Choose image"
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "hidden",
                                onchange: on_pick,
                            }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| image.set(ImageChange::Default),
                            "Use default image"
                        }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "nickname", "Nickname" }
                    div {
                        class: "input-with-action",
                        Input {
                            id: "nickname",
                            value: nickname(),
                            oninput: move |evt: FormEvent| {
                                nickname.set(evt.value());
                                nickname_checked.set(false);
                                nickname_note.set(None);
                            },
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: !needs_check,
                            onclick: check_nickname,
                            "Check"
                        }
                    }
                    if let Some((ok, text)) = nickname_note() {
                        p { class: if ok { "hint-ok" } else { "field-error" }, "{text}" }
                    }
                }

                div {
                    class: "actions",
                    Button { disabled: saving(), onclick: on_apply, if saving() { "Saving..." } else { "Apply" } }
                    Link { class: "btn btn-outline", to: Route::UserProfile {}, "Cancel" }
                }
            }

            div {
                class: "card",
                h2 { "Change password" }
                div {
                    class: "field",
                    Label { html_for: "current_password", "Current password" }
                    Input {
                        id: "current_password",
                        input_type: "password",
                        value: current_password(),
                        oninput: move |evt: FormEvent| current_password.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "new_password", "New password" }
                    Input {
                        id: "new_password",
                        input_type: "password",
                        value: new_password(),
                        placeholder: "8 to 16 characters",
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "confirm_password", "Confirm new password" }
                    Input {
                        id: "confirm_password",
                        input_type: "password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }
                if let Some(msg) = password_error() {
                    p { class: "form-error", "{msg}" }
                }
                Button { variant: ButtonVariant::Secondary, onclick: on_change_password, "Change password" }
            }
        }
    }
}
