//! Login page: email/password form with "remember me".

use std::rc::Rc;

use api::validation::{email_error, LoginForm, ValidationErrors};
use api::Session;
use dioxus::prelude::*;

use crate::components::{use_toast, Button, Input, Label};
use crate::session::{make_session_repo, sign_in, use_api, use_session};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let state = use_session();
    let api = use_api();
    let nav = use_navigator();
    let toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(ValidationErrors::default);
    let mut login_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut email_field = use_signal(|| None::<Rc<MountedData>>);
    let mut password_field = use_signal(|| None::<Rc<MountedData>>);

    // Pre-fill the remembered email
    let _ = use_resource(move || async move {
        if let Some(saved) = make_session_repo().remembered_email().await {
            email.set(saved);
            remember.set(true);
        }
    });

    // Already signed in: nothing to do here
    use_effect(move || {
        let current = state.read();
        if !current.loading && current.is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let submit = move || {
        let api = api.clone();
        async move {
            let form = LoginForm {
                email: email(),
                password: password(),
            };
            let req = match form.validate() {
                Ok(req) => req,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(ValidationErrors::default());
            login_error.set(None);
            submitting.set(true);

            let result = match api.login(&req).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    login_error.set(Some("Incorrect email or password.".to_string()));
                    submitting.set(false);
                    return;
                }
            };

            let authed = api.with_token(Some(result.access_token.clone()));
            let mut session = Session::with_token(result.access_token);
            match authed.get_user_role().await {
                Ok(role) => session.role = Some(role),
                Err(e) => tracing::warn!("could not load role: {e}"),
            }
            match authed.get_user_info().await {
                Ok(info) => {
                    session.nickname = Some(info.nickname);
                    session.profile_image_url = info.profile_image_url;
                }
                Err(e) => tracing::warn!("could not load profile: {e}"),
            }

            let remembered = remember().then_some(req.email.as_str());
            make_session_repo().remember_email(remembered).await;
            sign_in(state, session).await;
            toast.success("Welcome back!");
            nav.push(Route::Home {});
        }
    };

    let submit_on_enter = submit.clone();
    let on_email_key = move |evt: KeyboardEvent| async move {
        if evt.key() != Key::Enter {
            return;
        }
        evt.prevent_default();
        match email_error(&email()) {
            Some(msg) => {
                let mut e = ValidationErrors::default();
                e.add("email", msg);
                errors.set(e);
            }
            None => {
                errors.set(ValidationErrors::default());
                if let Some(field) = password_field() {
                    let _ = field.set_focus(true).await;
                }
            }
        }
    };
    let on_password_key = move |evt: KeyboardEvent| {
        let submit = submit_on_enter.clone();
        async move {
            if evt.key() != Key::Enter {
                return;
            }
            evt.prevent_default();
            if email().trim().is_empty() {
                login_error.set(Some("Please enter your email.".to_string()));
                if let Some(field) = email_field() {
                    let _ = field.set_focus(true).await;
                }
            } else if password().is_empty() {
                login_error.set(Some("Please enter your password.".to_string()));
            } else {
                submit().await;
            }
        }
    };

    let password_type = if show_password() { "text" } else { "password" };
    let email_msg = errors.read().get("email").map(str::to_string);
    let password_msg = errors.read().get("password").map(str::to_string);

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                h1 { "Log in" }

                div {
                    class: "field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        input_type: "email",
                        value: email(),
                        placeholder: "Enter your email",
                        autocomplete: "username",
                        invalid: email_msg.is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                        onkeydown: on_email_key,
                        onmounted: move |evt: MountedEvent| email_field.set(Some(evt.data())),
                    }
                    if let Some(msg) = email_msg {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "password", "Password" }
                    div {
                        class: "input-with-action",
                        Input {
                            id: "password",
                            input_type: password_type,
                            value: password(),
                            placeholder: "Enter your password",
                            autocomplete: "current-password",
                            invalid: password_msg.is_some(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                            onkeydown: on_password_key,
                            onmounted: move |evt: MountedEvent| password_field.set(Some(evt.data())),
                        }
                        button {
                            class: "input-action",
                            r#type: "button",
                            onclick: move |_| show_password.toggle(),
                            if show_password() { "Hide" } else { "Show" }
                        }
                    }
                    if let Some(msg) = password_msg {
                        p { class: "field-error", "{msg}" }
                    }
                }

                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: remember(),
                        onchange: move |evt: FormEvent| remember.set(evt.checked()),
                    }
                    "Remember me"
                }

                if let Some(msg) = login_error() {
                    p { class: "form-error", "{msg}" }
                }

                Button {
                    class: "full-width",
                    disabled: submitting(),
                    onclick: move |_| {
                        spawn(submit());
                    },
                    if submitting() { "Logging in..." } else { "Log in" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Terms {}, "Sign up" }
                }
            }
        }
    }
}
