//! Sign-up form with server-side duplicate checks for email and nickname.

use api::validation::{
    email_error, format_birthday, still_current, SignUpForm, ValidationErrors, NICKNAME_MAX,
};
use api::Gender;
use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label};
use crate::format::today;
use crate::session::{use_api, use_error_reporter};
use crate::Route;

const BIRTH_YEARS: i32 = 100;

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut form = use_signal(SignUpForm::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut email_note = use_signal(|| None::<String>);
    let mut nickname_note = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let check_api = api.clone();
    let check_email = move |_| {
        let api = check_api.clone();
        async move {
            let email = form.read().email.trim().to_string();
            if let Some(msg) = email_error(&email) {
                email_note.set(Some(msg.to_string()));
                return;
            }
            let reply = api.check_email_duplicate(&email).await;
            if !still_current(&form.read().email, &email) {
                return;
            }
            match reply {
                Ok(true) => {
                    form.write().email_checked = false;
                    email_note.set(Some("This email is already registered.".to_string()));
                }
                Ok(false) => {
                    form.write().email_checked = true;
                    email_note.set(Some("This email is available.".to_string()));
                }
                Err(e) => reporter.report("email duplicate check", &e),
            }
        }
    };

    let check_api = api.clone();
    let check_nickname = move |_| {
        let api = check_api.clone();
        async move {
            let nickname = form.read().nickname.trim().to_string();
            if nickname.is_empty() {
                nickname_note.set(Some("Please enter a nickname.".to_string()));
                return;
            }
            if nickname.chars().count() > NICKNAME_MAX {
                nickname_note.set(Some(format!(
                    "Nickname can be at most {NICKNAME_MAX} characters."
                )));
                return;
            }
            let reply = api.check_nickname_duplicate(&nickname).await;
            if !still_current(&form.read().nickname, &nickname) {
                return;
            }
            match reply {
                Ok(true) => {
                    form.write().nickname_checked = false;
                    nickname_note.set(Some("This nickname is already taken.".to_string()));
                }
                Ok(false) => {
                    form.write().nickname_checked = true;
                    nickname_note.set(Some("This nickname is available.".to_string()));
                }
                Err(e) => reporter.report("nickname duplicate check", &e),
            }
        }
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
            match api.sign_up(&req).await {
                Ok(()) => {
                    toast.success("Welcome! Please log in with your new account.");
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    reporter.report("sign up", &e);
                    submitting.set(false);
                }
            }
        }
    };

    let current = form();
    let this_year = today().year();
    let days: Vec<u32> = match (current.birth_year, current.birth_month) {
        (Some(y), Some(m)) => (1..=31).filter(|d| format_birthday(y, m, *d).is_some()).collect(),
        _ => (1..=31).collect(),
    };
    let err = |field: &str| errors.read().get(field).map(str::to_string);
    let password_hint = if current.password_confirm.is_empty() {
        None
    } else if current.passwords_match() {
        Some(("hint-ok", "Passwords match."))
    } else {
        Some(("field-error", "Passwords do not match."))
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card wide",
                h1 { "Create an account" }

                div {
                    class: "field",
                    Label { html_for: "email", "Email" }
                    div {
                        class: "input-with-action",
                        Input {
                            id: "email",
                            input_type: "email",
                            value: current.email.clone(),
                            placeholder: "you@example.com",
                            invalid: err("email").is_some(),
                            oninput: move |evt: FormEvent| {
                                let mut f = form.write();
                                f.email = evt.value();
                                f.email_checked = false;
                                email_note.set(None);
                            },
                        }
                        Button { variant: ButtonVariant::Outline, onclick: check_email, "Check" }
                    }
                    if let Some(note) = email_note() {
                        p { class: if current.email_checked { "hint-ok" } else { "field-error" }, "{note}" }
                    } else if let Some(msg) = err("email") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "password", "Password" }
                    Input {
                        id: "password",
                        input_type: "password",
                        value: current.password.clone(),
                        placeholder: "8 to 16 characters",
                        invalid: err("password").is_some(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    if let Some(msg) = err("password") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "password_confirm", "Confirm password" }
                    Input {
                        id: "password_confirm",
                        input_type: "password",
                        value: current.password_confirm.clone(),
                        invalid: err("password_confirm").is_some(),
                        oninput: move |evt: FormEvent| form.write().password_confirm = evt.value(),
                    }
                    if let Some((class, text)) = password_hint {
                        p { class, "{text}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "name", "Name" }
                    Input {
                        id: "name",
                        value: current.name.clone(),
                        invalid: err("name").is_some(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    if let Some(msg) = err("name") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "nickname", "Nickname" }
                    div {
                        class: "input-with-action",
                        Input {
                            id: "nickname",
                            value: current.nickname.clone(),
                            placeholder: "Up to 15 characters",
                            invalid: err("nickname").is_some(),
                            oninput: move |evt: FormEvent| {
                                let mut f = form.write();
                                f.nickname = evt.value();
                                f.nickname_checked = false;
                                nickname_note.set(None);
                            },
                        }
                        Button { variant: ButtonVariant::Outline, onclick: check_nickname, "Check" }
                    }
                    if let Some(note) = nickname_note() {
                        p { class: if current.nickname_checked { "hint-ok" } else { "field-error" }, "{note}" }
                    } else if let Some(msg) = err("nickname") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "field",
                    span { class: "label", "Gender" }
                    div {
                        class: "radio-group",
                        for (gender, key, text) in [Gender::Male, Gender::Female].map(|g| (g, g.as_str(), g.label())) {
                            label {
                                key: "{key}",
                                class: "radio",
                                input {
                                    r#type: "radio",
                                    name: "gender",
                                    checked: current.gender == Some(gender),
                                    onchange: move |_| form.write().gender = Some(gender),
                                }
                                "{text}"
                            }
                        }
                    }
                    if let Some(msg) = err("gender") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "field",
                    span { class: "label", "Birthday" }
                    div {
                        class: "select-row",
                        select {
                            aria_label: "Year",
                            onchange: move |evt: FormEvent| form.write().birth_year = evt.value().parse().ok(),
                            option { value: "", "Year" }
                            for year in ((this_year - BIRTH_YEARS + 1)..=this_year).rev() {
                                option { key: "{year}", value: "{year}", selected: current.birth_year == Some(year), "{year}" }
                            }
                        }
                        select {
                            aria_label: "Month",
                            onchange: move |evt: FormEvent| form.write().birth_month = evt.value().parse().ok(),
                            option { value: "", "Month" }
                            for month in 1..=12u32 {
                                option { key: "{month}", value: "{month}", selected: current.birth_month == Some(month), "{month:02}" }
                            }
                        }
                        select {
                            aria_label: "Day",
                            onchange: move |evt: FormEvent| form.write().birth_day = evt.value().parse().ok(),
                            option { value: "", "Day" }
                            for day in days {
                                option { key: "{day}", value: "{day}", selected: current.birth_day == Some(day), "{day:02}" }
                            }
                        }
                    }
                    if let Some(msg) = err("birthday") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                Button {
                    class: "full-width",
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Signing up..." } else { "Sign up" }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
