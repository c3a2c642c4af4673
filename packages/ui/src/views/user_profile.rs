use dioxus::prelude::*;

use crate::format::short_date;
use crate::navbar::DEFAULT_PROFILE_IMAGE;
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

/// Height of the tallest bar in the score chart, in pixels.
const CHART_HEIGHT: f64 = 160.0;
const MAX_SCORE: f64 = 100.0;

#[component]
pub fn UserProfile() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to see your profile.", ProfileCard {} }
    }
}

#[component]
fn ProfileCard() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let info_api = api.clone();
    let info = use_resource(move || {
        let api = info_api.clone();
        async move {
            api.get_user_info()
                .await
                .inspect_err(|e| reporter.report("load profile", e))
        }
    });
    let recent = use_resource(move || {
        let api = api.clone();
        async move {
            api.get_recent_image_evaluations()
                .await
                .inspect_err(|e| tracing::warn!("recent evaluations unavailable: {e}"))
        }
    });

    let card = match &*info.read() {
        None => rsx! { p { class: "muted", "Loading profile..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(user)) => {
            let avatar = user
                .profile_image_url
                .clone()
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());
            let gender = user.gender.map(|g| g.label()).unwrap_or("-");
            let birthday = user.birthday.clone().unwrap_or_else(|| "-".to_string());
            rsx! {
                div {
                    class: "profile-header",
                    img { class: "avatar avatar-lg", src: "{avatar}", alt: "Profile image" }
                    div {
                        h1 { "{user.nickname}" }
                        p { class: "muted", "{user.email}" }
                    }
                }
                dl {
                    class: "profile-details",
                    dt { "Name" }
                    dd { "{user.name}" }
                    dt { "Gender" }
                    dd { "{gender}" }
                    dt { "Birthday" }
                    dd { "{birthday}" }
                }
            }
        }
    };

    let chart = match &*recent.read() {
        Some(Ok(evaluations)) => {
            let bars: Vec<(i64, String, f64, String)> = evaluations
                .iter()
                .filter_map(|e| {
                    let score = e.score?;
                    let height = (score.clamp(0.0, MAX_SCORE) / MAX_SCORE) * CHART_HEIGHT;
                    Some((e.id, short_date(&e.created_at), height, format!("{score:.0}")))
                })
                .collect();
            if bars.is_empty() {
                rsx! { p { class: "muted", "No evaluated photos yet." } }
            } else {
                rsx! {
                    div {
                        class: "score-chart",
                        style: "height: {CHART_HEIGHT}px",
                        for (id, date, height, label) in bars {
                            div {
                                key: "{id}",
                                class: "score-bar",
                                span { class: "score-value", "{label}" }
                                div { class: "score-fill", style: "height: {height}px" }
                                span { class: "score-date", "{date}" }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(_)) => rsx! { p { class: "muted", "Scores are unavailable right now." } },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "page-narrow",
            div { class: "card", {card} }
            div {
                class: "card",
                h2 { "Recent scores" }
                {chart}
            }
            div {
                class: "actions",
                Link { class: "btn btn-primary", to: Route::EditProfile {}, "Edit profile" }
                Link { class: "btn btn-outline", to: Route::MyPhotos {}, "My photos" }
            }
        }
    }
}
