use dioxus::prelude::*;

use crate::feedback::sigmoid_points;
use crate::format::short_date;
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

const CURVE_WIDTH: f64 = 800.0;
const CURVE_HEIGHT: f64 = 100.0;
const CURVE_SAMPLES: usize = 200;

#[component]
pub fn PhotoFeedback() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to see your feedback.", FeedbackList {} }
    }
}

#[component]
fn FeedbackList() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let recent = use_resource(move || {
        let api = api.clone();
        async move {
            api.get_recent_image_evaluations()
                .await
                .inspect_err(|e| reporter.report("load recent evaluations", e))
        }
    });

    let upper = sigmoid_points(CURVE_WIDTH, CURVE_HEIGHT, 0.0, CURVE_SAMPLES);
    let lower = sigmoid_points(CURVE_WIDTH, CURVE_HEIGHT, CURVE_HEIGHT, CURVE_SAMPLES);
    let view_box = format!("0 0 {CURVE_WIDTH} {}", CURVE_HEIGHT * 2.0);

    let list = match &*recent.read() {
        None => rsx! { p { class: "muted", "Loading feedback..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(evaluations)) if evaluations.is_empty() => rsx! {
            p {
                class: "muted",
                "No photos have been submitted yet. "
                Link { to: Route::PhotoUpload {}, "Upload a photo" }
            }
        },
        Some(Ok(evaluations)) => rsx! {
            div {
                class: "feedback-list",
                for evaluation in evaluations.iter() {
                    Link {
                        key: "{evaluation.id}",
                        class: "feedback-item card",
                        to: Route::FeedbackDetail { id: evaluation.id },
                        img { src: "{evaluation.evaluation_image.file_url}", alt: "Submitted photo" }
                        div {
                            class: "feedback-summary",
                            span { class: if evaluation.finish { "badge badge-done" } else { "badge" }, "{evaluation.status_label()}" }
                            span { class: "muted", "{short_date(&evaluation.created_at)}" }
                            if let Some(score) = evaluation.score {
                                strong { class: "score", "{score:.0} pts" }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            h1 { "Photo feedback" }
            svg {
                class: "feedback-curve",
                view_box,
                preserve_aspect_ratio: "none",
                polyline { points: "{upper}", fill: "none", stroke: "#3b82f6", stroke_width: "3" }
                polyline { points: "{lower}", fill: "none", stroke: "#3b82f6", stroke_width: "3" }
            }
            p { class: "muted", "Your five most recent submissions. Open one to read the full feedback." }
            {list}
        }
    }
}
