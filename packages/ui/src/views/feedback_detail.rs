use dioxus::prelude::*;

use crate::format::date_time;
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::Route;

#[component]
pub fn FeedbackDetail(id: i64) -> Element {
    rsx! {
        RequireLogin { message: "Please log in to see your feedback.", EvaluationView { id } }
    }
}

#[component]
fn EvaluationView(id: i64) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let evaluation = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move {
            api.get_image_evaluation(id)
                .await
                .inspect_err(|e| reporter.report("load evaluation", e))
        }
    }));

    let body = match &*evaluation.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(eval)) => {
            let feedback = eval
                .feedback
                .clone()
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| {
                    if eval.finish {
                        "No written feedback was left for this photo.".to_string()
                    } else {
                        "Your photo is waiting for evaluation. Please check back later.".to_string()
                    }
                });
            rsx! {
                div {
                    class: "feedback-detail",
                    img { class: "feedback-photo", src: "{eval.evaluation_image.file_url}", alt: "Submitted photo" }
                    div {
                        class: "card",
                        p { class: "muted", "Submitted {date_time(&eval.created_at)}" }
                        span { class: if eval.finish { "badge badge-done" } else { "badge" }, "{eval.status_label()}" }
                        if let Some(score) = eval.score {
                            p { class: "score-large", "{score:.0}" span { " / 100" } }
                        }
                        h2 { "Feedback" }
                        p { class: "feedback-text", "{feedback}" }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            Link { class: "back-link", to: Route::PhotoFeedback {}, "← All feedback" }
            {body}
        }
    }
}
