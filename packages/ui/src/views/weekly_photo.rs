//! "Photo of the week": pick favourites pair by pair until one photo remains.

use api::PhotoRank;
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, ImageLightbox};
use crate::format::{short_date, today, week_label};
use crate::session::{use_api, use_error_reporter, RequireLogin};
use crate::tournament::Tournament;

#[component]
pub fn WeeklyPhoto() -> Element {
    rsx! {
        RequireLogin { message: "Please log in to vote for the photo of the week.", WeeklyBracket {} }
    }
}

fn new_bracket(ranks: &[PhotoRank]) -> Tournament {
    let ids = ranks.iter().map(|r| r.id).collect();
    Tournament::shuffled(ids, &mut rand::thread_rng())
}

#[component]
fn WeeklyBracket() -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();

    let mut ranks = use_signal(Vec::<PhotoRank>::new);
    let mut bracket = use_signal(|| None::<Tournament>);
    let mut reported = use_signal(|| false);
    let mut enlarged = use_signal(|| None::<PhotoRank>);

    let load_api = api.clone();
    let _ = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.get_photo_ranks().await {
                Ok(list) => {
                    bracket.set(Some(new_bracket(&list)));
                    ranks.set(list);
                }
                Err(e) => reporter.report("load weekly photos", &e),
            }
        }
    });

    let choose = move |id: i64| {
        let finished = {
            let mut guard = bracket.write();
            let Some(t) = &mut *guard else {
                return;
            };
            t.choose(id);
            t.is_finished()
        };
        if !finished || reported() {
            return;
        }
        reported.set(true);
        let report = match &*bracket.read() {
            Some(t) => t.report(),
            None => return,
        };
        let api = api.clone();
        spawn(async move {
            match api.update_photo_rank_counts(&report).await {
                Ok(()) => {
                    toast.success("Thanks for voting!");
                    match api.get_photo_ranks().await {
                        Ok(list) => ranks.set(list),
                        Err(e) => tracing::warn!("could not refresh ranks: {e}"),
                    }
                }
                Err(e) => reporter.report("report votes", &e),
            }
        });
    };

    let find = move |id: i64| ranks.read().iter().find(|r| r.id == id).cloned();
    let period = ranks
        .read()
        .first()
        .filter(|r| !r.start_date.is_empty())
        .map(|r| format!("{} - {}", short_date(&r.start_date), short_date(&r.end_date)))
        .unwrap_or_else(|| week_label(today()));

    let content = match bracket() {
        None => rsx! { p { class: "muted", "Loading this week's photos..." } },
        Some(_) if ranks.read().is_empty() => {
            rsx! { p { class: "muted", "There is no contest running this week." } }
        }
        Some(t) => match t.current_pair() {
            Some((left, right)) => {
                let (played, total) = t.progress();
                let percent = if total == 0 { 100 } else { played * 100 / total };
                let label = t.round_label();
                rsx! {
                    div {
                        class: "bracket-header",
                        h2 { "{label}" }
                        div { class: "progress", div { class: "progress-fill", style: "width: {percent}%" } }
                        p { class: "muted", "{played} / {total} matches" }
                    }
                    div {
                        class: "versus",
                        for (id, photo) in [left, right].map(|id| (id, find(id))) {
                            button {
                                key: "{id}",
                                class: "versus-photo",
                                onclick: {
                                    let mut choose = choose.clone();
                                    move |_| choose(id)
                                },
                                if let Some(photo) = photo {
                                    img { src: "{photo.file_url}", alt: "Candidate photo" }
                                }
                            }
                        }
                    }
                    p { class: "muted center", "Pick the photo you like better." }
                }
            }
            None => {
                let ranked: Vec<(usize, PhotoRank)> = t
                    .ranking()
                    .into_iter()
                    .filter_map(find)
                    .enumerate()
                    .map(|(i, r)| (i + 1, r))
                    .collect();
                rsx! {
                    h2 { "Your ranking" }
                    div {
                        class: "rank-grid",
                        for (place, photo) in ranked {
                            figure {
                                key: "{photo.id}",
                                class: if place == 1 { "rank-tile champion" } else { "rank-tile" },
                                onclick: {
                                    let photo = photo.clone();
                                    move |_| enlarged.set(Some(photo.clone()))
                                },
                                span { class: "rank-badge", "{place}" }
                                img { src: "{photo.file_url}", alt: "Ranked photo {place}" }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            let fresh = new_bracket(&ranks.read());
                            bracket.set(Some(fresh));
                        },
                        "Play again"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Photo of the week" }
                span { class: "muted", "{period}" }
            }
            {content}
            if let Some(photo) = enlarged() {
                ImageLightbox {
                    src: photo.file_url.clone(),
                    caption: format!("Picked {} times", photo.selection_ratio()),
                    on_close: move |_| enlarged.set(None),
                }
            }
        }
    }
}
