//! Community board: recommended posts on top, then the paged list with title search.

use api::{Pageable, PostSummary};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::format::short_date;
use crate::pagination::Paginator;
use crate::session::{use_api, use_error_reporter};
use crate::Route;

pub const POSTS_PER_PAGE: u32 = 10;
const PAGE_WINDOW: usize = 5;
const RECOMMENDED: usize = 3;

/// Posts with the most likes first, at most `count` of them.
pub fn recommended(mut posts: Vec<PostSummary>, count: usize) -> Vec<PostSummary> {
    posts.sort_by(|a, b| b.like_count.cmp(&a.like_count));
    posts.truncate(count);
    posts
}

#[component]
pub fn CommunityList() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let mut page = use_signal(|| 1usize);
    let mut search_input = use_signal(String::new);
    let mut query = use_signal(String::new);

    let top_api = api.clone();
    let top = use_resource(move || {
        let api = top_api.clone();
        async move {
            api.get_top_posts()
                .await
                .map(|posts| recommended(posts, RECOMMENDED))
                .inspect_err(|e| tracing::warn!("recommended posts unavailable: {e}"))
        }
    });

    let posts = use_resource(move || {
        let api = api.clone();
        let index = page().saturating_sub(1) as u32;
        let title = query();
        async move {
            let pageable = Pageable::new(index, POSTS_PER_PAGE).sorted("createdAt,desc");
            let result = if title.is_empty() {
                api.get_posts(&pageable).await
            } else {
                api.search_posts_by_title(&title, &pageable).await
            };
            result.inspect_err(|e| reporter.report("load posts", e))
        }
    });

    let mut run_search = move || {
        query.set(search_input().trim().to_string());
        page.set(1);
    };

    let recommended_section = match &*top.read() {
        Some(Ok(list)) if !list.is_empty() => rsx! {
            section {
                class: "recommended",
                h2 { "Recommended" }
                div {
                    class: "grid-3",
                    for post in list.iter() {
                        Link {
                            key: "{post.id}",
                            class: "highlight-card",
                            to: Route::CommunityPost { id: post.id },
                            h3 { "{post.title}" }
                            p { class: "muted", "{post.writer_nickname} · ♥ {post.like_count}" }
                        }
                    }
                }
            }
        },
        _ => rsx! {},
    };

    let list = match &*posts.read() {
        None => rsx! { p { class: "muted", "Loading posts..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(result)) => {
            let pager = Paginator::new(result.total_elements as usize, POSTS_PER_PAGE as usize)
                .at(page());
            let searching = !query.read().is_empty();
            rsx! {
                if result.content.is_empty() {
                    p {
                        class: "muted",
                        if searching { "No posts match your search." } else { "No posts yet. Be the first to write one!" }
                    }
                } else {
                    table {
                        class: "post-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Writer" }
                                th { "Date" }
                                th { "♥" }
                            }
                        }
                        tbody {
                            for post in result.content.iter() {
                                tr {
                                    key: "{post.id}",
                                    td {
                                        Link { to: Route::CommunityPost { id: post.id }, "{post.title}" }
                                        if post.comment_count > 0 {
                                            span { class: "comment-count", " [{post.comment_count}]" }
                                        }
                                        if post.has_file {
                                            span { class: "muted", " 📎" }
                                        }
                                    }
                                    td { "{post.writer_nickname}" }
                                    td { "{short_date(&post.created_at)}" }
                                    td { "{post.like_count}" }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "pagination",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !pager.has_prev(),
                        onclick: move |_| {
                            let mut p = pager;
                            p.prev();
                            page.set(p.current());
                        },
                        "‹"
                    }
                    for number in pager.window(PAGE_WINDOW) {
                        button {
                            key: "{number}",
                            class: if number == pager.current() { "page-number active" } else { "page-number" },
                            onclick: move |_| page.set(number),
                            "{number}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !pager.has_next(),
                        onclick: move |_| {
                            let mut p = pager;
                            p.next();
                            page.set(p.current());
                        },
                        "›"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Community" }
                Link { class: "btn btn-primary", to: Route::CommunityCreate {}, "New post" }
            }
            {recommended_section}
            form {
                class: "search-bar",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    run_search();
                },
                Input {
                    value: search_input(),
                    placeholder: "Search by title",
                    oninput: move |evt: FormEvent| search_input.set(evt.value()),
                }
                Button { button_type: "submit", "Search" }
                if !query.read().is_empty() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            search_input.set(String::new());
                            query.set(String::new());
                            page.set(1);
                        },
                        "Clear"
                    }
                }
            }
            {list}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, like_count: u32) -> PostSummary {
        PostSummary {
            id,
            title: format!("post {id}"),
            writer_nickname: "snap".to_string(),
            created_at: String::new(),
            comment_count: 0,
            like_count,
            has_file: false,
        }
    }

    #[test]
    fn test_recommended_keeps_most_liked() {
        let posts = vec![post(1, 3), post(2, 10), post(3, 0), post(4, 7)];
        let ids: Vec<i64> = recommended(posts, 3).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn test_recommended_short_list() {
        assert_eq!(recommended(vec![post(9, 1)], 3).len(), 1);
        assert!(recommended(Vec::new(), 3).is_empty());
    }
}
