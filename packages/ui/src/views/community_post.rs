//! A single community post with likes, comments and attachments.

use api::{Comment, CommentCreateRequest, PostDetail, Session};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, ConfirmDialog, ImageLightbox, Textarea};
use crate::format::date_time;
use crate::navbar::DEFAULT_PROFILE_IMAGE;
use crate::session::{use_api, use_error_reporter, use_session};
use crate::Route;

/// Writers manage their own posts and comments; admins manage everything.
pub fn can_manage(session: &Session, writer: &str) -> bool {
    session.is_admin()
        || (session.is_authenticated() && session.nickname.as_deref() == Some(writer))
}

/// Like state after a successful toggle.
pub fn toggled_like(liked: bool, count: u32) -> (bool, u32) {
    if liked {
        (false, count.saturating_sub(1))
    } else {
        (true, count + 1)
    }
}

/// Mark comment `id` deleted and drop it from the post's count. Returns
/// false when the comment is unknown or was already deleted.
pub fn mark_comment_deleted(post: &mut PostDetail, id: i64) -> bool {
    match post.comments.iter_mut().find(|c| c.id == id && !c.is_deleted) {
        Some(comment) => {
            comment.is_deleted = true;
            post.comment_count = post.comment_count.saturating_sub(1);
            true
        }
        None => false,
    }
}

#[component]
pub fn CommunityPost(id: i64) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let mut post = use_signal(|| None::<PostDetail>);
    let mut failed = use_signal(|| None::<String>);

    let _ = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move {
            match api.get_post(id).await {
                Ok(detail) => {
                    failed.set(None);
                    post.set(Some(detail));
                }
                Err(e) => {
                    reporter.report("load post", &e);
                    failed.set(Some(e.user_message()));
                }
            }
        }
    }));

    let body = match (post.read().is_some(), failed()) {
        (true, _) => rsx! { PostView { post } },
        (false, Some(message)) => rsx! { p { class: "form-error", "{message}" } },
        (false, None) => rsx! { p { class: "muted", "Loading post..." } },
    };

    rsx! {
        div {
            class: "page narrow",
            Link { class: "back-link", to: Route::CommunityList {}, "← Community" }
            {body}
        }
    }
}

#[component]
fn PostView(mut post: Signal<Option<PostDetail>>) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let toast = use_toast();
    let reporter = use_error_reporter();
    let session = use_session();

    let mut show_comments = use_signal(|| true);
    let mut confirm_delete = use_signal(|| false);
    let mut enlarged = use_signal(|| None::<String>);

    let Some(detail) = post() else {
        return rsx! {};
    };
    let post_id = detail.id;
    let signed_in = session.read().is_authenticated();
    let manage = can_manage(&session.read().session, &detail.writer_nickname);

    let like_api = api.clone();
    let on_like = move |_| {
        let api = like_api.clone();
        async move {
            if !session.read().is_authenticated() {
                toast.info("Please log in to like posts.");
                return;
            }
            let liked = post().is_some_and(|p| p.liked);
            let result = if liked {
                api.cancel_like_post(post_id).await
            } else {
                api.like_post(post_id).await
            };
            match result {
                Ok(()) => {
                    if let Some(p) = &mut *post.write() {
                        (p.liked, p.like_count) = toggled_like(p.liked, p.like_count);
                    }
                }
                Err(e) => reporter.report("toggle post like", &e),
            }
        }
    };

    let delete_api = api.clone();
    let on_delete = move |_: ()| {
        let api = delete_api.clone();
        async move {
            confirm_delete.set(false);
            match api.delete_post(post_id).await {
                Ok(()) => {
                    toast.success("The post was deleted.");
                    nav.replace(Route::CommunityList {});
                }
                Err(e) => reporter.report("delete post", &e),
            }
        }
    };

    let images: Vec<(String, String)> = detail
        .image_files()
        .map(|f| (f.file_name.clone(), f.file_url.clone()))
        .collect();
    let others: Vec<(String, String)> = detail
        .other_files()
        .map(|f| (f.file_name.clone(), f.file_url.clone()))
        .collect();
    let avatar = detail
        .writer_profile_image_url
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());
    let comment_count = detail.comments.iter().filter(|c| !c.is_deleted).count();

    rsx! {
        article {
            class: "card post",
            header {
                class: "post-header",
                h1 { "{detail.title}" }
                div {
                    class: "post-meta",
                    img { class: "avatar", src: "{avatar}", alt: "" }
                    span { "{detail.writer_nickname}" }
                    span { class: "muted", "{date_time(&detail.created_at)}" }
                }
                if !detail.hashtags.is_empty() {
                    div {
                        class: "tag-list",
                        for tag in detail.hashtags.iter() {
                            span { key: "{tag}", class: "tag", "#{tag}" }
                        }
                    }
                }
            }

            div { class: "post-content", "{detail.content}" }

            if !images.is_empty() {
                div {
                    class: "photo-grid",
                    for (name, url) in images {
                        figure {
                            key: "{url}",
                            class: "photo-tile",
                            onclick: {
                                let url = url.clone();
                                move |_| enlarged.set(Some(url.clone()))
                            },
                            img { src: "{url}", alt: "{name}" }
                        }
                    }
                }
            }
            if !others.is_empty() {
                ul {
                    class: "file-list",
                    for (name, url) in others {
                        li {
                            key: "{url}",
                            a { href: "{url}", target: "_blank", download: "{name}", "📄 {name}" }
                        }
                    }
                }
            }

            footer {
                class: "post-actions",
                button {
                    class: if detail.liked { "like-button liked" } else { "like-button" },
                    onclick: on_like,
                    if detail.liked { "♥ {detail.like_count}" } else { "♡ {detail.like_count}" }
                }
                button {
                    class: "link-button",
                    onclick: move |_| show_comments.toggle(),
                    if show_comments() { "Hide comments ({comment_count})" } else { "Show comments ({comment_count})" }
                }
                if manage {
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| confirm_delete.set(true),
                        "Delete"
                    }
                }
            }
        }

        if show_comments() {
            CommentSection { post, signed_in }
        }

        if confirm_delete() {
            ConfirmDialog {
                title: "Delete this post?",
                message: "This cannot be undone.",
                confirm_label: "Delete",
                danger: true,
                on_confirm: on_delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }

        if let Some(src) = enlarged() {
            ImageLightbox { src, on_close: move |_| enlarged.set(None) }
        }
    }
}

#[component]
fn CommentSection(mut post: Signal<Option<PostDetail>>, signed_in: bool) -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let Some(detail) = post() else {
        return rsx! {};
    };
    let post_id = detail.id;

    let add_api = api.clone();
    let on_add = move |_| {
        let api = add_api.clone();
        async move {
            let content = draft().trim().to_string();
            if content.is_empty() {
                toast.info("Please write a comment first.");
                return;
            }
            sending.set(true);
            let req = CommentCreateRequest { post_id, content };
            match api.create_comment(&req).await {
                Ok(comment) => {
                    if let Some(p) = &mut *post.write() {
                        p.comments.push(comment);
                        p.comment_count += 1;
                    }
                    draft.set(String::new());
                }
                Err(e) => reporter.report("add comment", &e),
            }
            sending.set(false);
        }
    };

    rsx! {
        section {
            class: "card comments",
            h2 { "Comments" }
            if detail.comments.is_empty() {
                p { class: "muted", "No comments yet." }
            }
            for comment in detail.comments.iter().cloned() {
                CommentRow { key: "{comment.id}", comment, post }
            }
            if signed_in {
                div {
                    class: "comment-form",
                    Textarea {
                        value: draft(),
                        rows: 3,
                        placeholder: "Write a comment",
                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                    }
                    Button { disabled: sending(), onclick: on_add, "Comment" }
                }
            } else {
                p {
                    class: "muted",
                    Link { to: Route::Login {}, "Log in" }
                    " to join the conversation."
                }
            }
        }
    }
}

#[component]
fn CommentRow(comment: Comment, mut post: Signal<Option<PostDetail>>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let reporter = use_error_reporter();
    let session = use_session();

    let id = comment.id;
    let manage = !comment.is_deleted && can_manage(&session.read().session, &comment.writer_nickname);

    let mut patch = move |f: &dyn Fn(&mut Comment)| {
        if let Some(p) = &mut *post.write() {
            if let Some(c) = p.comments.iter_mut().find(|c| c.id == id) {
                f(c);
            }
        }
    };

    let like_api = api.clone();
    let on_like = move |_| {
        let api = like_api.clone();
        async move {
            if !session.read().is_authenticated() {
                toast.info("Please log in to like comments.");
                return;
            }
            let liked = match &*post.read() {
                Some(p) => p.comments.iter().any(|c| c.id == id && c.liked),
                None => false,
            };
            let result = if liked {
                api.cancel_like_comment(id).await
            } else {
                api.like_comment(id).await
            };
            match result {
                Ok(()) => patch(&|c: &mut Comment| {
                    (c.liked, c.like_count) = toggled_like(c.liked, c.like_count);
                }),
                Err(e) => reporter.report("toggle comment like", &e),
            }
        }
    };

    let on_delete = move |_| {
        let api = api.clone();
        async move {
            match api.delete_comment(id).await {
                Ok(()) => {
                    if let Some(p) = &mut *post.write() {
                        mark_comment_deleted(p, id);
                    }
                }
                Err(e) => reporter.report("delete comment", &e),
            }
        }
    };

    let avatar = comment
        .user_profile_url
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());

    if comment.is_deleted {
        return rsx! {
            div { class: "comment deleted", p { class: "muted", "This comment was deleted." } }
        };
    }

    rsx! {
        div {
            class: "comment",
            img { class: "avatar small", src: "{avatar}", alt: "" }
            div {
                class: "comment-body",
                div {
                    class: "comment-meta",
                    strong { "{comment.writer_nickname}" }
                    span { class: "muted", "{date_time(&comment.created_at)}" }
                }
                p { "{comment.content}" }
                div {
                    class: "comment-actions",
                    button {
                        class: if comment.liked { "like-button small liked" } else { "like-button small" },
                        onclick: on_like,
                        if comment.liked { "♥ {comment.like_count}" } else { "♡ {comment.like_count}" }
                    }
                    if manage {
                        button { class: "link-button danger", onclick: on_delete, "Delete" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    fn session(nickname: &str, role: Role) -> Session {
        Session {
            access_token: Some("token".to_string()),
            role: Some(role),
            nickname: Some(nickname.to_string()),
            profile_image_url: None,
        }
    }

    #[test]
    fn test_writer_and_admin_can_manage() {
        assert!(can_manage(&session("snap", Role::User), "snap"));
        assert!(!can_manage(&session("snap", Role::User), "other"));
        assert!(can_manage(&session("boss", Role::Admin), "other"));
        assert!(!can_manage(&Session::default(), ""));
    }

    #[test]
    fn test_toggled_like() {
        assert_eq!(toggled_like(false, 4), (true, 5));
        assert_eq!(toggled_like(true, 5), (false, 4));
        assert_eq!(toggled_like(true, 0), (false, 0));
    }

    fn comment(id: i64) -> Comment {
        Comment {
            id,
            writer_nickname: "snap".to_string(),
            user_profile_url: None,
            content: "nice light".to_string(),
            created_at: String::new(),
            like_count: 0,
            is_deleted: false,
            liked: false,
        }
    }

    fn detail(comments: Vec<Comment>) -> PostDetail {
        PostDetail {
            id: 1,
            title: "Dusk".to_string(),
            content: String::new(),
            writer_nickname: "snap".to_string(),
            writer_profile_image_url: None,
            created_at: String::new(),
            like_count: 0,
            comment_count: comments.len() as u32,
            liked: false,
            files: Vec::new(),
            comments,
            hashtags: Vec::new(),
        }
    }

    #[test]
    fn test_mark_comment_deleted_updates_count_once() {
        let mut post = detail(vec![comment(1), comment(2)]);
        assert!(mark_comment_deleted(&mut post, 2));
        assert!(post.comments[1].is_deleted);
        assert_eq!(post.comment_count, 1);

        assert!(!mark_comment_deleted(&mut post, 2));
        assert!(!mark_comment_deleted(&mut post, 9));
        assert_eq!(post.comment_count, 1);
    }
}
