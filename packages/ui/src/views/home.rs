use std::time::Duration;

use dioxus::prelude::*;

use crate::carousel::cycle;
use crate::session::use_api;
use crate::timer::sleep;
use crate::Route;

const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

const SLIDES: [(&str, &str); 4] = [
    ("/slide1.jpg", "Shape better poses with feedback from experts"),
    ("/slide2.jpg", "Get feedback from every angle for the perfect shot"),
    ("/slide3.jpg", "Improve the framing and pose of your full-body portraits"),
    ("/slide4.jpg", "Tailored advice for a professional look"),
];

const CRITERIA: [(&str, &str, &str); 5] = [
    ("/criteria_pose.jpg", "Pose", "Natural posture and expression, balance and body lines."),
    ("/criteria_composition.jpg", "Composition", "Overall layout, harmony with the background and placement of the subject."),
    ("/criteria_lighting.jpg", "Lighting", "How direction, strength and colour temperature of light shape the subject."),
    ("/criteria_styling.jpg", "Outfit & props", "Fit of the outfit and use of accessories and props."),
    ("/criteria_impression.jpg", "Overall impression", "The mood and message the photo conveys."),
];

/// Shown when the top posts cannot be loaded.
const FALLBACK_HIGHLIGHTS: [(&str, &str, u32); 3] = [
    ("Sharing the best posing tips", "posemaster", 42),
    ("Outdoor shooting know-how", "naturallight", 38),
    ("Self-portrait tricks", "selfiequeen", 55),
];

const STATS: [(&str, &str); 4] = [
    ("10,000+", "Photos reviewed"),
    ("5,000+", "Active users"),
    ("50,000+", "Feedback given"),
    ("50+", "Expert reviewers"),
];

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let mut slide = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            sleep(SLIDE_INTERVAL).await;
            slide.set(cycle(slide(), SLIDES.len(), 1));
        }
    });

    let top_posts = use_resource(move || {
        let api = api.clone();
        async move {
            api.get_top_posts()
                .await
                .inspect_err(|e| tracing::warn!("top posts unavailable: {e}"))
        }
    });

    let highlights = match &*top_posts.read() {
        Some(Ok(posts)) if !posts.is_empty() => rsx! {
            for post in posts.iter().take(3) {
                Link {
                    key: "{post.id}",
                    class: "highlight-card",
                    to: Route::CommunityPost { id: post.id },
                    h3 { "{post.title}" }
                    p { class: "muted", "by {post.writer_nickname} · {post.comment_count} comments" }
                }
            }
        },
        _ => fallback_highlights(),
    };

    let (image, caption) = SLIDES[slide()];
    let slide_number = slide() + 1;

    rsx! {
        div {
            class: "page",
            section {
                class: "hero",
                img { class: "hero-image", src: "{image}", alt: "Slide {slide_number}" }
                p { class: "hero-caption", "{caption}" }
                div {
                    class: "dots",
                    for (i, number) in (0..SLIDES.len()).map(|i| (i, i + 1)) {
                        button {
                            key: "{i}",
                            class: if i == slide() { "dot active" } else { "dot" },
                            aria_label: "Slide {number}",
                            onclick: move |_| slide.set(i),
                        }
                    }
                }
            }

            section {
                class: "section",
                h2 { "What we evaluate" }
                div {
                    class: "criteria-grid",
                    for (image, title, description) in CRITERIA {
                        Link {
                            key: "{title}",
                            class: "criteria-card",
                            to: Route::Learning {},
                            img { src: "{image}", alt: "{title}" }
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section {
                class: "section",
                h2 { "Community highlights" }
                div { class: "highlight-grid", {highlights} }
            }

            section {
                class: "section stats",
                for (value, label) in STATS {
                    div {
                        key: "{label}",
                        class: "stat",
                        strong { "{value}" }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}

fn fallback_highlights() -> Element {
    rsx! {
        for (title, author, comments) in FALLBACK_HIGHLIGHTS {
            Link {
                key: "{title}",
                class: "highlight-card",
                to: Route::CommunityList {},
                h3 { "{title}" }
                p { class: "muted", "by {author} · {comments} comments" }
            }
        }
    }
}
