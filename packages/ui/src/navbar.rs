use dioxus::prelude::*;

use crate::components::use_toast;
use crate::icons::{FaBars, FaXmark};
use crate::route::{Route, Section};
use crate::session::{sign_out, use_session};
use crate::Icon;

pub const DEFAULT_PROFILE_IMAGE: &str = "/default_1.jpg";

#[component]
fn NavLink(to: Route, section: Section, current: Section, label: &'static str) -> Element {
    let class = if section == current { "nav-link active" } else { "nav-link" };
    rsx! {
        Link { class, to, "{label}" }
    }
}

/// Top bar with the brand, section links and the account entry.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let state = use_session();
    let toast = use_toast();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let current = route.section();
    let session = state.read().session.clone();
    let authenticated = session.is_authenticated();
    let is_admin = session.is_admin();
    let nickname = session.display_name().to_string();
    let avatar = session
        .profile_image_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());

    let profile_class = if current == Section::Profile {
        "nav-profile active"
    } else {
        "nav-profile"
    };

    let on_logout = move |_| async move {
        sign_out(state).await;
        menu_open.set(false);
        toast.success("You have been logged out.");
        nav.push(Route::Login {});
    };

    let links = rsx! {
        NavLink { to: Route::WeeklyPhoto {}, section: Section::WeeklyPhoto, current, label: "Weekly Photo" }
        NavLink { to: Route::PhotoFeedback {}, section: Section::Feedback, current, label: "Photo Feedback" }
        NavLink { to: Route::PhotoUpload {}, section: Section::Upload, current, label: "Photo Upload" }
        NavLink { to: Route::Learning {}, section: Section::Learning, current, label: "Learning" }
        NavLink { to: Route::CommunityList {}, section: Section::Community, current, label: "Community" }
        if is_admin {
            NavLink { to: Route::AdminLearningMaterial {}, section: Section::Admin, current, label: "Admin" }
        }
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                Link { class: "brand", to: Route::Home {}, "Char 칵" }

                div { class: "nav-links", {links.clone()} }

                div {
                    class: "nav-account",
                    if authenticated {
                        Link {
                            class: profile_class,
                            to: Route::UserProfile {},
                            img { class: "avatar avatar-sm", src: "{avatar}", alt: "Profile" }
                            span { "{nickname}" }
                        }
                        button { class: "nav-link nav-button", onclick: on_logout, "Logout" }
                    } else {
                        Link { class: "nav-link", to: Route::Login {}, "Login" }
                    }
                }

                button {
                    class: "nav-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { width: 20, height: 20, icon: FaXmark }
                    } else {
                        Icon { width: 20, height: 20, icon: FaBars }
                    }
                }
            }

            if menu_open() {
                div {
                    class: "nav-mobile",
                    onclick: move |_| menu_open.set(false),
                    {links}
                    if authenticated {
                        Link { class: "nav-link", to: Route::UserProfile {}, "My Page" }
                        button { class: "nav-link nav-button", onclick: on_logout, "Logout" }
                    } else {
                        Link { class: "nav-link", to: Route::Login {}, "Login" }
                    }
                }
            }
        }
    }
}
