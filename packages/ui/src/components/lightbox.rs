use dioxus::prelude::*;

/// Enlarged view of a single image. Clicking anywhere closes it.
#[component]
pub fn ImageLightbox(
    src: String,
    #[props(into)] caption: Option<String>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "lightbox",
            onclick: move |_| on_close.call(()),
            img { class: "lightbox-image", src: "{src}", alt: "Enlarged photo" }
            if let Some(caption) = caption {
                p { class: "lightbox-caption", "{caption}" }
            }
            button {
                class: "lightbox-close",
                aria_label: "Close",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_close.call(());
                },
                "×"
            }
        }
    }
}
