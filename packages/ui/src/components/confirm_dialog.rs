use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Keys that dismiss the dialog like a click on the backdrop.
pub fn closes_on(key: &Key) -> bool {
    *key == Key::Escape
}

/// Confirmation for an irreversible action. The backdrop, Escape and the
/// cancel button all call `on_cancel`; only the confirm button calls
/// `on_confirm`.
#[component]
pub fn ConfirmDialog(
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(default = "Confirm".to_string(), into)] confirm_label: String,
    #[props(default)] danger: bool,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let variant = if danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| on_cancel.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if closes_on(&evt.key()) {
                    on_cancel.call(());
                }
            },
            div {
                class: "modal-card",
                role: "alertdialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { "{title}" }
                p { class: "muted", "{message}" }
                div {
                    class: "actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::closes_on;
    use dioxus::prelude::Key;

    #[test]
    fn test_closes_on_escape_only() {
        assert!(closes_on(&Key::Escape));
        assert!(!closes_on(&Key::Enter));
        assert!(!closes_on(&Key::Character("q".to_string())));
    }
}
