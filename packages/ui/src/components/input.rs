use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "text".to_string(), into)] input_type: String,
    #[props(into)] id: Option<String>,
    #[props(into)] value: String,
    #[props(default, into)] placeholder: String,
    #[props(default)] disabled: bool,
    /// Adds the error outline.
    #[props(default)]
    invalid: bool,
    #[props(into)] autocomplete: Option<String>,
    oninput: EventHandler<FormEvent>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    onmounted: Option<EventHandler<MountedEvent>>,
) -> Element {
    let class = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        input {
            class,
            r#type: "{input_type}",
            id,
            value,
            placeholder,
            disabled,
            autocomplete,
            oninput: move |evt| oninput.call(evt),
            onkeydown: move |evt| {
                if let Some(handler) = &onkeydown {
                    handler.call(evt);
                }
            },
            onmounted: move |evt| {
                if let Some(handler) = &onmounted {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(into)] id: Option<String>,
    #[props(into)] value: String,
    #[props(default, into)] placeholder: String,
    #[props(default = 6)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: "textarea",
            id,
            rows: "{rows}",
            placeholder,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
