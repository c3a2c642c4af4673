use dioxus::prelude::*;

use crate::agreement::Agreement;
use crate::components::Button;
use crate::Route;

const TERMS_OF_SERVICE: &str = "Char 칵 provides photo evaluation, learning materials and a \
community for people who want to take better portraits. Photos you upload are used only to \
produce your evaluation and are never shared without your consent. Posts and comments must \
not contain illegal or offensive content; such content may be removed without notice.";

const PRIVACY_POLICY: &str = "We collect your email, name, nickname, gender and birthday to \
create your account, and the photos you upload for evaluation. This information is kept while \
your account is active and deleted when you leave the service.";

#[component]
pub fn Terms() -> Element {
    let mut agreement = use_signal(Agreement::default);
    let nav = use_navigator();
    let current = agreement();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card terms-card",
                h1 { "Terms and conditions" }

                label {
                    class: "checkbox checkbox-strong",
                    input {
                        r#type: "checkbox",
                        checked: current.all(),
                        onchange: move |evt: FormEvent| agreement.write().set_all(evt.checked()),
                    }
                    "Agree to all"
                }

                section {
                    class: "terms-section",
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: current.terms,
                            onchange: move |evt: FormEvent| agreement.write().terms = evt.checked(),
                        }
                        "Terms of service (required)"
                    }
                    div { class: "terms-text", "{TERMS_OF_SERVICE}" }
                }

                section {
                    class: "terms-section",
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: current.privacy,
                            onchange: move |evt: FormEvent| agreement.write().privacy = evt.checked(),
                        }
                        "Collection and use of personal information (required)"
                    }
                    div { class: "terms-text", "{PRIVACY_POLICY}" }
                }

                Button {
                    class: "full-width",
                    disabled: !current.can_continue(),
                    onclick: move |_| {
                        if agreement().can_continue() {
                            nav.push(Route::Signup {});
                        }
                    },
                    "Continue"
                }
            }
        }
    }
}
