use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{Route, SessionProvider};

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Title { "Char 칵" }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
