use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{Route, SessionProvider};

fn main() {
    // BASEURL may come from a local .env file
    dotenvy::dotenv().ok();
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!(
        base_url = %api::ApiConfig::from_env().base_url(),
        "starting desktop client"
    );
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Title { "Char 칵" }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
