use dioxus::prelude::*;

use api::ApiClient;
use ui::Sidebar;
use views::{Billing, Notifications, Plans, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/profile")]
        Profile {},
        #[route("/notifications")]
        Notifications {},
        #[route("/billing")]
        Billing {},
        #[route("/plans")]
        Plans {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend endpoint, baked in at build time. Set `API_BASE_URL` when
/// building to point the bundle at a different backend.
fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:8000")
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client for the whole app; views pick it up from context.
    use_context_provider(|| ApiClient::new(api_base_url()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Sidebar plus the routed panel.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "app-layout",
            Sidebar {
                Link { class: "sidebar-link", to: Route::Profile {}, "User Profile" }
                Link { class: "sidebar-link", to: Route::Notifications {}, "Notifications" }
                Link { class: "sidebar-link", to: Route::Billing {}, "Billing & Invoices" }
                Link { class: "sidebar-link", to: Route::Plans {}, "Plans & Add-ons" }
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the user-management panel.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
