use dioxus::prelude::*;

/// Fixed navigation column. Pure chrome: the app passes its router links in
/// as children, so this crate stays independent of the route table.
#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        nav {
            class: "sidebar",
            div { class: "sidebar-title", "Dashboard" }
            {children}
        }
    }
}
