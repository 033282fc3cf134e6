use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChatView, SubmissionDetailView, SubmissionsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ChatView)] Chat {},
        #[route("/submissions", SubmissionsView)] Submissions {},
        #[route("/submissions/:submission_id", SubmissionDetailView)]
        SubmissionDetail { submission_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "ESG" }
            ul {
                li { Link { to: Route::Chat {}, "Chatbot" } }
                li { Link { to: Route::Submissions {}, "Envíos" } }
            }
        }
    }
}
