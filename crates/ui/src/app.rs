use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

/// Window and page title.
pub const APP_TITLE: &str = "Chatbot de Análisis de Inversor ESG";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{APP_TITLE}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal", role: "alert",
                        h1 { "La aplicación encontró un error" }
                        p { "Reinicia la aplicación. Los envíos de esta sesión se perderán." }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
