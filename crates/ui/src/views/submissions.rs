use dioxus::prelude::*;
use dioxus_router::Link;
use storage::repository::SubmissionId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ProfileChart, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubmissionCardVm, SubmissionDetailVm, map_submission_cards, map_submission_detail};

const RECENT_LIMIT: u32 = 20;

#[derive(Clone, Debug, PartialEq)]
struct SubmissionsData {
    cards: Vec<SubmissionCardVm>,
}

#[component]
pub fn SubmissionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let submissions = ctx.submissions();

    let resource = use_resource(move || {
        let submissions = submissions.clone();
        async move {
            let items = submissions
                .list_recent(RECENT_LIMIT)
                .await
                .map_err(|err| ViewError::from_questionnaire(&err))?;
            let cards = map_submission_cards(&items);
            Ok(SubmissionsData { cards })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Envíos" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Cargando..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { "Todavía no hay perfiles enviados." }
                    } else {
                        ul { class: "submission-list",
                            for card in data.cards {
                                SubmissionCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn SubmissionCard(card: SubmissionCardVm) -> Element {
    rsx! {
        li {
            Link { class: "submission-link", to: Route::SubmissionDetail { submission_id: card.id },
                span { class: "submission-date", "{card.submitted_at_str}" }
                span { class: "submission-cta", "Ver" }
            }
            p { "{card.scores}" }
            p { class: "submission-meta",
                "{card.objective} | {card.horizon} | Productos: {card.product_count}"
            }
        }
    }
}

#[component]
pub fn SubmissionDetailView(submission_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let submissions = ctx.submissions();

    let resource = use_resource(move || {
        let submissions = submissions.clone();
        async move {
            let id = SubmissionId::new(submission_id);
            let submission = submissions
                .get(id)
                .await
                .map_err(|err| ViewError::from_questionnaire(&err))?;
            Ok(map_submission_detail(id, &submission))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Envío #{submission_id}" }
            Link { to: Route::Submissions {}, "Volver" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Cargando..." }
                },
                ViewState::Ready(detail) => rsx! {
                    SubmissionDetailBody { detail }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn SubmissionDetailBody(detail: SubmissionDetailVm) -> Element {
    let products = if detail.products.is_empty() {
        "Ninguno".to_string()
    } else {
        detail.products.join(", ")
    };

    rsx! {
        p { class: "submission-date", "{detail.submitted_at_str}" }
        ProfileChart { chart: detail.chart }

        dl { class: "submission-form",
            dt { "Objetivo" }
            dd { "{detail.objective}" }
            dt { "Horizonte" }
            dd { "{detail.horizon}" }
            dt { "Productos" }
            dd { "{products}" }
        }

        h3 { "Conversación" }
        ol { class: "submission-transcript",
            for (idx, line) in detail.transcript.into_iter().enumerate() {
                li { key: "{idx}",
                    strong { "{line.speaker}: " }
                    "{line.text}"
                }
            }
        }
    }
}
