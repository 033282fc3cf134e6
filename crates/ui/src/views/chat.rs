use dioxus::prelude::*;
use dioxus_router::Link;
use esg_core::model::FinalQuestionnaireDraft;

use crate::app::APP_TITLE;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{FinalForm, ProfileChart, ViewError};
use crate::vm::{ChatIntent, ChatMessageVm, ChatPhase, ProfileChartVm, start_chat};

const INTRO_CHAT: &str = "Primero interactuarás con un chatbot para evaluar tu perfil ESG.";
const INTRO_FORM: &str = "Al final, completarás un test tradicional de perfilado.";

#[derive(Clone, Debug, PartialEq)]
struct ChatSnapshot {
    messages: Vec<ChatMessageVm>,
    phase: Option<ChatPhase>,
    progress_label: String,
    chart: Option<ProfileChartVm>,
    can_retry: bool,
}

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let questionnaire = ctx.questionnaire();
    let model_enabled = ctx.model_enabled();

    let vm = use_signal({
        let questionnaire = questionnaire.clone();
        move || Some(start_chat(&questionnaire))
    });
    // Rendered while the session is taken out of `vm` for a model call.
    let in_flight = use_signal(Vec::<ChatMessageVm>::new);
    let error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);
    let mut answer = use_signal(String::new);
    let draft = use_signal(FinalQuestionnaireDraft::default);

    let dispatch_intent = {
        let questionnaire = questionnaire.clone();
        use_callback(move |intent: ChatIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut in_flight = in_flight;
            let mut busy = busy;

            if *busy.peek() {
                return;
            }
            busy.set(true);

            let questionnaire = questionnaire.clone();
            spawn(async move {
                let mut local_vm = {
                    let mut guard = vm.write();
                    guard.take()
                };

                let Some(mut vm_value) = local_vm.take() else {
                    error.set(Some(ViewError::Unknown));
                    busy.set(false);
                    return;
                };

                let mut shown = vm_value.messages();
                if let ChatIntent::Send(text) = &intent
                    && !text.trim().is_empty()
                {
                    shown.push(ChatMessageVm::user(text));
                }
                in_flight.set(shown);

                let result = vm_value.apply(&questionnaire, intent).await;

                // Always put the session back so the UI remains usable even after errors.
                {
                    let mut guard = vm.write();
                    *guard = Some(vm_value);
                }
                busy.set(false);

                match result {
                    Ok(()) => error.set(None),
                    Err(err) => error.set(Some(err)),
                }
            });
        })
    };

    let snapshot = {
        let vm_guard = vm.read();
        match vm_guard.as_ref() {
            Some(vm) => ChatSnapshot {
                messages: vm.messages(),
                phase: Some(vm.phase()),
                progress_label: vm.progress_label(),
                chart: vm.profile_chart(),
                can_retry: vm.can_retry(),
            },
            None => ChatSnapshot {
                messages: in_flight.read().clone(),
                phase: None,
                progress_label: String::new(),
                chart: None,
                can_retry: false,
            },
        }
    };
    let is_busy = busy();
    let current_error = error();
    let missing_model_notice = ViewError::ModelUnavailable.message();

    rsx! {
        div { class: "page chat-page",
            header { class: "view-header",
                h2 { class: "view-title", "{APP_TITLE}" }
                p { class: "view-intro",
                    strong { "{INTRO_CHAT}" }
                    br {}
                    strong { "{INTRO_FORM}" }
                }
            }

            if !model_enabled {
                p { class: "notice", "{missing_model_notice}" }
            }

            p { class: "chat-progress", "{snapshot.progress_label}" }

            div { class: "chat-log",
                for (idx, message) in snapshot.messages.into_iter().enumerate() {
                    ChatBubble { key: "{idx}", message }
                }
                if is_busy {
                    p { class: "chat-typing", "El chatbot está pensando..." }
                }
            }

            if let Some(err) = current_error {
                div { class: "chat-error", role: "alert",
                    p { "{err.message()}" }
                    if snapshot.can_retry && err.is_retryable() {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: is_busy,
                            onclick: move |_| dispatch_intent.call(ChatIntent::Retry),
                            "Reintentar"
                        }
                    }
                }
            }

            match snapshot.phase {
                Some(ChatPhase::Asking) | None => rsx! {
                    form {
                        class: "chat-input",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let text = answer();
                            if text.trim().is_empty() {
                                return;
                            }
                            answer.set(String::new());
                            dispatch_intent.call(ChatIntent::Send(text));
                        },
                        input {
                            r#type: "text",
                            placeholder: "Escribe tu respuesta...",
                            aria_label: "Tu respuesta",
                            value: "{answer}",
                            disabled: is_busy,
                            oninput: move |evt| answer.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: is_busy,
                            "Enviar"
                        }
                    }
                },
                Some(ChatPhase::Profiling) => rsx! {
                    if is_busy {
                        p { class: "chat-status", "Calculando tu perfil..." }
                    }
                },
                Some(ChatPhase::Profiled) => rsx! {
                    if let Some(chart) = snapshot.chart {
                        ProfileChart { chart }
                    }
                    FinalForm {
                        draft,
                        busy: is_busy,
                        on_submit: move |()| dispatch_intent.call(ChatIntent::Submit(draft())),
                    }
                },
                Some(ChatPhase::Submitted) => rsx! {
                    if let Some(chart) = snapshot.chart {
                        ProfileChart { chart }
                    }
                    p { class: "chat-status", "¡Gracias! Tus respuestas han sido registradas." }
                    Link { class: "btn btn-secondary", to: Route::Submissions {}, "Ver envíos" }
                },
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessageVm) -> Element {
    if message.from_bot {
        rsx! {
            div { class: "chat-message chat-message--bot",
                span { class: "chat-speaker", "Chatbot" }
                div { class: "chat-text", dangerous_inner_html: "{message.body}" }
            }
        }
    } else {
        rsx! {
            div { class: "chat-message chat-message--user",
                span { class: "chat-speaker", "Tú" }
                div { class: "chat-text", "{message.body}" }
            }
        }
    }
}
