use dioxus::prelude::*;
use esg_core::model::{
    FinalQuestionnaireDraft, FinancialProduct, InvestmentHorizon, InvestmentObjective,
};

/// The closing profiling questionnaire. Edits go straight into `draft`;
/// validation happens on submit.
#[component]
pub fn FinalForm(
    draft: Signal<FinalQuestionnaireDraft>,
    busy: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let current = draft();
    let objective_question = InvestmentObjective::QUESTION;
    let horizon_question = InvestmentHorizon::QUESTION;
    let products_question = FinancialProduct::QUESTION;

    rsx! {
        form {
            class: "final-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            h3 { "Cuestionario Final de Perfilado" }

            fieldset { class: "form-group",
                legend { "{objective_question}" }
                for objective in InvestmentObjective::ALL {
                    label { key: "{objective.label()}", class: "form-option",
                        input {
                            r#type: "radio",
                            name: "objective",
                            checked: current.objective == Some(objective),
                            onchange: move |_| {
                                let mut draft = draft;
                                draft.write().objective = Some(objective);
                            },
                        }
                        "{objective.label()}"
                    }
                }
            }

            fieldset { class: "form-group",
                legend { "{horizon_question}" }
                for horizon in InvestmentHorizon::ALL {
                    label { key: "{horizon.label()}", class: "form-option",
                        input {
                            r#type: "radio",
                            name: "horizon",
                            checked: current.horizon == Some(horizon),
                            onchange: move |_| {
                                let mut draft = draft;
                                draft.write().horizon = Some(horizon);
                            },
                        }
                        "{horizon.label()}"
                    }
                }
            }

            fieldset { class: "form-group",
                legend { "{products_question}" }
                for product in FinancialProduct::ALL {
                    label { key: "{product.label()}", class: "form-option",
                        input {
                            r#type: "checkbox",
                            checked: current.has_product(product),
                            onchange: move |_| {
                                let mut draft = draft;
                                draft.write().toggle_product(product);
                            },
                        }
                        "{product.label()}"
                    }
                }
            }

            button { class: "btn btn-primary", r#type: "submit", disabled: busy, "Enviar" }
        }
    }
}
