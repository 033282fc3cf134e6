use esg_core::question::{QuestionBank, Stage};

use super::test_harness::{
    ViewKind, seed_submission, setup_view_harness, setup_view_harness_without_model,
};

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_renders_intro_and_first_question() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Chatbot de Análisis de Inversor ESG"), "missing title in {html}");
    assert!(html.contains("completarás un test tradicional"), "missing intro in {html}");
    let first = QuestionBank::default().prompt(Stage::General, 0).unwrap().text;
    assert_eq!(html.matches(first.as_str()).count(), 1, "first question not shown once in {html}");
    assert!(html.contains("Respuestas: 0 / 10"), "missing progress in {html}");
    assert!(html.contains("Enviar"), "missing send button in {html}");
    assert!(!html.contains("GROQ_API_KEY"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_warns_without_model() {
    let mut harness = setup_view_harness_without_model(ViewKind::Chat);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("GROQ_API_KEY"), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submissions_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Submissions);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Todavía no hay perfiles enviados."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submissions_view_smoke_renders_submission_card() {
    let mut harness = setup_view_harness(ViewKind::Submissions);
    seed_submission(&harness.storage).await;

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Ambiental: 90, Social: 75, Gobernanza: 60, Riesgo: 35"),
        "missing scores in {html}"
    );
    assert!(html.contains("Productos: 1"), "missing product count in {html}");
    assert!(html.contains("Ver"), "missing view link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submission_detail_view_smoke_renders_chart_and_form() {
    let mut harness = setup_view_harness(ViewKind::SubmissionDetail(1));
    let id = seed_submission(&harness.storage).await;
    assert_eq!(id.value(), 1);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Perfil del Inversor"), "missing chart title in {html}");
    assert!(html.contains("Puntuación (0-100)"), "missing axis label in {html}");
    assert_eq!(html.matches("chart-bar\"").count(), 4, "expected four bars in {html}");
    assert!(html.contains("Bonos"), "missing product in {html}");
    assert!(html.contains("Inversor: "), "missing transcript in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submission_detail_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::SubmissionDetail(42));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No se encontró el envío."), "missing error in {html}");
}
