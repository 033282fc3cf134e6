use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use esg_core::time::fixed_now;
use services::{
    AppServices, ChatCompletionsClient, Clock, LanguageModel, LlmError, QuestionnaireLoopService,
    SubmissionService,
};
use storage::repository::{Storage, SubmissionRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::{ChatView, SubmissionDetailView, SubmissionsView};

const DEFAULT_PROFILE: &str = "Ambiental: 90, Social: 75, Gobernanza: 60, Riesgo: 35";

/// Accepts every long answer, asks one fixed follow-up and returns a fixed
/// profile. Answers mentioning "vago" are judged poor.
pub struct RuleModel {
    profile_reply: Mutex<String>,
    fail_next: Mutex<bool>,
}

impl Default for RuleModel {
    fn default() -> Self {
        Self {
            profile_reply: Mutex::new(DEFAULT_PROFILE.to_string()),
            fail_next: Mutex::new(false),
        }
    }
}

impl RuleModel {
    pub fn set_profile_reply(&self, reply: &str) {
        *self.profile_reply.lock().unwrap() = reply.to_string();
    }

    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }
}

#[async_trait::async_trait]
impl LanguageModel for RuleModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if std::mem::take(&mut *self.fail_next.lock().unwrap()) {
            return Err(LlmError::EmptyResponse);
        }
        if prompt.contains("Solo responde") {
            let verdict = if prompt.contains("vago") { "False" } else { "True" };
            return Ok(verdict.to_string());
        }
        if prompt.contains("pregunta de seguimiento") {
            return Ok("¿Puedes explicar por qué?".to_string());
        }
        Ok(self.profile_reply.lock().unwrap().clone())
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    model_enabled: bool,
}

impl UiApp for TestApp {
    fn model_enabled(&self) -> bool {
        self.model_enabled
    }

    fn questionnaire(&self) -> Arc<QuestionnaireLoopService> {
        self.services.questionnaire()
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        self.services.submissions()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Chat,
    Submissions,
    SubmissionDetail(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Chat => rsx! { ChatView {} },
        ViewKind::Submissions => rsx! { SubmissionsView {} },
        ViewKind::SubmissionDetail(submission_id) => {
            rsx! { SubmissionDetailView { submission_id } }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_model(view, Arc::new(RuleModel::default()))
}

pub fn setup_view_harness_with_model(
    view: ViewKind,
    model: Arc<dyn LanguageModel>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::with_model(model, Clock::fixed(fixed_now()), storage.clone());
    let app = Arc::new(TestApp {
        services,
        model_enabled: true,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, storage }
}

/// Harness whose model is not configured, as when no API key is set.
pub fn setup_view_harness_without_model(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let client = ChatCompletionsClient::new(None).expect("http client");
    let services =
        AppServices::with_model(Arc::new(client), Clock::fixed(fixed_now()), storage.clone());
    let app = Arc::new(TestApp {
        services,
        model_enabled: false,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, storage }
}

/// Store a submission directly, bypassing the chat.
pub async fn seed_submission(storage: &Storage) -> storage::repository::SubmissionId {
    use esg_core::model::{
        EsgProfile, FinalQuestionnaireDraft, FinancialProduct, InvestmentHorizon,
        InvestmentObjective, Transcript,
    };
    use storage::repository::ProfileSubmission;

    let mut transcript = Transcript::new();
    transcript.push_bot("¿Qué opinas?");
    transcript.push_user("Me preocupan las emisiones de la industria.");
    let mut draft = FinalQuestionnaireDraft {
        objective: Some(InvestmentObjective::ModerateReturn),
        horizon: Some(InvestmentHorizon::OverFiveYears),
        products: Vec::new(),
    };
    draft.toggle_product(FinancialProduct::Bonds);
    let submission = ProfileSubmission {
        profile: EsgProfile::parse(DEFAULT_PROFILE).expect("profile"),
        answers: vec!["Me preocupan las emisiones de la industria.".to_string()],
        transcript,
        form: draft.validate().expect("form"),
        submitted_at: fixed_now(),
    };
    storage
        .submissions
        .append_submission(&submission)
        .await
        .expect("append submission")
}
