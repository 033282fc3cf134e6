use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, LlmConfig, QuestionnaireLoopService, SubmissionService};
use tracing::info;
use ui::context::build_app_context;
use ui::{App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn model_enabled(&self) -> bool {
        self.services.model_enabled()
    }

    fn questionnaire(&self) -> Arc<QuestionnaireLoopService> {
        self.services.questionnaire()
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        self.services.submissions()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    model: Option<String>,
    base_url: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--model <id>] [--base-url <url>]");
    eprintln!();
    eprintln!("Environment (a .env file is read if present):");
    eprintln!("  GROQ_API_KEY          required for model calls");
    eprintln!("  ESG_LLM_BASE_URL      default {}", services::llm::DEFAULT_BASE_URL);
    eprintln!("  ESG_LLM_MODEL         default {}", services::llm::DEFAULT_MODEL);
    eprintln!("  ESG_LLM_TIMEOUT_SECS  request timeout, unset for none");
    eprintln!("  ESG_LLM_MAX_RETRIES   default {}", services::llm::DEFAULT_MAX_RETRIES);
    eprintln!("  RUST_LOG              log filter, default info");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => {
                    parsed.model = Some(require_value(args, "--model")?);
                }
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    parsed.base_url = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// CLI flags win over the environment.
    fn apply(self, config: Option<LlmConfig>) -> Option<LlmConfig> {
        config.map(|mut config| {
            if let Some(model) = self.model {
                config = config.with_model(model);
            }
            if let Some(base_url) = self.base_url {
                config = config.with_base_url(base_url);
            }
            config
        })
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = args.apply(LlmConfig::from_env());
    let services = AppServices::new_http(config, Clock::system())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(ui::APP_TITLE)
            .with_always_on_top(false),
    );

    info!("launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(&mut args.iter().map(|arg| (*arg).to_string()))
    }

    #[test]
    fn flags_are_parsed() {
        let args =
            parse(&["--model", "llama3-8b", "--base-url", "http://localhost:8080/v1"]).unwrap();
        assert_eq!(args.model.as_deref(), Some("llama3-8b"));
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert!(!args.help);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(matches!(parse(&["--model"]), Err(ArgsError::MissingValue { flag: "--model" })));
        assert!(matches!(
            parse(&["--base-url", "localhost"]),
            Err(ArgsError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn flags_override_environment_config() {
        let args = parse(&["--model", "llama3-8b"]).unwrap();
        let config = args.apply(Some(LlmConfig::new("key"))).unwrap();
        assert_eq!(config.model, "llama3-8b");
        assert_eq!(config.base_url, services::llm::DEFAULT_BASE_URL);
    }

    #[test]
    fn flags_without_key_keep_model_disabled() {
        let args = parse(&["--model", "llama3-8b"]).unwrap();
        assert!(args.apply(None).is_none());
    }
}
