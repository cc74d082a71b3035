use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use squaring_core::Clock;
use squaring_core::model::{PracticeSettings, SettingsError};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const FEEDBACK_MS_ENV: &str = "SQUARING_FEEDBACK_MS";
const REVEAL_AFTER_ENV: &str = "SQUARING_REVEAL_AFTER";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { input: &'static str, raw: String },
    Settings(SettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { input, raw } => {
                write!(f, "invalid {input} value: {raw}")
            }
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<SettingsError> for ArgsError {
    fn from(err: SettingsError) -> Self {
        ArgsError::Settings(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(input: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { input, raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--feedback-ms <ms>] [--reveal-after <attempts>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!(
        "  --feedback-ms {}",
        PracticeSettings::DEFAULT_FEEDBACK_WINDOW_MS
    );
    eprintln!("  --reveal-after {}", PracticeSettings::DEFAULT_REVEAL_AFTER);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {FEEDBACK_MS_ENV}, {REVEAL_AFTER_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Args {
    settings: PracticeSettings,
}

impl Args {
    /// Parses command-line flags on top of environment defaults.
    ///
    /// Returns `Ok(None)` when help was requested.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut feedback_ms = env(FEEDBACK_MS_ENV)
            .map(|raw| parse_number(FEEDBACK_MS_ENV, raw))
            .transpose()?
            .unwrap_or(PracticeSettings::DEFAULT_FEEDBACK_WINDOW_MS);
        let mut reveal_after = env(REVEAL_AFTER_ENV)
            .map(|raw| parse_number(REVEAL_AFTER_ENV, raw))
            .transpose()?
            .unwrap_or(PracticeSettings::DEFAULT_REVEAL_AFTER);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--feedback-ms" => {
                    let value = require_value(&mut args, "--feedback-ms")?;
                    feedback_ms = parse_number("--feedback-ms", value)?;
                }
                "--reveal-after" => {
                    let value = require_value(&mut args, "--reveal-after")?;
                    reveal_after = parse_number("--reveal-after", value)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let settings = PracticeSettings::new(feedback_ms, reveal_after)?;
        Ok(Some(Self { settings }))
    }
}

struct DesktopApp {
    settings: PracticeSettings,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> PracticeSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let Some(args) = parsed else {
        print_usage();
        return Ok(());
    };

    info!(
        feedback_ms = args.settings.feedback_window_ms(),
        reveal_after = args.settings.reveal_after(),
        "launching squaring practice"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings: args.settings,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Squaring Practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
