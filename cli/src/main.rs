//! Folio CLI - terminal host for the portfolio typewriter and site tools.
//!
//! # Commands
//!
//! ```text
//! folio type     Run the typewriter on the current terminal line
//! folio theme    Show or change the persisted color theme
//! folio contact  Send a message through the contact-form relay
//! ```
//!
//! # Typewriter loop
//!
//! The engine never sleeps itself. Timers run as tokio tasks that hand their
//! id back over a channel; the loop below is the only place the engine is
//! touched, so every mutation happens on one task:
//!
//! 1. Timer fired -> `Typewriter::fire`
//! 2. Terminal focus lost/gained -> `Typewriter::set_visibility`
//! 3. q / Esc / Ctrl-C, or the optional `--seconds` limit -> quit

mod terminal;

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_config::{ContactConfig, SiteConfig};
use folio_engine::{
    RelayClient, TargetMetadata, Theme, ThemeController, ThemeStore, TokioScheduler, Typewriter,
    TypewriterConfig, submit_contact_form,
};
use folio_types::ui::{ContactForm, NotificationCenter, SubmitButton};

use crate::terminal::{InputCommand, InputPump, TerminalSession, TerminalTarget};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio typewriter, theme and contact tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the typewriter in the terminal
    Type(TypeArgs),
    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Send a message through the contact-form relay
    Contact(ContactArgs),
}

#[derive(Args)]
struct TypeArgs {
    /// JSON array of words, e.g. '["Rust", "Go"]'
    #[arg(long)]
    words: Option<String>,
    /// Milliseconds to hold a finished word
    #[arg(long)]
    wait: Option<String>,
    /// Text printed before the animated word
    #[arg(long, default_value = "I am a ")]
    prefix: String,
    /// Stop after this many seconds
    #[arg(long)]
    seconds: Option<u64>,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Get,
    /// Persist a theme (default, dark, or any named palette)
    Set { name: String },
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
    /// Extra form field as key=value (repeatable)
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,
    /// Override the relay endpoint
    #[arg(long)]
    endpoint: Option<String>,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got {raw:?}")),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: prefer no logs over writing into the animated line.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(config_path) = SiteConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Ignoring config at {}: {err}", err.path().display());
            None
        }
    };

    match cli.command {
        Commands::Type(args) => run_typewriter(args, config.as_ref()).await,
        Commands::Theme { action } => {
            run_theme(action.unwrap_or(ThemeAction::Get), config.as_ref())
        }
        Commands::Contact(args) => run_contact(args, config.as_ref()).await,
    }
}

fn typewriter_config(args: &TypeArgs, config: Option<&SiteConfig>) -> TypewriterConfig {
    let section = config.and_then(|c| c.typewriter.as_ref());
    let defaults = section
        .map(folio_config::TypewriterConfig::settings)
        .unwrap_or_default();

    let metadata = TargetMetadata {
        words: args.words.clone(),
        wait: args.wait.clone(),
    };
    let mut resolved = TypewriterConfig::from_metadata(&metadata, defaults);

    if args.words.is_none()
        && let Some(words) = section.and_then(folio_config::TypewriterConfig::word_list)
    {
        resolved.words = words;
    }
    resolved
}

async fn run_typewriter(args: TypeArgs, config: Option<&SiteConfig>) -> Result<()> {
    let resolved = typewriter_config(&args, config);
    let seconds = args.seconds;
    let (scheduler, mut timers) = TokioScheduler::new();

    let _session = TerminalSession::new().context("failed to prepare terminal")?;
    let target = TerminalTarget::new(args.prefix);
    let mut engine = Typewriter::start(Some(target), scheduler, resolved)?;
    let mut input = InputPump::new();

    let limit = async {
        match seconds {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(limit);

    loop {
        tokio::select! {
            Some(id) = timers.recv() => {
                engine.fire(id);
                if engine.pending_timer().is_none() && !engine.is_paused() {
                    tracing::warn!("Typewriter stopped: render target detached");
                    break;
                }
            }
            command = input.recv() => match command {
                Some(InputCommand::Visibility(visibility)) => engine.set_visibility(visibility),
                Some(InputCommand::Quit) | None => break,
            },
            () = &mut limit => break,
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    input.shutdown().await;
    Ok(())
}

fn run_theme(action: ThemeAction, config: Option<&SiteConfig>) -> Result<()> {
    let store = ThemeStore::new(ThemeStore::default_path());
    match action {
        ThemeAction::Get => {
            let fallback = config
                .and_then(|c| c.theme.as_ref())
                .map(folio_config::ThemeConfig::default_theme)
                .unwrap_or_default();
            let controller = ThemeController::init(Some(store), fallback);
            println!("{}", controller.current());
        }
        ThemeAction::Set { name } => {
            let theme = Theme::parse(&name);
            store
                .save(&theme)
                .with_context(|| {
                    format!("failed to save theme to {}", store.path().display())
                })?;
            println!("{theme}");
        }
    }
    Ok(())
}

async fn run_contact(args: ContactArgs, config: Option<&SiteConfig>) -> Result<()> {
    let fallback = ContactConfig::default();
    let contact = config.and_then(|c| c.contact.as_ref()).unwrap_or(&fallback);

    let endpoint = args
        .endpoint
        .unwrap_or_else(|| contact.endpoint().to_string());
    let relay = RelayClient::new(endpoint, contact.access_key(), contact.timeout())?;

    let mut form = ContactForm::new()
        .with_field("name", args.name)
        .with_field("email", args.email)
        .with_field("message", args.message);
    for (key, value) in args.fields {
        form.set(key, value);
    }

    let mut button = SubmitButton::new("Send Message");
    let mut notifications = NotificationCenter::default();
    let result = submit_contact_form(&relay, &mut form, &mut button, &mut notifications).await;

    if let Some(notification) = notifications.current() {
        println!("{}", notification.message());
    }
    result.map(|_| ()).context("contact form was not delivered")
}
