//! Command-line front end for voice-authenticated signup and login.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse the command line.
//! 3. Load [`AppConfig`] (defaults on first run) and apply CLI overrides.
//! 4. Create a single-threaded [`tokio`] runtime; the cpal stream is not
//!    `Send`, so the form never leaves this thread.
//! 5. Preflight `GET /health`.
//! 6. Record with Enter-to-start / Enter-to-stop, then submit.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use voice_auth::{
    audio::{CaptureEngine, CpalMicrophone},
    client::{HttpSubmissionClient, SubmissionClient, SubmissionError, SubmissionSuccess},
    config::{AppConfig, AppPaths},
    flow::{AuthForm, AuthMode, FormError},
};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

type Input = Lines<BufReader<Stdin>>;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "voice-auth")]
#[command(about = "Sign up or log in with a password and a spoken voice phrase")]
struct Cli {
    /// Verification backend URL (overrides settings.toml)
    #[arg(long, env = "VOICE_AUTH_URL")]
    base_url: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and enroll your voice phrase
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "VOICE_AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in with your password and voice phrase
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "VOICE_AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Check that the backend is reachable
    Health,
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Command line
    let cli = Cli::parse();

    // 3. Configuration
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    if let Some(url) = cli.base_url {
        config.backend.base_url = url;
    }

    // 4. Runtime
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    rt.block_on(run(cli.command, config))
}

async fn run(command: Command, config: AppConfig) -> Result<()> {
    let client = HttpSubmissionClient::from_config(&config.backend, &config.capture);

    // 5. Preflight
    match (&command, client.health().await) {
        (Command::Health, Ok(())) => {
            println!("backend at {} is healthy", client.base_url());
            return Ok(());
        }
        (Command::Health, Err(e)) => bail!("backend at {} is unhealthy: {e}", client.base_url()),
        (_, Err(e)) => log::warn!("health check against {} failed: {e}", client.base_url()),
        (_, Ok(())) => log::info!("backend at {} is healthy", client.base_url()),
    }

    // 6. Form
    let engine = CaptureEngine::new(CpalMicrophone::from_config(&config.capture))
        .with_preview_dir(AppPaths::new().preview_dir)
        .with_max_recording(config.capture.max_recording());

    let (mode, name, email, password) = match command {
        Command::Signup {
            name,
            email,
            password,
        } => (AuthMode::SignUp, Some(name), email, password),
        Command::Login { email, password } => (AuthMode::SignIn, None, email, password),
        Command::Health => return Ok(()),
    };

    let client: Arc<dyn SubmissionClient> = Arc::new(client);
    let mut form = AuthForm::new(mode, engine, client);
    if let Some(name) = name {
        form.set_name(name);
    }
    form.set_email(email);
    form.set_password(password);

    interact(form).await
}

// ---------------------------------------------------------------------------
// Interactive loop
// ---------------------------------------------------------------------------

async fn interact(mut form: AuthForm<CpalMicrophone>) -> Result<()> {
    let mut input: Input = BufReader::new(tokio::io::stdin()).lines();
    let mode = form.mode();

    loop {
        let Some(answer) = prompt(
            &mut input,
            "Press Enter to start recording your voice phrase (q to quit): ",
        )
        .await?
        else {
            return Ok(());
        };
        if answer.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        if let Err(e) = record(&mut form, &mut input).await {
            eprintln!("{e}");
            form.reset_capture();
            continue;
        }

        let view = form.view();
        if let Some(bytes) = view.sample_bytes {
            println!("Recorded {bytes} bytes.");
        }
        if let Some(url) = &view.preview_url {
            println!("Listen to your recording: {url}");
        }

        loop {
            let Some(choice) = prompt(&mut input, "[s]ubmit, [r]e-record or [q]uit? ").await?
            else {
                return Ok(());
            };

            match choice.to_ascii_lowercase().as_str() {
                "s" | "" => {
                    let result = match mode {
                        AuthMode::SignUp => form.submit_signup().await,
                        AuthMode::SignIn => form.submit_login().await,
                    };
                    match result {
                        Ok(ok) => {
                            report_success(mode, &ok);
                            return Ok(());
                        }
                        Err(FormError::Submission(e)) => {
                            report_failure(&e);
                            break;
                        }
                        Err(e) => {
                            eprintln!("{e}");
                            break;
                        }
                    }
                }
                "r" => {
                    form.reset_capture();
                    break;
                }
                "q" => return Ok(()),
                _ => continue,
            }
        }
    }
}

/// Run one recording until Enter is pressed or the length limit stops it.
async fn record(form: &mut AuthForm<CpalMicrophone>, input: &mut Input) -> Result<(), FormError> {
    form.start_capture().await?;
    println!("Recording... press Enter to stop.");

    let mut tick = tokio::time::interval(POLL_INTERVAL);
    loop {
        tokio::select! {
            _ = input.next_line() => {
                return form.stop_capture().await;
            }
            _ = tick.tick() => {
                if form.poll_capture().await? {
                    println!("Maximum recording length reached.");
                    return Ok(());
                }
            }
        }
    }
}

async fn prompt(input: &mut Input, text: &str) -> Result<Option<String>> {
    use std::io::Write;

    print!("{text}");
    std::io::stdout().flush().context("failed to write prompt")?;

    let line = input.next_line().await.context("failed to read stdin")?;
    Ok(line.map(|l| l.trim().to_string()))
}

fn report_success(mode: AuthMode, ok: &SubmissionSuccess) {
    match mode {
        AuthMode::SignUp => println!("Account created."),
        AuthMode::SignIn => println!("Login successful."),
    }
    if let Some(message) = ok.message() {
        println!("{message}");
    }
    if let Some(user) = ok.user() {
        let who = user.name.or(user.email).unwrap_or_default();
        println!("Welcome, {who}.");
    }
    if let Some(similarity) = ok.similarity() {
        println!("Voice similarity: {similarity:.2}");
    }
    if let Some(heard) = ok.transcription() {
        println!("Phrase heard: \"{heard}\"");
    }
}

fn report_failure(e: &SubmissionError) {
    eprintln!("{e}");
    if e.is_retryable() {
        eprintln!("Check your connection, then record and submit again.");
    } else {
        eprintln!("Record your phrase again to retry.");
    }
}
