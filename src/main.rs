use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resume_filter_client::app_state::AppState;
use resume_filter_client::config::AppConfig;
use resume_filter_client::models::resume::ResumeCandidate;
use resume_filter_client::models::submission::SubmissionStatus;
use resume_filter_client::services::intake::{self, IntakeError, IntakeNotice};
use resume_filter_client::services::logger::TracingLogger;
use resume_filter_client::services::scoring::ScoringClient;
use resume_filter_client::views;

/// Exit status for bad configuration or unusable input paths.
const USAGE_ERROR: u8 = 2;

#[derive(Parser)]
#[command(
    name = "resume-filter",
    version,
    about = "Shortlist resume PDFs against a job description"
)]
struct Cli {
    /// Base URL of the scoring service (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Request timeout in milliseconds (overrides REQUEST_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload resumes and a job description, then print the shortlist
    Submit(SubmitArgs),
    /// Validate files locally without contacting the service
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct SubmitArgs {
    /// Resume files to upload
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Job description text
    #[arg(long, conflicts_with = "job_description_file")]
    job_description: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    job_description_file: Option<PathBuf>,

    /// Print the raw service response as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match AppConfig::from_env()
        .and_then(|c| c.with_overrides(cli.api_base_url.clone(), cli.timeout_ms))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(USAGE_ERROR));
        }
    };

    match cli.command {
        Command::Check { files } => check(&files).await,
        Command::Submit(args) => submit(&config, args).await,
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn read_all(paths: &[PathBuf]) -> Result<Vec<ResumeCandidate>, IntakeError> {
    let mut candidates = Vec::with_capacity(paths.len());
    for path in paths {
        candidates.push(intake::read_candidate(path).await?);
    }
    Ok(candidates)
}

fn usage_error(err: anyhow::Error) -> ExitCode {
    eprintln!("{:#}", err);
    ExitCode::from(USAGE_ERROR)
}

async fn check(paths: &[PathBuf]) -> Result<ExitCode> {
    let candidates = match read_all(paths).await {
        Ok(candidates) => candidates,
        Err(e) => return Ok(usage_error(e.into())),
    };
    let outcome = intake::intake(candidates, &TracingLogger);

    for candidate in &outcome.accepted {
        println!("accepted  {}", candidate.name);
    }
    for err in outcome.rejected() {
        println!("rejected  {}", err);
    }

    Ok(if outcome.accepted.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn submit(config: &AppConfig, args: SubmitArgs) -> Result<ExitCode> {
    let logger = Arc::new(TracingLogger);
    let client = ScoringClient::new(config.client_config(), logger.clone())
        .context("Failed to initialize scoring client")?;
    let mut state = AppState::new(logger);

    // With --json, stdout carries the response document only.
    let show = |text: &str| {
        if args.json {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    };

    // Upload view
    let selected = state
        .uploads
        .picker_mut()
        .select(args.files.iter().map(PathBuf::as_path));
    let candidates = match read_all(&selected).await {
        Ok(candidates) => candidates,
        Err(e) => return Ok(usage_error(e.into())),
    };
    let outcome = state.upload(candidates);
    for notice in &outcome.notices {
        match notice {
            IntakeNotice::Rejected(_) => eprintln!("{}", notice),
            IntakeNotice::Accepted { .. } => show(&notice.to_string()),
        }
    }
    show(&views::render(&state));

    // Job description view
    let text = match (&args.job_description, &args.job_description_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                let err = anyhow::Error::new(e)
                    .context(format!("Failed to read job description from {}", path.display()));
                return Ok(usage_error(err));
            }
        },
        (None, None) => String::new(),
    };
    state.show_job_description();
    state.set_job_description(text);

    tracing::info!(
        files = state.uploads.len(),
        bytes = state.uploads.total_bytes(),
        endpoint = %client.config().base_url,
        "Submitting resumes for filtering"
    );

    state.submit(&client).await?;
    let code = match state.status() {
        SubmissionStatus::Succeeded(response) if args.json => {
            println!("{}", serde_json::to_string_pretty(response)?);
            ExitCode::SUCCESS
        }
        SubmissionStatus::Succeeded(_) => {
            println!("{}", views::render(&state));
            ExitCode::SUCCESS
        }
        SubmissionStatus::Failed(error) => {
            eprintln!("{}", error);
            tracing::debug!(kind = %error.kind(), "Submission failed");
            ExitCode::FAILURE
        }
        SubmissionStatus::Idle | SubmissionStatus::InFlight => ExitCode::FAILURE,
    };
    Ok(code)
}
