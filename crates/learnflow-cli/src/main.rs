//! LearnFlow AR CLI
//!
//! Runs the analysis service or drives a full pipeline run over a source
//! file from the terminal.

use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use learnflow_pipeline::{
    HttpAnalysisService, Language, Orchestrator, PipelineConfig, PipelineEvent, PipelineState,
};
use learnflow_player::StepPlayer;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Default port for the analysis service.
const DEFAULT_PORT: u16 = 8001;

/// LearnFlow AR - Code Analysis Pipeline
///
/// Analyzes algorithm submissions, generates tiered solutions with an AR
/// walkthrough, evaluates code quality, and recommends a learning video.
#[derive(Parser, Debug)]
#[command(name = "learnflow")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the analysis service
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Analyze a source file through the full pipeline
    Analyze {
        /// Path to the source file to analyze
        #[arg(value_name = "FILE")]
        file: String,

        /// Language of the file (default: inferred from the extension)
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,

        /// Base URL of the analysis service (overrides the config file)
        #[arg(long, value_name = "URL")]
        service_url: Option<String>,

        /// Path to configuration file (default: learnflow.json in current directory)
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match args.command {
        Command::Serve { port } => run_serve(port).await,
        Command::Analyze {
            file,
            language,
            service_url,
            config,
        } => run_analyze(&file, language.as_deref(), service_url, config.as_deref()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Runs the analysis service until interrupted.
async fn run_serve(port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    let router = learnflow_service::create_router();

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {addr}: {e}\n\nSuggestion: Try a different port with --port"
        )
    })?;

    println!("Analysis service running on http://{addr}");
    println!("Press Ctrl+C to stop");
    tracing::info!(%addr, "Analysis service started");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Received Ctrl+C, shutting down");
        })
        .await?;

    Ok(())
}

/// Runs the full pipeline over one source file and prints the results.
async fn run_analyze(
    file: &str,
    language: Option<&str>,
    service_url: Option<String>,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(url) = service_url {
        config.service_url = url;
    }
    config.validate()?;

    let path = Path::new(file);
    let code = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read '{}': {e}\n\nSuggestion: Check the path and try again",
            path.display()
        )
    })?;

    let language = resolve_language(path, language)?;

    println!("Analyzing {} ({language})", path.display());
    println!("Service: {}", config.service_url);
    println!();

    let service = HttpAnalysisService::from_config(&config);
    let orchestrator = Orchestrator::with_config(service, config);

    // Follow pipeline events in the background for progress output.
    let mut events = orchestrator.subscribe();
    let event_task = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            print_event(&event);
        }
    });

    let outcome = orchestrator.submit(&code, language).await;
    let state = orchestrator.snapshot().await;
    event_task.abort();

    print_results(&state);

    outcome.map_err(|e| anyhow::anyhow!("{e}"))
}

/// Loads configuration from the specified path or default location.
fn load_config(config_path: Option<&str>) -> anyhow::Result<PipelineConfig> {
    match config_path {
        Some(path_str) => {
            let path = Path::new(path_str);
            if !path.exists() {
                anyhow::bail!(
                    "Config file not found: '{}'\n\nSuggestion: Check the path or remove the --config flag to use defaults",
                    path.display()
                );
            }
            PipelineConfig::load_from_file(path).map_err(|e| anyhow::anyhow!("{e}"))
        }
        None => PipelineConfig::load().map_err(|e| anyhow::anyhow!("{e}")),
    }
}

/// Resolves the submission language from the flag or the file extension.
fn resolve_language(path: &Path, flag: Option<&str>) -> anyhow::Result<Language> {
    if let Some(name) = flag {
        return Language::parse(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown language '{name}'\n\nSuggestion: Use one of: javascript, python, java, cpp, csharp"
            )
        });
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let language = match extension {
        "py" => Language::Python,
        "js" | "mjs" | "jsx" | "ts" => Language::Javascript,
        "java" => Language::Java,
        "cpp" | "cc" | "cxx" | "hpp" => Language::Cpp,
        "cs" => Language::Csharp,
        _ => anyhow::bail!(
            "Cannot infer language from '{}'\n\nSuggestion: Pass the language explicitly with --language",
            path.display()
        ),
    };
    Ok(language)
}

/// Prints progress for one pipeline event.
fn print_event(event: &PipelineEvent) {
    match event {
        PipelineEvent::AnalysisStarted { language } => {
            println!("Submitting {language} code for analysis...");
        }
        PipelineEvent::StageChanged { stage } => {
            tracing::debug!(%stage, "Stage changed");
        }
        PipelineEvent::AnalysisComplete { problem, solutions } => {
            println!("Detected problem: {problem} ({solutions} solutions generated)");
        }
        PipelineEvent::SubmissionFailed { stage, message } => {
            println!("Stage '{stage}' failed: {message}");
        }
        PipelineEvent::ViewInAr { solution } | PipelineEvent::WatchExplanation { solution } => {
            tracing::debug!(%solution, "User action event");
        }
    }
}

/// Prints everything the pipeline produced, including results retained from
/// a partially failed run.
fn print_results(state: &PipelineState) {
    if let Some(analysis) = &state.analysis {
        println!();
        println!("=== Analysis ===");
        println!("Detected language: {}", analysis.detected_language);
        println!("Problem: {}", analysis.problem_detected);
        println!(
            "Your code: {} ({}, score {})",
            analysis.analysis.solution_type,
            analysis.analysis.time_complexity,
            analysis.analysis.score
        );

        println!();
        println!("=== Solutions ===");
        for solution in &analysis.solutions {
            println!(
                "[{}] {} - {} (efficiency {})",
                solution.kind, solution.title, solution.time_complexity, solution.efficiency
            );
        }

        if let Some(payload) = &analysis.ar_payload {
            print_ar_walkthrough(payload);
        }
    }

    if let Some(evaluation) = &state.evaluation {
        println!();
        println!("=== Evaluation ===");
        println!(
            "Overall: {} (grade {})",
            evaluation.overall_score, evaluation.grade
        );
        for metric in &evaluation.metrics {
            println!("  {}: {}/{}", metric.name, metric.score, metric.max_score);
        }
    }

    if let Some(video) = &state.video {
        println!();
        println!("=== Recommended Video ===");
        println!("{} ({})", video.title, video.duration);
        println!("https://www.youtube.com/watch?v={}", video.youtube_id);
    }

    if let Some(failure) = &state.last_error {
        println!();
        println!(
            "Pipeline stopped at the '{}' stage: {}",
            failure.stage, failure.message
        );
        println!("Results shown above were completed before the failure.");
    }
}

/// Walks the AR scene step by step in text form.
fn print_ar_walkthrough(payload: &learnflow_player::ArPayload) {
    if payload.is_empty() {
        return;
    }

    println!();
    println!("=== AR Walkthrough: {} ===", payload.scene);
    println!("{}", payload.explanation_overlay);

    let mut player = StepPlayer::new();
    player.load_payload(Arc::new(payload.clone()));

    for _ in 0..payload.step_count() {
        if let Some(step) = player.current_step_data() {
            match player.active_node_id() {
                Some(node) => println!("  Step {}: {} -> {node}", step.step, step.action),
                None => println!("  Step {}: {}", step.step, step.action),
            }
        }
        player.next();
    }
}
