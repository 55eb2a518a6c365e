use clap::Parser;
use speak::cli::Cli;
use speak::domain::auth::AuthService;
use speak::domain::tts::{TtsService, TtsServiceError, VoiceSettings};
use speak::error::{AppError, AppResult};
use speak::infrastructure::config::{Config, LogFormat};
use speak::infrastructure::playback::{AudioSink, FileSink};
use speak::infrastructure::repositories::{CognitiveTtsRepository, StsTokenRepository};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse arguments first: too few prints usage and exits before any other work
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env().and_then(|c| c.apply_overrides(cli.overrides())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    // Initialize logging
    init_logging(&config);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<()> {
    let text = cli.text();

    // 1. Instantiate repositories
    let token_repo = Arc::new(
        StsTokenRepository::new(config.token_url.clone(), config.request_timeout)
            .map_err(AppError::Internal)?,
    );
    let tts_repo =
        Arc::new(CognitiveTtsRepository::new(config.request_timeout).map_err(AppError::Internal)?);

    // 2. Pick the audio sink
    let audio_sink = audio_sink(&cli)?;

    // 3. Instantiate services
    let auth_service = Arc::new(AuthService::new(token_repo, config.token_lifetime)?);
    let tts_service = TtsService::new(
        auth_service,
        tts_repo,
        audio_sink,
        VoiceSettings::from(&config),
    );

    match tts_service.speak(&cli.api_key, &text).await {
        Ok(outcome) => {
            tracing::info!(
                audio_size_bytes = outcome.audio_size_bytes,
                output_format = %outcome.output_format,
                latency_ms = outcome.synthesis_latency.as_millis(),
                "TTS request completed"
            );
            Ok(())
        }
        Err(TtsServiceError::Authentication(e)) => {
            tracing::error!(error = %e, "Failed authentication");
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(error = %e, "Unable to complete the TTS request");
            Err(e.into())
        }
    }
}

fn audio_sink(cli: &Cli) -> AppResult<Arc<dyn AudioSink>> {
    if let Some(path) = &cli.output {
        return Ok(Arc::new(FileSink::new(path)));
    }

    #[cfg(feature = "playback")]
    return Ok(Arc::new(speak::infrastructure::playback::SpeakerSink::new()));

    #[cfg(not(feature = "playback"))]
    Err(AppError::BadRequest(
        "built without the playback feature; pass --output <FILE>".to_string(),
    ))
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speak=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speak=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
