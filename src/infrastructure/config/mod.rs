use crate::domain::auth::MAX_TOKEN_LIFETIME;
use crate::domain::tts::{AudioOutputFormat, Gender};
use crate::error::AppError;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";
pub const DEFAULT_SYNTHESIS_URL: &str = "https://speech.platform.bing.com/synthesize";
pub const DEFAULT_LOCALE: &str = "zh-TW";
pub const DEFAULT_VOICE_NAME: &str =
    "Microsoft Server Speech Text to Speech Voice (zh-TW, Yating, Apollo)";

#[derive(Debug, Clone)]
pub struct Config {
    pub token_url: Url,
    pub synthesis_url: Url,
    pub locale: String,
    pub voice_name: String,
    pub gender: Gender,
    pub output_format: AudioOutputFormat,
    pub token_lifetime: Duration,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Values supplied on the command line that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token_url: Option<String>,
    pub synthesis_url: Option<String>,
    pub locale: Option<String>,
    pub voice_name: Option<String>,
    pub gender: Option<Gender>,
    pub output_format: Option<AudioOutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_url: Url::parse(DEFAULT_TOKEN_URL).expect("default token url is valid"),
            synthesis_url: Url::parse(DEFAULT_SYNTHESIS_URL)
                .expect("default synthesis url is valid"),
            locale: DEFAULT_LOCALE.to_string(),
            voice_name: DEFAULT_VOICE_NAME.to_string(),
            gender: Gender::Female,
            output_format: AudioOutputFormat::default(),
            token_lifetime: Duration::from_secs(540),
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            token_url: match lookup("SPEECH_TOKEN_URL") {
                Some(raw) => parse_url("SPEECH_TOKEN_URL", &raw)?,
                None => defaults.token_url,
            },
            synthesis_url: match lookup("SPEECH_SYNTHESIS_URL") {
                Some(raw) => parse_url("SPEECH_SYNTHESIS_URL", &raw)?,
                None => defaults.synthesis_url,
            },
            locale: lookup("SPEECH_LOCALE").unwrap_or(defaults.locale),
            voice_name: lookup("SPEECH_VOICE_NAME").unwrap_or(defaults.voice_name),
            gender: match lookup("SPEECH_VOICE_GENDER") {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| AppError::Config(format!("SPEECH_VOICE_GENDER: {}", e)))?,
                None => defaults.gender,
            },
            output_format: match lookup("SPEECH_OUTPUT_FORMAT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| AppError::Config(format!("SPEECH_OUTPUT_FORMAT: {}", e)))?,
                None => defaults.output_format,
            },
            token_lifetime: match lookup("SPEECH_TOKEN_LIFETIME_SECS") {
                Some(raw) => parse_token_lifetime(&raw)?,
                None => defaults.token_lifetime,
            },
            request_timeout: match lookup("SPEECH_REQUEST_TIMEOUT_SECS") {
                Some(raw) => parse_secs("SPEECH_REQUEST_TIMEOUT_SECS", &raw)?,
                None => defaults.request_timeout,
            },
            log_format: lookup("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(defaults.log_format),
        };

        Ok(config)
    }

    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, AppError> {
        if let Some(raw) = overrides.token_url {
            self.token_url = parse_url("--token-url", &raw)?;
        }
        if let Some(raw) = overrides.synthesis_url {
            self.synthesis_url = parse_url("--synthesis-url", &raw)?;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(voice_name) = overrides.voice_name {
            self.voice_name = voice_name;
        }
        if let Some(gender) = overrides.gender {
            self.gender = gender;
        }
        if let Some(format) = overrides.output_format {
            self.output_format = format;
        }
        Ok(self)
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::Config(format!("{}: invalid url '{}': {}", name, raw, e)))
}

fn parse_secs(name: &str, raw: &str) -> Result<Duration, AppError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{}: {}", name, e)))?;
    if secs == 0 {
        return Err(AppError::Config(format!("{} must be greater than zero", name)));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_token_lifetime(raw: &str) -> Result<Duration, AppError> {
    let lifetime = parse_secs("SPEECH_TOKEN_LIFETIME_SECS", raw)?;
    if lifetime > MAX_TOKEN_LIFETIME {
        return Err(AppError::Config(format!(
            "SPEECH_TOKEN_LIFETIME_SECS must be at most {}",
            MAX_TOKEN_LIFETIME.as_secs()
        )));
    }
    Ok(lifetime)
}
