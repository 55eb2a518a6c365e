use crate::domain::tts::{AudioOutputFormat, Gender};
use crate::infrastructure::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Authenticate against the speech service, synthesize the given text and
/// play it back.
///
/// Options must come before the API key; everything after the key is the
/// text to speak.
#[derive(Parser, Debug)]
#[command(name = "speak")]
#[command(override_usage = "speak [OPTIONS] <API_KEY> <TEXT>...")]
#[command(version)]
pub struct Cli {
    /// Subscription key exchanged for a bearer token
    pub api_key: String,

    /// What to say
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,

    /// Locale of the voice, e.g. en-US
    #[arg(long)]
    pub locale: Option<String>,

    /// Full service voice name
    #[arg(long)]
    pub voice: Option<String>,

    /// Voice gender (female or male)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Output format wire name, e.g. riff-16khz-16bit-mono-pcm
    #[arg(long)]
    pub format: Option<AudioOutputFormat>,

    /// Write the audio to this file instead of playing it
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Synthesis endpoint
    #[arg(long)]
    pub synthesis_url: Option<String>,

    /// Token endpoint
    #[arg(long)]
    pub token_url: Option<String>,
}

impl Cli {
    /// The words after the key, joined by single spaces
    pub fn text(&self) -> String {
        self.text.join(" ").trim_end().to_string()
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            token_url: self.token_url.clone(),
            synthesis_url: self.synthesis_url.clone(),
            locale: self.locale.clone(),
            voice_name: self.voice.clone(),
            gender: self.gender,
            output_format: self.format,
        }
    }
}
