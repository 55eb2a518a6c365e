use std::str::FromStr;

/// Audio encodings the synthesis endpoint can return.
///
/// The wire name is sent in the `X-Microsoft-OutputFormat` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioOutputFormat {
    Raw8Khz8BitMonoMULaw,
    Raw16Khz16BitMonoPcm,
    Riff8Khz8BitMonoMULaw,
    Riff16Khz16BitMonoPcm,
    #[default]
    Riff24Khz16BitMonoPcm,
    Ssml16Khz16BitMonoSilk,
    Raw16Khz16BitMonoTrueSilk,
    Ssml16Khz16BitMonoTts,
    Audio16Khz128KBitRateMonoMp3,
    Audio16Khz64KBitRateMonoMp3,
    Audio16Khz32KBitRateMonoMp3,
    Audio16Khz16KbpsMonoSiren,
    Riff16Khz16KbpsMonoSiren,
    Raw24Khz16BitMonoPcm,
    Audio24Khz48KBitRateMonoMp3,
    Audio24Khz96KBitRateMonoMp3,
    Audio24Khz160KBitRateMonoMp3,
}

impl AudioOutputFormat {
    pub const ALL: [AudioOutputFormat; 17] = [
        AudioOutputFormat::Raw8Khz8BitMonoMULaw,
        AudioOutputFormat::Raw16Khz16BitMonoPcm,
        AudioOutputFormat::Riff8Khz8BitMonoMULaw,
        AudioOutputFormat::Riff16Khz16BitMonoPcm,
        AudioOutputFormat::Riff24Khz16BitMonoPcm,
        AudioOutputFormat::Ssml16Khz16BitMonoSilk,
        AudioOutputFormat::Raw16Khz16BitMonoTrueSilk,
        AudioOutputFormat::Ssml16Khz16BitMonoTts,
        AudioOutputFormat::Audio16Khz128KBitRateMonoMp3,
        AudioOutputFormat::Audio16Khz64KBitRateMonoMp3,
        AudioOutputFormat::Audio16Khz32KBitRateMonoMp3,
        AudioOutputFormat::Audio16Khz16KbpsMonoSiren,
        AudioOutputFormat::Riff16Khz16KbpsMonoSiren,
        AudioOutputFormat::Raw24Khz16BitMonoPcm,
        AudioOutputFormat::Audio24Khz48KBitRateMonoMp3,
        AudioOutputFormat::Audio24Khz96KBitRateMonoMp3,
        AudioOutputFormat::Audio24Khz160KBitRateMonoMp3,
    ];

    /// Wire name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioOutputFormat::Raw8Khz8BitMonoMULaw => "raw-8khz-8bit-mono-mulaw",
            AudioOutputFormat::Raw16Khz16BitMonoPcm => "raw-16khz-16bit-mono-pcm",
            AudioOutputFormat::Riff8Khz8BitMonoMULaw => "riff-8khz-8bit-mono-mulaw",
            AudioOutputFormat::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
            AudioOutputFormat::Riff24Khz16BitMonoPcm => "riff-24khz-16bit-mono-pcm",
            AudioOutputFormat::Ssml16Khz16BitMonoSilk => "ssml-16khz-16bit-mono-silk",
            AudioOutputFormat::Raw16Khz16BitMonoTrueSilk => "raw-16khz-16bit-mono-truesilk",
            AudioOutputFormat::Ssml16Khz16BitMonoTts => "ssml-16khz-16bit-mono-tts",
            AudioOutputFormat::Audio16Khz128KBitRateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            AudioOutputFormat::Audio16Khz64KBitRateMonoMp3 => "audio-16khz-64kbitrate-mono-mp3",
            AudioOutputFormat::Audio16Khz32KBitRateMonoMp3 => "audio-16khz-32kbitrate-mono-mp3",
            AudioOutputFormat::Audio16Khz16KbpsMonoSiren => "audio-16khz-16kbps-mono-siren",
            AudioOutputFormat::Riff16Khz16KbpsMonoSiren => "riff-16khz-16kbps-mono-siren",
            AudioOutputFormat::Raw24Khz16BitMonoPcm => "raw-24khz-16bit-mono-pcm",
            AudioOutputFormat::Audio24Khz48KBitRateMonoMp3 => "audio-24khz-48kbitrate-mono-mp3",
            AudioOutputFormat::Audio24Khz96KBitRateMonoMp3 => "audio-24khz-96kbitrate-mono-mp3",
            AudioOutputFormat::Audio24Khz160KBitRateMonoMp3 => "audio-24khz-160kbitrate-mono-mp3",
        }
    }

    /// Whether the local decoder can play this container.
    /// Only RIFF PCM and MP3 carry enough framing for it.
    pub fn is_playable(&self) -> bool {
        matches!(
            self,
            AudioOutputFormat::Riff16Khz16BitMonoPcm
                | AudioOutputFormat::Riff24Khz16BitMonoPcm
                | AudioOutputFormat::Audio16Khz128KBitRateMonoMp3
                | AudioOutputFormat::Audio16Khz64KBitRateMonoMp3
                | AudioOutputFormat::Audio16Khz32KBitRateMonoMp3
                | AudioOutputFormat::Audio24Khz48KBitRateMonoMp3
                | AudioOutputFormat::Audio24Khz96KBitRateMonoMp3
                | AudioOutputFormat::Audio24Khz160KBitRateMonoMp3
        )
    }
}

impl std::fmt::Display for AudioOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| format!("unknown output format '{}'", s.trim()))
    }
}
