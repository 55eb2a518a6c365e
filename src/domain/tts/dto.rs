use super::{AudioOutputFormat, Gender};
use reqwest::Url;

/// Everything the synthesis endpoint needs for a single call
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub request_uri: Url,
    pub text: String,
    pub locale: String,
    pub voice_name: String,
    pub gender: Gender,
    pub output_format: AudioOutputFormat,
    /// Full `Authorization` header value, `Bearer <token>`
    pub authorization_token: String,
}

impl SynthesisRequest {
    pub fn builder(request_uri: Url) -> SynthesisRequestBuilder {
        SynthesisRequestBuilder {
            request_uri,
            text: None,
            locale: None,
            voice_name: None,
            gender: Gender::Female,
            output_format: AudioOutputFormat::default(),
            authorization_token: None,
        }
    }
}

#[derive(Debug)]
pub struct SynthesisRequestBuilder {
    request_uri: Url,
    text: Option<String>,
    locale: Option<String>,
    voice_name: Option<String>,
    gender: Gender,
    output_format: AudioOutputFormat,
    authorization_token: Option<String>,
}

impl SynthesisRequestBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn voice_name(mut self, voice_name: impl Into<String>) -> Self {
        self.voice_name = Some(voice_name.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn output_format(mut self, output_format: AudioOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn authorization_token(mut self, header_value: impl Into<String>) -> Self {
        self.authorization_token = Some(header_value.into());
        self
    }

    /// Fails unless every field is populated
    pub fn build(self) -> Result<SynthesisRequest, String> {
        let text = non_empty("text", self.text)?;
        let locale = non_empty("locale", self.locale)?;
        let voice_name = non_empty("voice name", self.voice_name)?;
        let authorization_token = non_empty("authorization token", self.authorization_token)?;

        Ok(SynthesisRequest {
            request_uri: self.request_uri,
            text,
            locale,
            voice_name,
            gender: self.gender,
            output_format: self.output_format,
            authorization_token,
        })
    }
}

fn non_empty(field: &str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{} must not be empty", field)),
    }
}
