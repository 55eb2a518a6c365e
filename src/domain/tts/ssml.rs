use super::SynthesisRequest;

/// Render the SSML document posted to the synthesis endpoint
pub fn render(request: &SynthesisRequest) -> String {
    let locale = escape(&request.locale);
    format!(
        "<speak version='1.0' xml:lang='{locale}'><voice xml:lang='{locale}' xml:gender='{gender}' name='{voice}'>{text}</voice></speak>",
        locale = locale,
        gender = request.gender,
        voice = escape(&request.voice_name),
        text = escape(&request.text),
    )
}

/// Escape the five XML special characters
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
