use anyhow::Result;
use reqwest::Client;

const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama-3.3-70b-versatile";
const SYSTEM_PROMPT: &str =
    "You are a GDPR compliance expert. Provide detailed, accurate compliance analysis in JSON format.";

/// One blocking round trip to the Groq chat completions API. Returns the
/// first choice's message content as raw text; the caller decides what to
/// make of it.
pub async fn complete(api_key: &str, prompt: &str) -> Result<String> {
    let client = Client::new();

    let system_msg = serde_json::json!({
        "role": "system",
        "content": SYSTEM_PROMPT,
    });

    let user_msg = serde_json::json!({
        "role": "user",
        "content": prompt,
    });

    let request_body = serde_json::json!({
        "model": MODEL,
        "messages": [system_msg, user_msg],
        "max_tokens": 2000,
        "temperature": 0.3,
    });

    #[cfg(debug_assertions)]
    println!("📤 Request body: {:?}", request_body);

    let resp = client
        .post(GROQ_CHAT_URL)
        .bearer_auth(api_key)
        .json(&request_body)
        .send()
        .await?
        .error_for_status()?;

    let resp_json = resp.json::<serde_json::Value>().await?;

    let content = resp_json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("No content in AI response"))?;

    Ok(content.to_string())
}
