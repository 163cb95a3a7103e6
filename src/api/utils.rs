use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
    headers: &[(&str, &str)],
) -> Result<Value> {
    let url = format!("{}/{}?{}", base_url.trim_end_matches('/'), endpoint, params);
    let mut request = client.get(&url);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    tracing::debug!(endpoint, "sending provider request");
    let res = request
        .send()
        .await
        .with_context(|| format!("Request to {} failed", endpoint))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!(
            "Request to {} failed: {}",
            endpoint,
            res.status()
        )));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)
        .with_context(|| format!("Response from {} is not valid JSON", endpoint))?;

    Ok(data)
}

/// Deserializes every element of a JSON array. An empty array is a valid
/// answer and yields an empty vector.
pub fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).with_context(|| error_msg.to_string()))
            .collect(),
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
