use crate::errors::LookupError;
use reqwest::Client;
use serde_json::{Map, Value};

#[cfg(feature = "tracing")]
use tracing::{debug, instrument, warn};

pub type JsonObject = Map<String, Value>;

/// GETs `url` and decodes the body as a JSON object.
#[cfg_attr(feature = "tracing", instrument(skip(client)))]
pub async fn fetch_json(
    client: &Client,
    provider: &'static str,
    url: &str,
) -> Result<JsonObject, LookupError> {
    #[cfg(feature = "tracing")]
    debug!(%url, "Sending request");

    let res = client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        warn!(status = ?status, "Provider returned error");
        return Err(LookupError::ApiError { provider, status });
    }

    let body = res.text().await?;
    match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(map)) => {
            #[cfg(feature = "tracing")]
            debug!(status = ?status, fields = map.len(), "Provider request successful");
            Ok(map)
        }
        Ok(other) => Err(LookupError::Decode {
            provider,
            reason: format!("expected a JSON object, got {}", kind_of(&other)),
        }),
        Err(e) => Err(LookupError::Decode {
            provider,
            reason: e.to_string(),
        }),
    }
}

/// Renders a JSON value as display text. Falsy values (null, `false`, zero,
/// empty strings and containers) yield `None`.
pub fn non_empty(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_values_are_skipped() {
        assert_eq!(non_empty(&json!(null)), None);
        assert_eq!(non_empty(&json!("")), None);
        assert_eq!(non_empty(&json!(false)), None);
        assert_eq!(non_empty(&json!([])), None);
        assert_eq!(non_empty(&json!({})), None);
        assert_eq!(non_empty(&json!(0)), None);
        assert_eq!(non_empty(&json!(0.0)), None);
    }

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(non_empty(&json!("Berlin")).as_deref(), Some("Berlin"));
        assert_eq!(non_empty(&json!(52.52)).as_deref(), Some("52.52"));
        assert_eq!(non_empty(&json!(-0.5)).as_deref(), Some("-0.5"));
        assert_eq!(non_empty(&json!(true)).as_deref(), Some("true"));
    }
}
