//! Config validation - warns about unknown fields

use serde_json::Value;
use tracing::warn;

/// Keys `ClientConfig` understands.
const KNOWN_KEYS: &[&str] = &["url", "username", "password", "token", "timeoutSecs"];

/// Warn about top-level keys the config does not use. Typos such as
/// `"user"` for `"username"` would otherwise be dropped silently.
pub fn warn_unknown_fields(content: &str, config_name: &str) {
    for key in unknown_fields(content) {
        warn!("Unknown config field in {config_name}: {key}");
    }
}

fn unknown_fields(content: &str) -> Vec<String> {
    let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(content) else {
        return Vec::new();
    };

    obj.keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect()
}
