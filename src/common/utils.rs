// src/common/utils.rs
use crate::common::ScreenerError;
use serde_json::Value;

// Parse a string to a f64, return a ScreenerError if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, ScreenerError> {
    value
        .parse::<f64>()
        .map_err(|_| ScreenerError::ApiError(format!("Invalid {} format", field_name)))
}

// Exchanges send numbers either as JSON numbers or as quoted decimals
pub fn value_to_f64(value: &Value, field_name: &str) -> Result<f64, ScreenerError> {
    match value {
        Value::String(s) => parse_f64(s, field_name),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ScreenerError::ApiError(format!("Invalid {} format", field_name))),
        _ => Err(ScreenerError::ApiError(format!(
            "Invalid {} format",
            field_name
        ))),
    }
}

// Escape Telegram legacy Markdown control characters outside of an entity
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

// Legacy Markdown cannot escape inside a code span, so backticks are dropped
pub fn code_span(text: &str) -> String {
    format!("`{}`", text.replace('`', ""))
}
