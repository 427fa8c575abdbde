//! Turns transport outcomes into conversation messages

use serde_json::Value;

use crate::constants::NO_CONTENT_TEXT;
use crate::error::PipelineError;
use crate::messages::network::{NetworkResponse, ResponseBody};
use crate::models::DisplayMessage;

/// Classify a transport outcome
pub fn classify(outcome: &NetworkResponse) -> DisplayMessage {
    match outcome_to_result(outcome) {
        Ok(message) => message,
        Err(err) => err.to_message(),
    }
}

fn outcome_to_result(outcome: &NetworkResponse) -> Result<DisplayMessage, PipelineError> {
    let (status, body) = match outcome {
        NetworkResponse::Failed { message, .. } => {
            return Err(PipelineError::Transport(message.clone()));
        }
        NetworkResponse::Completed { status, body, .. } => (*status, body),
    };

    // 204 carries no content whatever the body says
    if status == 204 {
        return Ok(DisplayMessage::bot_text(NO_CONTENT_TEXT));
    }

    // A body that does not decode is a broken response, whatever the status
    let value = match body {
        ResponseBody::Json(value) => value,
        ResponseBody::Malformed { error, .. } => {
            return Err(PipelineError::Transport(error.clone()));
        }
    };

    if !is_success(status) {
        return Err(PipelineError::Api {
            status,
            message: error_details(value),
        });
    }

    Ok(DisplayMessage::bot_code(pretty(value)))
}

/// 2xx only; redirects count as errors
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// `details`, else `error`, else the whole body
fn error_details(value: &Value) -> String {
    ["details", "error"]
        .iter()
        .filter_map(|key| value.get(key))
        .find(|v| is_truthy(v))
        .map(field_text)
        .unwrap_or_else(|| value.to_string())
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
