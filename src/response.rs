use monostate::MustBe;
use serde::Deserialize;
use serde_json::Value;

use crate::error::TelegramError;

/// Telegram bot API [response envelope][1].
///
/// The `result` payload stays a raw JSON value here; the caller routes it
/// through the entity decoder once the envelope is unwrapped.
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Debug, Deserialize)]
#[must_use]
#[serde(untagged)]
pub enum ApiResponse {
    Ok { ok: MustBe!(true), result: Value },
    Err(TelegramError),
}

impl ApiResponse {
    pub fn into_result(self) -> Result<Value, TelegramError> {
        match self {
            Self::Ok { result, .. } => Ok(result),
            Self::Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn response_ok() -> Result {
        // language=json
        let response: ApiResponse = serde_json::from_str(r#"{"ok": true, "result": 42}"#)?;
        assert_eq!(response.into_result()?, Value::from(42));
        Ok(())
    }

    #[test]
    fn response_error_ok() -> Result {
        // language=json
        let response: ApiResponse = serde_json::from_str(
            r#"{"ok": false, "description": "Bad Request: chat not found", "error_code": 400}"#,
        )?;
        match response.into_result() {
            Err(TelegramError::OtherApiError { error_code, description, .. }) => {
                assert_eq!(error_code, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            _ => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn response_rate_limited_ok() -> Result {
        // language=json
        let response: ApiResponse = serde_json::from_str(
            r#"{"ok": false, "error_code": 429, "description": "Too Many Requests", "parameters": {"retry_after": 14}}"#,
        )?;
        match response.into_result() {
            Err(TelegramError::TooManyRequests { retry_after, .. }) => {
                assert_eq!(retry_after.secs, 14);
            }
            _ => unreachable!(),
        }
        Ok(())
    }
}
