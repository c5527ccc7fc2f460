use monostate::MustBe;
use serde::Deserialize;
use serde_json::Value;

/// Failure while binding a wire payload to an entity, or while validating
/// an entity under construction.
#[derive(Debug, PartialEq, thiserror::Error)]
#[must_use]
pub enum WireError {
    /// A mandatory field is absent, `null`, or empty.
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    /// No declared variant of a polymorphic family matches the payload.
    ///
    /// Carries the raw mapping for diagnostics.
    #[error("no known variant matches the payload: {0}")]
    UnknownVariant(Value),

    /// A present value cannot be coerced to the declared shape.
    #[error("malformed value for field `{field}`: expected {expected}")]
    MalformedValue {
        /// Dot-joined path of the offending field.
        field: String,
        expected: &'static str,
    },
}

impl WireError {
    /// Attach the enclosing field name to a malformed-value error.
    ///
    /// Leaf coercions do not know which key they were looked up under, so the
    /// field path is built up while the error propagates outwards.
    pub(crate) fn with_field(self, key: &'static str) -> Self {
        match self {
            Self::MalformedValue { field, expected } => Self::MalformedValue {
                field: if field.is_empty() { key.to_owned() } else { format!("{key}.{field}") },
                expected,
            },
            other => other,
        }
    }
}

/// Telegram bot API [error][1].
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Debug, Deserialize, thiserror::Error)]
#[must_use]
#[serde(untagged)]
pub enum TelegramError {
    #[error("too many requests, retry after {} secs", retry_after.secs)]
    TooManyRequests {
        #[allow(dead_code)]
        ok: MustBe!(false),

        #[allow(dead_code)]
        error_code: MustBe!(429),

        #[serde(rename = "parameters")]
        retry_after: RetryAfterParameters,
    },

    #[error("({error_code}) {description}")]
    OtherApiError {
        #[allow(dead_code)]
        ok: MustBe!(false),

        description: String,
        error_code: i32,
    },
}

/// [Additional error details for exceeded rate limit][1].
///
/// [1]: https://core.telegram.org/bots/api#responseparameters
#[derive(Debug, Deserialize)]
pub struct RetryAfterParameters {
    #[serde(rename = "retry_after")]
    pub secs: u32,
}
