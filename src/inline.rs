//! Inline mode: queries, chosen results, and the result/content families.

pub mod content;
pub mod result;

use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WireError,
    objects::{Location, User},
    wire::{FromWire, Object},
};

/// An incoming [inline query][1].
///
/// [1]: https://core.telegram.org/bots/api#inlinequery
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQuery {
    /// Unique identifier for this query.
    pub id: String,

    /// Sender.
    pub from: User,

    /// Text of the query, up to 512 characters. May be empty.
    pub query: String,

    /// Offset of the results to be returned, controlled by the bot.
    pub offset: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl FromWire for InlineQuery {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            from: object.required("from")?,
            query: object.optional("query")?.unwrap_or_default(),
            offset: object.optional("offset")?.unwrap_or_default(),
            location: object.optional("location")?,
        })
    }
}

/// A [result of an inline query][1] that was chosen by the user.
///
/// [1]: https://core.telegram.org/bots/api#choseninlineresult
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ChosenInlineResult {
    /// The unique identifier of the chosen result.
    pub result_id: String,

    pub from: User,

    /// The query that was used to obtain the result.
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
}

impl FromWire for ChosenInlineResult {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            result_id: object.required_str("result_id")?,
            from: object.required("from")?,
            query: object.optional("query")?.unwrap_or_default(),
            location: object.optional("location")?,
            inline_message_id: object.optional_non_default("inline_message_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn inline_query_ok() -> Result {
        // language=json
        let value: Value = serde_json::from_str(
            r#"{"id": "274", "from": {"id": 1}, "query": "norah jones", "offset": ""}"#,
        )?;
        let query = InlineQuery::from_wire(&value)?;
        assert_eq!(query.query, "norah jones");
        assert_eq!(query.offset, "");
        assert_eq!(query.location, None);
        Ok(())
    }

    #[test]
    fn chosen_inline_result_ok() -> Result {
        // language=json
        let value: Value = serde_json::from_str(
            r#"{"result_id": "1", "from": {"id": 1}, "query": "q", "inline_message_id": "m1"}"#,
        )?;
        let chosen = ChosenInlineResult::from_wire(&value)?;
        assert_eq!(chosen.result_id, "1");
        assert_eq!(chosen.inline_message_id.as_deref(), Some("m1"));
        Ok(())
    }
}
