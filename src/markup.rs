//! Keyboard layouts attached to outgoing messages and inline results.

use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WireError,
    wire::{FromWire, Object},
};

/// One of the keyboard-layout shapes a message can carry.
///
/// The family has no `type` discriminant on the wire; payloads resolve by
/// structure, in a fixed priority order: `inline_keyboard`, then `keyboard`,
/// then `remove_keyboard`, then `force_reply`. Anything else is an unknown
/// variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    KeyboardRemove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl FromWire for ReplyMarkup {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        if object.contains("inline_keyboard") {
            InlineKeyboardMarkup::from_wire(value).map(Self::InlineKeyboard)
        } else if object.contains("keyboard") {
            ReplyKeyboardMarkup::from_wire(value).map(Self::Keyboard)
        } else if object.contains("remove_keyboard") {
            ReplyKeyboardRemove::from_wire(value).map(Self::KeyboardRemove)
        } else if object.contains("force_reply") {
            ForceReply::from_wire(value).map(Self::ForceReply)
        } else {
            Err(WireError::UnknownVariant(value.clone()))
        }
    }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

/// Converts a button into a single-button inline keyboard.
impl From<InlineKeyboardButton> for ReplyMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        Self::InlineKeyboard(InlineKeyboardMarkup::single_button(button))
    }
}

/// This object represents an [inline keyboard][1] that appears right next to the message it belongs to.
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardmarkup
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self { inline_keyboard: vec![vec![button]] }
    }
}

impl FromWire for InlineKeyboardMarkup {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self { inline_keyboard: object.required("inline_keyboard")? })
    }
}

/// This object represents [one button of an inline keyboard][1].
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardbutton
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,

    /// HTTP or `tg://` URL to be opened when the button is pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
}

impl InlineKeyboardButton {
    pub fn new_url_button(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            callback_data: None,
            switch_inline_query: None,
        }
    }

    pub fn new_callback_button(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(callback_data.into()),
            switch_inline_query: None,
        }
    }
}

impl FromWire for InlineKeyboardButton {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            text: object.required_str("text")?,
            url: object.optional_non_default("url")?,
            callback_data: object.optional_non_default("callback_data")?,
            switch_inline_query: object.optional("switch_inline_query")?,
        })
    }
}

/// A [custom reply keyboard][1].
///
/// [1]: https://core.telegram.org/bots/api#replykeyboardmarkup
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl FromWire for ReplyKeyboardMarkup {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            keyboard: object.required("keyboard")?,
            resize_keyboard: object.optional_non_default("resize_keyboard")?,
            one_time_keyboard: object.optional_non_default("one_time_keyboard")?,
            selective: object.optional_non_default("selective")?,
        })
    }
}

/// One button of a reply keyboard.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct KeyboardButton {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
}

impl FromWire for KeyboardButton {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            text: object.required_str("text")?,
            request_contact: object.optional_non_default("request_contact")?,
            request_location: object.optional_non_default("request_location")?,
        })
    }
}

/// Instructs the client to [remove the custom keyboard][1].
///
/// [1]: https://core.telegram.org/bots/api#replykeyboardremove
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ReplyKeyboardRemove {
    /// Always `true`, the field doubles as the structural marker of the shape.
    pub remove_keyboard: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self { remove_keyboard: true, selective: None }
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

impl FromWire for ReplyKeyboardRemove {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            remove_keyboard: object.required("remove_keyboard")?,
            selective: object.optional_non_default("selective")?,
        })
    }
}

/// Forces the client to [display a reply interface][1].
///
/// [1]: https://core.telegram.org/bots/api#forcereply
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ForceReply {
    /// Always `true`, the field doubles as the structural marker of the shape.
    pub force_reply: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ForceReply {
    pub fn new() -> Self {
        Self { force_reply: true, selective: None }
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self::new()
    }
}

impl FromWire for ForceReply {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            force_reply: object.required("force_reply")?,
            selective: object.optional_non_default("selective")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn resolves_inline_keyboard_ok() -> Result {
        // language=json
        let value: Value = serde_json::from_str(
            r#"{"inline_keyboard": [[{"text": "View", "url": "https://example.org"}]]}"#,
        )?;
        let markup = ReplyMarkup::from_wire(&value)?;
        match &markup {
            ReplyMarkup::InlineKeyboard(keyboard) => {
                assert_eq!(keyboard.inline_keyboard[0][0].text, "View");
            }
            _ => unreachable!(),
        }
        assert_eq!(serde_json::to_value(&markup)?, value);
        Ok(())
    }

    #[test]
    fn resolves_keyboard_remove_ok() -> Result {
        let value = json!({"remove_keyboard": true});
        assert_eq!(
            ReplyMarkup::from_wire(&value)?,
            ReplyMarkup::KeyboardRemove(ReplyKeyboardRemove::new()),
        );
        Ok(())
    }

    #[test]
    fn resolves_force_reply_ok() -> Result {
        let value = json!({"force_reply": true, "selective": true});
        match ReplyMarkup::from_wire(&value)? {
            ReplyMarkup::ForceReply(force_reply) => {
                assert_eq!(force_reply.selective, Some(true));
            }
            _ => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn unresolvable_shape_fails() {
        let value = json!({"keyboards": []});
        assert!(matches!(
            ReplyMarkup::from_wire(&value).unwrap_err(),
            WireError::UnknownVariant(_),
        ));
    }

    #[test]
    fn button_omits_unset_fields_ok() -> Result {
        let button = InlineKeyboardButton::new_callback_button("Subscribe", "/subscribe 1");
        // language=json
        assert_eq!(
            serde_json::to_string(&button)?,
            r#"{"text":"Subscribe","callback_data":"/subscribe 1"}"#,
        );
        Ok(())
    }

    #[test]
    fn malformed_row_is_fatal() {
        let value = json!({"inline_keyboard": [[{"text": "ok"}], [{"text": 1}]]});
        assert!(matches!(
            ReplyMarkup::from_wire(&value).unwrap_err(),
            WireError::MalformedValue { .. },
        ));
    }
}
