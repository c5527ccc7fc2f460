//! Core API entities: users, chats, messages, places and updates.
//!
//! Incoming composites are permissive on purpose: beyond identifiers, fields
//! are optional at the type level, and unknown wire keys are ignored.

use bon::Builder;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WireError,
    inline::{ChosenInlineResult, InlineQuery},
    markup::ReplyMarkup,
    media::{Audio, Document, PhotoSize, Video, Voice},
    wire::{FromWire, Object},
};

/// This object represents a Telegram user or bot.
///
/// See also: <https://core.telegram.org/bots/api#user>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct User {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl FromWire for User {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required("id")?,
            first_name: object.optional_non_default("first_name")?,
            last_name: object.optional_non_default("last_name")?,
            username: object.optional_non_default("username")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Chat {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl FromWire for Chat {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required("id")?,
            title: object.optional_non_default("title")?,
            username: object.optional_non_default("username")?,
        })
    }
}

/// Either a numeric chat identifier or a `@channelusername`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Integer(id)
    }
}

/// A point on the map.
///
/// See also: <https://core.telegram.org/bots/api#location>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl FromWire for Location {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            longitude: object.required("longitude")?,
            latitude: object.required("latitude")?,
        })
    }
}

/// A phone contact.
///
/// See also: <https://core.telegram.org/bots/api#contact>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl FromWire for Contact {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            phone_number: object.required_str("phone_number")?,
            first_name: object.required_str("first_name")?,
            last_name: object.optional_non_default("last_name")?,
            user_id: object.optional("user_id")?,
        })
    }
}

/// A venue: a location with a title and an address.
///
/// See also: <https://core.telegram.org/bots/api#venue>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}

impl FromWire for Venue {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            location: object.required("location")?,
            title: object.required_str("title")?,
            address: object.required_str("address")?,
            foursquare_id: object.optional_non_default("foursquare_id")?,
        })
    }
}

/// This object represents a [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Message {
    #[serde(rename = "message_id")]
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,

    /// Unix time the message was sent at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    /// Available sizes of an attached photo.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<PhotoSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl FromWire for Message {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required("message_id")?,
            from: object.optional("from")?,
            date: object.optional("date")?,
            chat: object.optional("chat")?,
            text: object.optional_non_default("text")?,
            audio: object.optional("audio")?,
            document: object.optional("document")?,
            photo: object.optional("photo")?.unwrap_or_default(),
            voice: object.optional("voice")?,
            video: object.optional("video")?,
            location: object.optional("location")?,
            contact: object.optional("contact")?,
            venue: object.optional("venue")?,
            reply_markup: object.optional("reply_markup")?,
        })
    }
}

/// This object represents an incoming [update][1].
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Update {
    /// The update's unique identifier.
    ///
    /// Update identifiers start from a certain positive number and increase sequentially.
    #[serde(rename = "update_id")]
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
}

impl FromWire for Update {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required("update_id")?,
            message: object.optional("message")?,
            inline_query: object.optional("inline_query")?,
            chosen_inline_result: object.optional("chosen_inline_result")?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[must_use]
pub enum ParseMode {
    /// [HTML style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#html-style
    #[serde(rename = "HTML")]
    Html,

    #[serde(rename = "Markdown")]
    Markdown,
}

impl FromWire for ParseMode {
    const EXPECTED: &'static str = "parse mode";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        match value.as_str() {
            Some("HTML") => Ok(Self::Html),
            Some("Markdown") => Ok(Self::Markdown),
            _ => Err(WireError::MalformedValue { field: String::new(), expected: Self::EXPECTED }),
        }
    }
}

/// Describes the [options][1] used for link preview generation.
///
/// [1]: https://core.telegram.org/bots/api#linkpreviewoptions
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize)]
#[must_use]
pub struct LinkPreviewOptions {
    /// `true`, if the link preview is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    /// URL to use for the link preview.
    ///
    /// If empty, then the first URL found in the message text will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `true`, if the link preview must be shown above the message text;
    /// otherwise, the link preview will be shown below the message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_above_text: Option<bool>,
}

impl LinkPreviewOptions {
    pub const DISABLED: Self =
        Self { is_disabled: Some(true), url: None, show_above_text: None };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn message_round_trip_ok() -> Result {
        // language=json
        let value: Value = serde_json::from_str(
            r#"{"message_id": 138, "from": {"id": 1, "username": "leandrotoledo"}, "chat": {"id": 1}, "text": "Oi"}"#,
        )?;
        let message = Message::from_wire(&value)?;
        assert_eq!(message.id, 138);
        assert_eq!(message.text.as_deref(), Some("Oi"));
        assert_eq!(serde_json::to_value(&message)?, value);
        Ok(())
    }

    #[test]
    fn unknown_keys_are_ignored_ok() -> Result {
        let value = json!({"id": 42, "username": "bot", "is_bot": true, "language_code": "en"});
        let user = User::from_wire(&value)?;
        assert_eq!(user.id, 42);
        assert_eq!(user.username.as_deref(), Some("bot"));
        Ok(())
    }

    #[test]
    fn photo_list_failure_is_fatal() {
        let value = json!({
            "message_id": 1,
            "photo": [
                {"file_id": "a", "width": 90, "height": 60},
                {"file_id": "b", "width": 90},
            ],
        });
        assert_eq!(
            Message::from_wire(&value).unwrap_err(),
            WireError::MissingRequiredField("height"),
        );
    }

    #[test]
    fn venue_embeds_location_ok() -> Result {
        // language=json
        let value: Value = serde_json::from_str(
            r#"{"location": {"longitude": 4.9, "latitude": 52.37}, "title": "Palace", "address": "Dam"}"#,
        )?;
        let venue = Venue::from_wire(&value)?;
        assert_eq!(venue.location.latitude, 52.37);
        assert_eq!(serde_json::to_value(&venue)?, value);
        Ok(())
    }

    #[test]
    fn update_without_payload_ok() -> Result {
        let value = json!({"update_id": 700});
        let update = Update::from_wire(&value)?;
        assert_eq!(update.id, 700);
        assert_eq!(update.message, None);
        // language=json
        assert_eq!(serde_json::to_string(&update)?, r#"{"update_id":700}"#);
        Ok(())
    }
}
